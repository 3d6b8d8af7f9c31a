//! Rendering options and configuration.

/// Options for rendering document content.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Emit the row style strings as style attributes.
    pub include_styles: bool,

    /// Mark images for lazy loading in HTML output.
    pub lazy_images: bool,

    /// Maximum heading level (1-6).
    pub max_heading_level: u8,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable style attribute passthrough.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Enable or disable lazy image loading.
    pub fn with_lazy_images(mut self, lazy: bool) -> Self {
        self.lazy_images = lazy;
        self
    }

    /// Set the maximum heading level.
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.max_heading_level = level.clamp(1, 6);
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_styles: true,
            lazy_images: true,
            max_heading_level: 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert!(options.include_styles);
        assert!(options.lazy_images);
        assert_eq!(options.max_heading_level, 6);
    }

    #[test]
    fn test_max_heading_clamped() {
        let options = RenderOptions::new().with_max_heading(9);
        assert_eq!(options.max_heading_level, 6);

        let options = RenderOptions::new().with_max_heading(0);
        assert_eq!(options.max_heading_level, 1);
    }
}
