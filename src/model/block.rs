//! Presentation block types.

use serde::{Deserialize, Serialize};

use super::{ContentRow, ContentType};

/// One rendered presentation unit derived from a content row.
///
/// The block tree is format-agnostic; serializers in the `render` module turn
/// it into HTML, plain text, or JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A heading. Title rows produce level 1, subtitle rows level 3.
    Heading {
        /// Heading level (1-6).
        level: u8,
        /// Heading text.
        text: String,
        /// Free-text style string, applied verbatim.
        style: Option<String>,
    },

    /// A paragraph.
    ///
    /// Literal newlines in the source content become segment boundaries, so
    /// `"line1\nline2"` yields two lines with an explicit break between them.
    /// Empty segments are preserved, never collapsed.
    Paragraph {
        /// Paragraph line segments.
        lines: Vec<String>,
        /// Free-text style string, applied verbatim.
        style: Option<String>,
    },

    /// An image reference.
    ///
    /// Always carries a fallback sub-block that a renderer keeps hidden until
    /// the image fails to load at display time.
    Image {
        /// Image URL.
        url: String,
        /// Free-text style string, applied verbatim.
        style: Option<String>,
        /// Error placeholder shown when the image cannot be loaded.
        fallback: ImageFallback,
    },

    /// Generic container for rows with an unknown or missing type.
    Container {
        /// Opaque text content.
        text: String,
        /// Free-text style string, applied verbatim.
        style: Option<String>,
    },
}

impl Block {
    /// Build the block for a content row.
    ///
    /// Missing content is coerced to an empty string; strictness about
    /// missing content is the composer's concern, not the mapping's.
    pub fn from_row(row: &ContentRow) -> Self {
        let content = row.content.clone().unwrap_or_default();
        let style = row.style.clone();

        match row.kind() {
            ContentType::Title => Block::Heading {
                level: 1,
                text: content,
                style,
            },
            ContentType::Subtitle => Block::Heading {
                level: 3,
                text: content,
                style,
            },
            ContentType::Paragraph => Block::Paragraph {
                lines: content.split('\n').map(str::to_string).collect(),
                style,
            },
            ContentType::Image => Block::Image {
                fallback: ImageFallback::for_url(&content),
                url: content,
                style,
            },
            ContentType::Other => Block::Container {
                text: content,
                style,
            },
        }
    }

    /// Check if this block is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading { .. })
    }

    /// Check if this block is an image.
    pub fn is_image(&self) -> bool {
        matches!(self, Block::Image { .. })
    }

    /// Get the plain text content of the block.
    ///
    /// Image blocks yield their URL; paragraph line segments are joined with
    /// real newlines.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Heading { text, .. } => text.clone(),
            Block::Paragraph { lines, .. } => lines.join("\n"),
            Block::Image { url, .. } => url.clone(),
            Block::Container { text, .. } => text.clone(),
        }
    }

    /// Get the style string attached to the block, if any.
    pub fn style(&self) -> Option<&str> {
        match self {
            Block::Heading { style, .. }
            | Block::Paragraph { style, .. }
            | Block::Image { style, .. }
            | Block::Container { style, .. } => style.as_deref(),
        }
    }
}

/// Error placeholder paired with every image block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageFallback {
    /// Human-readable message naming the URL that failed to load.
    pub message: String,
}

impl ImageFallback {
    /// Build the fallback message for an image URL.
    pub fn for_url(url: &str) -> Self {
        Self {
            message: format!("Image could not be loaded: {}", url),
        }
    }
}
