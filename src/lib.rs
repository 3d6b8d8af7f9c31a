//! # rowpress
//!
//! Blog content composition library for Rust.
//!
//! This library turns flat, ordered sequences of typed content rows (the
//! records of an uploaded CSV/Excel file, as persisted by a backend) into a
//! structured document grouped by publication, and renders that document to
//! HTML, plain text, or JSON. It also summarizes upload results for display.
//!
//! ## Quick Start
//!
//! ```
//! use rowpress::{compose, render, ContentRow};
//!
//! fn main() -> rowpress::Result<()> {
//!     let rows = vec![
//!         ContentRow::new(1, "T", "Welcome").with_date(21, "Octubre", 2025),
//!         ContentRow::new(1, "P", "First paragraph"),
//!     ];
//!
//!     let doc = compose(&rows)?;
//!     let html = render::to_html(&doc, &render::RenderOptions::default())?;
//!     println!("{}", html);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Adjacency grouping**: rows are grouped into publications exactly as
//!   ordered, never re-sorted or re-merged
//! - **Typed blocks**: titles, subtitles, paragraphs, images, and a generic
//!   container for everything else
//! - **Multiple output formats**: HTML, plain text, JSON
//! - **Upload summaries**: fixed-order, zero-suppressed type counts
//! - **History and detail views**: render upload records the way the blog's
//!   admin pages show them

pub mod compose;
pub mod error;
pub mod model;
pub mod render;
pub mod upload;

// Re-export commonly used types
pub use compose::{compose, compose_with_options, ComposeOptions, Composer, MissingContent};
pub use error::{Error, Result};
pub use model::{
    Block, ContentRow, ContentType, Document, DocumentBody, DocumentSummary, EmptyState, History,
    HistoryEntry, ImageFallback, Notice, NoticeKind, PublicationDate, PublicationGroup,
    PublicationHeader,
};
pub use render::{JsonFormat, RenderOptions};
pub use upload::{
    is_supported_file, summarize, SummaryLine, TypeCounts, UploadResponse, UploadSummary,
};

/// Decode a row payload from JSON.
///
/// The backend delivers rows as a JSON array with the original column names
/// (`dia`, `mes`, `ano`, `numero_publicacion`, `tipo_contenido`, `contenido`,
/// `estilo`). A malformed payload fails as a whole; there is no partial
/// decode.
pub fn rows_from_json(json: &str) -> Result<Vec<ContentRow>> {
    serde_json::from_str(json).map_err(|e| Error::InvalidRows(e.to_string()))
}

/// Compose rows and render them to HTML with default options.
pub fn render_html(rows: &[ContentRow]) -> Result<String> {
    let doc = compose(rows)?;
    render::to_html(&doc, &RenderOptions::default())
}

/// Compose rows and render them to plain text with default options.
pub fn render_text(rows: &[ContentRow]) -> Result<String> {
    let doc = compose(rows)?;
    render::to_text(&doc, &RenderOptions::default())
}

/// Compose rows and render the document as JSON.
pub fn render_json(rows: &[ContentRow], format: JsonFormat) -> Result<String> {
    let doc = compose(rows)?;
    render::to_json(&doc, format)
}

/// Decode an upload response from JSON and summarize it for display.
pub fn summarize_upload(json: &str) -> Result<UploadSummary> {
    let response: UploadResponse =
        serde_json::from_str(json).map_err(|e| Error::InvalidUploadResponse(e.to_string()))?;
    Ok(upload::summarize(&response))
}

/// Builder for composing and rendering blog content.
///
/// # Example
///
/// ```
/// use rowpress::{ContentRow, Rowpress};
///
/// let rows = vec![ContentRow::new(1, "T", "Welcome")];
/// let html = Rowpress::new()
///     .strict()
///     .with_lazy_images(false)
///     .compose(&rows)?
///     .to_html()?;
/// # Ok::<(), rowpress::Error>(())
/// ```
pub struct Rowpress {
    compose_options: ComposeOptions,
    render_options: RenderOptions,
}

impl Rowpress {
    /// Create a new Rowpress builder.
    pub fn new() -> Self {
        Self {
            compose_options: ComposeOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Fail fast on rows without content.
    pub fn strict(mut self) -> Self {
        self.compose_options = self.compose_options.strict();
        self
    }

    /// Set the missing-content policy.
    pub fn with_missing_content(mut self, policy: MissingContent) -> Self {
        self.compose_options = self.compose_options.with_missing_content(policy);
        self
    }

    /// Enable or disable style attribute passthrough.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.render_options = self.render_options.with_styles(include);
        self
    }

    /// Enable or disable lazy image loading.
    pub fn with_lazy_images(mut self, lazy: bool) -> Self {
        self.render_options = self.render_options.with_lazy_images(lazy);
        self
    }

    /// Set the maximum heading level.
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.render_options = self.render_options.with_max_heading(level);
        self
    }

    /// Compose a row sequence and return a result wrapper.
    pub fn compose(self, rows: &[ContentRow]) -> Result<RowpressResult> {
        let document = Composer::new(self.compose_options).compose(rows)?;
        Ok(RowpressResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for Rowpress {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of composing a row sequence.
pub struct RowpressResult {
    /// The composed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl RowpressResult {
    /// Render to HTML.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.document, &self.render_options)
    }

    /// Render to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Render to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
