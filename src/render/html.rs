//! HTML rendering for composed documents.

use crate::error::Result;
use crate::model::{
    Block, Document, DocumentBody, DocumentSummary, EmptyState, PublicationGroup,
    PublicationHeader,
};

use super::RenderOptions;

/// Convert a document to HTML.
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(doc)
}

/// HTML renderer.
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to HTML.
    pub fn render(&self, doc: &Document) -> Result<String> {
        let mut output = String::new();
        match doc {
            Document::Empty(state) => self.render_empty_state(&mut output, state),
            Document::Content(body) => self.render_body(&mut output, body),
        }
        Ok(output)
    }

    fn render_empty_state(&self, output: &mut String, state: &EmptyState) {
        output.push_str("<div class=\"blog-empty\">\n");
        output.push_str(&format!("<h1>{}</h1>\n", escape_html(&state.heading)));
        output.push_str(&format!(
            "<p class=\"tagline\">{}</p>\n",
            escape_html(&state.tagline)
        ));

        output.push_str("<div class=\"notice\">\n");
        output.push_str(&format!("<h3>{}</h3>\n", escape_html(&state.notice)));
        output.push_str(&format!("<p>{}</p>\n", escape_html(&state.hint)));
        output.push_str("</div>\n");

        output.push_str("<div class=\"format-guide\">\n");
        output.push_str("<h3>Required file format</h3>\n");

        output.push_str("<h4>Required columns</h4>\n<ul>\n");
        for column in &state.required_columns {
            output.push_str(&format!("<li>{}</li>\n", escape_html(column)));
        }
        output.push_str("</ul>\n");

        output.push_str("<h4>Content types</h4>\n<ul>\n");
        for entry in &state.type_legend {
            output.push_str(&format!(
                "<li><strong>{}</strong>: {}</li>\n",
                escape_html(entry.kind.code()),
                escape_html(&entry.description)
            ));
        }
        output.push_str("</ul>\n");

        output.push_str(&format!(
            "<h5>Example CSV</h5>\n<pre>{}</pre>\n",
            escape_html(&state.sample_csv)
        ));
        output.push_str("</div>\n</div>\n");
    }

    fn render_body(&self, output: &mut String, body: &DocumentBody) {
        for (index, group) in body.groups.iter().enumerate() {
            if index > 0 {
                output.push_str("<hr class=\"publication-separator\">\n");
            }
            self.render_group(output, group);
        }
        self.render_summary(output, &body.summary);
    }

    fn render_group(&self, output: &mut String, group: &PublicationGroup) {
        if let Some(ref header) = group.header {
            self.render_header(output, header);
        }
        for block in &group.blocks {
            self.render_block(output, block);
        }
    }

    fn render_header(&self, output: &mut String, header: &PublicationHeader) {
        output.push_str(&format!(
            "<div class=\"publication-header\"><small>Publication #{} - {} {} {}</small></div>\n",
            header.publication,
            header.date.day,
            escape_html(&header.date.month),
            header.date.year
        ));
    }

    fn render_block(&self, output: &mut String, block: &Block) {
        match block {
            Block::Heading { level, text, style } => {
                let level = (*level).min(self.options.max_heading_level);
                output.push_str(&format!(
                    "<h{level}{}>{}</h{level}>\n",
                    self.style_attr(style.as_deref()),
                    escape_html(text)
                ));
            }
            Block::Paragraph { lines, style } => {
                let joined: Vec<String> = lines.iter().map(|line| escape_html(line)).collect();
                output.push_str(&format!(
                    "<p{}>{}</p>\n",
                    self.style_attr(style.as_deref()),
                    joined.join("<br>")
                ));
            }
            Block::Image {
                url,
                style,
                fallback,
            } => {
                output.push_str("<div class=\"image-block\">\n");
                let lazy = if self.options.lazy_images {
                    " loading=\"lazy\""
                } else {
                    ""
                };
                output.push_str(&format!(
                    "<img src=\"{}\"{} alt=\"Blog image\"{} \
                     onerror=\"this.style.display='none'; this.nextElementSibling.style.display='block'\">\n",
                    escape_attr(url),
                    self.style_attr(style.as_deref()),
                    lazy
                ));
                // Hidden until the image fails to load.
                output.push_str(&format!(
                    "<div class=\"image-fallback\" style=\"display: none;\">{}</div>\n",
                    escape_html(&fallback.message)
                ));
                output.push_str("</div>\n");
            }
            Block::Container { text, style } => {
                output.push_str(&format!(
                    "<div{}>{}</div>\n",
                    self.style_attr(style.as_deref()),
                    escape_html(text)
                ));
            }
        }
    }

    fn render_summary(&self, output: &mut String, summary: &DocumentSummary) {
        output.push_str(&format!(
            "<div class=\"document-summary\"><small>{} elements in {} publications</small></div>\n",
            summary.element_count, summary.group_count
        ));
    }

    fn style_attr(&self, style: Option<&str>) -> String {
        match style {
            Some(style) if self.options.include_styles && !style.is_empty() => {
                format!(" style=\"{}\"", escape_attr(style))
            }
            _ => String::new(),
        }
    }
}

/// Escape text content for HTML.
pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a value for an HTML attribute.
///
/// The style string passes through otherwise verbatim; only the characters
/// that would break out of the attribute are replaced.
pub(crate) fn escape_attr(value: &str) -> String {
    escape_html(value).replace('"', "&quot;")
}
