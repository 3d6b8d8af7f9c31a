//! Document-level types.

use serde::{Deserialize, Serialize};

use super::{Block, ContentType, PublicationDate};

/// A composed blog document.
///
/// Empty input produces the distinguished [`Document::Empty`] placeholder
/// rather than an error or an empty group list; callers can always render a
/// `Document` without checking for content first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Document {
    /// Fixed informational placeholder shown when no rows exist.
    Empty(EmptyState),

    /// Content grouped by publication.
    Content(DocumentBody),
}

impl Document {
    /// Check if this is the empty-state document.
    pub fn is_empty(&self) -> bool {
        matches!(self, Document::Empty(_))
    }

    /// Get the number of publication groups (0 for the empty state).
    pub fn group_count(&self) -> usize {
        match self {
            Document::Empty(_) => 0,
            Document::Content(body) => body.groups.len(),
        }
    }

    /// Get the number of content elements (0 for the empty state).
    pub fn element_count(&self) -> usize {
        match self {
            Document::Empty(_) => 0,
            Document::Content(body) => body.summary.element_count,
        }
    }
}

/// The grouped content of a non-empty document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentBody {
    /// Publication groups in input order.
    pub groups: Vec<PublicationGroup>,

    /// Trailing summary reported after the content.
    pub summary: DocumentSummary,
}

/// A maximal run of adjacent rows sharing the same publication number.
///
/// Boundaries are adjacency-based: a publication number that reappears after
/// an intervening group starts a fresh group, it is never merged back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicationGroup {
    /// Publication number shared by the rows of this group.
    pub publication: i64,

    /// Header block, present only when the group's first row carried a
    /// complete date.
    pub header: Option<PublicationHeader>,

    /// Blocks of this group, in input order.
    pub blocks: Vec<Block>,
}

impl PublicationGroup {
    /// Create an empty group for a publication.
    pub fn new(publication: i64) -> Self {
        Self {
            publication,
            header: None,
            blocks: Vec::new(),
        }
    }

    /// Append a block to the group.
    pub fn push_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Get the number of blocks in the group.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}

/// Header identifying a publication and its date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationHeader {
    /// Publication number.
    pub publication: i64,

    /// Publication date.
    pub date: PublicationDate,
}

/// Trailing summary of a composed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Total number of content elements.
    pub element_count: usize,

    /// Number of publication groups, counted by boundary transitions.
    pub group_count: usize,
}

/// Fixed placeholder content for a blog without any rows.
///
/// Carries the usage instructions the original page showed on first visit:
/// the required file columns, the content type legend, and a sample CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmptyState {
    /// Page heading.
    pub heading: String,

    /// Tagline shown below the heading.
    pub tagline: String,

    /// Short notice that no content exists yet.
    pub notice: String,

    /// Hint telling the user how to add content.
    pub hint: String,

    /// Required columns of the uploaded file, in order.
    pub required_columns: Vec<String>,

    /// Legend for the known content type codes.
    pub type_legend: Vec<LegendEntry>,

    /// Example of a valid CSV payload.
    pub sample_csv: String,
}

impl EmptyState {
    /// Build the fixed empty-state placeholder.
    pub fn new() -> Self {
        Self {
            heading: "Dynamic Content Blog".to_string(),
            tagline: "Content is generated dynamically from uploaded files".to_string(),
            notice: "No content available yet".to_string(),
            hint: "Upload a CSV or Excel file with the required format to get started."
                .to_string(),
            required_columns: vec![
                "Day (day number)".to_string(),
                "Month (month name)".to_string(),
                "Year (year number)".to_string(),
                "Publication number".to_string(),
                "Type (T, ST, P, I)".to_string(),
                "Content / URL (text or link)".to_string(),
            ],
            type_legend: ContentType::DISPLAY_ORDER
                .iter()
                .map(|kind| LegendEntry {
                    kind: *kind,
                    description: match kind {
                        ContentType::Title => "Main title (level-1 heading)",
                        ContentType::Subtitle => "Subtitle (level-3 heading)",
                        ContentType::Paragraph => "Paragraph",
                        ContentType::Image => "Image (content is the URL)",
                        ContentType::Other => "Generic container",
                    }
                    .to_string(),
                })
                .collect(),
            sample_csv: "\
Dia,Mes,Ano,Numero Publicacion,Tipo,Contenido / URL,Estilo
21,Octubre,2025,1,T,\"Bienvenidos al Blog\",\"color:#2c3e50; text-align:center\"
21,Octubre,2025,1,P,\"Texto del parrafo...\",\"color:#555; font-size:16px\""
                .to_string(),
        }
    }
}

impl Default for EmptyState {
    fn default() -> Self {
        Self::new()
    }
}

/// One line of the content type legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    /// The content type the entry describes.
    pub kind: ContentType,

    /// What the type renders as.
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_counts() {
        let doc = Document::Empty(EmptyState::new());
        assert!(doc.is_empty());
        assert_eq!(doc.group_count(), 0);
        assert_eq!(doc.element_count(), 0);
    }

    #[test]
    fn test_empty_state_legend_order() {
        let state = EmptyState::new();
        let codes: Vec<&str> = state.type_legend.iter().map(|e| e.kind.code()).collect();
        assert_eq!(codes, vec!["T", "ST", "P", "I"]);
    }

    #[test]
    fn test_group_push_block() {
        let mut group = PublicationGroup::new(7);
        group.push_block(Block::Container {
            text: "x".to_string(),
            style: None,
        });
        assert_eq!(group.block_count(), 1);
        assert!(group.header.is_none());
    }
}
