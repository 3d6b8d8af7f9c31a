//! Composition of flat row sequences into grouped documents.
//!
//! This is the core transformation: an ordered list of [`ContentRow`]s
//! becomes a [`Document`] of publication groups, each row mapped to one
//! typed [`Block`](crate::model::Block). Rows are never reordered; group
//! boundaries are detected purely by adjacency of the publication number.

mod options;

pub use options::{ComposeOptions, MissingContent};

use crate::error::{Error, Result};
use crate::model::{
    Block, ContentRow, Document, DocumentBody, DocumentSummary, EmptyState, PublicationGroup,
    PublicationHeader,
};

/// Compose rows into a document with default options.
pub fn compose(rows: &[ContentRow]) -> Result<Document> {
    Composer::new(ComposeOptions::default()).compose(rows)
}

/// Compose rows into a document with the given options.
pub fn compose_with_options(rows: &[ContentRow], options: ComposeOptions) -> Result<Document> {
    Composer::new(options).compose(rows)
}

/// Composes row sequences into documents.
///
/// A composer is a pure transformation over its input: it holds no state
/// between calls, so one instance can serve any number of independent
/// compositions.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    options: ComposeOptions,
}

impl Composer {
    /// Create a new composer.
    pub fn new(options: ComposeOptions) -> Self {
        Self { options }
    }

    /// Compose an ordered row sequence into a document.
    ///
    /// Empty input yields the fixed [`Document::Empty`] placeholder. A new
    /// group starts whenever the publication number changes from the
    /// previous row, even if the same number reappears later; non-adjacent
    /// groups with equal numbers are never merged. A group gets a header
    /// only when its first row carries a complete date.
    pub fn compose(&self, rows: &[ContentRow]) -> Result<Document> {
        if rows.is_empty() {
            return Ok(Document::Empty(EmptyState::new()));
        }

        let mut groups: Vec<PublicationGroup> = Vec::new();
        // Sentinel distinct from any valid publication number.
        let mut current: Option<i64> = None;

        for (index, row) in rows.iter().enumerate() {
            if self.options.missing_content == MissingContent::Strict && row.content.is_none() {
                return Err(Error::MissingContent { index });
            }

            if current != Some(row.publication) {
                current = Some(row.publication);
                let mut group = PublicationGroup::new(row.publication);
                group.header = row.publication_date().map(|date| PublicationHeader {
                    publication: row.publication,
                    date,
                });
                groups.push(group);
            }

            if let Some(group) = groups.last_mut() {
                group.push_block(Block::from_row(row));
            }
        }

        let summary = DocumentSummary {
            element_count: rows.len(),
            group_count: groups.len(),
        };
        log::debug!(
            "composed {} rows into {} publication groups",
            summary.element_count,
            summary.group_count
        );

        Ok(Document::Content(DocumentBody { groups, summary }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContentType;

    fn rows() -> Vec<ContentRow> {
        vec![
            ContentRow::new(1, "T", "Welcome").with_date(21, "Octubre", 2025),
            ContentRow::new(1, "P", "First paragraph"),
            ContentRow::new(2, "T", "Second post"),
        ]
    }

    #[test]
    fn test_empty_input_yields_empty_state() {
        let doc = compose(&[]).unwrap();
        assert!(matches!(doc, Document::Empty(_)));
    }

    #[test]
    fn test_groups_by_adjacency() {
        let doc = compose(&rows()).unwrap();
        let Document::Content(body) = doc else {
            panic!("expected content");
        };
        assert_eq!(body.groups.len(), 2);
        assert_eq!(body.groups[0].publication, 1);
        assert_eq!(body.groups[0].block_count(), 2);
        assert_eq!(body.groups[1].publication, 2);
        assert_eq!(body.summary.element_count, 3);
        assert_eq!(body.summary.group_count, 2);
    }

    #[test]
    fn test_reappearing_publication_starts_new_group() {
        let rows = vec![
            ContentRow::new(1, "P", "a"),
            ContentRow::new(2, "P", "b"),
            ContentRow::new(1, "P", "c"),
        ];
        let doc = compose(&rows).unwrap();
        let Document::Content(body) = doc else {
            panic!("expected content");
        };
        assert_eq!(body.summary.group_count, 3);
        let publications: Vec<i64> = body.groups.iter().map(|g| g.publication).collect();
        assert_eq!(publications, vec![1, 2, 1]);
    }

    #[test]
    fn test_header_only_with_complete_date() {
        let doc = compose(&rows()).unwrap();
        let Document::Content(body) = doc else {
            panic!("expected content");
        };
        let header = body.groups[0].header.as_ref().unwrap();
        assert_eq!(header.publication, 1);
        assert_eq!(header.date.day, 21);
        assert!(body.groups[1].header.is_none());
    }

    #[test]
    fn test_rows_keep_input_order() {
        let rows = vec![
            ContentRow::new(1, "ST", "sub"),
            ContentRow::new(1, "T", "title after subtitle"),
        ];
        let doc = compose(&rows).unwrap();
        let Document::Content(body) = doc else {
            panic!("expected content");
        };
        assert!(matches!(
            body.groups[0].blocks[0],
            Block::Heading { level: 3, .. }
        ));
        assert!(matches!(
            body.groups[0].blocks[1],
            Block::Heading { level: 1, .. }
        ));
    }

    #[test]
    fn test_unknown_type_composes_without_error() {
        let mut row = ContentRow::new(1, "X", "opaque");
        row.content_type = Some("weird".to_string());
        assert_eq!(row.kind(), ContentType::Other);
        let doc = compose(&[row]).unwrap();
        assert_eq!(doc.element_count(), 1);
    }

    #[test]
    fn test_strict_rejects_missing_content() {
        let mut row = ContentRow::new(1, "P", "");
        row.content = None;
        let rows = vec![ContentRow::new(1, "T", "ok"), row];

        let err = compose_with_options(&rows, ComposeOptions::new().strict()).unwrap_err();
        assert!(matches!(err, Error::MissingContent { index: 1 }));

        // Default policy coerces and still renders the document.
        let doc = compose(&{
            let mut row = ContentRow::new(1, "P", "");
            row.content = None;
            vec![row]
        })
        .unwrap();
        assert_eq!(doc.element_count(), 1);
    }
}
