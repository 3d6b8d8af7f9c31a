//! Integration tests for row composition.

use rowpress::{
    compose, compose_with_options, ComposeOptions, ContentRow, Document, Error, MissingContent,
};

fn content(doc: Document) -> rowpress::DocumentBody {
    match doc {
        Document::Content(body) => body,
        Document::Empty(_) => panic!("expected content document"),
    }
}

#[test]
fn test_empty_input_never_takes_the_grouped_path() {
    let doc = compose(&[]).unwrap();
    assert!(doc.is_empty());
    assert_eq!(doc.group_count(), 0);
}

#[test]
fn test_element_count_equals_input_length() {
    for n in [1usize, 2, 5, 17] {
        let rows: Vec<ContentRow> = (0..n)
            .map(|i| ContentRow::new((i % 3) as i64, "P", format!("row {}", i)))
            .collect();
        let body = content(compose(&rows).unwrap());
        assert_eq!(body.summary.element_count, n);
    }
}

#[test]
fn test_grouping_is_adjacency_based_not_equality_based() {
    let rows = vec![
        ContentRow::new(1, "P", "a"),
        ContentRow::new(2, "P", "b"),
        ContentRow::new(1, "P", "c"),
    ];
    let body = content(compose(&rows).unwrap());
    assert_eq!(body.summary.group_count, 3);
}

#[test]
fn test_single_publication_is_one_group() {
    let rows = vec![
        ContentRow::new(1, "T", "title"),
        ContentRow::new(1, "ST", "subtitle"),
        ContentRow::new(1, "P", "body"),
        ContentRow::new(1, "I", "https://example.com/a.png"),
    ];
    let body = content(compose(&rows).unwrap());
    assert_eq!(body.summary.group_count, 1);
    assert_eq!(body.groups[0].block_count(), 4);
}

#[test]
fn test_group_header_comes_from_boundary_row() {
    let rows = vec![
        ContentRow::new(1, "T", "dated").with_date(21, "Octubre", 2025),
        // Later rows of the group carry no date; the header already exists.
        ContentRow::new(1, "P", "text"),
        // New group whose first row has no date: no header.
        ContentRow::new(2, "T", "undated"),
    ];
    let body = content(compose(&rows).unwrap());
    assert!(body.groups[0].header.is_some());
    assert!(body.groups[1].header.is_none());
}

#[test]
fn test_unknown_and_missing_types_compose_without_error() {
    let mut untyped = ContentRow::new(3, "", "bare");
    untyped.content_type = None;
    let rows = vec![
        ContentRow::new(3, "X", "mystery"),
        ContentRow::new(3, "", "empty code"),
        untyped,
    ];
    let body = content(compose(&rows).unwrap());
    assert_eq!(body.summary.element_count, 3);
    assert!(body.groups[0]
        .blocks
        .iter()
        .all(|b| matches!(b, rowpress::Block::Container { .. })));
}

#[test]
fn test_strict_policy_reports_offending_index() {
    let mut bad = ContentRow::new(1, "P", "");
    bad.content = None;
    let rows = vec![
        ContentRow::new(1, "T", "fine"),
        ContentRow::new(1, "P", "also fine"),
        bad,
    ];

    let err = compose_with_options(
        &rows,
        ComposeOptions::new().with_missing_content(MissingContent::Strict),
    )
    .unwrap_err();
    assert!(matches!(err, Error::MissingContent { index: 2 }));
}

#[test]
fn test_default_policy_coerces_missing_content() {
    let mut bad = ContentRow::new(1, "P", "");
    bad.content = None;
    let body = content(compose(&[bad]).unwrap());
    assert_eq!(body.summary.element_count, 1);
}

#[test]
fn test_composition_is_reentrant() {
    let rows = vec![
        ContentRow::new(1, "T", "same input"),
        ContentRow::new(2, "P", "twice"),
    ];
    let first = compose(&rows).unwrap();
    let second = compose(&rows).unwrap();
    assert_eq!(first, second);
}
