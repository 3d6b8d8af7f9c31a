//! Record detail rendering.
//!
//! Renders the contents of a single upload record as annotated element
//! cards: each row is shown with an index/type badge, its date and
//! publication caption, the rendered element, and the style string when one
//! is present. Headings are demoted (title to level 4, subtitle to level 5)
//! so they read as part of the surrounding inspection page, and images are
//! shown with their URL spelled out instead of a load-failure toggle.

use crate::error::Result;
use crate::model::{Block, ContentRow, HistoryEntry};

use super::html::{escape_attr, escape_html};
use super::RenderOptions;

/// Render a record and its rows as an annotated HTML detail view.
pub fn to_html(record: &HistoryEntry, rows: &[ContentRow], options: &RenderOptions) -> Result<String> {
    let mut output = String::new();

    output.push_str("<div class=\"record-detail\">\n");
    output.push_str(&format!(
        "<div class=\"record-header\"><h2>Record #{}</h2><p>File: {}</p></div>\n",
        record.id,
        escape_html(&record.file_name)
    ));
    output.push_str("<div class=\"record-info\">\n");
    output.push_str(&format!(
        "<p>User: {}</p>\n<p>Date: {}</p>\n<p>Status: {}</p>\n",
        escape_html(record.display_user()),
        record.updated_at.format("%Y-%m-%d %H:%M"),
        escape_html(record.display_status())
    ));
    output.push_str(&format!(
        "<p>Elements: {}</p>\n<p>Publication: {}</p>\n",
        rows.len(),
        escape_html(&record.display_publication())
    ));
    output.push_str("</div>\n");

    output.push_str(&format!(
        "<h3>Generated content ({} elements)</h3>\n",
        rows.len()
    ));

    if rows.is_empty() {
        output.push_str("<p class=\"record-empty\">This record has no content.</p>\n");
    } else {
        for (index, row) in rows.iter().enumerate() {
            render_element_card(&mut output, index, row, options);
        }
    }

    output.push_str("</div>\n");
    Ok(output)
}

/// Render a record and its rows as a plain text detail view.
pub fn to_text(record: &HistoryEntry, rows: &[ContentRow]) -> Result<String> {
    let mut output = String::new();

    output.push_str(&format!("Record #{}: {}\n", record.id, record.file_name));
    output.push_str(&format!(
        "User: {}  Date: {}  Status: {}\n",
        record.display_user(),
        record.updated_at.format("%Y-%m-%d %H:%M"),
        record.display_status()
    ));
    output.push_str(&format!("Elements: {}\n\n", rows.len()));

    if rows.is_empty() {
        output.push_str("This record has no content.\n");
    } else {
        for (index, row) in rows.iter().enumerate() {
            output.push_str(&format!(
                "{}. [{}] {}\n",
                index + 1,
                row.kind().code(),
                Block::from_row(row).plain_text().replace('\n', " / ")
            ));
            if let Some(ref style) = row.style {
                output.push_str(&format!("   style: {}\n", style));
            }
        }
    }

    Ok(output.trim_end().to_string())
}

fn render_element_card(output: &mut String, index: usize, row: &ContentRow, options: &RenderOptions) {
    output.push_str("<div class=\"element-card\">\n");

    output.push_str(&format!(
        "<div class=\"element-meta\"><span class=\"element-badge\">{}. {}</span>",
        index + 1,
        escape_html(row.kind().code())
    ));
    if let Some(date) = row.publication_date() {
        output.push_str(&format!(
            "<small>{}/{}/{} - pub. {}</small>",
            date.day,
            escape_html(&date.month),
            date.year,
            row.publication
        ));
    }
    output.push_str("</div>\n");

    render_detail_block(output, &Block::from_row(row), options);

    if let Some(style) = row.style.as_deref().filter(|s| !s.is_empty()) {
        output.push_str(&format!(
            "<div class=\"style-note\"><small>Style: {}</small></div>\n",
            escape_html(style)
        ));
    }

    output.push_str("</div>\n");
}

fn render_detail_block(output: &mut String, block: &Block, options: &RenderOptions) {
    match block {
        Block::Heading { level, text, style } => {
            let level = if *level <= 1 { 4 } else { 5 };
            output.push_str(&format!(
                "<h{level}{}>{}</h{level}>\n",
                style_attr(style.as_deref(), options),
                escape_html(text)
            ));
        }
        Block::Paragraph { lines, style } => {
            let joined: Vec<String> = lines.iter().map(|line| escape_html(line)).collect();
            output.push_str(&format!(
                "<p{}>{}</p>\n",
                style_attr(style.as_deref(), options),
                joined.join("<br>")
            ));
        }
        Block::Image { url, style, .. } => {
            output.push_str(&format!(
                "<img src=\"{}\"{} alt=\"Image\">\n<div><small>URL: {}</small></div>\n",
                escape_attr(url),
                style_attr(style.as_deref(), options),
                escape_html(url)
            ));
        }
        Block::Container { text, style } => {
            output.push_str(&format!(
                "<div{}>{}</div>\n",
                style_attr(style.as_deref(), options),
                escape_html(text)
            ));
        }
    }
}

fn style_attr(style: Option<&str>, options: &RenderOptions) -> String {
    match style {
        Some(style) if options.include_styles && !style.is_empty() => {
            format!(" style=\"{}\"", escape_attr(style))
        }
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;

    fn record() -> HistoryEntry {
        HistoryEntry {
            id: 5,
            file_name: "contenido.xlsx".to_string(),
            user: Some("ana".to_string()),
            updated_at: Utc.with_ymd_and_hms(2025, 10, 21, 12, 0, 0).unwrap(),
            element_count: 2,
            publication: Some(1),
            status: None,
            execution_mode: None,
        }
    }

    #[test]
    fn test_detail_html_annotates_elements() {
        let rows = vec![
            ContentRow::new(1, "T", "Welcome").with_date(21, "Octubre", 2025),
            ContentRow::new(1, "P", "body").with_style("color:#555"),
        ];
        let html = to_html(&record(), &rows, &RenderOptions::default()).unwrap();

        assert!(html.contains("Record #5"));
        assert!(html.contains("1. T"));
        assert!(html.contains("<h4>Welcome</h4>"));
        assert!(html.contains("21/Octubre/2025 - pub. 1"));
        assert!(html.contains("Style: color:#555"));
    }

    #[test]
    fn test_detail_demotes_subtitles() {
        let rows = vec![ContentRow::new(1, "ST", "Sub")];
        let html = to_html(&record(), &rows, &RenderOptions::default()).unwrap();
        assert!(html.contains("<h5>Sub</h5>"));
    }

    #[test]
    fn test_detail_image_shows_url() {
        let rows = vec![ContentRow::new(1, "I", "https://example.com/a.png")];
        let html = to_html(&record(), &rows, &RenderOptions::default()).unwrap();
        assert!(html.contains("URL: https://example.com/a.png"));
        assert!(!html.contains("onerror"));
    }

    #[test]
    fn test_detail_empty_record() {
        let html = to_html(&record(), &[], &RenderOptions::default()).unwrap();
        assert!(html.contains("This record has no content."));
    }

    #[test]
    fn test_detail_text() {
        let rows = vec![ContentRow::new(1, "P", "line1\nline2")];
        let text = to_text(&record(), &rows).unwrap();
        assert!(text.contains("Record #5: contenido.xlsx"));
        assert!(text.contains("1. [P] line1 / line2"));
    }
}
