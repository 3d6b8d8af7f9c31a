//! Upload history rendering.

use crate::error::Result;
use crate::model::History;

use super::html::escape_html;

/// Render the upload history as an HTML table.
pub fn to_html(history: &History) -> Result<String> {
    let mut output = String::new();

    if history.is_empty() {
        output.push_str("<div class=\"history-empty\">\n");
        output.push_str("<h3>No records in the history</h3>\n");
        output.push_str("<p>No files have been uploaded yet.</p>\n");
        output.push_str("</div>\n");
        return Ok(output);
    }

    output.push_str("<div class=\"history-summary\">\n");
    output.push_str(&format!("<p>Total records: {}</p>\n", history.len()));
    if let Some(latest) = history.latest_update() {
        output.push_str(&format!(
            "<p>Last update: {}</p>\n",
            latest.format("%Y-%m-%d %H:%M")
        ));
    }
    output.push_str("</div>\n");

    output.push_str("<table class=\"history-table\">\n<thead>\n<tr>");
    for column in ["ID", "File", "User", "Date", "Elements", "Publication"] {
        output.push_str(&format!("<th>{}</th>", column));
    }
    output.push_str("</tr>\n</thead>\n<tbody>\n");

    for entry in &history.entries {
        output.push_str(&format!(
            "<tr><td>#{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            entry.id,
            escape_html(&entry.file_name),
            escape_html(entry.display_user()),
            entry.updated_at.format("%Y-%m-%d %H:%M"),
            entry.element_count,
            escape_html(&entry.display_publication())
        ));
    }

    output.push_str("</tbody>\n</table>\n");
    Ok(output)
}

/// Render the upload history as plain text.
pub fn to_text(history: &History) -> Result<String> {
    let mut output = String::new();

    if history.is_empty() {
        output.push_str("No records in the history. No files have been uploaded yet.");
        return Ok(output);
    }

    output.push_str(&format!("Total records: {}\n", history.len()));
    if let Some(latest) = history.latest_update() {
        output.push_str(&format!("Last update: {}\n", latest.format("%Y-%m-%d %H:%M")));
    }
    output.push('\n');

    for entry in &history.entries {
        output.push_str(&format!(
            "#{}  {}  {}  {}  {} elements  pub. {}\n",
            entry.id,
            entry.file_name,
            entry.display_user(),
            entry.updated_at.format("%Y-%m-%d %H:%M"),
            entry.element_count,
            entry.display_publication()
        ));
    }

    Ok(output.trim_end().to_string())
}
