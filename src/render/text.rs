//! Plain text rendering for composed documents.

use crate::error::Result;
use crate::model::{Block, Document, EmptyState};

use super::RenderOptions;

const SEPARATOR: &str = "----------------------------------------";

/// Convert a document to plain text.
pub fn to_text(doc: &Document, _options: &RenderOptions) -> Result<String> {
    let mut output = String::new();
    match doc {
        Document::Empty(state) => render_empty_state(&mut output, state),
        Document::Content(body) => {
            for (index, group) in body.groups.iter().enumerate() {
                if index > 0 {
                    output.push_str(SEPARATOR);
                    output.push_str("\n\n");
                }
                if let Some(ref header) = group.header {
                    output.push_str(&format!(
                        "Publication #{} - {} {} {}\n\n",
                        header.publication, header.date.day, header.date.month, header.date.year
                    ));
                }
                for block in &group.blocks {
                    render_block(&mut output, block);
                }
            }
            output.push_str(&format!(
                "{} elements in {} publications\n",
                body.summary.element_count, body.summary.group_count
            ));
        }
    }
    Ok(output.trim_end().to_string())
}

fn render_block(output: &mut String, block: &Block) {
    match block {
        Block::Image { url, .. } => {
            output.push_str(&format!("[image: {}]\n\n", url));
        }
        other => {
            output.push_str(&other.plain_text());
            output.push_str("\n\n");
        }
    }
}

fn render_empty_state(output: &mut String, state: &EmptyState) {
    output.push_str(&format!("{}\n{}\n\n", state.heading, state.tagline));
    output.push_str(&format!("{}\n{}\n\n", state.notice, state.hint));

    output.push_str("Required columns:\n");
    for column in &state.required_columns {
        output.push_str(&format!("  - {}\n", column));
    }

    output.push_str("\nContent types:\n");
    for entry in &state.type_legend {
        output.push_str(&format!("  - {}: {}\n", entry.kind.code(), entry.description));
    }

    output.push_str(&format!("\nExample CSV:\n{}\n", state.sample_csv));
}
