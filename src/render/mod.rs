//! Rendering module for serializing composed documents to output formats.

pub mod detail;
pub mod history;
mod html;
mod json;
pub mod notice;
mod options;
mod text;

pub use html::{to_html, HtmlRenderer};
pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use text::to_text;
