//! Content model types for blog composition.
//!
//! This module defines the intermediate representation (IR) that bridges the
//! backend's flat row payload and content rendering. The model is
//! format-agnostic and can be serialized to any target presentation format.

mod block;
mod document;
mod history;
mod notice;
mod row;

pub use block::{Block, ImageFallback};
pub use document::{
    Document, DocumentBody, DocumentSummary, EmptyState, LegendEntry, PublicationGroup,
    PublicationHeader,
};
pub use history::{History, HistoryEntry};
pub use notice::{Notice, NoticeKind};
pub use row::{ContentRow, ContentType, PublicationDate};
