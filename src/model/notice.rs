//! User-facing notices.

use serde::{Deserialize, Serialize};

/// A transient message shown to the user.
///
/// Upstream failures (network, backend, malformed payload) are surfaced as a
/// single [`NoticeKind::Error`] notice carrying the message verbatim; the
/// only recovery path offered is a manual retry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Severity of the notice.
    pub kind: NoticeKind,

    /// Human-readable message.
    pub message: String,
}

impl Notice {
    /// Create an informational notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    /// Create a success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    /// Create an error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// Check if this is an error notice.
    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    /// Neutral information.
    Info,
    /// A completed action.
    Success,
    /// A failure the user may retry.
    Error,
}
