//! Notice rendering.

use crate::error::Result;
use crate::model::{Notice, NoticeKind};

use super::html::escape_html;

/// Render a notice as HTML.
///
/// Error notices carry a retry action, the only recovery path exposed for
/// upstream failures.
pub fn to_html(notice: &Notice) -> Result<String> {
    let class = match notice.kind {
        NoticeKind::Info => "notice-info",
        NoticeKind::Success => "notice-success",
        NoticeKind::Error => "notice-error",
    };

    let mut output = format!(
        "<div class=\"notice {}\">\n<p>{}</p>\n",
        class,
        escape_html(&notice.message)
    );
    if notice.is_error() {
        output.push_str("<button class=\"notice-retry\">Retry</button>\n");
    }
    output.push_str("</div>\n");
    Ok(output)
}

/// Render a notice as plain text.
pub fn to_text(notice: &Notice) -> Result<String> {
    let prefix = match notice.kind {
        NoticeKind::Info => "info",
        NoticeKind::Success => "ok",
        NoticeKind::Error => "error",
    };
    let mut output = format!("{}: {}", prefix, notice.message);
    if notice.is_error() {
        output.push_str(" (retry to recover)");
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_notice_offers_retry() {
        let html = to_html(&Notice::error("Connection error: timed out")).unwrap();
        assert!(html.contains("notice-error"));
        assert!(html.contains("Connection error: timed out"));
        assert!(html.contains("Retry"));
    }

    #[test]
    fn test_success_notice_has_no_retry() {
        let html = to_html(&Notice::success("File processed")).unwrap();
        assert!(!html.contains("Retry"));
    }

    #[test]
    fn test_text_notice() {
        let text = to_text(&Notice::error("boom")).unwrap();
        assert_eq!(text, "error: boom (retry to recover)");
    }
}
