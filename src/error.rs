//! Error types for the rowpress library.

use std::io;
use thiserror::Error;

/// Result type alias for rowpress operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while composing or rendering content.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The row payload could not be decoded.
    ///
    /// The backend message is carried verbatim; a failed decode yields an
    /// error, never a partial document.
    #[error("Invalid row data: {0}")]
    InvalidRows(String),

    /// A paragraph row had no content while strict composition was requested.
    #[error("Row {index} has no content")]
    MissingContent {
        /// Zero-based position of the offending row in the input sequence.
        index: usize,
    },

    /// The upload response payload could not be decoded.
    #[error("Invalid upload response: {0}")]
    InvalidUploadResponse(String),

    /// Error during rendering (HTML, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MissingContent { index: 3 };
        assert_eq!(err.to_string(), "Row 3 has no content");

        let err = Error::InvalidRows("unexpected end of input".to_string());
        assert_eq!(err.to_string(), "Invalid row data: unexpected end of input");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
