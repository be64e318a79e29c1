//! Error types for STL I/O operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for STL I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while decoding, encoding, or persisting STL data.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Stream is neither a binary STL nor an ASCII `solid` block.
    #[error("unrecognized STL data: {reason}")]
    UnrecognizedFormat {
        /// Why neither layout matched.
        reason: String,
    },

    /// Stream is too short to hold the binary header and triangle count.
    #[error("invalid STL header: expected {expected} bytes, got {got}")]
    InvalidHeader {
        /// Expected header size.
        expected: usize,
        /// Actual stream size.
        got: usize,
    },

    /// Binary stream holds fewer bytes than its declared triangle count needs.
    #[error(
        "truncated binary STL: header declares {declared} triangles ({expected} bytes), got {got} bytes"
    )]
    TruncatedBinary {
        /// Declared triangle count.
        declared: u32,
        /// Byte length implied by the declared count.
        expected: u64,
        /// Actual stream length.
        got: usize,
    },

    /// Malformed ASCII STL content.
    #[error("invalid ASCII STL at line {line}: {message}")]
    InvalidContent {
        /// 1-based line number.
        line: usize,
        /// Description of what was invalid.
        message: String,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error in an ASCII stream.
    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

impl IoError {
    /// Create an `InvalidContent` error with the given line and message.
    #[must_use]
    pub fn invalid_content(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidContent {
            line,
            message: message.into(),
        }
    }

    /// True for errors caused by malformed STL content, as opposed to
    /// filesystem failures.
    #[must_use]
    pub const fn is_format_error(&self) -> bool {
        !matches!(self, Self::FileNotFound { .. } | Self::Io(_))
    }
}
