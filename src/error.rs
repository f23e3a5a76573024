//! Unified error types for chatsift.
//!
//! The parser itself never fails: malformed export content degrades to
//! skipped lines and fallback timestamps (see [`crate::datetime`]). The
//! errors here cover the edges around it — reading export files from disk
//! and serializing parse results.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatsift operations.
pub type Result<T> = std::result::Result<T, SiftError>;

/// The error type for all chatsift operations.
///
/// Parsing proper is infallible by contract; these variants arise only from
/// the file-reading and output-writing surface around it.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SiftError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The export file doesn't exist or isn't readable
    /// - The file isn't valid UTF-8 text
    /// - The output path can't be written
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error while writing parse results.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input doesn't look like a supported export.
    ///
    /// Only produced by callers that opt into strict validation (e.g. the
    /// CLI refusing a non-`.txt` file); the parser itself never returns it.
    #[error("Invalid {format} export{}: {message}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    InvalidFormat {
        /// The format that was expected (e.g. "WhatsApp TXT")
        format: &'static str,
        /// Description of what's wrong
        message: String,
        /// The file path, if available
        path: Option<PathBuf>,
    },
}

impl SiftError {
    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        SiftError::InvalidFormat {
            format,
            message: message.into(),
            path: None,
        }
    }

    /// Creates an invalid format error with the offending file path.
    pub fn invalid_format_at(
        format: &'static str,
        message: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        SiftError::InvalidFormat {
            format,
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, SiftError::Io(_))
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, SiftError::InvalidFormat { .. })
    }
}
