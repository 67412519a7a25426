//! Error types for refsheet operations.
//!
//! This module provides a common `Error` type and `Result<T>` alias used
//! across all refsheet crates. Uses `thiserror` for derive macros.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur in refsheet operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error with the offending path attached.
    #[error("I/O error at {path}: {source}")]
    IoAt {
        /// Path the operation failed on.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Content could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Nothing matched the requested input.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Create an I/O error carrying the path it occurred at.
    pub fn io_at(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::IoAt {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}

/// Result type alias using refsheet's Error type.
pub type Result<T> = std::result::Result<T, Error>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_at_includes_path() {
        let err = Error::io_at(
            "/content/missing.md",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/content/missing.md"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_parse_error_display() {
        let err = Error::parse("bad heading");
        assert_eq!(err.to_string(), "Parse error: bad heading");
    }

    #[test]
    fn test_not_found_display() {
        let err = Error::not_found("no files match 'x/*.md'");
        assert!(err.to_string().starts_with("Not found:"));
    }

    #[test]
    fn test_io_at_exposes_source() {
        use std::error::Error as _;

        let err = Error::io_at(
            "/content/locked.md",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, Error::IoAt { .. }));
        assert!(err.source().is_some());
    }
}
