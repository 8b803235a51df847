//! Error types for rendering diagnostics
//!
//! Only conditions that indicate a broken collaborator are errors. A trace
//! file that does not exist or does not contain the requested record is
//! reported through [`crate::Lookup::NotFound`] instead.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised while reading traces or configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// The trace file exists but is not a well-formed trace document
    #[error("malformed trace document {}: {message}", path.display())]
    MalformedDocument {
        /// File that failed to parse
        path: PathBuf,
        /// Parser diagnostic
        message: String,
    },

    /// I/O error outside the lookup path (config files, item manifests)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Invalid content item manifest
    #[error("invalid item store: {0}")]
    ItemStore(String),
}

/// Result type for renderinfo operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a malformed-document error
    pub fn malformed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Error::MalformedDocument {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Check if this error reports a corrupt trace document.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::MalformedDocument { .. })
    }
}
