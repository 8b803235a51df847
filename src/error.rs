//! Unified error types for renderinfo.
//!
//! Wraps the layer errors into one interface. Lookup misses are not errors;
//! they come back as not-found reports.

use thiserror::Error;

/// All renderinfo errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Trace file exists but is not a well-formed trace document
    #[error("malformed trace document: {0}")]
    MalformedDocument(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration file
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Invalid content item manifest
    #[error("invalid item store: {0}")]
    ItemStore(String),
}

/// Result type for renderinfo operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error reports a corrupt trace document.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::MalformedDocument(_))
    }

    /// Check if this error comes from setup (configuration or item store)
    /// rather than from reading a trace.
    pub fn is_setup(&self) -> bool {
        matches!(self, Error::Config(_) | Error::ItemStore(_))
    }
}

// Convert from layer errors
impl From<renderinfo_core::Error> for Error {
    fn from(e: renderinfo_core::Error) -> Self {
        use renderinfo_core::Error as CoreError;
        match e {
            malformed @ CoreError::MalformedDocument { .. } => {
                Error::MalformedDocument(malformed.to_string())
            }
            CoreError::Io(io_err) => Error::Io(io_err),
            CoreError::Config(msg) => Error::Config(msg),
            CoreError::ItemStore(msg) => Error::ItemStore(msg),
        }
    }
}
