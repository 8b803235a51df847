//! Outcome of locating a rendering record

use crate::record::RenderingRecord;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Why a rendering record could not be located.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "subject", rename_all = "snake_case")]
pub enum NotFoundReason {
    /// The trace file path does not name an existing, readable file
    FileNotFound(PathBuf),
    /// The trace file has no rendering record with this identifier
    RecordNotFound(String),
}

impl NotFoundReason {
    /// The missing file name or record identifier, as displayed to the user.
    pub fn subject(&self) -> String {
        match self {
            NotFoundReason::FileNotFound(path) => path.display().to_string(),
            NotFoundReason::RecordNotFound(id) => id.clone(),
        }
    }
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundReason::FileNotFound(path) => {
                write!(f, "trace file not found: {}", path.display())
            }
            NotFoundReason::RecordNotFound(id) => write!(f, "rendering record not found: {}", id),
        }
    }
}

/// Result of a trace lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// The record was located
    Found(RenderingRecord),
    /// The file or the record is missing
    NotFound(NotFoundReason),
}

impl Lookup {
    /// Check if a record was located.
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    /// The located record, if any.
    pub fn record(&self) -> Option<&RenderingRecord> {
        match self {
            Lookup::Found(record) => Some(record),
            Lookup::NotFound(_) => None,
        }
    }

    /// The not-found reason, if the lookup failed.
    pub fn not_found(&self) -> Option<&NotFoundReason> {
        match self {
            Lookup::Found(_) => None,
            Lookup::NotFound(reason) => Some(reason),
        }
    }
}
