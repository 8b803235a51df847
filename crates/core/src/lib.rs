//! Core types for rendering diagnostics
//!
//! This crate defines the types shared by the trace reader and the report
//! builder:
//! - [`RenderingRecord`]: one `rendering` node extracted from a debug trace
//! - [`Lookup`]: the outcome of locating a record (found or not found)
//! - [`ItemId`]: normalized content item identifier
//! - [`Error`]: fatal errors (malformed trace documents, bad configuration)
//!
//! "Not found" is not an error here. A missing trace file or an unknown
//! record identifier is a normal [`Lookup::NotFound`] outcome that still
//! produces a complete report.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod lookup;
pub mod record;
pub mod types;

pub use error::{Error, Result};
pub use lookup::{Lookup, NotFoundReason};
pub use record::{CacheSettings, Parameter, ProfileRecord, RenderingRecord};
pub use types::ItemId;
