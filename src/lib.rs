//! # renderinfo
//!
//! Rendering diagnostics for page debug traces.
//!
//! While a page renders in debug mode, each rendering's name, parameters,
//! cache settings and profiling counters are written to a trace file. This
//! crate looks up one rendering by identifier and builds a report for it.
//!
//! ## Quick Start
//!
//! ```ignore
//! use renderinfo::prelude::*;
//!
//! let info = RenderingInfo::new();
//! let report = info.report("/tmp/trace.xml", "42")?;
//!
//! if report.is_not_found() {
//!     eprintln!("{}", report.error.as_deref().unwrap_or_default());
//! }
//! println!("{}", render::to_text(&report));
//! ```
//!
//! ## Crates
//!
//! - [`renderinfo_core`]: records, lookup results, identifiers, layer errors
//! - [`renderinfo_trace`]: trace file reading and record lookup
//! - [`renderinfo_report`]: report model, builder and display surfaces

#![warn(missing_docs)]

mod error;
mod facade;

pub mod prelude;

// Re-export main entry points
pub use error::{Error, Result};
pub use facade::{RenderingInfo, RenderingInfoBuilder};

// Re-export types
pub use renderinfo_core::{ItemId, Lookup, NotFoundReason, RenderingRecord};
pub use renderinfo_report::{render, RenderingReport, ReportOptions, Texts};
