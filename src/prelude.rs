//! Convenient imports for renderinfo.
//!
//! ```ignore
//! use renderinfo::prelude::*;
//!
//! let report = RenderingInfo::new().report("/tmp/trace.xml", "42")?;
//! println!("{}", render::to_html(&report));
//! ```

// Main entry point
pub use crate::facade::{RenderingInfo, RenderingInfoBuilder};

// Error handling
pub use crate::error::{Error, Result};

// Lookup results
pub use renderinfo_core::{Lookup, NotFoundReason, RenderingRecord};

// Reports
pub use renderinfo_report::render;
pub use renderinfo_report::{
    ContentItem, ContentItemStore, MemoryItemStore, RenderingReport, ReportOptions, Texts,
};
