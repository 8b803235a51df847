//! Rendering Info Test Suite
//!
//! End-to-end tests from trace file to report:
//! - Located records (header, parameters, cache flags, counters)
//! - Not-found reports (missing file, unknown record)
//! - Malformed trace documents
//! - Source blocks for script-backed renderings
//! - Lookup properties over arbitrary identifiers
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test rendering_info
//! cargo test --test rendering_info not_found::
//! ```

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

// Test modules
mod lookup;
mod not_found;
mod reports;
mod source;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// The XSL rendering template id
pub const XSL_TEMPLATE: &str = "{F1F1D639-4F54-40C2-8BE0-81266B392CEE}";

/// A trace with a profiled "Header" rendering under id 42
pub const HEADER_TRACE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<debug>
  <debuginfo id="42">
    <debug>
      <rendering renderingname="Header">
        <value name="title">Hello</value>
        <profile rendertime="5" itemsread="3" datacachehits="1" datacachemisses="0" cached="false" />
      </rendering>
    </debug>
  </debuginfo>
</debug>"#;

/// Write `body` as `trace.xml` in a fresh temp dir
pub fn write_trace(body: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("trace.xml");
    fs::write(&path, body).expect("Failed to write trace");
    (dir, path)
}

/// Wrap rendering elements in one `debuginfo` entry
pub fn single_entry(id: &str, rendering: &str) -> String {
    format!(
        r#"<debug><debuginfo id="{}"><debug>{}</debug></debuginfo></debug>"#,
        id, rendering
    )
}
