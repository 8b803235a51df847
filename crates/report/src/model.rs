//! Report model
//!
//! [`RenderingReport`] is display-ready: every string in it is final text
//! (or, for parameter values, final markup). Surfaces such as the HTML and
//! text renderers in [`crate::render`] only lay it out.

use crate::escape::html_escape;
use renderinfo_core::CacheSettings;
use serde::Serialize;
use std::fmt::Write;
use std::path::PathBuf;

/// The report for one rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderingReport {
    /// Report title
    pub header: String,
    /// User-visible error; `None` hides the error panel
    pub error: Option<String>,
    /// Parameter table, or the not-found placeholder
    pub details: ReportDetails,
    /// Cache configuration; `None` when the trace recorded none
    pub cache_flags: Option<CacheSettings>,
    /// Profiling counters; `None` when the trace recorded none
    pub profile: Option<ProfileCounters>,
    /// Rendering source text, only for script-backed renderings
    pub source: Option<SourceBlock>,
}

impl RenderingReport {
    /// Check if this is the not-found report.
    pub fn is_not_found(&self) -> bool {
        matches!(self.details, ReportDetails::NotFound { .. })
    }

    /// The parameter table, if a record was located.
    pub fn parameters(&self) -> Option<&ParameterTable> {
        match &self.details {
            ReportDetails::Parameters(table) => Some(table),
            ReportDetails::NotFound { .. } => None,
        }
    }
}

/// Body of the details panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportDetails {
    /// Parameters of a located record
    Parameters(ParameterTable),
    /// Placeholder shown when no record was located
    NotFound {
        /// Placeholder text
        message: String,
    },
}

/// Parameter rows in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParameterTable {
    /// Table rows
    pub rows: Vec<ParameterRow>,
}

impl ParameterTable {
    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render as an HTML table.
    ///
    /// Keys are escaped. Values are markup written by the trace writer and
    /// are emitted as they are.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<table style=\"font-size: 8pt\">");
        for row in &self.rows {
            let _ = write!(
                out,
                "<tr><td><b>{}</b>:</td><td>{}</td></tr>",
                html_escape(&row.key),
                row.value
            );
        }
        out.push_str("</table>");
        out
    }
}

/// One parameter row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterRow {
    /// Parameter name, unescaped
    pub key: String,
    /// Parameter value markup
    pub value: String,
}

/// Profiling counters as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileCounters {
    /// Formatted render time, or a placeholder
    pub render_time: String,
    /// Items read
    pub items_read: String,
    /// Data cache hits
    pub data_cache_hits: String,
    /// Data cache misses
    pub data_cache_misses: String,
    /// Cache usage sentence; `None` when unknown
    pub cache: Option<String>,
}

/// Source text of a script-backed rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceBlock {
    /// Rendering item the source belongs to
    pub item_id: String,
    /// Resolved file path
    pub path: PathBuf,
    /// Full file contents
    pub text: String,
}
