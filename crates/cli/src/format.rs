//! Output formatting for CLI results.

use renderinfo::{render, RenderingReport};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Plain text layout
    Human,
    /// Report model as JSON
    Json,
    /// HTML fragment
    Html,
}

/// Format a report for printing.
pub fn format_report(report: &RenderingReport, mode: OutputMode) -> serde_json::Result<String> {
    Ok(match mode {
        OutputMode::Human => render::to_text(report).trim_end().to_string(),
        OutputMode::Json => serde_json::to_string_pretty(report)?,
        OutputMode::Html => render::to_html(report).trim_end().to_string(),
    })
}

/// Format a list of record identifiers.
pub fn format_ids(ids: &[String], json: bool) -> serde_json::Result<String> {
    if json {
        serde_json::to_string(ids)
    } else {
        Ok(ids.join("\n"))
    }
}
