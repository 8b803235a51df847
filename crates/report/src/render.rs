//! Report surfaces
//!
//! Lays out a [`RenderingReport`] as an HTML fragment or as plain text.
//! JSON output is the model's `Serialize` form.

use crate::escape::html_escape;
use crate::model::{ProfileCounters, RenderingReport, ReportDetails};
use renderinfo_core::CacheSettings;
use std::fmt::Write;

const CACHE_FLAG_LABELS: [&str; 8] = [
    "Cacheable",
    "Clear on Index Update",
    "Vary by Data",
    "Vary by Device",
    "Vary by Login",
    "Vary by Parameters",
    "Vary by Query String",
    "Vary by User",
];

fn counter_rows(counters: &ProfileCounters) -> [(&'static str, &str); 4] {
    [
        ("Items Read", counters.items_read.as_str()),
        ("Data Cache Hits", counters.data_cache_hits.as_str()),
        ("Data Cache Misses", counters.data_cache_misses.as_str()),
        ("Render Time", counters.render_time.as_str()),
    ]
}

fn labelled_flags(flags: &CacheSettings) -> impl Iterator<Item = (&'static str, bool)> {
    CACHE_FLAG_LABELS
        .into_iter()
        .zip(flags.flags().into_iter().map(|(_, set)| set))
}

/// Render the report as an HTML fragment.
///
/// All report text is escaped except parameter values, which are markup.
pub fn to_html(report: &RenderingReport) -> String {
    let mut out = String::from("<div class=\"rendering-info\">\n");
    let _ = writeln!(out, "<h1>{}</h1>", html_escape(&report.header));

    if let Some(error) = &report.error {
        let _ = writeln!(out, "<div class=\"error\">{}</div>", html_escape(error));
    }

    out.push_str("<section class=\"details\">\n");
    match &report.details {
        ReportDetails::Parameters(table) => out.push_str(&table.to_html()),
        ReportDetails::NotFound { message } => {
            let _ = write!(out, "<p>{}</p>", html_escape(message));
        }
    }
    out.push_str("\n</section>\n");

    if let Some(flags) = &report.cache_flags {
        out.push_str("<section class=\"caching\">\n");
        for (label, set) in labelled_flags(flags) {
            let _ = writeln!(
                out,
                "<label><input type=\"checkbox\" disabled{} /> {}</label>",
                if set { " checked" } else { "" },
                label
            );
        }
        out.push_str("</section>\n");
    }

    if let Some(counters) = &report.profile {
        out.push_str("<section class=\"profile\">\n<dl>\n");
        for (label, value) in counter_rows(counters) {
            let _ = writeln!(out, "<dt>{}</dt><dd>{}</dd>", label, html_escape(value));
        }
        if let Some(cache) = &counters.cache {
            let _ = writeln!(out, "<dt>Cache</dt><dd>{}</dd>", html_escape(cache));
        }
        out.push_str("</dl>\n</section>\n");
    }

    if let Some(source) = &report.source {
        let _ = writeln!(
            out,
            "<section class=\"source\">\n<textarea name=\"source\" title=\"{}\">{}</textarea>\n</section>",
            html_escape(&source.path.display().to_string()),
            html_escape(&source.text)
        );
    }

    out.push_str("</div>\n");
    out
}

/// Render the report as plain text.
pub fn to_text(report: &RenderingReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", report.header);

    if let Some(error) = &report.error {
        let _ = writeln!(out, "Error: {}", error);
    }

    match &report.details {
        ReportDetails::Parameters(table) => {
            let _ = writeln!(out, "\nParameters ({}):", table.len());
            for row in &table.rows {
                let _ = writeln!(out, "  {}: {}", row.key, row.value);
            }
        }
        ReportDetails::NotFound { message } => {
            let _ = writeln!(out, "\n{}", message);
        }
    }

    if let Some(flags) = &report.cache_flags {
        out.push_str("\nCaching:\n");
        for (label, set) in labelled_flags(flags) {
            let _ = writeln!(out, "  [{}] {}", if set { "x" } else { " " }, label);
        }
    }

    if let Some(counters) = &report.profile {
        out.push_str("\nProfile:\n");
        for (label, value) in counter_rows(counters) {
            let _ = writeln!(out, "  {}: {}", label, value);
        }
        if let Some(cache) = &counters.cache {
            let _ = writeln!(out, "  Cache: {}", cache);
        }
    }

    if let Some(source) = &report.source {
        let _ = writeln!(out, "\nSource ({}):", source.path.display());
        out.push_str(&source.text);
        if !source.text.ends_with('\n') {
            out.push('\n');
        }
    }

    out
}
