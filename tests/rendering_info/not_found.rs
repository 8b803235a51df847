//! Not-Found and Error Tests

use crate::*;
use renderinfo::prelude::*;

fn assert_fallback_counters(report: &RenderingReport) {
    let counters = report.profile.as_ref().unwrap();
    assert_eq!(counters.items_read, "?");
    assert_eq!(counters.data_cache_hits, "?");
    assert_eq!(counters.data_cache_misses, "?");
    assert_eq!(counters.render_time, "?");
    assert!(counters.cache.is_none());
}

#[test]
fn test_unknown_record() {
    let (_dir, path) = write_trace(HEADER_TRACE);
    let report = RenderingInfo::new().report(&path, "99").unwrap();

    assert_eq!(report.header, "Unknown Rendering");
    let error = report.error.as_deref().unwrap();
    assert!(error.contains("99"));
    assert!(report.is_not_found());
    assert!(report.parameters().is_none());
    assert!(report.cache_flags.is_none());
    assert!(report.source.is_none());
    assert_fallback_counters(&report);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.xml");
    let report = RenderingInfo::new().report(&path, "42").unwrap();

    assert_eq!(report.header, "Unknown Rendering");
    assert_eq!(
        report.error.unwrap(),
        format!(
            "The debug information file '{}' was not found.",
            path.display()
        )
    );
    assert!(matches!(
        RenderingInfo::new().lookup(&path, "42").unwrap(),
        Lookup::NotFound(NotFoundReason::FileNotFound(_))
    ));
}

#[test]
fn test_directory_is_not_a_trace_file() {
    let dir = tempfile::tempdir().unwrap();
    let lookup = RenderingInfo::new().lookup(dir.path(), "42").unwrap();
    assert!(matches!(
        lookup,
        Lookup::NotFound(NotFoundReason::FileNotFound(_))
    ));
}

#[test]
fn test_entry_without_rendering_is_not_found() {
    let (_dir, path) = write_trace(r#"<debug><debuginfo id="1"><debug/></debuginfo></debug>"#);
    let lookup = RenderingInfo::new().lookup(&path, "1").unwrap();
    assert_eq!(
        lookup,
        Lookup::NotFound(NotFoundReason::RecordNotFound("1".into()))
    );
}

#[test]
fn test_malformed_document_is_error() {
    let (_dir, path) = write_trace("<debug><debuginfo id=\"1\">");
    let err = RenderingInfo::new().report(&path, "1").unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn test_invalid_text_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trace.xml");
    std::fs::write(&path, [0x3C, 0x61, 0xFF, 0xFE, 0x3E]).unwrap();

    let err = RenderingInfo::new().report(&path, "1").unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn test_injection_shaped_id_is_plain_text() {
    let (_dir, path) = write_trace(HEADER_TRACE);
    let report = RenderingInfo::new()
        .report(&path, "42' or '1'='1")
        .unwrap();
    assert!(report.is_not_found());
    assert!(report.error.unwrap().contains("42' or '1'='1"));
}
