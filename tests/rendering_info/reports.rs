//! Located Record Tests

use crate::*;
use renderinfo::prelude::*;

#[test]
fn test_header_trace_report() {
    let (_dir, path) = write_trace(HEADER_TRACE);
    let report = RenderingInfo::new().report(&path, "42").unwrap();

    assert_eq!(report.header, "Header");
    assert!(report.error.is_none());

    let table = report.parameters().unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.rows[0].key, "title");
    assert_eq!(table.rows[0].value, "Hello");

    let counters = report.profile.as_ref().unwrap();
    assert_eq!(counters.items_read, "3");
    assert_eq!(counters.data_cache_hits, "1");
    assert_eq!(counters.data_cache_misses, "0");
    assert_eq!(counters.render_time, "5.00ms");
    assert_eq!(counters.cache.as_deref(), Some("Not used"));

    assert!(report.cache_flags.is_none());
    assert!(report.source.is_none());
}

#[test]
fn test_cacheable_only() {
    let (_dir, path) = write_trace(&single_entry(
        "7",
        r#"<rendering renderingname="Nav"><caching cacheable="true" varybydata="false"/></rendering>"#,
    ));
    let report = RenderingInfo::new().report(&path, "7").unwrap();

    let flags = report.cache_flags.unwrap();
    assert!(flags.cacheable);
    assert_eq!(flags.enabled_count(), 1);
}

#[test]
fn test_flags_are_case_sensitive() {
    let (_dir, path) = write_trace(&single_entry(
        "7",
        r#"<rendering><caching cacheable="True" varybyuser="TRUE" varybylogin="1"/></rendering>"#,
    ));
    let report = RenderingInfo::new().report(&path, "7").unwrap();
    assert_eq!(report.cache_flags.unwrap().enabled_count(), 0);
}

#[test]
fn test_unparsable_render_time() {
    let (_dir, path) = write_trace(&single_entry(
        "7",
        r#"<rendering><profile rendertime="abc" cached="true"/></rendering>"#,
    ));
    let report = RenderingInfo::new().report(&path, "7").unwrap();

    let counters = report.profile.unwrap();
    assert_eq!(counters.render_time, "Unknown");
    assert_eq!(
        counters.cache.as_deref(),
        Some("The rendering was rendered from the cache.")
    );
    assert_eq!(counters.items_read, "");
}

#[test]
fn test_render_time_rounding() {
    for (raw, expected) in [("12.345", "12.35ms"), ("1234.5", "1,234.50ms"), ("0", "0.00ms")] {
        let (_dir, path) = write_trace(&single_entry(
            "7",
            &format!(r#"<rendering><profile rendertime="{}"/></rendering>"#, raw),
        ));
        let report = RenderingInfo::new().report(&path, "7").unwrap();
        assert_eq!(report.profile.unwrap().render_time, expected, "rendertime={}", raw);
    }
}

#[test]
fn test_parameter_markup_and_order() {
    let (_dir, path) = write_trace(&single_entry(
        "7",
        r#"<rendering>
             <value name="z&lt;key">plain</value>
             <value name="a"><b>bold</b> &amp; more</value>
           </rendering>"#,
    ));
    let report = RenderingInfo::new().report(&path, "7").unwrap();
    let table = report.parameters().unwrap();

    assert_eq!(table.rows[0].key, "z<key");
    assert_eq!(table.rows[1].value, "<b>bold</b> &amp; more");

    let html = table.to_html();
    assert!(html.contains("<b>z&lt;key</b>"));
    assert!(html.contains("<td><b>bold</b> &amp; more</td>"));
}

#[test]
fn test_empty_rendering_still_reports() {
    let (_dir, path) = write_trace(&single_entry("7", "<rendering/>"));
    let report = RenderingInfo::new().report(&path, "7").unwrap();

    assert_eq!(report.header, "");
    assert!(report.parameters().unwrap().is_empty());
    assert!(report.cache_flags.is_none());
    assert!(report.profile.is_none());
}

#[test]
fn test_first_duplicate_wins() {
    let (_dir, path) = write_trace(
        r#"<debug>
             <debuginfo id="1"><debug><rendering renderingname="First"/></debug></debuginfo>
             <debuginfo id="1"><debug><rendering renderingname="Second"/></debug></debuginfo>
           </debug>"#,
    );
    let report = RenderingInfo::new().report(&path, "1").unwrap();
    assert_eq!(report.header, "First");
}

#[test]
fn test_custom_texts() {
    let (_dir, path) = write_trace(&single_entry(
        "7",
        r#"<rendering><profile rendertime="x"/></rendering>"#,
    ));
    let texts = Texts {
        unknown: "n/a".into(),
        cache_not_used: "Nicht verwendet".into(),
        ..Texts::default()
    };
    let info = RenderingInfo::builder().texts(texts).build().unwrap();
    let counters = info.report(&path, "7").unwrap().profile.unwrap();

    assert_eq!(counters.render_time, "n/a");
    assert_eq!(counters.cache.as_deref(), Some("Nicht verwendet"));
}

#[test]
fn test_html_surface() {
    let (_dir, path) = write_trace(HEADER_TRACE);
    let report = RenderingInfo::new().report(&path, "42").unwrap();
    let html = render::to_html(&report);

    assert!(html.contains("<h1>Header</h1>"));
    assert!(html.contains("<tr><td><b>title</b>:</td><td>Hello</td></tr>"));
    assert!(html.contains("<dd>5.00ms</dd>"));
    assert!(!html.contains("class=\"caching\""));
}
