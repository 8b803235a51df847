//! Lookup Property Tests

use crate::*;
use proptest::prelude::*;
use renderinfo::prelude::*;

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('"', "&quot;")
}

#[test]
fn test_repeated_lookups_are_identical() {
    let (_dir, path) = write_trace(HEADER_TRACE);
    let info = RenderingInfo::new();
    assert_eq!(
        info.report(&path, "42").unwrap(),
        info.report(&path, "42").unwrap()
    );
}

#[test]
fn test_list_ids() {
    let (_dir, path) = write_trace(
        r#"<debug>
             <debuginfo id="b"><debug><rendering/></debug></debuginfo>
             <debuginfo id="a"><debug><rendering/><rendering/></debug></debuginfo>
             <debuginfo id="c"><debug/></debuginfo>
           </debug>"#,
    );
    let ids = RenderingInfo::new().record_ids(&path).unwrap().unwrap();
    assert_eq!(ids, vec!["b".to_string(), "a".to_string()]);
}

proptest! {
    #[test]
    fn prop_any_id_is_found_exactly(id in "[a-zA-Z0-9'\"\\[\\]/@=()<>& ]{0,16}") {
        let body = single_entry(
            &escape_attr(&id),
            r#"<rendering renderingname="Target"/>"#,
        );
        let (_dir, path) = write_trace(&body);
        let info = RenderingInfo::new();

        let report = info.report(&path, &id).unwrap();
        prop_assert_eq!(report.header.as_str(), "Target");

        let other = format!("{}x", id);
        prop_assert!(info.report(&path, &other).unwrap().is_not_found());
    }
}
