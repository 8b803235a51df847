//! Source Block Tests

use crate::*;
use renderinfo::prelude::*;

const HEADER_ITEM: &str = "{0DE95AE4-41AB-4D01-9EB0-67441B7C2450}";

fn script_trace() -> (TempDir, PathBuf) {
    write_trace(&single_entry(
        "42",
        &format!(
            r#"<rendering renderingname="Header" renderingid="{}"/>"#,
            HEADER_ITEM
        ),
    ))
}

fn site() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("xsl")).unwrap();
    fs::write(dir.path().join("xsl/header.xslt"), "<xsl:stylesheet/>").unwrap();
    dir
}

#[test]
fn test_script_rendering_shows_source() {
    let site = site();
    let (_dir, path) = script_trace();
    let items: MemoryItemStore =
        vec![ContentItem::new(HEADER_ITEM, XSL_TEMPLATE).with_field("Path", "/xsl/header.xslt")]
            .into_iter()
            .collect();

    let info = RenderingInfo::builder()
        .item_store(items)
        .source_root(site.path())
        .build()
        .unwrap();
    let report = info.report(&path, "42").unwrap();

    let source = report.source.unwrap();
    assert_eq!(source.text, "<xsl:stylesheet/>");
    assert_eq!(source.item_id, HEADER_ITEM);
}

#[test]
fn test_manifest_with_lower_case_ids() {
    let site = site();
    let (dir, path) = script_trace();
    let manifest = dir.path().join("items.json");
    fs::write(
        &manifest,
        r#"[{"id": "0de95ae4-41ab-4d01-9eb0-67441b7c2450",
             "template": "f1f1d639-4f54-40c2-8be0-81266b392cee",
             "fields": {"Path": "~/xsl/header.xslt"}}]"#,
    )
    .unwrap();

    let info = RenderingInfo::builder()
        .items_manifest(&manifest)
        .source_root(site.path())
        .build()
        .unwrap();
    let report = info.report(&path, "42").unwrap();
    assert!(report.source.is_some());
}

#[test]
fn test_other_template_hides_source() {
    let site = site();
    let (_dir, path) = script_trace();
    let items: MemoryItemStore = vec![ContentItem::new(
        HEADER_ITEM,
        "{0A98E368-CDB9-4E1E-927C-8E0C24A003FB}",
    )
    .with_field("Path", "/xsl/header.xslt")]
    .into_iter()
    .collect();

    let info = RenderingInfo::builder()
        .item_store(items)
        .source_root(site.path())
        .build()
        .unwrap();
    assert!(info.report(&path, "42").unwrap().source.is_none());
}

#[test]
fn test_missing_source_file_hides_source() {
    let site = site();
    let (_dir, path) = script_trace();
    let items: MemoryItemStore =
        vec![ContentItem::new(HEADER_ITEM, XSL_TEMPLATE).with_field("Path", "/xsl/gone.xslt")]
            .into_iter()
            .collect();

    let info = RenderingInfo::builder()
        .item_store(items)
        .source_root(site.path())
        .build()
        .unwrap();
    let report = info.report(&path, "42").unwrap();
    assert!(report.source.is_none());
    assert!(report.error.is_none());
}

#[test]
fn test_no_rendering_id_no_source() {
    let site = site();
    let (_dir, path) = write_trace(HEADER_TRACE);
    let items: MemoryItemStore =
        vec![ContentItem::new(HEADER_ITEM, XSL_TEMPLATE).with_field("Path", "/xsl/header.xslt")]
            .into_iter()
            .collect();

    let info = RenderingInfo::builder()
        .item_store(items)
        .source_root(site.path())
        .build()
        .unwrap();
    assert!(info.report(&path, "42").unwrap().source.is_none());
}
