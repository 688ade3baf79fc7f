//! End-to-end scanning against the real filesystem.

use std::fs;

use pretty_assertions::assert_eq;
use swatch_parser::{LiveContentSource, scan_file};

#[test]
fn file_references_resolve_against_the_base_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::create_dir_all(dir.path().join("src/snippets")).expect("mkdir");
    fs::write(
        dir.path().join("src/snippets/alert.html"),
        "<div class=\"alert\">Heads up</div>",
    )
    .expect("write snippet");
    fs::write(
        dir.path().join("src/alerts.html"),
        "<!---\ntitle: Alert\ncontent: file://src/snippets/alert.html\n-->\n<p>placeholder</p>\n\
         <!---\ntitle: Broken\ncontent: file://src/snippets/missing.html\n-->\n<p>gone</p>\n",
    )
    .expect("write document");

    let source = LiveContentSource::new(dir.path(), None).expect("source");
    let records = scan_file(&dir.path().join("src/alerts.html"), "Components", &source)
        .expect("scan");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Alert");
    assert_eq!(records[0].group, "Alerts");
    assert_eq!(records[0].content, "<div class=\"alert\">Heads up</div>");
}

#[test]
fn filenames_follow_category_group_and_title() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("form-controls.html");
    fs::write(
        &path,
        "<!---\ntitle: Text Input\nexternal: true\n-->\n<input type=\"text\"/>\n",
    )
    .expect("write document");

    let source = LiveContentSource::new(dir.path(), None).expect("source");
    let records = scan_file(&path, "Base", &source).expect("scan");

    assert_eq!(records[0].filename(), "base-form-controls-text-input.html");
    assert_eq!(
        records[0].external_filename(),
        "base-form-controls-text-input-external.html"
    );
}
