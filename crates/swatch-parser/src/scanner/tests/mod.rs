use std::collections::HashMap;

use swatch_core::ComponentError;

use super::*;

mod markers;

/// Source with no network and only the files it is seeded with.
#[derive(Default)]
struct OfflineSource {
    files: HashMap<String, String>,
}

impl OfflineSource {
    fn with_file(mut self, location: &str, content: &str) -> Self {
        self.files.insert(location.to_string(), content.to_string());
        self
    }
}

impl ContentSource for OfflineSource {
    fn fetch_url(&self, url: &str) -> Result<String, ComponentError> {
        Err(ComponentError::external(url, "offline"))
    }

    fn read_file(&self, location: &str) -> Result<String, ComponentError> {
        self.files
            .get(location)
            .cloned()
            .ok_or_else(|| ComponentError::external(location, "not found"))
    }
}

fn scan(document: &str) -> Vec<ComponentRecord> {
    scan_document(document, "Components", "buttons", &OfflineSource::default())
}

fn titles(records: &[ComponentRecord]) -> Vec<&str> {
    records.iter().map(|r| r.title.as_str()).collect()
}

fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn document_without_markers_yields_nothing() {
    assert!(scan("<div><p>plain</p><!-- note --><p>x</p></div>").is_empty());
}

#[test]
fn scan_file_uses_file_stem_for_group() {
    let records = scan_file(
        &fixture_path("buttons.html"),
        "Components",
        &OfflineSource::default(),
    )
    .expect("scan fixture");

    assert_eq!(titles(&records), vec!["Primary", "Link button"]);
    assert_eq!(records[0].group, "Buttons");
    assert_eq!(records[1].group, "Links");
    assert!(records.iter().all(|r| r.category == "Components"));
}

#[test]
fn scan_file_reports_missing_documents() {
    let err = scan_file(
        Path::new("does/not/exist.html"),
        "Components",
        &OfflineSource::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ParserError::Read { .. }));
    assert!(err.to_string().contains("exist.html"));
}
