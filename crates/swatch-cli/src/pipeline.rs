//! Extraction pipeline: configured categories to deduplicated components.

use std::path::Path;

use serde::Serialize;
use swatch_catalog::dedupe;
use swatch_config::SourceConfig;
use swatch_core::ComponentRecord;
use swatch_parser::{ContentSource, scan_file};

use crate::files::FileIndex;

/// Result of scanning every configured category.
#[derive(Debug, Clone, Serialize)]
pub struct Extraction {
    pub components: Vec<ComponentRecord>,
    pub files_scanned: usize,
    pub files_skipped: usize,
}

/// Scan each category in order, each of its files in pattern order, then
/// merge duplicates.
///
/// Files under `exclude` (the publish directory) are never scanned. A file
/// that cannot be read is logged and skipped.
///
/// # Errors
///
/// Fails only if a file pattern is invalid.
pub fn extract(
    root: &Path,
    sources: &[SourceConfig],
    exclude: &Path,
    content: &dyn ContentSource,
) -> anyhow::Result<Extraction> {
    let mut scanned: Vec<ComponentRecord> = Vec::new();
    let mut files_scanned = 0;
    let mut files_skipped = 0;

    let index = FileIndex::walk(root);
    for source in sources {
        let files = index.expand(&source.files)?;
        if files.is_empty() {
            tracing::warn!(category = %source.category, "no files matched");
        }

        for file in files.iter().filter(|file| !file.starts_with(exclude)) {
            let relative = pathdiff::diff_paths(file, root).unwrap_or_else(|| file.clone());
            match scan_file(file, &source.category, content) {
                Ok(records) => {
                    tracing::debug!(file = %relative.display(), found = records.len(), "scanned");
                    files_scanned += 1;
                    scanned.extend(records);
                }
                Err(error) => {
                    tracing::warn!(file = %relative.display(), %error, "skipping file");
                    files_skipped += 1;
                }
            }
        }
    }

    Ok(Extraction {
        components: dedupe(scanned),
        files_scanned,
        files_skipped,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use swatch_core::ComponentError;

    use super::*;

    struct OfflineSource;

    impl ContentSource for OfflineSource {
        fn fetch_url(&self, url: &str) -> Result<String, ComponentError> {
            Err(ComponentError::external(url, "offline"))
        }

        fn read_file(&self, location: &str) -> Result<String, ComponentError> {
            Err(ComponentError::external(location, "offline"))
        }
    }

    fn write(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(path, contents).expect("write");
    }

    fn source(category: &str, files: &[&str]) -> SourceConfig {
        SourceConfig {
            category: category.to_string(),
            files: files.iter().map(ToString::to_string).collect(),
        }
    }

    fn marker(title: &str, body: &str) -> String {
        format!("<!---\ntitle: {title}\n-->\n{body}\n")
    }

    #[test]
    fn categories_and_files_are_scanned_in_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();
        write(root, "base/type.html", &marker("Headings", "<h1>h</h1>"));
        write(root, "components/b-cards.html", &marker("Card", "<div>c</div>"));
        write(root, "components/a-buttons.html", &marker("Primary", "<button>p</button>"));

        let sources = [
            source("Base", &["base/*.html"]),
            source("Components", &["components/*.html"]),
        ];
        let extraction =
            extract(root, &sources, &root.join("publish"), &OfflineSource).expect("extract");

        let order: Vec<(&str, &str, &str)> = extraction
            .components
            .iter()
            .map(|c| (c.category.as_str(), c.group.as_str(), c.title.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Base", "Type", "Headings"),
                ("Components", "A buttons", "Primary"),
                ("Components", "B cards", "Card"),
            ]
        );
        assert_eq!(extraction.files_scanned, 3);
        assert_eq!(extraction.files_skipped, 0);
    }

    #[test]
    fn duplicates_across_files_are_merged() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();
        let dup = "<!---\ntitle: Primary\ngroup: Buttons\n-->\n";
        write(root, "src/a.html", &format!("{dup}<button>a</button>"));
        write(root, "src/b.html", &format!("{dup}<button>b</button>"));

        let extraction = extract(
            root,
            &[source("Components", &["src/*.html"])],
            &root.join("publish"),
            &OfflineSource,
        )
        .expect("extract");

        assert_eq!(extraction.components.len(), 1);
        assert_eq!(
            extraction.components[0].content,
            "<button>a</button>\n\n<button>b</button>"
        );
    }

    #[test]
    fn publish_directory_is_never_scanned() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();
        write(root, "src/a.html", &marker("Live", "<p>a</p>"));
        write(root, "publish/old.html", &marker("Stale", "<p>old</p>"));

        let extraction = extract(
            root,
            &[source("Components", &["**/*.html"])],
            &root.join("publish"),
            &OfflineSource,
        )
        .expect("extract");

        let titles: Vec<&str> = extraction.components.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Live"]);
    }

    #[test]
    fn invalid_pattern_fails_extraction() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = extract(
            dir.path(),
            &[source("Components", &["[broken"])],
            &dir.path().join("publish"),
            &OfflineSource,
        );
        assert!(result.is_err());
    }
}
