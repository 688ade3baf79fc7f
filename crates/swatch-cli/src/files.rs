//! Input file enumeration.
//!
//! Patterns are globs relative to the project root. The tree is walked with
//! `ignore` (hidden entries skipped, ignore files not consulted, so the
//! set of matches depends only on the patterns) and matched with `globset`.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Context;
use globset::{GlobBuilder, GlobMatcher};
use ignore::WalkBuilder;

/// Every regular file under a project root, walked once and matched against
/// any number of pattern lists.
#[derive(Debug, Clone)]
pub struct FileIndex {
    root: PathBuf,
    /// Root-relative paths, sorted.
    files: Vec<PathBuf>,
}

impl FileIndex {
    #[must_use]
    pub fn walk(root: &Path) -> Self {
        let mut files = walk_files(root);
        files.sort();
        Self {
            root: root.to_path_buf(),
            files,
        }
    }

    /// Expand `patterns` against the indexed files.
    ///
    /// Each pattern's matches are sorted by path; patterns contribute in the
    /// order given and a file matched by more than one pattern is kept once,
    /// at its first position. Returned paths are joined onto the root.
    ///
    /// # Errors
    ///
    /// Fails if a pattern is not a valid glob.
    pub fn expand(&self, patterns: &[String]) -> anyhow::Result<Vec<PathBuf>> {
        let matchers = patterns
            .iter()
            .map(|pattern| compile(&self.root, pattern))
            .collect::<anyhow::Result<Vec<_>>>()?;

        let mut seen: HashSet<&Path> = HashSet::new();
        let mut selected = Vec::new();
        for matcher in &matchers {
            for relative in self.files.iter().filter(|file| matcher.is_match(file)) {
                if seen.insert(relative.as_path()) {
                    selected.push(self.root.join(relative));
                }
            }
        }
        Ok(selected)
    }
}

fn compile(root: &Path, pattern: &str) -> anyhow::Result<GlobMatcher> {
    let normalized = normalize_pattern(root, pattern);
    let glob = GlobBuilder::new(&normalized)
        .literal_separator(true)
        .build()
        .with_context(|| format!("invalid file pattern '{pattern}'"))?;
    Ok(glob.compile_matcher())
}

/// Patterns are matched against root-relative paths: a leading `./` is
/// dropped and absolute patterns inside the root are made relative.
fn normalize_pattern(root: &Path, pattern: &str) -> String {
    let path = Path::new(pattern);
    if path.is_absolute() {
        if let Some(relative) = pathdiff::diff_paths(path, root) {
            return relative.to_string_lossy().into_owned();
        }
    }
    pattern.strip_prefix("./").unwrap_or(pattern).to_string()
}

/// Every regular file under `root`, as a root-relative path.
fn walk_files(root: &Path) -> Vec<PathBuf> {
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false);
    builder.hidden(true);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                tracing::warn!(%error, "skipping unreadable path");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        if let Ok(relative) = entry.path().strip_prefix(root) {
            files.push(relative.to_path_buf());
        }
    }
    files
}
