//! Document scanner.
//!
//! Finds marker comments in an HTML document and turns each one into a
//! validated [`ComponentRecord`]. A marker's content is not delimited
//! explicitly; it is the run of following sibling elements sharing the tag
//! name of the first one.

use std::path::Path;

use ast_grep_core::{Doc, Node};
use swatch_core::slug::humanize;
use swatch_core::{ComponentError, ComponentRecord};

use crate::error::ParserError;
use crate::html::{comment_body, is_element, tag_name};
use crate::metadata::parse_metadata;
use crate::parser::parse_html;
use crate::resolve::{ContentSource, resolve_metadata};
use crate::template::isolate_template_markers;

/// First character of a comment body that marks it as a component marker.
const MARKER_SENTINEL: char = '-';

/// Scan one document and return its valid component records in document
/// order.
///
/// `file_stem` is humanized into the group used by markers that declare
/// none. Components that fail to parse, resolve or validate are logged at
/// `error` level and dropped; the scan itself never fails.
pub fn scan_document(
    document: &str,
    category: &str,
    file_stem: &str,
    source: &dyn ContentSource,
) -> Vec<ComponentRecord> {
    let scan = Scan {
        category,
        fallback_group: humanize(file_stem),
        document,
        source,
    };

    let stripped = isolate_template_markers(document);
    let tree = parse_html(&stripped);

    let mut records = Vec::new();
    scan.visit(&tree.root(), &mut records);
    records
}

/// Read `path` and scan it. The group fallback is derived from the file's
/// base name without extension.
///
/// # Errors
///
/// Returns [`ParserError::Read`] if the file cannot be read. Per-component
/// failures are not errors; see [`scan_document`].
pub fn scan_file(
    path: &Path,
    category: &str,
    source: &dyn ContentSource,
) -> Result<Vec<ComponentRecord>, ParserError> {
    let _span = tracing::debug_span!("scan_file", path = %path.display(), category).entered();
    tracing::debug!("checking file");

    let document = std::fs::read_to_string(path).map_err(|source| ParserError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file_stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();

    Ok(scan_document(&document, category, &file_stem, source))
}

struct Scan<'a> {
    category: &'a str,
    fallback_group: String,
    document: &'a str,
    source: &'a dyn ContentSource,
}

impl Scan<'_> {
    fn visit<D: Doc>(&self, node: &Node<D>, records: &mut Vec<ComponentRecord>) {
        let children: Vec<_> = node.children().collect();
        for (idx, child) in children.iter().enumerate() {
            if let Some(body) = marker_body(child) {
                self.process_marker(&body, &children[idx + 1..], records);
            }
            self.visit(child, records);
        }
    }

    fn process_marker<D: Doc>(
        &self,
        body: &str,
        following: &[Node<D>],
        records: &mut Vec<ComponentRecord>,
    ) {
        let Some(captured) = capture_span(following) else {
            tracing::debug!(
                category = self.category,
                "marker has no following element, skipping"
            );
            return;
        };

        match self.build_record(captured, body) {
            Ok(record) => {
                tracing::info!(
                    category = %record.category,
                    group = %record.group,
                    title = %record.title,
                    "found component"
                );
                records.push(record);
            }
            Err(error) => {
                tracing::error!(category = self.category, %error, "dropping component");
            }
        }
    }

    fn build_record(
        &self,
        captured: String,
        body: &str,
    ) -> Result<ComponentRecord, ComponentError> {
        let metadata = parse_metadata(body)?;
        let metadata = resolve_metadata(metadata, self.source)?;
        let record = ComponentRecord::from_metadata(
            captured,
            metadata,
            self.category,
            &self.fallback_group,
            self.document,
        );
        record.validate()?;
        Ok(record)
    }
}

fn marker_body<D: Doc>(node: &Node<D>) -> Option<String> {
    comment_body(node).filter(|body| body.starts_with(MARKER_SENTINEL))
}

/// Concatenated source text of the run of sibling elements that share the
/// first element's tag name. `None` when no element follows.
///
/// Non-element siblings (text, comments) are skipped, not treated as the
/// end of the run.
fn capture_span<D: Doc>(following: &[Node<D>]) -> Option<String> {
    let elements: Vec<&Node<D>> = following.iter().filter(|n| is_element(n)).collect();
    let reference = tag_name(elements.first()?);

    let mut end = 0;
    while end < elements.len() && tag_name(elements[end]) == reference {
        end += 1;
    }

    Some(elements[..end].iter().map(|el| el.text()).collect())
}

#[cfg(test)]
mod tests;
