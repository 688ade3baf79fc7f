//! Duplicate merging.
//!
//! Two records describe the same logical component when their
//! `(group, title)` pairs are equal. Category is not part of the identity,
//! so same-named components in different categories merge too.

use std::collections::HashMap;

use swatch_core::ComponentRecord;

/// Collapse records sharing `(group, title)` into the first occurrence.
///
/// Output keeps first-occurrence order. Each later duplicate appends its
/// content to the surviving record after a blank line; everything else on
/// the survivor (category, metadata) is left as first seen.
#[must_use]
pub fn dedupe(components: Vec<ComponentRecord>) -> Vec<ComponentRecord> {
    let mut merged: Vec<ComponentRecord> = Vec::with_capacity(components.len());
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for component in components {
        let key = (component.group.clone(), component.title.clone());
        if let Some(&pos) = index.get(&key) {
            tracing::debug!(group = %key.0, title = %key.1, "merging duplicate component");
            merged[pos].append_content(&component.content);
        } else {
            index.insert(key, merged.len());
            merged.push(component);
        }
    }

    merged
}
