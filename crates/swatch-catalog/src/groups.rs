//! Per-group pages.

use serde::Serialize;
use swatch_core::{ComponentRecord, GroupConfigs, GroupDescriptor};

/// The components of one group within one category, with resolved
/// labelling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupPage {
    pub components: Vec<ComponentRecord>,
    pub group: GroupDescriptor,
    pub category: String,
}

/// Bucket components by `(category, group)` in first-occurrence order and
/// attach each bucket's [`GroupDescriptor`].
///
/// Overrides in `configs` are looked up by group name, so a group that
/// appears in several categories shares its label across them.
#[must_use]
pub fn build_groups(components: &[ComponentRecord], configs: &GroupConfigs) -> Vec<GroupPage> {
    let mut buckets: Vec<(&str, &str, Vec<ComponentRecord>)> = Vec::new();

    for component in components {
        let (category, group) = (component.category.as_str(), component.group.as_str());
        match buckets
            .iter_mut()
            .find(|(c, g, _)| *c == category && *g == group)
        {
            Some((_, _, items)) => items.push(component.clone()),
            None => buckets.push((category, group, vec![component.clone()])),
        }
    }

    buckets
        .into_iter()
        .map(|(category, group, components)| GroupPage {
            group: GroupDescriptor::resolve(group, configs.get(group)),
            category: category.to_string(),
            components,
        })
        .collect()
}
