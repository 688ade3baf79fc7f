//! Per-category navigation.

use serde::Serialize;
use swatch_core::ComponentRecord;

/// One group within a category's navigation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavEntry {
    pub group: String,
    /// Number of components in the group.
    pub length: usize,
    pub items: Vec<ComponentRecord>,
}

/// Navigation for `category`: its components bucketed by group, largest
/// group first.
///
/// Groups of equal size keep the order in which they first appear.
#[must_use]
pub fn build_nav(components: &[ComponentRecord], category: &str) -> Vec<NavEntry> {
    let mut entries: Vec<NavEntry> = Vec::new();

    for component in components.iter().filter(|c| c.category == category) {
        match entries.iter_mut().find(|e| e.group == component.group) {
            Some(entry) => entry.items.push(component.clone()),
            None => entries.push(NavEntry {
                group: component.group.clone(),
                length: 0,
                items: vec![component.clone()],
            }),
        }
    }

    for entry in &mut entries {
        entry.length = entry.items.len();
    }
    entries.sort_by(|a, b| b.length.cmp(&a.length));
    entries
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use swatch_core::Metadata;

    use super::*;

    fn record(category: &str, group: &str, title: &str) -> ComponentRecord {
        let mut metadata = Metadata::new();
        metadata.insert("title", title);
        metadata.insert("group", group);
        ComponentRecord::from_metadata(String::new(), metadata, category, group, "")
    }

    fn shape(nav: &[NavEntry]) -> Vec<(&str, usize)> {
        nav.iter().map(|e| (e.group.as_str(), e.length)).collect()
    }

    fn group_of(category: &str, group: &str, size: usize) -> Vec<ComponentRecord> {
        (0..size)
            .map(|i| record(category, group, &format!("{group} {i}")))
            .collect()
    }

    #[test]
    fn groups_are_ordered_by_size_descending() {
        let components: Vec<_> = [
            group_of("C", "Three", 3),
            group_of("C", "One", 1),
            group_of("C", "Five", 5),
        ]
        .concat();

        let nav = build_nav(&components, "C");
        assert_eq!(shape(&nav), vec![("Five", 5), ("Three", 3), ("One", 1)]);
    }

    #[test]
    fn ties_keep_first_occurrence_order() {
        let components = vec![
            record("C", "Alpha", "a"),
            record("C", "Beta", "b"),
            record("C", "Gamma", "g1"),
            record("C", "Gamma", "g2"),
        ];
        let nav = build_nav(&components, "C");
        assert_eq!(shape(&nav), vec![("Gamma", 2), ("Alpha", 1), ("Beta", 1)]);
    }

    #[test]
    fn other_categories_are_excluded() {
        let components = vec![
            record("Base", "Type", "h1"),
            record("Components", "Buttons", "Primary"),
            record("Base", "Type", "h2"),
        ];
        let nav = build_nav(&components, "Base");
        assert_eq!(shape(&nav), vec![("Type", 2)]);
        let titles: Vec<&str> = nav[0].items.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["h1", "h2"]);
    }

    #[test]
    fn unknown_category_is_empty() {
        let components = vec![record("Base", "Type", "h1")];
        assert!(build_nav(&components, "Missing").is_empty());
    }
}
