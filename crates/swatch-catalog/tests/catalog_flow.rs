//! Dedup, navigation and group pages working together on scanned records.

use pretty_assertions::assert_eq;
use swatch_catalog::{build_groups, build_nav, dedupe};
use swatch_core::{ComponentRecord, GroupConfigs, Metadata};

fn record(category: &str, group: &str, title: &str, content: &str) -> ComponentRecord {
    let mut metadata = Metadata::new();
    metadata.insert("title", title);
    metadata.insert("group", group);
    ComponentRecord::from_metadata(content.to_string(), metadata, category, group, "")
}

#[test]
fn duplicates_collapse_before_navigation_counts() {
    let scanned = vec![
        record("Components", "Buttons", "Primary", "<button>1</button>"),
        record("Components", "Forms", "Input", "<input/>"),
        record("Components", "Buttons", "Primary", "<button>2</button>"),
        record("Components", "Forms", "Select", "<select></select>"),
        record("Components", "Forms", "Textarea", "<textarea></textarea>"),
        record("Components", "Buttons", "Ghost", "<button>g</button>"),
    ];

    let components = dedupe(scanned);
    let nav = build_nav(&components, "Components");

    let shape: Vec<(&str, usize)> = nav.iter().map(|e| (e.group.as_str(), e.length)).collect();
    assert_eq!(shape, vec![("Forms", 3), ("Buttons", 2)]);
    assert_eq!(
        nav[1].items[0].content,
        "<button>1</button>\n\n<button>2</button>"
    );
}

#[test]
fn group_pages_cover_every_component_once() {
    let components = dedupe(vec![
        record("Base", "Type", "Headings", "<h1></h1>"),
        record("Components", "Buttons", "Primary", "<button></button>"),
        record("Base", "Type", "Lists", "<ul></ul>"),
    ]);

    let pages = build_groups(&components, &GroupConfigs::new());
    let total: usize = pages.iter().map(|p| p.components.len()).sum();
    assert_eq!(total, components.len());
    assert_eq!(pages[0].group.label, "Type");
    assert_eq!(pages[1].category, "Components");
}
