use pretty_assertions::assert_eq;
use serde_yaml::Value;

use super::*;

#[test]
fn ordinary_comments_are_not_markers() {
    assert!(scan("<!-- title: Nope -->\n<p>x</p>").is_empty());
}

#[test]
fn marker_sentinel_must_be_first_character() {
    assert!(scan("<!-- -\ntitle: Spaced\n-->\n<p>x</p>").is_empty());
}

#[test]
fn metadata_is_projected_onto_record() {
    let records = scan(
        "<!---\ntitle: Primary\ngroup: Actions\nexternal: true\nstatus: beta\n-->\n<button>Go</button>",
    );
    let record = &records[0];
    assert_eq!(record.title, "Primary");
    assert_eq!(record.group, "Actions");
    assert_eq!(record.category, "Components");
    assert!(record.external);
    assert!(record.markup);
    assert_eq!(record.get("status"), Some(&Value::String("beta".into())));
}

#[test]
fn missing_group_falls_back_to_humanized_stem() {
    let records = scan_document(
        "<!---\ntitle: Primary\n-->\n<button>Go</button>",
        "Components",
        "buttonGroups",
        &OfflineSource::default(),
    );
    assert_eq!(records[0].group, "Button groups");
}

#[test]
fn empty_marker_is_dropped() {
    assert!(scan("<!--- -->\n<p>x</p>").is_empty());
}

#[test]
fn invalid_markers_are_dropped_and_scanning_continues() {
    let records = scan(
        "<!---\ngroup: G\n-->\n<p>no title</p>\n\
         <!---\ntitle: [broken\n-->\n<span>bad yaml</span>\n\
         <!---\ntitle: Good\n-->\n<div>ok</div>",
    );
    assert_eq!(titles(&records), vec!["Good"]);
}

#[test]
fn failed_fetch_drops_only_that_component() {
    let records = scan(
        "<!---\ntitle: Remote\ncontent: https://example.com/remote.html\n-->\n<p>r</p>\n\
         <!---\ntitle: Local\n-->\n<div>l</div>",
    );
    assert_eq!(titles(&records), vec!["Local"]);
}

#[test]
fn file_content_replaces_captured_markup() {
    let source = OfflineSource::default().with_file("snippets/card.html", "<article>card</article>");
    let records = scan_document(
        "<!---\ntitle: Card\ncontent: file://snippets/card.html\n-->\n<p>placeholder</p>",
        "Components",
        "cards",
        &source,
    );
    assert_eq!(records[0].content, "<article>card</article>");
}

#[test]
fn inline_note_prefixes_content() {
    let records = scan("<!---\ntitle: Note\ninline: use sparingly\n-->\n<em>x</em>");
    assert_eq!(records[0].content, "<!-- use sparingly--><em>x</em>");
}

#[test]
fn records_come_back_in_document_order() {
    let records = scan(
        "<!---\ntitle: B\n-->\n<p>b</p>\n<!---\ntitle: A\n-->\n<div>a</div>\n<!---\ntitle: C\n-->\n<span>c</span>",
    );
    assert_eq!(titles(&records), vec!["B", "A", "C"]);
}

#[test]
fn falsy_title_or_group_values_are_dropped() {
    let records = scan(
        "<!---\ntitle: false\ngroup: G\n--><p>a</p>\
         <!---\ntitle: T\ngroup: 0\n--><div>b</div>\
         <!---\ntitle: Kept\ngroup: G\n--><span>c</span>",
    );
    assert_eq!(titles(&records), vec!["Kept"]);
}
