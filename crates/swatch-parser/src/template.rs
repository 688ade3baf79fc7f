//! Template page isolation.
//!
//! A document declaring a `type: template` marker renders as a standalone
//! page, so any other marker in the same document must not be extracted
//! on its own. Matching is literal over `<!---` … `-->` blocks, before the
//! document is parsed; nested or malformed comments are not handled.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

const TEMPLATE_DECLARATION: &str = "type: template";

static MARKER_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!---[\s\S]*?-->").expect("marker block pattern is valid"));

/// Whether the raw text declares a template marker anywhere.
#[must_use]
pub fn declares_template(raw: &str) -> bool {
    raw.contains(TEMPLATE_DECLARATION)
}

/// Remove every marker block that does not itself declare
/// `type: template`. Documents without a template declaration are returned
/// unchanged and unallocated.
#[must_use]
pub fn isolate_template_markers(raw: &str) -> Cow<'_, str> {
    if !declares_template(raw) {
        return Cow::Borrowed(raw);
    }
    MARKER_BLOCK.replace_all(raw, |caps: &regex::Captures<'_>| {
        let block = &caps[0];
        if block.contains(TEMPLATE_DECLARATION) {
            block.to_string()
        } else {
            String::new()
        }
    })
}
