//! tree-sitter HTML node helpers.

use ast_grep_core::Node;

const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";

/// Whether the node is an element in DOM terms. Text, comments, and
/// doctypes are not.
pub(crate) fn is_element<D: ast_grep_core::Doc>(node: &Node<D>) -> bool {
    matches!(
        node.kind().as_ref(),
        "element" | "script_element" | "style_element"
    )
}

/// Lower-cased tag name from an element's `start_tag` or
/// `self_closing_tag`.
pub(crate) fn tag_name<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    node.children()
        .find(|c| matches!(c.kind().as_ref(), "start_tag" | "self_closing_tag"))?
        .children()
        .find(|c| c.kind().as_ref() == "tag_name")
        .map(|name| name.text().to_ascii_lowercase())
}

/// Body of a comment node, between `<!--` and `-->`.
pub(crate) fn comment_body<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    if node.kind().as_ref() != "comment" {
        return None;
    }
    let text = node.text();
    let inner = text.strip_prefix(COMMENT_OPEN)?;
    let inner = inner.strip_suffix(COMMENT_CLOSE).unwrap_or(inner);
    Some(inner.to_string())
}
