//! ast-grep wrapper for HTML documents.

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::{LanguageExt, SupportLang};

/// The concrete AST tree type returned by [`parse_html`].
pub type HtmlTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Parse HTML source into an ast-grep tree.
#[must_use]
pub fn parse_html(source: &str) -> HtmlTree {
    SupportLang::Html.ast_grep(source)
}
