//! # swatch-parser
//!
//! HTML scanning and marker metadata parsing for swatch.
//!
//! A marker is an HTML comment whose body starts with `-` (authors write
//! `<!---` followed by a YAML block and `-->`). Scanning a document:
//!
//! 1. [`template::isolate_template_markers`] strips competing markers from
//!    documents that declare a `type: template` marker.
//! 2. The document is parsed with tree-sitter HTML through ast-grep.
//! 3. Each marker's content span is inferred from the run of following
//!    sibling elements sharing the first sibling's tag name.
//! 4. The marker body is parsed ([`metadata::parse_metadata`]), its external
//!    references resolved ([`resolve::resolve_metadata`]), and the resulting
//!    record validated. Failing records are logged and dropped.

mod error;
mod html;
pub mod metadata;
pub mod parser;
pub mod resolve;
pub mod scanner;
pub mod template;

pub use error::ParserError;
pub use metadata::parse_metadata;
pub use resolve::{ContentSource, LiveContentSource, resolve_metadata};
pub use scanner::{scan_document, scan_file};
