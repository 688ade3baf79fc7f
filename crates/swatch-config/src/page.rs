//! Static pages listed alongside the component catalog.

use serde::{Deserialize, Serialize};

/// A static page. Pages flagged `index` become the catalog's landing page
/// and are left out of the page links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageConfig {
    pub title: String,

    /// Source file relative to the project root. Pages without one are
    /// linked but not written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    #[serde(default)]
    pub index: bool,
}
