//! Input categories.

use serde::{Deserialize, Serialize};

/// One category of input documents: a label and the glob patterns whose
/// matches are scanned under it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceConfig {
    pub category: String,

    /// Glob patterns relative to the project root, scanned in order.
    #[serde(default)]
    pub files: Vec<String>,
}
