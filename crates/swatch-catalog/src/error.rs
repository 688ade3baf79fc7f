//! Render error types for swatch-catalog.

use std::path::PathBuf;

/// Errors from writing the published catalog. Any of these aborts the
/// build.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A renderer could not produce output for a target.
    #[error("Failed to render {target}: {reason}")]
    Render { target: String, reason: String },

    /// A static page's source file could not be read.
    #[error("Failed to read page source {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An output file or directory could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The manifest could not be serialized.
    #[error("Failed to serialize manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}
