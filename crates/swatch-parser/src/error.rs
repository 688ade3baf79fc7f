//! Parser error types for swatch-parser.
//!
//! Per-marker failures are [`swatch_core::ComponentError`]s and never
//! surface here; these errors concern whole documents or the HTTP client.

use std::path::PathBuf;

/// Errors that can occur while loading a source document.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
