//! Per-component error types.
//!
//! Every variant is fatal to the one component being built and never to the
//! extraction pass: the scanner logs the error and drops the record.
//! Crate-level failures (unreadable input files, bad configuration, render
//! failures) live in their respective crates.

use thiserror::Error;

/// Errors raised while building or validating a single component record.
#[derive(Debug, Error)]
pub enum ComponentError {
    /// The marker's YAML block is malformed or is not a mapping.
    #[error("Metadata syntax error: {0}")]
    MetadataSyntax(String),

    /// A metadata value referenced external content that could not be loaded.
    #[error("Could not fetch external content from {location}: {reason}")]
    ExternalContent { location: String, reason: String },

    /// The record failed validation. Carries the content for diagnostics.
    #[error("Error: {message}\n{content}\n")]
    Invalid { message: String, content: String },
}

impl ComponentError {
    /// Build an [`ComponentError::ExternalContent`] error.
    pub fn external(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ExternalContent {
            location: location.into(),
            reason: reason.into(),
        }
    }
}
