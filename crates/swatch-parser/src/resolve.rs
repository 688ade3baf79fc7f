//! External content resolution for marker metadata.
//!
//! String values prefixed `http://` or `https://` are fetched, values
//! prefixed `file://` are read from disk relative to a base directory, and
//! anything else is kept verbatim. Resolution runs once, eagerly, right
//! after parsing; later stages never re-fetch.
//!
//! I/O goes through the [`ContentSource`] trait so scanning can be tested
//! without network or disk access.

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::StatusCode;
use serde_yaml::Value;
use swatch_core::{ComponentError, Metadata};

use crate::error::ParserError;

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";
const FILE_PREFIX: &str = "file://";

/// Where external metadata content comes from.
pub trait ContentSource {
    /// Fetch a URL. Only an HTTP 200 response counts as success.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::ExternalContent`] naming the URL.
    fn fetch_url(&self, url: &str) -> Result<String, ComponentError>;

    /// Read a file given the text after `file://`.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::ExternalContent`] naming the path relative
    /// to the source's base directory.
    fn read_file(&self, location: &str) -> Result<String, ComponentError>;
}

/// Resolve every external reference in `metadata`.
///
/// # Errors
///
/// Returns the first [`ComponentError::ExternalContent`] encountered; the
/// component is then unusable as a whole.
pub fn resolve_metadata(
    mut metadata: Metadata,
    source: &dyn ContentSource,
) -> Result<Metadata, ComponentError> {
    for (key, value) in metadata.iter_mut() {
        let Value::String(text) = value else {
            continue;
        };
        if let Some(resolved) = resolve_value(text, source)? {
            tracing::debug!(key = %key, "resolved external metadata value");
            *text = resolved;
        }
    }
    Ok(metadata)
}

fn resolve_value(
    text: &str,
    source: &dyn ContentSource,
) -> Result<Option<String>, ComponentError> {
    if text.starts_with(HTTP_PREFIX) || text.starts_with(HTTPS_PREFIX) {
        return source.fetch_url(text).map(Some);
    }
    if let Some(location) = text.strip_prefix(FILE_PREFIX) {
        return source.read_file(location).map(Some);
    }
    Ok(None)
}

// ── Live source ────────────────────────────────────────────────────

/// [`ContentSource`] backed by a blocking HTTP client and the local disk.
pub struct LiveContentSource {
    base_dir: PathBuf,
    http: reqwest::blocking::Client,
}

impl LiveContentSource {
    /// Create a source resolving `file://` paths against `base_dir`.
    ///
    /// Fetches have no timeout unless one is given.
    ///
    /// # Errors
    ///
    /// Returns [`ParserError::Http`] if the HTTP client fails to build.
    pub fn new(
        base_dir: impl Into<PathBuf>,
        timeout: Option<Duration>,
    ) -> Result<Self, ParserError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("swatch/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            base_dir: base_dir.into(),
            http,
        })
    }

    fn relative_to_base(&self, path: &Path) -> PathBuf {
        pathdiff::diff_paths(path, &self.base_dir).unwrap_or_else(|| path.to_path_buf())
    }
}

impl ContentSource for LiveContentSource {
    fn fetch_url(&self, url: &str) -> Result<String, ComponentError> {
        tracing::debug!(url, "fetching external content");
        let response = self
            .http
            .get(url)
            .send()
            .map_err(|error| ComponentError::external(url, error.to_string()))?;
        check_status(response.status(), url)?;
        response
            .text()
            .map_err(|error| ComponentError::external(url, error.to_string()))
    }

    fn read_file(&self, location: &str) -> Result<String, ComponentError> {
        let path = self.base_dir.join(location);
        std::fs::read_to_string(&path).map_err(|error| {
            let relative = self.relative_to_base(&path);
            ComponentError::external(relative.display().to_string(), error.to_string())
        })
    }
}

/// Anything but an exact 200 is a failed fetch.
fn check_status(status: StatusCode, url: &str) -> Result<(), ComponentError> {
    if status == StatusCode::OK {
        Ok(())
    } else {
        Err(ComponentError::external(url, format!("HTTP status {status}")))
    }
}
