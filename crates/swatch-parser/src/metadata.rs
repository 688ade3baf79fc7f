//! Marker metadata parsing.
//!
//! This is the pure half of metadata handling: text in, normalized
//! [`Metadata`] out, with no I/O. External references are left untouched
//! for [`crate::resolve`].

use serde_yaml::{Mapping, Value};
use swatch_core::metadata::scalar_text;
use swatch_core::{ComponentError, Metadata};

/// Number of leading characters of a marker body that belong to the
/// sentinel rather than to the YAML block.
const SENTINEL_LEN: usize = 2;

/// Parse a marker comment body into normalized metadata.
///
/// The first two characters (the marker sentinel) are dropped and the rest
/// is read as YAML. An empty block yields an empty mapping. Defaults for
/// `markup`, `external` and `type` are applied.
///
/// # Errors
///
/// Returns [`ComponentError::MetadataSyntax`] if the block is not valid YAML
/// or is valid YAML but not a mapping.
pub fn parse_metadata(marker_body: &str) -> Result<Metadata, ComponentError> {
    let body = strip_sentinel(marker_body);

    let value: Value = serde_yaml::from_str(body)
        .map_err(|error| ComponentError::MetadataSyntax(error.to_string()))?;

    let mapping = match value {
        Value::Null => Mapping::new(),
        Value::Mapping(mapping) => mapping,
        other => {
            return Err(ComponentError::MetadataSyntax(format!(
                "expected a key/value mapping, found {}",
                value_kind(&other)
            )));
        }
    };

    let metadata: Metadata = mapping
        .into_iter()
        .map(|(key, value)| (key_text(&key), value))
        .collect();

    Ok(metadata.with_defaults())
}

fn strip_sentinel(text: &str) -> &str {
    text.char_indices()
        .nth(SENTINEL_LEN)
        .map_or("", |(idx, _)| &text[idx..])
}

fn key_text(key: &Value) -> String {
    scalar_text(key).unwrap_or_else(|| {
        serde_yaml::to_string(key)
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    })
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
