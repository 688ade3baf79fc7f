//! Normalized marker metadata.
//!
//! A [`Metadata`] block is the YAML mapping written inside a marker comment,
//! with string keys and the defaults for `markup`, `external` and `type`
//! filled in. Every key stays addressable after a [`ComponentRecord`] is
//! built from it, so templates can reach custom keys such as `notes` or
//! `status` alongside the typed fields.
//!
//! [`ComponentRecord`]: crate::ComponentRecord

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

pub const KEY_TITLE: &str = "title";
pub const KEY_GROUP: &str = "group";
pub const KEY_TYPE: &str = "type";
pub const KEY_MARKUP: &str = "markup";
pub const KEY_EXTERNAL: &str = "external";
pub const KEY_INLINE: &str = "inline";
pub const KEY_CONTENT: &str = "content";

/// Type value marking a full-page template component.
pub const TYPE_TEMPLATE: &str = "template";
/// Type value used when a marker declares none.
pub const TYPE_COMPONENT: &str = "component";

/// Key/value mapping parsed from a marker's metadata block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(BTreeMap<String, Value>);

impl Metadata {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill in `markup: true`, `external: false` and `type: component` for
    /// whichever of those keys is missing. Explicit values always win, so
    /// applying defaults twice is a no-op.
    pub fn apply_defaults(&mut self) {
        self.0
            .entry(KEY_MARKUP.to_string())
            .or_insert(Value::Bool(true));
        self.0
            .entry(KEY_EXTERNAL.to_string())
            .or_insert(Value::Bool(false));
        self.0
            .entry(KEY_TYPE.to_string())
            .or_insert_with(|| Value::String(TYPE_COMPONENT.to_string()));
    }

    /// Builder-style [`apply_defaults`](Self::apply_defaults).
    #[must_use]
    pub fn with_defaults(mut self) -> Self {
        self.apply_defaults();
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Scalar value rendered as text. `null`, sequences and mappings yield
    /// `None`.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<String> {
        self.0.get(key).and_then(scalar_text)
    }

    /// Whether the value under `key` is present and truthy.
    #[must_use]
    pub fn is_truthy(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(truthy)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut Value)> {
        self.0.iter_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Value)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Render a YAML scalar as text.
#[must_use]
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Truthiness of a metadata value: empty strings, zero, `false` and `null`
/// are falsy; collections are always truthy.
#[must_use]
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(_) | Value::Mapping(_) => true,
        Value::Tagged(tagged) => truthy(&tagged.value),
    }
}
