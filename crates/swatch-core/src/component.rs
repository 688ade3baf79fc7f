//! Component records.
//!
//! A [`ComponentRecord`] is built once per marker from captured markup and
//! resolved [`Metadata`]. It has a fixed typed core (`title`, `group`,
//! `category`, `type`, `external`, `markup`, `inline`, `content`) and keeps
//! the whole metadata mapping for any other key.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::errors::ComponentError;
use crate::metadata::{
    KEY_CONTENT, KEY_EXTERNAL, KEY_GROUP, KEY_INLINE, KEY_MARKUP, KEY_TITLE, KEY_TYPE, Metadata,
    TYPE_COMPONENT, TYPE_TEMPLATE,
};
use crate::slug::slugify;

/// Suffix of the bare page generated for components flagged `external`.
pub const EXTERNAL_SUFFIX: &str = "-external";

/// Separator placed between content blocks when duplicates are merged.
pub const MERGE_SEPARATOR: &str = "\n\n";

// ---------------------------------------------------------------------------
// ComponentKind
// ---------------------------------------------------------------------------

/// The `type` declared by a marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentKind {
    Component,
    /// A full-page template; its content is the entire source document.
    Template,
    Other(String),
}

impl ComponentKind {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Component => TYPE_COMPONENT,
            Self::Template => TYPE_TEMPLATE,
            Self::Other(other) => other,
        }
    }
}

impl From<String> for ComponentKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            TYPE_COMPONENT => Self::Component,
            TYPE_TEMPLATE => Self::Template,
            _ => Self::Other(value),
        }
    }
}

impl From<ComponentKind> for String {
    fn from(value: ComponentKind) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ComponentRecord
// ---------------------------------------------------------------------------

/// One reusable UI fragment discovered in a source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub title: String,
    pub group: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub external: bool,
    pub markup: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline: Option<String>,
    pub content: String,
    pub metadata: Metadata,
}

impl ComponentRecord {
    /// Build a record from a marker's captured markup and resolved metadata.
    ///
    /// - A `content` key in the metadata replaces the captured markup.
    /// - `type: template` replaces the content with the whole `document`.
    /// - A truthy `inline` value is prepended as an HTML comment.
    /// - `group` falls back to `fallback_group` only when the metadata has
    ///   no `group` key at all.
    /// - A falsy `title` or `group` (`false`, `0`, `null`, `""`) projects to
    ///   an empty string and fails validation.
    /// - `category` always comes from the caller.
    #[must_use]
    pub fn from_metadata(
        captured: String,
        mut metadata: Metadata,
        category: &str,
        fallback_group: &str,
        document: &str,
    ) -> Self {
        metadata.apply_defaults();

        let kind = ComponentKind::from(
            metadata
                .text(KEY_TYPE)
                .unwrap_or_else(|| TYPE_COMPONENT.to_string()),
        );

        let mut content = if metadata.contains_key(KEY_CONTENT) {
            metadata.text(KEY_CONTENT).unwrap_or_default()
        } else {
            captured
        };
        if kind == ComponentKind::Template {
            content = document.to_string();
        }

        let inline = if metadata.is_truthy(KEY_INLINE) {
            metadata.text(KEY_INLINE)
        } else {
            None
        };
        if let Some(note) = &inline {
            content = format!("<!-- {note}-->{content}");
        }

        let group = if metadata.contains_key(KEY_GROUP) {
            truthy_text(&metadata, KEY_GROUP)
        } else {
            fallback_group.to_string()
        };

        Self {
            title: truthy_text(&metadata, KEY_TITLE),
            group,
            category: category.to_string(),
            kind,
            external: metadata.is_truthy(KEY_EXTERNAL),
            markup: metadata.is_truthy(KEY_MARKUP),
            inline,
            content,
            metadata,
        }
    }

    /// Check that `title` and `group` are set.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::Invalid`] naming the missing field, with the
    /// record's content attached for diagnostics.
    pub fn validate(&self) -> Result<&Self, ComponentError> {
        if self.title.is_empty() {
            return Err(self.invalid("No title set."));
        }
        if self.group.is_empty() {
            return Err(self.invalid("No group set."));
        }
        Ok(self)
    }

    fn invalid(&self, message: &str) -> ComponentError {
        ComponentError::Invalid {
            message: message.to_string(),
            content: self.content.clone(),
        }
    }

    /// Any metadata value, including keys outside the typed core.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    /// The `(group, title)` pair that identifies a record for deduplication.
    #[must_use]
    pub fn identity(&self) -> (&str, &str) {
        (&self.group, &self.title)
    }

    /// Append another record's content, separated by a blank line.
    pub fn append_content(&mut self, other: &str) {
        self.content.push_str(MERGE_SEPARATOR);
        self.content.push_str(other);
    }

    /// Generated page filename: lower-cased slug of
    /// `"<category> <group> <title>"`, then `suffix`, then `.html`.
    #[must_use]
    pub fn filename_with_suffix(&self, suffix: &str) -> String {
        let slug = slugify(&format!("{} {} {}", self.category, self.group, self.title));
        format!("{}{suffix}.html", slug.to_lowercase())
    }

    #[must_use]
    pub fn filename(&self) -> String {
        self.filename_with_suffix("")
    }

    /// Filename of the bare page written for `external` components.
    #[must_use]
    pub fn external_filename(&self) -> String {
        self.filename_with_suffix(EXTERNAL_SUFFIX)
    }
}

/// Text of a truthy scalar; empty for anything falsy or non-scalar.
fn truthy_text(metadata: &Metadata, key: &str) -> String {
    if metadata.is_truthy(key) {
        metadata.text(key).unwrap_or_default()
    } else {
        String::new()
    }
}
