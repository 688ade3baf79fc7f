//! Group labelling.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::slug::upper_first;

/// User-supplied overrides for one group, keyed by group name in
/// configuration. Any field left unset is filled with its default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Group overrides keyed by group name.
pub type GroupConfigs = BTreeMap<String, GroupConfig>;

/// Fully resolved group labelling handed to the rendering stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDescriptor {
    pub label: String,
    pub id: String,
    pub description: String,
}

impl GroupDescriptor {
    /// Resolve the descriptor for `group`, taking any configured field and
    /// defaulting the rest: `label` to the group name with its first
    /// character upper-cased, `id` to the group name, `description` to empty.
    #[must_use]
    pub fn resolve(group: &str, config: Option<&GroupConfig>) -> Self {
        let config = config.cloned().unwrap_or_default();
        Self {
            label: config.label.unwrap_or_else(|| upper_first(group)),
            id: config.id.unwrap_or_else(|| group.to_string()),
            description: config.description.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_without_config() {
        let desc = GroupDescriptor::resolve("buttons", None);
        assert_eq!(
            desc,
            GroupDescriptor {
                label: "Buttons".to_string(),
                id: "buttons".to_string(),
                description: String::new(),
            }
        );
    }

    #[test]
    fn config_fields_override_only_what_they_set() {
        let config = GroupConfig {
            description: Some("Clickable things".to_string()),
            ..GroupConfig::default()
        };
        let desc = GroupDescriptor::resolve("buttons", Some(&config));
        assert_eq!(desc.label, "Buttons");
        assert_eq!(desc.id, "buttons");
        assert_eq!(desc.description, "Clickable things");
    }

    #[test]
    fn full_override() {
        let config = GroupConfig {
            label: Some("Call to action".to_string()),
            id: Some("cta".to_string()),
            description: Some("Primary actions".to_string()),
        };
        let desc = GroupDescriptor::resolve("buttons", Some(&config));
        assert_eq!(desc.label, "Call to action");
        assert_eq!(desc.id, "cta");
    }
}
