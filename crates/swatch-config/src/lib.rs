//! # swatch-config
//!
//! Layered configuration loading for swatch using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SWATCH_*` prefix, `__` as separator)
//! 2. `swatch.toml` in the project root
//! 3. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SWATCH_PUBLISH` -> `publish`,
//! `SWATCH_GROUPS__BUTTONS__LABEL` -> `groups.buttons.label`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use swatch_config::SwatchConfig;
//!
//! let config = SwatchConfig::load(Path::new(".")).expect("config");
//! for source in &config.sources {
//!     println!("{}: {:?}", source.category, source.files);
//! }
//! ```

mod error;
mod page;
mod source;

pub use error::ConfigError;
pub use page::PageConfig;
pub use source::SourceConfig;
pub use swatch_core::{GroupConfig, GroupConfigs};

use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// File name of the project configuration, looked up in the project root.
pub const CONFIG_FILE: &str = "swatch.toml";

/// Prefix of environment variable overrides.
pub const ENV_PREFIX: &str = "SWATCH_";

fn default_publish() -> String {
    "publish".to_string()
}

fn default_templates() -> String {
    "templates".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SwatchConfig {
    /// Output directory, relative to the project root.
    #[serde(default = "default_publish")]
    pub publish: String,

    /// Template directory for external renderers, relative to the project
    /// root. Recorded in the manifest.
    #[serde(default = "default_templates")]
    pub templates: String,

    /// Input categories, scanned in order.
    #[serde(default)]
    pub sources: Vec<SourceConfig>,

    /// Group label/id/description overrides keyed by group name.
    #[serde(default)]
    pub groups: GroupConfigs,

    #[serde(default)]
    pub pages: Vec<PageConfig>,

    /// Timeout for `http(s)://` metadata fetches. Unset means none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetch_timeout_secs: Option<u64>,
}

impl Default for SwatchConfig {
    fn default() -> Self {
        Self {
            publish: default_publish(),
            templates: default_templates(),
            sources: Vec::new(),
            groups: GroupConfigs::new(),
            pages: Vec::new(),
            fetch_timeout_secs: None,
        }
    }
}

impl SwatchConfig {
    /// Load and validate configuration for the project rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source fails to parse or
    /// extract, and [`ConfigError::InvalidValue`] if validation fails.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers on
    /// top.
    #[must_use]
    pub fn figment(root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        let file = root.join(CONFIG_FILE);
        if file.exists() {
            figment = figment.merge(Toml::file(file));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check invariants figment cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a source with an empty
    /// category or no file patterns, or a page with an empty title.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (idx, source) in self.sources.iter().enumerate() {
            if source.category.trim().is_empty() {
                return Err(ConfigError::invalid(
                    format!("sources[{idx}].category"),
                    "category must not be empty",
                ));
            }
            if source.files.is_empty() {
                return Err(ConfigError::invalid(
                    format!("sources[{idx}].files"),
                    format!("category '{}' lists no file patterns", source.category),
                ));
            }
        }
        for (idx, page) in self.pages.iter().enumerate() {
            if page.title.trim().is_empty() {
                return Err(ConfigError::invalid(
                    format!("pages[{idx}].title"),
                    "page title must not be empty",
                ));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_secs.map(Duration::from_secs)
    }

    #[must_use]
    pub fn publish_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.publish)
    }

    #[must_use]
    pub fn templates_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.templates)
    }

    /// Category names in configured order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.category.as_str()).collect()
    }
}
