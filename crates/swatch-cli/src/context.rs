//! Per-invocation project context.

use std::path::PathBuf;

use anyhow::Context;
use swatch_config::SwatchConfig;
use swatch_parser::LiveContentSource;

use crate::cli::GlobalFlags;
use crate::pipeline::{Extraction, extract};

/// The project root and its loaded configuration.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub root: PathBuf,
    pub config: SwatchConfig,
}

impl AppContext {
    /// Resolve the project root from `--project` (or the current directory)
    /// and load its configuration.
    pub fn load(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let root = resolve_project_root(flags.project.as_deref())?;
        let config = SwatchConfig::load(&root)
            .with_context(|| format!("failed to load configuration from {}", root.display()))?;
        Ok(Self { root, config })
    }

    #[must_use]
    pub fn publish_dir(&self) -> PathBuf {
        self.config.publish_dir(&self.root)
    }

    /// Scan every configured category with live `http(s)://` and `file://`
    /// resolution.
    pub fn extract(&self) -> anyhow::Result<Extraction> {
        let source = LiveContentSource::new(&self.root, self.config.fetch_timeout())
            .context("failed to initialize content source")?;
        extract(
            &self.root,
            &self.config.sources,
            &self.publish_dir(),
            &source,
        )
    }
}

fn resolve_project_root(project_override: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(path) = project_override {
        let explicit = PathBuf::from(path);
        if explicit.is_dir() {
            return Ok(explicit);
        }
        anyhow::bail!(
            "invalid --project '{}': directory does not exist",
            explicit.display()
        );
    }

    std::env::current_dir().context("failed to read current directory")
}
