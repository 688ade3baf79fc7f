use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use serde::Serialize;
use swatch_catalog::{BareRenderer, Manifest, Renderer, Site, build_groups, publish};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::BuildArgs;
use crate::commands::nav::{template_data, today};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildSummary {
    pub publish_dir: PathBuf,
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub components: usize,
    pub groups: usize,
    pub pages: usize,
    pub files_written: usize,
}

/// Handle `swatch build`.
pub fn handle(args: &BuildArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let summary = build(ctx, !args.keep, &BareRenderer, today())?;
    output(&summary, flags.format)
}

/// Extract, catalog and publish the project. With `clean`, the publish
/// directory is removed first so pages of deleted components disappear.
pub fn build(
    ctx: &AppContext,
    clean: bool,
    renderer: &dyn Renderer,
    date: NaiveDate,
) -> anyhow::Result<BuildSummary> {
    let publish_dir = ctx.publish_dir();
    if clean && publish_dir.exists() {
        fs::remove_dir_all(&publish_dir).with_context(|| {
            format!("failed to remove publish directory {}", publish_dir.display())
        })?;
        tracing::debug!(dir = %publish_dir.display(), "cleaned publish directory");
    }

    let extraction = ctx.extract()?;
    let manifest = Manifest {
        templates: ctx.config.templates_dir(&ctx.root),
        template_data: template_data(ctx, &extraction.components, date),
        groups: build_groups(&extraction.components, &ctx.config.groups),
    };

    let site = Site {
        root: &ctx.root,
        publish_dir: &publish_dir,
        pages: &ctx.config.pages,
    };
    let report = publish(renderer, &site, &manifest)
        .with_context(|| format!("failed to publish to {}", publish_dir.display()))?;

    tracing::info!(
        components = report.components,
        pages = report.pages,
        files = report.files.len(),
        "build complete"
    );

    Ok(BuildSummary {
        publish_dir,
        files_scanned: extraction.files_scanned,
        files_skipped: extraction.files_skipped,
        components: report.components,
        groups: manifest.groups.len(),
        pages: report.pages,
        files_written: report.files.len(),
    })
}
