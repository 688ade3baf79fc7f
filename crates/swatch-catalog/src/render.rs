//! Rendering seam and page publishing.
//!
//! Output formatting belongs to a [`Renderer`]. [`publish`] walks the group
//! pages and static pages, asks the renderer for each document, and writes
//! the results under the publish directory together with a JSON manifest
//! that external templating can consume.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use swatch_config::PageConfig;
use swatch_core::slug::page_link;
use swatch_core::{ComponentKind, ComponentRecord};

use crate::error::RenderError;
use crate::groups::GroupPage;
use crate::template_data::TemplateData;

/// File name of the manifest written next to the generated pages.
pub const MANIFEST_FILE: &str = "swatch-manifest.json";

/// File name of the static page flagged `index`.
pub const INDEX_FILE: &str = "index.html";

/// Produces page documents. Implementations decide the output format.
pub trait Renderer {
    /// Page for one component.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Render`] if the page cannot be produced.
    fn render_component(
        &self,
        component: &ComponentRecord,
        data: &TemplateData,
    ) -> Result<String, RenderError>;

    /// Bare page for a component flagged `external`, meant to be embedded
    /// elsewhere.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Render`] if the page cannot be produced.
    fn render_external(&self, component: &ComponentRecord) -> Result<String, RenderError>;

    /// Static page from the text of its source file.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Render`] if the page cannot be produced.
    fn render_page(
        &self,
        page: &PageConfig,
        source: &str,
        data: &TemplateData,
    ) -> Result<String, RenderError>;
}

/// Renderer with no templates: a minimal HTML shell around the content.
/// Template components and external pages are written as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct BareRenderer;

impl BareRenderer {
    fn shell(title: &str, body: &str) -> String {
        let title = escape_text(title);
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
             <title>{title}</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
        )
    }
}

impl Renderer for BareRenderer {
    fn render_component(
        &self,
        component: &ComponentRecord,
        _data: &TemplateData,
    ) -> Result<String, RenderError> {
        if component.kind == ComponentKind::Template {
            return Ok(component.content.clone());
        }
        let title = format!("{} - {}", component.group, component.title);
        Ok(Self::shell(&title, &component.content))
    }

    fn render_external(&self, component: &ComponentRecord) -> Result<String, RenderError> {
        Ok(component.content.clone())
    }

    fn render_page(
        &self,
        page: &PageConfig,
        source: &str,
        _data: &TemplateData,
    ) -> Result<String, RenderError> {
        Ok(Self::shell(&page.title, source))
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Everything handed to a rendering stage, serialized as the manifest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Manifest {
    /// Directory an external renderer loads its templates from.
    pub templates: PathBuf,
    pub template_data: TemplateData,
    pub groups: Vec<GroupPage>,
}

/// Where a publish run reads page sources from and writes to.
#[derive(Debug, Clone, Copy)]
pub struct Site<'a> {
    /// Project root; static page `src` paths are relative to it.
    pub root: &'a Path,
    pub publish_dir: &'a Path,
    pub pages: &'a [PageConfig],
}

/// Summary of a publish run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PublishReport {
    pub components: usize,
    pub pages: usize,
    /// Written files relative to the publish directory, in write order.
    pub files: Vec<PathBuf>,
}

/// Render and write every component page, external page, static page and
/// the manifest.
///
/// # Errors
///
/// Returns the first [`RenderError`]; files written before it stay on disk.
pub fn publish(
    renderer: &dyn Renderer,
    site: &Site<'_>,
    manifest: &Manifest,
) -> Result<PublishReport, RenderError> {
    let mut report = PublishReport::default();
    let data = &manifest.template_data;

    for group in &manifest.groups {
        for component in &group.components {
            let html = renderer.render_component(component, data)?;
            write_output(site.publish_dir, &component.filename(), &html, &mut report)?;

            if component.external {
                let bare = renderer.render_external(component)?;
                write_output(
                    site.publish_dir,
                    &component.external_filename(),
                    &bare,
                    &mut report,
                )?;
            }
            report.components += 1;
        }
    }

    for page in site.pages {
        let Some(src) = &page.src else {
            tracing::debug!(title = %page.title, "page has no source, skipping");
            continue;
        };
        let path = site.root.join(src);
        let source = fs::read_to_string(&path).map_err(|source| RenderError::Read {
            path: path.clone(),
            source,
        })?;
        let html = renderer.render_page(page, &source, data)?;
        write_output(site.publish_dir, &page_filename(page), &html, &mut report)?;
        report.pages += 1;
    }

    let json = serde_json::to_string_pretty(manifest)?;
    write_output(site.publish_dir, MANIFEST_FILE, &json, &mut report)?;

    Ok(report)
}

/// Output file name of a static page.
#[must_use]
pub fn page_filename(page: &PageConfig) -> String {
    if page.index {
        INDEX_FILE.to_string()
    } else {
        page_link(&page.title)
    }
}

fn write_output(
    dir: &Path,
    name: &str,
    contents: &str,
    report: &mut PublishReport,
) -> Result<(), RenderError> {
    let path = dir.join(name);
    let write_err = |source| RenderError::Write {
        path: path.clone(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(&path, contents).map_err(write_err)?;

    tracing::info!(file = name, "generated");
    report.files.push(PathBuf::from(name));
    Ok(())
}
