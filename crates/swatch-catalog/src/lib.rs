//! # swatch-catalog
//!
//! Turns the flat list of scanned component records into the structures a
//! rendering stage consumes:
//!
//! - [`dedup::dedupe`] merges records sharing `(group, title)`
//! - [`nav::build_nav`] orders a category's groups by size
//! - [`groups::build_groups`] buckets records into per-group pages
//! - [`template_data::build_template_data`] assembles navigation, page links
//!   and the build date
//! - [`render::publish`] writes pages through a [`Renderer`]

pub mod dedup;
mod error;
pub mod groups;
pub mod nav;
pub mod render;
pub mod template_data;

pub use dedup::dedupe;
pub use error::RenderError;
pub use groups::{GroupPage, build_groups};
pub use nav::{NavEntry, build_nav};
pub use render::{BareRenderer, MANIFEST_FILE, Manifest, PublishReport, Renderer, Site, publish};
pub use template_data::{CategoryNav, GlobalData, PageLink, TemplateData, build_template_data};
