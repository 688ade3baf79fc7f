//! # swatch-core
//!
//! Core types and error types for swatch.
//!
//! This crate provides the foundational types shared across all swatch crates:
//! - [`ComponentRecord`], the validated unit produced per discovered marker
//! - [`Metadata`], the normalized key/value block parsed from a marker
//! - [`GroupDescriptor`] and [`GroupConfig`] for group labelling
//! - Slug and humanize helpers that feed generated filenames
//! - The per-component error taxonomy ([`ComponentError`])

pub mod component;
pub mod errors;
pub mod group;
pub mod metadata;
pub mod slug;

pub use component::{ComponentKind, ComponentRecord};
pub use errors::ComponentError;
pub use group::{GroupConfig, GroupConfigs, GroupDescriptor};
pub use metadata::Metadata;
