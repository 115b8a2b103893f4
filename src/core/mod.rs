//! Core data structures for berth.
//!
//! This module contains the foundational types used throughout berth:
//! - Component descriptors and their exports
//! - Classified dependency references
//! - The catalog of all descriptors in a run
//! - The manifest schema written for the installer

pub mod catalog;
pub mod component;
pub mod dependency;
pub mod manifest;
pub mod preview;

pub use catalog::Catalog;
pub use component::{ComponentDescriptor, ComponentKind, ExportSet};
pub use dependency::DependencyReference;
pub use manifest::{
    FileType, ItemMeta, ItemType, ManifestFile, RegistryItem, RegistryManifest,
};
pub use preview::PreviewExample;
