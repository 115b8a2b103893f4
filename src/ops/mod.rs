//! High-level operations.
//!
//! This module contains the implementation of berth commands.

pub mod build;
pub mod demo;
pub mod init;
pub mod manifests;

pub use build::{build, generate, load_catalog, render, BuildOptions, BuildReport, OutputFile};
pub use demo::{demo_manifest, demo_manifests};
pub use init::{init_config, InitOptions};
pub use manifests::{aggregate_manifest, aggregate_name, component_manifest, registry_index};
