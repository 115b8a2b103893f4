//! berth - a component registry generator
//!
//! This crate scans UI component sources and their documentation and
//! generates the JSON manifests an installer uses to add components,
//! with their internal dependencies bundled, to a consuming project.

pub mod core;
pub mod ops;
pub mod resolver;
pub mod sources;
pub mod util;

/// Project fixtures for berth unit tests.
///
/// This module is only available when compiling tests. It writes complete
/// registry projects into temporary directories.
#[cfg(test)]
pub mod test_support;

pub use core::{Catalog, ComponentDescriptor, ComponentKind, DependencyReference, RegistryItem};
pub use resolver::{closure_of, BundleClosure, Classifier};
pub use util::config::Config;
pub use util::context::GlobalContext;
