//! Dependency resolution.
//!
//! Expands a component's internal references into the closure of files that
//! must ship with it. Resolution is pure: the catalog has already been read
//! and nothing here touches the filesystem.

pub mod classify;
pub mod defaults;
pub mod tree;

pub use classify::Classifier;
pub use tree::{reference_tree, TreeMark, TreeNode};

use std::collections::{BTreeSet, HashSet};

use crate::core::{Catalog, ComponentDescriptor, ManifestFile};

/// A root descriptor plus everything it transitively references internally.
#[derive(Debug, Clone)]
pub struct BundleClosure<'a> {
    /// Reachable descriptors, root first, in depth-first pre-order
    pub members: Vec<&'a ComponentDescriptor>,

    /// External packages needed anywhere in the closure
    pub packages: BTreeSet<String>,

    /// External catalog components needed anywhere in the closure, minus
    /// anything embedded as a member
    pub catalog: BTreeSet<String>,
}

impl<'a> BundleClosure<'a> {
    pub fn root(&self) -> &'a ComponentDescriptor {
        self.members[0]
    }

    /// Whether `name` is embedded in the closure.
    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|m| m.name == name)
    }

    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.name.as_str())
    }

    /// The file of every member, in visitation order.
    pub fn files(&self) -> Vec<ManifestFile> {
        self.members.iter().map(|m| m.manifest_file()).collect()
    }
}

/// Compute the bundle closure of `root`.
///
/// Terminates on cyclic reference graphs: every name is marked visited before
/// it is expanded. Internal references that do not resolve are skipped.
pub fn closure_of<'a>(root: &'a ComponentDescriptor, catalog: &'a Catalog) -> BundleClosure<'a> {
    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(root.name.as_str());

    let mut members = vec![root];
    visit(root, catalog, &mut visited, &mut members);

    let mut packages = BTreeSet::new();
    let mut external = BTreeSet::new();
    for member in &members {
        packages.extend(member.packages().map(str::to_string));
        external.extend(member.catalog_refs().map(str::to_string));
    }
    for member in &members {
        external.remove(&member.name);
    }

    BundleClosure {
        members,
        packages,
        catalog: external,
    }
}

fn visit<'a>(
    desc: &'a ComponentDescriptor,
    catalog: &'a Catalog,
    visited: &mut HashSet<&'a str>,
    members: &mut Vec<&'a ComponentDescriptor>,
) {
    for name in desc.internal_refs() {
        if visited.contains(name) {
            continue;
        }
        let Some(dep) = catalog.get(name) else {
            tracing::debug!("`{}` references unknown `{}`, skipping", desc.name, name);
            continue;
        };

        visited.insert(dep.name.as_str());
        members.push(dep);
        visit(dep, catalog, visited, members);
    }
}
