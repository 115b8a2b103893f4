//! Component descriptors.
//!
//! A descriptor records everything the registry needs to know about one
//! source file: its identity, where it installs, what it exports and what it
//! depends on.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::dependency::DependencyReference;
use crate::core::manifest::{FileType, ItemType, ManifestFile};
use crate::core::preview::PreviewExample;
use crate::util::naming::{pascal_case, title_case};

/// What a component is, which decides where it installs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// A UI component (`components/ui/<name>.tsx`)
    Ui,
    /// A library helper (`lib/<name>.ts`)
    Lib,
}

impl ComponentKind {
    /// Install target inside a consuming project.
    pub fn target_for(&self, name: &str) -> String {
        match self {
            ComponentKind::Ui => format!("components/ui/{}.tsx", name),
            ComponentKind::Lib => format!("lib/{}.ts", name),
        }
    }

    pub fn item_type(&self) -> ItemType {
        match self {
            ComponentKind::Ui => ItemType::Ui,
            ComponentKind::Lib => ItemType::Lib,
        }
    }

    pub fn file_type(&self) -> FileType {
        match self {
            ComponentKind::Ui => FileType::Ui,
            ComponentKind::Lib => FileType::Lib,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Ui => "ui",
            ComponentKind::Lib => "lib",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ui" => Ok(ComponentKind::Ui),
            "lib" => Ok(ComponentKind::Lib),
            other => Err(format!("unknown component kind `{}` (expected `ui` or `lib`)", other)),
        }
    }
}

/// Symbols exported by a source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSet {
    /// Named exports, distinct, in first-seen order
    pub named: Vec<String>,

    /// Identifier behind `export default`, if any
    pub default: Option<String>,

    /// `X.displayName = "N"` bindings as (local identifier, display name)
    pub display_names: Vec<(String, String)>,
}

impl ExportSet {
    pub fn is_empty(&self) -> bool {
        self.named.is_empty() && self.default.is_none()
    }

    /// Local identifier that backs an exported name, when a display-name
    /// assignment reveals one.
    pub fn backing_local(&self, exported: &str) -> Option<&str> {
        self.display_names
            .iter()
            .find(|(local, display)| display == exported && local != exported)
            .map(|(local, _)| local.as_str())
    }

    /// Identifier to use for a default import of this file.
    ///
    /// Falls back to the first display name and then to the PascalCase
    /// component name.
    pub fn default_import_name(&self, component: &str) -> String {
        if let Some(ref name) = self.default {
            return name.clone();
        }
        if let Some((_, display)) = self.display_names.first() {
            if display.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
                && display.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
            {
                return display.clone();
            }
        }
        pascal_case(component)
    }
}

/// Structured record describing one registry source file.
#[derive(Debug, Clone)]
pub struct ComponentDescriptor {
    /// Kebab-case name, unique within a catalog
    pub name: String,

    /// Human title
    pub title: String,

    /// Free-text description
    pub description: String,

    /// Component kind
    pub kind: ComponentKind,

    /// Absolute source location
    pub source_path: PathBuf,

    /// Source location relative to the project root, `/`-separated
    pub logical_path: String,

    /// Subdirectory the file was found in
    pub folder: String,

    /// Exported symbols
    pub exports: ExportSet,

    /// Classified dependencies, deduplicated, in import order
    pub dependencies: Vec<DependencyReference>,

    /// Source text
    pub content: String,

    /// Documented preview examples
    pub examples: Vec<PreviewExample>,
}

impl ComponentDescriptor {
    /// Create a descriptor with a derived title and no dependencies.
    pub fn new(
        name: impl Into<String>,
        kind: ComponentKind,
        source_path: impl Into<PathBuf>,
        logical_path: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let name = name.into();
        ComponentDescriptor {
            title: title_case(&name),
            name,
            description: String::new(),
            kind,
            source_path: source_path.into(),
            logical_path: logical_path.into(),
            folder: kind.as_str().to_string(),
            exports: ExportSet::default(),
            dependencies: Vec::new(),
            content: content.into(),
            examples: Vec::new(),
        }
    }

    /// Install target inside a consuming project.
    pub fn target(&self) -> String {
        self.kind.target_for(&self.name)
    }

    /// Add a dependency unless it is already present.
    pub fn add_dependency(&mut self, dep: DependencyReference) {
        if !self.dependencies.contains(&dep) {
            self.dependencies.push(dep);
        }
    }

    /// External packages, in import order.
    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.dependencies
            .iter()
            .filter(|d| d.is_package())
            .map(DependencyReference::name)
    }

    /// External catalog references, in import order.
    pub fn catalog_refs(&self) -> impl Iterator<Item = &str> {
        self.dependencies
            .iter()
            .filter(|d| d.is_catalog())
            .map(DependencyReference::name)
    }

    /// Internal references, in import order.
    pub fn internal_refs(&self) -> impl Iterator<Item = &str> {
        self.dependencies
            .iter()
            .filter(|d| d.is_internal())
            .map(DependencyReference::name)
    }

    /// This descriptor's own file, installed at its regular target.
    pub fn manifest_file(&self) -> ManifestFile {
        ManifestFile {
            path: self.logical_path.clone(),
            content: self.content.clone(),
            file_type: self.kind.file_type(),
            target: self.target(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_targets() {
        assert_eq!(ComponentKind::Ui.target_for("button"), "components/ui/button.tsx");
        assert_eq!(ComponentKind::Lib.target_for("utils"), "lib/utils.ts");
        assert_eq!("lib".parse::<ComponentKind>().unwrap(), ComponentKind::Lib);
        assert!("block".parse::<ComponentKind>().is_err());
    }

    #[test]
    fn test_dependencies_are_deduplicated() {
        let mut desc = ComponentDescriptor::new(
            "card-input",
            ComponentKind::Ui,
            "/p/registry/ui/card-input.tsx",
            "registry/ui/card-input.tsx",
            "",
        );
        desc.add_dependency(DependencyReference::Internal("utils".to_string()));
        desc.add_dependency(DependencyReference::Package("clsx".to_string()));
        desc.add_dependency(DependencyReference::Internal("utils".to_string()));

        assert_eq!(desc.dependencies.len(), 2);
        assert_eq!(desc.internal_refs().collect::<Vec<_>>(), vec!["utils"]);
        assert_eq!(desc.packages().collect::<Vec<_>>(), vec!["clsx"]);
        assert_eq!(desc.title, "Card Input");
    }

    #[test]
    fn test_default_import_name_fallbacks() {
        let mut exports = ExportSet::default();
        assert_eq!(exports.default_import_name("card-input"), "CardInput");

        exports
            .display_names
            .push(("CardInputRoot".to_string(), "CardInput".to_string()));
        assert_eq!(exports.default_import_name("card-input"), "CardInput");

        exports.default = Some("Fancy".to_string());
        assert_eq!(exports.default_import_name("card-input"), "Fancy");
    }
}
