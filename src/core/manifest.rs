//! Registry manifest schema.
//!
//! These are the JSON documents consumed by the installer: the registry
//! index (`registry.json`) and one item document per component, aggregate
//! and demo block.

use serde::{Deserialize, Serialize};

/// Type of a registry item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemType {
    #[serde(rename = "registry:ui")]
    Ui,
    #[serde(rename = "registry:lib")]
    Lib,
    #[serde(rename = "registry:block")]
    Block,
}

/// Type of a file inside a registry item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileType {
    #[serde(rename = "registry:ui")]
    Ui,
    #[serde(rename = "registry:lib")]
    Lib,
    #[serde(rename = "registry:component")]
    Component,
    #[serde(rename = "registry:page")]
    Page,
}

/// One file embedded in a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestFile {
    /// Logical source path inside the registry project
    pub path: String,

    /// File content
    pub content: String,

    /// File type
    #[serde(rename = "type")]
    pub file_type: FileType,

    /// Install target inside the consuming project
    pub target: String,
}

/// Presentation hints for demo blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemMeta {
    /// Suggested preview height
    pub iframe_height: String,
}

/// A registry item: a component, the aggregate block or a demo block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryItem {
    pub name: String,

    #[serde(rename = "type")]
    pub item_type: ItemType,

    pub title: String,

    pub description: String,

    /// npm packages to install
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,

    /// Catalog names and registry pointers to install
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub registry_dependencies: Vec<String>,

    pub files: Vec<ManifestFile>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ItemMeta>,
}

impl RegistryItem {
    /// Names of the embedded files' targets, for display.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.target.as_str())
    }
}

/// The registry index (`registry.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryManifest {
    pub name: String,
    pub homepage: String,
    pub items: Vec<RegistryItem>,
}

/// Render a manifest as pretty JSON with a trailing newline.
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}
