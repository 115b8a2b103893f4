//! Implementation of `berth init`.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use toml_edit::{value, Array, ArrayOfTables, DocumentMut, Item, Table};
use url::Url;

use crate::core::ComponentKind;
use crate::util::config::{Config, CONFIG_FILE_NAME};
use crate::util::fs;

/// Options for creating a registry configuration.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Registry name
    pub name: String,

    /// Base URL manifests are published under
    pub base_url: String,
}

/// Write a `berth.toml` in `path` and create the default directory layout.
///
/// Returns the path of the written configuration.
pub fn init_config(path: &Path, opts: &InitOptions) -> Result<PathBuf> {
    let config_path = path.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("`{}` already exists in `{}`", CONFIG_FILE_NAME, path.display());
    }

    let url = Url::parse(&opts.base_url)
        .with_context(|| format!("invalid base URL `{}`", opts.base_url))?;
    if url.cannot_be_a_base() {
        bail!("invalid base URL `{}`: URL cannot be used as a base", opts.base_url);
    }

    let defaults = Config::default();
    let doc = render_config(&defaults, opts);
    fs::write_string(&config_path, &doc.to_string())?;

    let source_dir = path.join(&defaults.source_root);
    for entry in &defaults.directories {
        fs::ensure_dir(&source_dir.join(&entry.name))?;
    }
    for docs in &defaults.docs {
        fs::ensure_dir(&path.join(docs))?;
    }

    tracing::debug!("wrote {}", config_path.display());
    Ok(config_path)
}

fn render_config(defaults: &Config, opts: &InitOptions) -> DocumentMut {
    let mut doc = DocumentMut::new();

    doc["source_root"] = value(defaults.source_root.to_string_lossy().into_owned());
    doc["output"] = value(defaults.output.to_string_lossy().into_owned());
    let mut docs = Array::new();
    for dir in &defaults.docs {
        docs.push(dir.to_string_lossy().into_owned());
    }
    doc["docs"] = value(docs);

    let mut registry = Table::new();
    registry["name"] = value(opts.name.as_str());
    registry["homepage"] = value("");
    registry["base_url"] = value(opts.base_url.trim_end_matches('/'));
    doc["registry"] = Item::Table(registry);

    let mut directories = ArrayOfTables::new();
    for entry in &defaults.directories {
        let mut table = Table::new();
        table["name"] = value(entry.name.as_str());
        table["kind"] = value(entry.kind.as_str());
        directories.push(table);
    }
    doc["directories"] = Item::ArrayOfTables(directories);

    let mut demo = Table::new();
    demo["iframe_height"] = value(defaults.demo.iframe_height.as_str());
    doc["demo"] = Item::Table(demo);

    doc
}

/// Default kinds created by `init`, for display.
pub fn default_layout() -> Vec<(String, ComponentKind)> {
    Config::default()
        .directories
        .into_iter()
        .map(|entry| (entry.name, entry.kind))
        .collect()
}
