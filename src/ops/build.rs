//! Implementation of `berth build`.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::core::manifest::to_json;
use crate::core::{Catalog, RegistryItem, RegistryManifest};
use crate::ops::demo::demo_manifests;
use crate::ops::manifests::{aggregate_manifest, component_manifest, registry_index};
use crate::resolver::Classifier;
use crate::sources::{apply_docs, build_catalog, load_docs};
use crate::util::config::Config;
use crate::util::diagnostic::suggestions;
use crate::util::fs;
use crate::util::hash::{sha256_file, sha256_str, Fingerprint};

/// File name of the registry index.
pub const INDEX_FILE_NAME: &str = "registry.json";

/// Options for the build command.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Output directory override (defaults to the configured `output`)
    pub output_dir: Option<PathBuf>,

    /// Compare against the files on disk instead of writing
    pub check: bool,

    /// Remove the output directory before writing
    pub clean: bool,
}

/// Everything one run generates, before rendering.
#[derive(Debug, Clone)]
pub struct Generated {
    pub index: RegistryManifest,
    pub components: Vec<RegistryItem>,
    pub aggregate: RegistryItem,
    pub demos: Vec<RegistryItem>,
}

/// A rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    /// File name inside the output directory
    pub name: String,
    pub contents: String,
}

/// Result of a build.
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Directory the manifests were written to (or checked against)
    pub output_dir: PathBuf,

    /// Number of component manifests
    pub components: usize,

    /// Number of demo manifests
    pub demos: usize,

    /// Names of every output file, index first
    pub files: Vec<String>,

    /// Fingerprint of the whole output set
    pub fingerprint: String,
}

/// Scan the project into a catalog with documentation attached.
pub fn load_catalog(config: &Config, classifier: &Classifier) -> Result<Catalog> {
    let mut catalog = build_catalog(config, classifier)?;
    let pages = load_docs(&config.doc_dirs());
    let attached = apply_docs(&mut catalog, pages);

    tracing::info!(
        "scanned {} components, {} preview examples",
        catalog.len(),
        attached
    );
    Ok(catalog)
}

/// Run the whole pipeline: scan, resolve and generate every manifest.
pub fn generate(config: &Config) -> Result<Generated> {
    let classifier = Classifier::new(config)?;
    let catalog = load_catalog(config, &classifier)?;

    let index = registry_index(&catalog, config);
    let components = catalog
        .iter()
        .map(|desc| component_manifest(desc, &catalog))
        .collect();
    let aggregate = aggregate_manifest(&catalog, config);
    let demos = demo_manifests(&catalog, &classifier, config);

    Ok(Generated {
        index,
        components,
        aggregate,
        demos,
    })
}

/// Render generated manifests to their output files.
pub fn render(generated: &Generated) -> Result<Vec<OutputFile>> {
    let mut files = vec![OutputFile {
        name: INDEX_FILE_NAME.to_string(),
        contents: to_json(&generated.index)?,
    }];

    let items = generated
        .components
        .iter()
        .chain(std::iter::once(&generated.aggregate))
        .chain(generated.demos.iter());

    for item in items {
        let name = format!("{}.json", item.name);
        if files.iter().any(|f| f.name == name) {
            tracing::warn!("`{}` is generated twice, keeping the first", name);
            continue;
        }
        files.push(OutputFile {
            name,
            contents: to_json(item)?,
        });
    }

    Ok(files)
}

/// Build the registry: write every manifest, or verify them with `check`.
pub fn build(config: &Config, opts: &BuildOptions) -> Result<BuildReport> {
    let output_dir = opts
        .output_dir
        .clone()
        .unwrap_or_else(|| config.output_dir());

    let generated = generate(config)?;
    let files = render(&generated)?;

    let mut fingerprint = Fingerprint::new();
    for file in &files {
        fingerprint.update_str(&file.name).update_str(&file.contents);
    }

    if opts.check {
        check_output(&output_dir, &files)?;
    } else {
        if opts.clean {
            tracing::debug!("removing {}", output_dir.display());
            fs::remove_dir_all_if_exists(&output_dir)?;
        }
        fs::ensure_dir(&output_dir)?;
        for file in &files {
            fs::write_string(&output_dir.join(&file.name), &file.contents)?;
        }
        tracing::debug!("wrote {} files to {}", files.len(), output_dir.display());
    }

    Ok(BuildReport {
        output_dir,
        components: generated.components.len(),
        demos: generated.demos.len(),
        files: files.into_iter().map(|f| f.name).collect(),
        fingerprint: fingerprint.finish_short(),
    })
}

/// Compare rendered files against what is on disk.
fn check_output(output_dir: &Path, files: &[OutputFile]) -> Result<()> {
    let mut missing = Vec::new();
    let mut stale = Vec::new();

    for file in files {
        let path = output_dir.join(&file.name);
        if !path.is_file() {
            missing.push(file.name.as_str());
            continue;
        }
        if sha256_file(&path)? != sha256_str(&file.contents) {
            stale.push(file.name.as_str());
        }
    }

    if missing.is_empty() && stale.is_empty() {
        return Ok(());
    }

    let mut message = format!("registry output in `{}` is out of date", output_dir.display());
    for name in &missing {
        message.push_str(&format!("\n  missing: {}", name));
    }
    for name in &stale {
        message.push_str(&format!("\n  changed: {}", name));
    }
    bail!("{}\nhelp: {}", message, suggestions::STALE_OUTPUT)
}
