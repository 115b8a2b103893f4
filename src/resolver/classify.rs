//! Import classification.
//!
//! Decides, for one import specifier, whether it names an npm package, a
//! component of the external catalog, a component of this registry, or
//! something the installer does not need to know about.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::core::DependencyReference;
use crate::resolver::defaults::{ALLOWED_PACKAGE_PATTERNS, CATALOG_TAGS, RUNTIME_PACKAGES};
use crate::sources::imports::scan_imports;
use crate::util::config::{AliasSettings, Config, ConfigError};
use crate::util::fs::{is_inside, normalize_lexically};
use crate::util::naming::kebab_case;

const SOURCE_EXTENSIONS: &[&str] = &["tsx", "ts", "jsx", "js"];

/// `<Card`, `<CardHeader>`, `<InputOTP/>`: a shortlist tag plus an optional
/// PascalCase suffix. Longer tags come first so `AlertDialog` wins over `Alert`.
static CATALOG_TAG: LazyLock<Regex> = LazyLock::new(|| {
    let mut tags: Vec<&str> = CATALOG_TAGS.iter().map(|(tag, _)| *tag).collect();
    tags.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    Regex::new(&format!(
        r"<(({})(?:[A-Z][A-Za-z0-9]*)?)[\s/>]",
        tags.join("|")
    ))
    .expect("catalog tag regex is valid")
});

/// A JSX tag from the catalog shortlist found in example code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagUse {
    /// The full tag, e.g. `CardHeader`
    pub tag: String,
    /// Catalog component providing it, e.g. `card`
    pub catalog: String,
}

/// Find shortlist catalog tags used in `source`, deduplicated in text order.
///
/// Purely textual: it does not know whether a tag is imported or defined
/// locally. Callers filter out local symbols.
pub fn scan_catalog_tags(source: &str) -> Vec<TagUse> {
    let mut found: Vec<TagUse> = Vec::new();
    for caps in CATALOG_TAG.captures_iter(source) {
        let base = &caps[2];
        let Some((_, catalog)) = CATALOG_TAGS.iter().find(|(tag, _)| *tag == base) else {
            continue;
        };
        if found.iter().any(|t| t.tag == caps[1]) {
            continue;
        }
        found.push(TagUse {
            tag: caps[1].to_string(),
            catalog: catalog.to_string(),
        });
    }
    found
}

/// Classifies import specifiers against the registry configuration.
#[derive(Debug, Clone)]
pub struct Classifier {
    aliases: AliasSettings,
    source_dir: PathBuf,
    overrides: BTreeMap<String, String>,
    allow: Vec<Regex>,
    exclude: Vec<String>,
}

impl Classifier {
    /// Build a classifier from the defaults merged with `config`.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let mut allow = Vec::new();
        let patterns = ALLOWED_PACKAGE_PATTERNS
            .iter()
            .copied()
            .chain(config.packages.allow.iter().map(String::as_str));

        for pattern in patterns {
            let re = Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;
            allow.push(re);
        }

        let exclude = RUNTIME_PACKAGES
            .iter()
            .map(|s| s.to_string())
            .chain(config.packages.exclude.iter().cloned())
            .collect();

        Ok(Classifier {
            aliases: config.aliases.clone(),
            source_dir: normalize_lexically(&config.source_dir()),
            overrides: config.catalog.overrides.clone(),
            allow,
            exclude,
        })
    }

    /// Classify one import specifier found in `importer`.
    ///
    /// Returns `None` for imports that are ignored.
    pub fn classify(&self, specifier: &str, importer: &Path) -> Option<DependencyReference> {
        let specifier = specifier.trim();
        if specifier.is_empty() {
            return None;
        }

        if let Some(rest) = strip_alias(specifier, &self.aliases.ui) {
            let name = base_name(rest)?;
            let name = self.overrides.get(&name).cloned().unwrap_or(name);
            return Some(DependencyReference::Catalog(name));
        }

        for alias in [&self.aliases.registry, &self.aliases.lib] {
            if let Some(rest) = strip_alias(specifier, alias) {
                return base_name(rest).map(DependencyReference::Internal);
            }
        }

        if specifier.starts_with("./") || specifier.starts_with("../") {
            let dir = importer.parent().unwrap_or(Path::new(""));
            let resolved = normalize_lexically(&dir.join(specifier));
            if is_inside(&resolved, &self.source_dir) {
                return base_name(specifier).map(DependencyReference::Internal);
            }
            tracing::debug!(
                "`{}` in {} points outside the registry, ignoring",
                specifier,
                importer.display()
            );
            return None;
        }

        let root = package_root(specifier)?;
        if self.exclude.iter().any(|p| *p == root) {
            return None;
        }
        if self.allow.iter().any(|re| re.is_match(&root)) {
            return Some(DependencyReference::Package(root));
        }

        tracing::debug!("`{}` is not in the package allow-list, ignoring", root);
        None
    }

    /// Scan `source` and classify every import, deduplicated in import order.
    pub fn classify_source(&self, source: &str, importer: &Path) -> Vec<DependencyReference> {
        let mut deps: Vec<DependencyReference> = Vec::new();
        for specifier in scan_imports(source) {
            if let Some(dep) = self.classify(&specifier, importer) {
                if !deps.contains(&dep) {
                    deps.push(dep);
                }
            }
        }
        deps
    }

    /// Import path under which the external catalog publishes `name`.
    pub fn catalog_import_path(&self, name: &str) -> String {
        format!("{}/{}", self.aliases.ui.trim_end_matches('/'), name)
    }
}

/// `@/lib/utils` with alias `@/lib` -> `utils`.
fn strip_alias<'a>(specifier: &'a str, alias: &str) -> Option<&'a str> {
    let alias = alias.trim_end_matches('/');
    if alias.is_empty() {
        return None;
    }
    specifier
        .strip_prefix(alias)?
        .strip_prefix('/')
        .filter(|rest| !rest.is_empty())
}

/// Registry name of an import path: the last segment without extension,
/// using the directory name for `index` files.
fn base_name(path: &str) -> Option<String> {
    let segments: Vec<&str> = path
        .split('/')
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
        .collect();
    let last = *segments.last()?;

    let stem = match last.rsplit_once('.') {
        Some((stem, ext)) if SOURCE_EXTENSIONS.contains(&ext) => stem,
        _ => last,
    };

    let stem = if stem == "index" {
        *segments.iter().rev().nth(1)?
    } else {
        stem
    };

    let name = kebab_case(stem);
    (!name.is_empty()).then_some(name)
}

/// `@scope/pkg/sub` -> `@scope/pkg`, `pkg/sub` -> `pkg`.
///
/// Returns `None` for specifiers that cannot be packages (unknown aliases,
/// absolute paths, `node:` builtins).
fn package_root(specifier: &str) -> Option<String> {
    if specifier.starts_with('/')
        || specifier.starts_with('#')
        || specifier.starts_with("~/")
        || specifier.starts_with("@/")
        || specifier.contains(':')
    {
        return None;
    }

    let mut parts = specifier.split('/');
    let first = parts.next()?;
    if first.starts_with('@') {
        let pkg = parts.next().filter(|p| !p.is_empty())?;
        Some(format!("{}/{}", first, pkg))
    } else {
        Some(first.to_string())
    }
}
