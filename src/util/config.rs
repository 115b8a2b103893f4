//! Registry configuration (`berth.toml`).
//!
//! The configuration file names the registry, points at the component
//! sources and documentation, and customizes how imports are classified.
//!
//! ## Example berth.toml
//!
//! ```toml
//! source_root = "registry"
//! output = "public/r"
//! docs = ["docs"]
//!
//! [registry]
//! name = "acme"
//! homepage = "https://acme.dev"
//! base_url = "https://acme.dev/r"
//!
//! [[directories]]
//! name = "ui"
//! kind = "ui"
//!
//! [catalog.overrides]
//! "my-button" = "button"
//! ```
//!
//! Everything except `registry.base_url` has a default. Relative paths are
//! resolved against the directory containing the configuration file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::core::ComponentKind;
use crate::util::diagnostic::{suggestions, Diagnostic};

/// File name of the registry configuration.
pub const CONFIG_FILE_NAME: &str = "berth.toml";

/// Fatal configuration problems. Any of these aborts the run before work starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not find `berth.toml` in `{}` or any parent directory", dir.display())]
    NotFound { dir: PathBuf },

    #[error("failed to read `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse `{}`: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("`registry.base_url` is not set in `{}`", path.display())]
    MissingBaseUrl { path: PathBuf },

    #[error("invalid `registry.base_url` `{url}`: {message}")]
    InvalidBaseUrl { url: String, message: String },

    #[error("invalid package pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl ConfigError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ConfigError::NotFound { dir } => Diagnostic::error(self.to_string())
                .with_context(format!("searched upward from {}", dir.display()))
                .with_suggestion(suggestions::NO_CONFIG),

            ConfigError::Read { path, source } => Diagnostic::error(self.to_string())
                .with_location(path)
                .with_context(source.to_string()),

            ConfigError::Parse { path, message } => {
                Diagnostic::error(format!("failed to parse `{}`", path.display()))
                    .with_location(path)
                    .with_context(message.clone())
            }

            ConfigError::MissingBaseUrl { path } => {
                Diagnostic::error("`registry.base_url` is required")
                    .with_location(path)
                    .with_context("registry references are published as `<base_url>/<name>.json`")
                    .with_suggestion(suggestions::SET_BASE_URL)
            }

            ConfigError::InvalidBaseUrl { url, message } => {
                Diagnostic::error(format!("`{}` is not a valid base URL", url))
                    .with_context(message.clone())
                    .with_suggestion(suggestions::SET_BASE_URL)
            }

            ConfigError::InvalidPattern { pattern, message } => {
                Diagnostic::error(format!("invalid package pattern `{}`", pattern))
                    .with_context(message.clone())
                    .with_suggestion("Package patterns are regular expressions, e.g. `^@tanstack/`")
            }
        }
    }
}

/// Registry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Registry identity
    pub registry: RegistrySettings,

    /// Directory holding the component subdirectories
    pub source_root: PathBuf,

    /// Output directory for generated manifests
    pub output: PathBuf,

    /// Documentation directories scanned for preview examples
    pub docs: Vec<PathBuf>,

    /// Subdirectories of `source_root` to scan, with their kind
    pub directories: Vec<DirectoryEntry>,

    /// Import aliases used to classify references
    pub aliases: AliasSettings,

    /// Package allow-list and runtime excludes
    pub packages: PackageSettings,

    /// External catalog settings
    pub catalog: CatalogSettings,

    /// Demo block settings
    pub demo: DemoSettings,

    /// Directory containing the configuration file
    #[serde(skip)]
    root: PathBuf,

    /// Validated base URL without trailing slash
    #[serde(skip)]
    base_url: String,
}

/// `[registry]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrySettings {
    /// Registry display name, also used for the aggregate manifest name
    pub name: String,

    /// Registry homepage
    pub homepage: String,

    /// Base URL that manifests are published under (mandatory)
    pub base_url: Option<String>,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        RegistrySettings {
            name: "registry".to_string(),
            homepage: String::new(),
            base_url: None,
        }
    }
}

/// A scanned subdirectory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// Subdirectory name under `source_root`
    pub name: String,

    /// Component kind of every file in the directory
    pub kind: ComponentKind,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<String>, kind: ComponentKind) -> Self {
        DirectoryEntry {
            name: name.into(),
            kind,
        }
    }
}

/// `[aliases]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AliasSettings {
    /// Alias under which external catalog components are imported
    pub ui: String,

    /// Alias of this registry's own source tree
    pub registry: String,

    /// Alias of this registry's library helpers
    pub lib: String,
}

impl Default for AliasSettings {
    fn default() -> Self {
        AliasSettings {
            ui: "@/components/ui".to_string(),
            registry: "@/registry".to_string(),
            lib: "@/lib".to_string(),
        }
    }
}

/// `[packages]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageSettings {
    /// Extra allow-list patterns (regular expressions)
    pub allow: Vec<String>,

    /// Extra runtime packages to ignore
    pub exclude: Vec<String>,
}

/// `[catalog]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Local catalog file name -> published catalog name
    pub overrides: BTreeMap<String, String>,
}

/// `[demo]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Suggested preview height for demo blocks
    pub iframe_height: String,
}

impl Default for DemoSettings {
    fn default() -> Self {
        DemoSettings {
            iframe_height: "600px".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            registry: RegistrySettings::default(),
            source_root: PathBuf::from("registry"),
            output: PathBuf::from("public/r"),
            docs: vec![PathBuf::from("docs")],
            directories: vec![
                DirectoryEntry::new("ui", ComponentKind::Ui),
                DirectoryEntry::new("lib", ComponentKind::Lib),
            ],
            aliases: AliasSettings::default(),
            packages: PackageSettings::default(),
            catalog: CatalogSettings::default(),
            demo: DemoSettings::default(),
            root: PathBuf::from("."),
            base_url: String::new(),
        }
    }
}

impl Config {
    /// Load and validate the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Self::parse(&contents, path, root)
    }

    /// Parse and validate configuration text.
    ///
    /// `path` is only used for error messages; relative paths resolve against `root`.
    pub fn parse(contents: &str, path: &Path, root: PathBuf) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let raw = config
            .registry
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ConfigError::MissingBaseUrl {
                path: path.to_path_buf(),
            })?;

        let parsed = Url::parse(raw).map_err(|e| ConfigError::InvalidBaseUrl {
            url: raw.to_string(),
            message: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                url: raw.to_string(),
                message: "URL cannot be used as a base".to_string(),
            });
        }

        config.base_url = raw.trim_end_matches('/').to_string();
        config.root = root;

        tracing::debug!(
            "loaded registry `{}` (base url {})",
            config.registry.name,
            config.base_url
        );

        Ok(config)
    }

    /// The validated base URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Directory containing the configuration file.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute registry source tree.
    pub fn source_dir(&self) -> PathBuf {
        self.root.join(&self.source_root)
    }

    /// Output directory for manifests.
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.output)
    }

    /// Documentation directories to scan.
    pub fn doc_dirs(&self) -> Vec<PathBuf> {
        self.docs.iter().map(|d| self.root.join(d)).collect()
    }

    /// Published pointer for a registry item: `<base_url>/<name>.json`.
    pub fn pointer(&self, name: &str) -> String {
        format!("{}/{}.json", self.base_url, name)
    }

    /// Parse a pointer into this registry back into a bare item name.
    ///
    /// Returns `None` for anything that does not point into this registry.
    pub fn parse_pointer(&self, reference: &str) -> Option<String> {
        let rest = reference.strip_prefix(self.base_url.as_str())?;
        let rest = rest.strip_prefix('/')?;
        let name = rest.strip_suffix(".json")?;
        (!name.is_empty()).then(|| name.to_string())
    }

    /// Check whether a serialized reference points into this registry.
    pub fn is_self_reference(&self, reference: &str) -> bool {
        self.parse_pointer(reference).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(contents: &str) -> Result<Config, ConfigError> {
        Config::parse(contents, Path::new("berth.toml"), PathBuf::from("/project"))
    }

    #[test]
    fn test_defaults_applied() {
        let config = parse(
            r#"
[registry]
base_url = "https://acme.dev/r/"
"#,
        )
        .unwrap();

        assert_eq!(config.registry.name, "registry");
        assert_eq!(config.base_url(), "https://acme.dev/r");
        assert_eq!(config.directories.len(), 2);
        assert_eq!(config.directories[0].kind, ComponentKind::Ui);
        assert_eq!(config.directories[1].kind, ComponentKind::Lib);
        assert_eq!(config.source_dir(), PathBuf::from("/project/registry"));
        assert_eq!(config.output_dir(), PathBuf::from("/project/public/r"));
        assert_eq!(config.demo.iframe_height, "600px");
    }

    #[test]
    fn test_missing_base_url_is_fatal() {
        let err = parse("[registry]\nname = \"acme\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::MissingBaseUrl { .. }));

        let output = err.to_diagnostic().format(false);
        assert!(output.contains("base_url"));
    }

    #[test]
    fn test_invalid_base_url() {
        let err = parse("[registry]\nbase_url = \"not a url\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_custom_directories_and_overrides() {
        let config = parse(
            r#"
[registry]
name = "acme"
base_url = "https://acme.dev/r"

[[directories]]
name = "components"
kind = "ui"

[catalog.overrides]
"my-button" = "button"
"#,
        )
        .unwrap();

        assert_eq!(
            config.directories,
            vec![DirectoryEntry::new("components", ComponentKind::Ui)]
        );
        assert_eq!(config.catalog.overrides.get("my-button").unwrap(), "button");
    }

    #[test]
    fn test_pointer_round_trip() {
        let config = parse("[registry]\nbase_url = \"https://acme.dev/r\"\n").unwrap();

        let pointer = config.pointer("card-input");
        assert_eq!(pointer, "https://acme.dev/r/card-input.json");
        assert_eq!(config.parse_pointer(&pointer).as_deref(), Some("card-input"));
        assert_eq!(config.parse_pointer("button"), None);
        assert_eq!(config.parse_pointer("https://other.dev/r/button.json"), None);
    }

    #[test]
    fn test_pointer_requires_path_boundary() {
        let config = parse("[registry]\nbase_url = \"https://acme.dev/r\"\n").unwrap();

        assert_eq!(config.parse_pointer("https://acme.dev/registry.json"), None);
        assert_eq!(config.parse_pointer("https://acme.dev/r.json"), None);
        assert!(!config.is_self_reference("https://acme.dev/registry.json"));
        assert!(config.is_self_reference("https://acme.dev/r/utils.json"));
    }
}
