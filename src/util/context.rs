//! Global context for berth operations.
//!
//! Provides centralized access to the working directory, output preferences
//! and the location of the registry configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::util::config::{Config, ConfigError, CONFIG_FILE_NAME};

/// Global context containing paths and output preferences.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory
    cwd: PathBuf,

    /// Explicit configuration path (`--config`)
    config_path: Option<PathBuf>,

    /// Whether to use verbose output
    verbose: bool,

    /// Whether to use colors in output
    color: bool,
}

impl GlobalContext {
    /// Create a new GlobalContext rooted at the process working directory.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Ok(Self::with_cwd(cwd))
    }

    /// Create a GlobalContext with a specific working directory.
    pub fn with_cwd(cwd: PathBuf) -> Self {
        GlobalContext {
            cwd,
            config_path: None,
            verbose: false,
            color: true,
        }
    }

    /// Use an explicit configuration file instead of searching for one.
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path.map(|p| if p.is_absolute() { p } else { self.cwd.join(p) });
        self
    }

    /// Set verbose mode.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Set color output.
    pub fn set_color(&mut self, color: bool) {
        self.color = color;
    }

    /// Get the current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Check if verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if color output is enabled.
    pub fn color(&self) -> bool {
        self.color
    }

    /// Find `berth.toml`, starting from cwd and searching upward.
    ///
    /// An explicit `--config` path is returned as-is when it exists.
    pub fn find_config(&self) -> Result<PathBuf, ConfigError> {
        if let Some(ref path) = self.config_path {
            if path.is_file() {
                return Ok(path.clone());
            }
            return Err(ConfigError::NotFound {
                dir: path.parent().map(Path::to_path_buf).unwrap_or_default(),
            });
        }

        let mut current = self.cwd.clone();
        loop {
            let candidate = current.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                return Ok(candidate);
            }
            if !current.pop() {
                return Err(ConfigError::NotFound {
                    dir: self.cwd.clone(),
                });
            }
        }
    }

    /// Locate and load the registry configuration.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let path = self.find_config()?;
        tracing::debug!("using configuration {}", path.display());
        Config::load(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_searches_upward() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            "[registry]\nbase_url = \"https://acme.dev/r\"\n",
        )
        .unwrap();
        let nested = tmp.path().join("registry").join("ui");
        std::fs::create_dir_all(&nested).unwrap();

        let ctx = GlobalContext::with_cwd(nested);
        assert_eq!(ctx.find_config().unwrap(), tmp.path().join(CONFIG_FILE_NAME));

        let config = ctx.load_config().unwrap();
        assert_eq!(config.root(), tmp.path());
    }

    #[test]
    fn test_missing_config_is_reported() {
        let tmp = TempDir::new().unwrap();
        let ctx = GlobalContext::with_cwd(tmp.path().to_path_buf())
            .with_config_path(Some(PathBuf::from("nope.toml")));

        assert!(matches!(
            ctx.find_config(),
            Err(ConfigError::NotFound { .. })
        ));
    }
}
