//! `berth init` command

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::cli::InitArgs;
use berth::ops::init::{default_layout, init_config, InitOptions};
use berth::util::naming::kebab_case;
use berth::util::GlobalContext;

/// Determines the registry name from the arguments or directory.
pub fn determine_registry_name(name: &Option<String>, path: &Path) -> String {
    name.clone().unwrap_or_else(|| {
        path.file_name()
            .and_then(|n| n.to_str())
            .map(kebab_case)
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "registry".to_string())
    })
}

/// Validates a registry name for common issues.
///
/// Returns Ok(()) if the name is valid, otherwise returns an error message.
pub fn validate_registry_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("registry name cannot be empty");
    }

    if name.starts_with('-') || name.starts_with('.') {
        return Err("registry name cannot start with a hyphen or dot");
    }

    for c in name.chars() {
        if !c.is_ascii_alphanumeric() && c != '-' && c != '_' {
            return Err("registry name contains invalid characters");
        }
    }

    Ok(())
}

pub fn execute(ctx: &GlobalContext, args: InitArgs) -> Result<()> {
    let path = match args.path {
        Some(path) => ctx.cwd().join(path),
        None => ctx.cwd().to_path_buf(),
    };
    let path: PathBuf = path.canonicalize().unwrap_or(path);

    let name = determine_registry_name(&args.name, &path);
    if let Err(msg) = validate_registry_name(&name) {
        bail!("invalid registry name `{}`: {}", name, msg);
    }

    let opts = InitOptions {
        name: name.clone(),
        base_url: args.base_url,
    };
    init_config(&path, &opts)?;

    eprintln!("     Created registry `{}` in {}", name, path.display());
    for (dir, kind) in default_layout() {
        eprintln!("             registry/{} ({} components)", dir, kind);
    }

    Ok(())
}
