//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use berth::ComponentKind;

/// berth - build installable component registry manifests
#[derive(Parser)]
#[command(name = "berth")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to berth.toml (searched upward from the current directory by default)
    #[arg(long, global = true, env = "BERTH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate every registry manifest
    Build(BuildArgs),

    /// Create a berth.toml in an existing directory
    Init(InitArgs),

    /// List the components of the registry
    List(ListArgs),

    /// Display the reference tree of a component
    Tree(TreeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct BuildArgs {
    /// Output directory (overrides `output` in berth.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verify the output is up to date instead of writing it
    #[arg(long, conflicts_with = "clean")]
    pub check: bool,

    /// Remove the output directory before writing
    #[arg(long)]
    pub clean: bool,
}

#[derive(Args)]
pub struct InitArgs {
    /// Directory to initialize (defaults to current directory)
    pub path: Option<PathBuf>,

    /// Base URL the manifests will be published under
    #[arg(long, default_value = "http://localhost:3000/r")]
    pub base_url: String,

    /// Registry name (defaults to directory name)
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Only list components of this kind (`ui` or `lib`)
    #[arg(long)]
    pub kind: Option<ComponentKind>,
}

#[derive(Args)]
pub struct TreeArgs {
    /// Component to show the tree for
    pub component: String,

    /// Maximum depth to display
    #[arg(short, long)]
    pub depth: Option<usize>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
