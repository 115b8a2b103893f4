//! berth CLI - a component registry generator

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use berth::util::config::ConfigError;
use berth::util::diagnostic::emit;
use berth::GlobalContext;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.no_color);

    let mut ctx = match GlobalContext::new() {
        Ok(ctx) => ctx.with_config_path(cli.config),
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(1);
        }
    };
    ctx.set_verbose(cli.verbose);
    ctx.set_color(!cli.no_color);

    if let Err(e) = run(&ctx, cli.command) {
        match e.downcast_ref::<ConfigError>() {
            Some(config_err) => emit(&config_err.to_diagnostic(), ctx.color()),
            None => eprintln!("error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("berth=debug")
    } else {
        EnvFilter::new("berth=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!no_color)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn run(ctx: &GlobalContext, command: Commands) -> Result<()> {
    match command {
        Commands::Build(args) => commands::build::execute(ctx, args),
        Commands::Init(args) => commands::init::execute(ctx, args),
        Commands::List(args) => commands::list::execute(ctx, args),
        Commands::Tree(args) => commands::tree::execute(ctx, args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
