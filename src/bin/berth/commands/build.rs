//! `berth build` command

use anyhow::Result;

use crate::cli::BuildArgs;
use berth::ops::build::{build, BuildOptions};
use berth::util::GlobalContext;

pub fn execute(ctx: &GlobalContext, args: BuildArgs) -> Result<()> {
    let config = ctx.load_config()?;

    let opts = BuildOptions {
        output_dir: args.output.map(|dir| ctx.cwd().join(dir)),
        check: args.check,
        clean: args.clean,
    };

    let report = build(&config, &opts)?;

    if ctx.is_verbose() {
        for name in &report.files {
            eprintln!("   Generated {}", name);
        }
    }

    let verb = if args.check { "Checked" } else { "Finished" };
    eprintln!(
        "    {} {} components, {} demos -> {} ({} files, fingerprint {})",
        verb,
        report.components,
        report.demos,
        report.output_dir.display(),
        report.files.len(),
        report.fingerprint
    );

    Ok(())
}
