//! `berth list` command

use anyhow::Result;

use crate::cli::ListArgs;
use berth::core::ComponentDescriptor;
use berth::ops::build::load_catalog;
use berth::resolver::Classifier;
use berth::util::diagnostic::{emit, Diagnostic};
use berth::util::GlobalContext;

pub fn execute(ctx: &GlobalContext, args: ListArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let classifier = Classifier::new(&config)?;
    let catalog = load_catalog(&config, &classifier)?;

    let components: Vec<&ComponentDescriptor> = catalog
        .iter()
        .filter(|desc| args.kind.map_or(true, |kind| desc.kind == kind))
        .collect();

    if components.is_empty() {
        let warning = Diagnostic::warning("no components found")
            .with_location(config.source_dir())
            .with_suggestion("Add `.tsx` or `.ts` files to a configured `[[directories]]` entry");
        emit(&warning, ctx.color());
        return Ok(());
    }

    for desc in components {
        println!("{}", describe(desc));
    }

    Ok(())
}

fn describe(desc: &ComponentDescriptor) -> String {
    let mut line = format!("{} ({})", desc.name, desc.kind);

    if !desc.exports.named.is_empty() {
        line.push_str(&format!("  exports: {}", desc.exports.named.join(", ")));
    }

    let refs: Vec<String> = desc
        .dependencies
        .iter()
        .filter(|dep| !dep.is_package())
        .map(|dep| dep.to_string())
        .collect();
    if !refs.is_empty() {
        line.push_str(&format!("  references: {}", refs.join(", ")));
    }

    if !desc.examples.is_empty() {
        line.push_str(&format!("  examples: {}", desc.examples.len()));
    }

    line
}
