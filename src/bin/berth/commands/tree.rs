//! `berth tree` command

use anyhow::{bail, Result};

use crate::cli::TreeArgs;
use berth::ops::build::load_catalog;
use berth::resolver::{reference_tree, Classifier};
use berth::util::diagnostic::suggestions;
use berth::util::naming::kebab_case;
use berth::util::GlobalContext;

pub fn execute(ctx: &GlobalContext, args: TreeArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let classifier = Classifier::new(&config)?;
    let catalog = load_catalog(&config, &classifier)?;

    let name = kebab_case(&args.component);
    let Some(root) = catalog.get(&name) else {
        bail!(
            "component `{}` not found\nhelp: {}",
            name,
            suggestions::COMPONENT_NOT_FOUND
        );
    };

    for line in reference_tree(root, &catalog, args.depth).render() {
        println!("{}", line);
    }

    Ok(())
}
