//! Preset delete command.

use crate::commands::common::{open_registry, save_registry};
use clap::Args;

#[derive(Args)]
pub struct DeleteArgs {
    /// Preset name to delete
    name: String,

    /// Don't ask for confirmation
    #[arg(long)]
    force: bool,
}

pub fn run(args: DeleteArgs) -> anyhow::Result<()> {
    let mut registry = open_registry();

    if registry.find(&args.name).is_none() {
        anyhow::bail!("Preset '{}' not found.", args.name);
    }

    if !args.force {
        anyhow::bail!("Use --force to confirm deletion of preset '{}'.", args.name);
    }

    registry.remove(&args.name);
    save_registry(&registry)?;

    println!("Deleted preset '{}'.", args.name);
    Ok(())
}
