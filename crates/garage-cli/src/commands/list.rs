//! Preset listing command.

use crate::commands::common::open_registry;
use clap::Args;

#[derive(Args)]
pub struct ListArgs {
    /// Print the presets as a JSON array
    #[arg(long)]
    json: bool,
}

pub fn run(args: ListArgs) -> anyhow::Result<()> {
    let registry = open_registry();

    if args.json {
        println!("{}", serde_json::to_string_pretty(registry.presets())?);
        return Ok(());
    }

    if registry.is_empty() {
        println!("No presets stored.");
        println!();
        println!("Import the game's presets with: garage import");
        return Ok(());
    }

    println!("Presets ({}):", registry.len());
    println!("================");
    for preset in registry.presets() {
        println!(
            "  {:20} - {:12} {}",
            preset.name, preset.customization.car, preset.loadout_code
        );
    }

    Ok(())
}
