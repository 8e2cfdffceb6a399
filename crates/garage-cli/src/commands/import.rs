//! Vanilla preset import command.

use crate::commands::common::save_registry;
use clap::Args;
use garage_presets::{PresetRegistry, paths};
use std::path::PathBuf;

#[derive(Args)]
pub struct ImportArgs {
    /// Directory holding the game's native preset file
    #[arg(long)]
    game_data: Option<PathBuf>,
}

pub fn run(args: ImportArgs) -> anyhow::Result<()> {
    let vanilla = match args.game_data {
        Some(dir) => dir.join(paths::VANILLA_FILE_NAME),
        None => paths::vanilla_presets_file(),
    };

    if !vanilla.is_file() {
        anyhow::bail!(
            "No presets file at {}. Pass --game-data or set GARAGE_GAME_DATA.",
            vanilla.display()
        );
    }

    // Import replaces the stored set wholesale, same as the overlay's
    // "Import vanilla" button.
    let mut registry = PresetRegistry::new(paths::storage_file(), vanilla);
    let count = registry.import_from_vanilla();
    save_registry(&registry)?;

    println!(
        "Imported {count} presets from {}",
        registry.vanilla_path().display()
    );
    Ok(())
}
