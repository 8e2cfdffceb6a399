//! Storage location command.

use clap::Args;
use garage_presets::paths;

#[derive(Args)]
pub struct PathsArgs {}

pub fn run(_args: PathsArgs) -> anyhow::Result<()> {
    println!("Preset Locations:");
    println!("=================");
    println!();
    println!("Data dir:     {}", paths::data_dir().display());
    println!("Storage file: {}", paths::storage_file().display());
    println!("Catalog file: {}", paths::catalog_file().display());
    println!("Vanilla file: {}", paths::vanilla_presets_file().display());
    Ok(())
}
