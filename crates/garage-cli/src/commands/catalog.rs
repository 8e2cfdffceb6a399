//! Catalog merge command.

use crate::commands::common::{open_registry, save_registry};
use clap::Args;
use garage_presets::paths;
use std::path::PathBuf;

#[derive(Args)]
pub struct CatalogArgs {
    /// Catalog file to merge (defaults to catalog.cfg in the data directory)
    path: Option<PathBuf>,

    /// Overwrite presets whose names already exist
    #[arg(long)]
    overwrite: bool,
}

pub fn run(args: CatalogArgs) -> anyhow::Result<()> {
    let path = args.path.unwrap_or_else(paths::catalog_file);

    if !path.is_file() {
        anyhow::bail!(
            "Catalog file not found at {}. Download a catalog or copy one into place.",
            path.display()
        );
    }

    let mut registry = open_registry();
    let before = registry.len();
    let applied = registry.import_catalog(&path, args.overwrite);

    if applied > 0 {
        save_registry(&registry)?;
    }

    println!(
        "Applied {applied} catalog presets ({} new, {} total).",
        registry.len() - before,
        registry.len()
    );
    Ok(())
}
