//! Preset add/update command.

use crate::commands::common::{open_registry, parse_color_arg, save_registry};
use clap::Args;
use garage_presets::{PaintColor, Preset};

#[derive(Args)]
pub struct AddArgs {
    /// Preset name (an existing preset with this name is replaced)
    name: String,

    /// Loadout code understood by the host game
    loadout_code: String,

    /// Car body label
    #[arg(long)]
    car: Option<String>,

    /// Decal label
    #[arg(long)]
    decal: Option<String>,

    /// Wheels label
    #[arg(long)]
    wheels: Option<String>,

    /// Primary color as R,G,B (0-1 or 0-255 per component)
    #[arg(long, value_parser = parse_color_arg)]
    primary: Option<PaintColor>,

    /// Accent color as R,G,B (0-1 or 0-255 per component)
    #[arg(long, value_parser = parse_color_arg)]
    accent: Option<PaintColor>,

    /// Matte paint finish
    #[arg(long)]
    matte: bool,

    /// Pearlescent sheen
    #[arg(long)]
    pearlescent: bool,
}

pub fn run(args: AddArgs) -> anyhow::Result<()> {
    let name = args.name.trim();
    let loadout_code = args.loadout_code.trim();
    if name.is_empty() || loadout_code.is_empty() {
        anyhow::bail!("a preset name and loadout code are required");
    }

    // The command defines the whole record; omitted options fall back to
    // the customization defaults rather than to a previous version.
    let mut preset = Preset::new(name, loadout_code);
    let c = &mut preset.customization;
    if let Some(car) = args.car {
        c.car = car;
    }
    if let Some(decal) = args.decal {
        c.decal = decal;
    }
    if let Some(wheels) = args.wheels {
        c.wheels = wheels;
    }
    if let Some(primary) = args.primary {
        c.primary = primary;
    }
    if let Some(accent) = args.accent {
        c.accent = accent;
    }
    c.matte = args.matte;
    c.pearlescent = args.pearlescent;

    let mut registry = open_registry();
    registry.upsert(preset);
    save_registry(&registry)?;

    println!(
        "Saved preset '{}' to {}",
        name,
        registry.storage_path().display()
    );
    Ok(())
}
