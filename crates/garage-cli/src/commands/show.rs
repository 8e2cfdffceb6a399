//! Preset detail command.

use crate::commands::common::open_registry;
use clap::Args;
use garage_presets::{format_color_token, serialize_storage_line};

#[derive(Args)]
pub struct ShowArgs {
    /// Preset name (exact match)
    name: String,

    /// Print the preset as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: ShowArgs) -> anyhow::Result<()> {
    let registry = open_registry();
    let preset = registry.find(&args.name).ok_or_else(|| {
        anyhow::anyhow!(
            "Preset '{}' not found. Use 'garage list' to see stored presets.",
            args.name
        )
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(preset)?);
        return Ok(());
    }

    println!("Preset: {}", preset.name);
    println!("{}", "=".repeat(8 + preset.name.len()));
    println!();
    println!("Loadout code: {}", preset.loadout_code);
    println!();

    let c = &preset.customization;
    let finish = match (c.matte, c.pearlescent) {
        (true, true) => "Matte, Pearlescent",
        (true, false) => "Matte",
        (false, true) => "Gloss, Pearlescent",
        (false, false) => "Gloss",
    };
    println!("Car:     {}", c.car);
    println!("Decal:   {}", c.decal);
    println!("Wheels:  {}", c.wheels);
    println!("Primary: {}", format_color_token(c.primary));
    println!("Accent:  {}", format_color_token(c.accent));
    println!("Finish:  {}", finish);

    println!();
    println!("Storage line:");
    println!("  {}", serialize_storage_line(preset));

    Ok(())
}
