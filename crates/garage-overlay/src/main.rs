//! Garage overlay - desktop preset manager.
//!
//! Standalone window for browsing, editing, and applying loadout presets
//! alongside a running game. Preset data lives in the shared storage file,
//! so edits made here are picked up by the CLI and vice versa.

use clap::Parser;
use eframe::egui;
use garage_overlay::OverlayApp;
use std::path::PathBuf;

/// Garage overlay application.
#[derive(Parser, Debug)]
#[command(name = "garage-overlay")]
#[command(about = "Desktop overlay for browsing, editing, and applying garage presets")]
#[command(version)]
struct Args {
    /// Directory holding the game's native preset file (overrides the saved setting)
    #[arg(long)]
    game_data: Option<PathBuf>,

    /// Catalog file used by the catalog import button (overrides the saved setting)
    #[arg(long)]
    catalog: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    use tracing_subscriber::EnvFilter;

    // Initialize tracing subscriber; bridge legacy log:: calls from eframe/egui
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    tracing_log::LogTracer::init().ok();

    let args = Args::parse();

    tracing::info!("Starting garage overlay");
    if let Some(ref dir) = args.game_data {
        tracing::info!(dir = %dir.display(), "game data override");
    }
    if let Some(ref path) = args.catalog {
        tracing::info!(path = %path.display(), "catalog override");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 620.0])
            .with_min_inner_size([780.0, 480.0])
            .with_title("Garage"),
        ..Default::default()
    };

    eframe::run_native(
        "Garage",
        options,
        Box::new(move |cc| Ok(Box::new(OverlayApp::new(cc, args.game_data, args.catalog)))),
    )
}
