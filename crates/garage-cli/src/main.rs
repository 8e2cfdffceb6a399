//! Garage CLI - command-line interface for the garage preset manager.
//!
//! Operates on the same storage file as the overlay, so presets created
//! here show up there and vice versa.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "garage")]
#[command(author, version, about = "Loadout preset manager CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List stored presets
    List(commands::list::ListArgs),

    /// Show one preset in full
    Show(commands::show::ShowArgs),

    /// Add a preset or replace one with the same name
    Add(commands::add::AddArgs),

    /// Delete a preset
    Delete(commands::delete::DeleteArgs),

    /// Re-import presets from the game's native file
    Import(commands::import::ImportArgs),

    /// Merge a downloaded catalog file
    Catalog(commands::catalog::CatalogArgs),

    /// Show storage locations
    Paths(commands::paths::PathsArgs),
}

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    // Registry diagnostics go to stderr; default to warnings only so the
    // table output stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List(args) => commands::list::run(args),
        Commands::Show(args) => commands::show::run(args),
        Commands::Add(args) => commands::add::run(args),
        Commands::Delete(args) => commands::delete::run(args),
        Commands::Import(args) => commands::import::run(args),
        Commands::Catalog(args) => commands::catalog::run(args),
        Commands::Paths(args) => commands::paths::run(args),
    }
}
