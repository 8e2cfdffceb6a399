//! Garage overlay - desktop preset manager UI.
//!
//! This crate provides the egui overlay for [`garage_presets`]: a searchable
//! preset list, an editor with color pickers and a painted preview, import
//! buttons for the game's native presets and downloaded catalogs, and a
//! console seam for previewing or equipping a loadout in the host game.

pub mod app;
pub mod editor;
pub mod host;
pub mod preview;
pub mod settings;

pub use app::OverlayApp;
pub use editor::EditorForm;
pub use host::{HostConsole, LoggingConsole};
pub use preview::PresetPreview;
pub use settings::OverlaySettings;
