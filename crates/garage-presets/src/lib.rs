//! Loadout preset management for the garage overlay and CLI.
//!
//! This crate holds the core of the garage preset manager: the record types,
//! the line codec for the storage and host-native file formats, and the
//! registry that keeps an ordered, uniquely-named preset list in sync with
//! the files on disk.
//!
//! # Features
//!
//! - **Records**: [`Preset`] with [`Customization`] (paint colors, labels,
//!   finish flags) and backward-compatible defaults
//! - **Codec**: tolerant parse/serialize between records and `|`-delimited
//!   storage lines, plus the host game's `Name<whitespace>Code` format
//! - **Registry**: load/merge/save against the storage file, first-run
//!   bootstrap from the host-native file, catalog import
//! - **Paths**: platform data directories with environment overrides
//!
//! # Example
//!
//! ```rust,no_run
//! use garage_presets::{Preset, PresetRegistry, paths};
//!
//! // Open the registry against the default locations and load it,
//! // importing from the game's own preset file on first run.
//! let mut registry = PresetRegistry::with_default_paths();
//! let count = registry.load_from_storage();
//! println!("{count} presets loaded from {:?}", paths::storage_file());
//!
//! // Edit and persist.
//! registry.upsert(Preset::new("Tournament", "AAAA-BBBB-CCCC"));
//! registry.save_to_storage();
//! ```

mod error;
mod preset;
mod registry;

/// Line codec for the storage and host-native preset formats.
pub mod codec;

/// Platform-specific paths for preset storage.
pub mod paths;

pub use codec::{
    format_color_token, parse_color_token, parse_finish_flag, parse_storage_line,
    parse_vanilla_line, serialize_storage_line,
};
pub use error::StoreError;
pub use preset::{Customization, PaintColor, Preset};
pub use registry::PresetRegistry;
