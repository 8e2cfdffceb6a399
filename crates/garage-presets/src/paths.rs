//! Platform-specific paths for preset storage.
//!
//! This module suggests where the storage file, catalog drop location, and
//! the host game's own preset file live. The registry takes concrete paths
//! at construction, so everything here is advisory — callers can override
//! any location, and two environment variables override the defaults:
//!
//! - `GARAGE_DATA_DIR` replaces the data directory (storage + catalog).
//! - `GARAGE_GAME_DATA` replaces the game data directory (host-native file).
//!
//! # Directory Structure
//!
//! - **Data dir**: `~/.config/garage/` (Linux), `~/Library/Application Support/garage/` (macOS), `%APPDATA%\garage\` (Windows)
//! - **Storage file**: `<data dir>/presets.cfg`
//! - **Catalog file**: `<data dir>/catalog.cfg`
//! - **Host-native file**: `<game data dir>/presets.data`; the game data
//!   directory defaults to the working directory since only the host knows
//!   where its data really lives.

use std::path::PathBuf;

use crate::error::StoreError;

/// Application name used for directory paths.
const APP_NAME: &str = "garage";

/// File name of the preset storage file inside the data directory.
pub const STORAGE_FILE_NAME: &str = "presets.cfg";

/// File name of the downloaded catalog inside the data directory.
pub const CATALOG_FILE_NAME: &str = "catalog.cfg";

/// File name of the host game's own preset list.
pub const VANILLA_FILE_NAME: &str = "presets.data";

/// Environment variable overriding the data directory.
const DATA_DIR_ENV: &str = "GARAGE_DATA_DIR";

/// Environment variable overriding the game data directory.
const GAME_DATA_ENV: &str = "GARAGE_GAME_DATA";

/// Returns the directory holding the storage and catalog files.
///
/// Honors `GARAGE_DATA_DIR` when set and non-empty; otherwise resolves to
/// the platform config directory plus the application name, falling back to
/// the working directory if no config directory can be determined.
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV)
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the preset storage file path.
pub fn storage_file() -> PathBuf {
    data_dir().join(STORAGE_FILE_NAME)
}

/// Returns the expected drop location for a downloaded catalog file.
pub fn catalog_file() -> PathBuf {
    data_dir().join(CATALOG_FILE_NAME)
}

/// Returns the directory holding the host game's data files.
///
/// Honors `GARAGE_GAME_DATA` when set and non-empty; otherwise the working
/// directory. There is no portable way to locate a running game's data from
/// the outside, so this stays an explicit override point.
pub fn game_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(GAME_DATA_ENV)
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }
    PathBuf::from(".")
}

/// Returns the host game's own preset file path.
pub fn vanilla_presets_file() -> PathBuf {
    game_data_dir().join(VANILLA_FILE_NAME)
}

/// Ensure the data directory exists.
///
/// Creates the directory and any parent directories if they don't exist.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_data_dir() -> Result<PathBuf, StoreError> {
    let dir = data_dir();

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| StoreError::create_dir(&dir, e))?;
    }

    Ok(dir)
}
