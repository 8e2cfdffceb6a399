//! Persisted overlay settings.
//!
//! A small TOML file next to the preset storage keeps the paths the user
//! configured and the preset they had selected, so the overlay comes back
//! the way it was left.

use garage_presets::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// File name inside the data directory.
const SETTINGS_FILE_NAME: &str = "overlay.toml";

/// User-tunable overlay state persisted across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlaySettings {
    /// Directory holding the game's native preset file.
    pub game_data_dir: PathBuf,
    /// Catalog file merged by the "Import catalog" button.
    pub catalog_path: PathBuf,
    /// Name of the preset selected when the overlay last closed.
    pub last_selected: Option<String>,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            game_data_dir: paths::game_data_dir(),
            catalog_path: paths::catalog_file(),
            last_selected: None,
        }
    }
}

impl OverlaySettings {
    /// Default location of the settings file.
    pub fn default_file() -> PathBuf {
        paths::data_dir().join(SETTINGS_FILE_NAME)
    }

    /// Load settings from `path`.
    ///
    /// A missing file is the normal first-run case and yields defaults; a
    /// malformed file is logged and also yields defaults, so a bad edit can
    /// never keep the overlay from starting.
    pub fn load(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(_) => return Self::default(),
        };
        match toml::from_str(&text) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring malformed settings file");
                Self::default()
            }
        }
    }

    /// Write the settings to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let text = toml::to_string_pretty(self)
            .map_err(|e| format!("failed to serialize settings: {e}"))?;
        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("failed to create {}: {e}", parent.display()))?;
        }
        std::fs::write(path, text).map_err(|e| format!("failed to write {}: {e}", path.display()))
    }

    /// Host-native preset file under the configured game data directory.
    pub fn vanilla_file(&self) -> PathBuf {
        self.game_data_dir.join(paths::VANILLA_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("nested").join("overlay.toml");

        let settings = OverlaySettings {
            game_data_dir: PathBuf::from("/games/data"),
            catalog_path: PathBuf::from("/tmp/catalog.cfg"),
            last_selected: Some("Octane Club".to_string()),
        };
        settings.save(&file).expect("save should succeed");

        let loaded = OverlaySettings::load(&file);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let loaded = OverlaySettings::load(&dir.path().join("absent.toml"));
        assert_eq!(loaded, OverlaySettings::default());
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("overlay.toml");
        std::fs::write(&file, "game_data_dir = [not toml").unwrap();

        let loaded = OverlaySettings::load(&file);
        assert_eq!(loaded, OverlaySettings::default());
    }

    #[test]
    fn partial_file_fills_remaining_fields() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("overlay.toml");
        std::fs::write(&file, "last_selected = \"Kept\"\n").unwrap();

        let loaded = OverlaySettings::load(&file);
        assert_eq!(loaded.last_selected.as_deref(), Some("Kept"));
        assert_eq!(loaded.catalog_path, OverlaySettings::default().catalog_path);
    }

    #[test]
    fn vanilla_file_joins_game_data_dir() {
        let settings = OverlaySettings {
            game_data_dir: PathBuf::from("/games/data"),
            ..OverlaySettings::default()
        };
        assert_eq!(
            settings.vanilla_file(),
            PathBuf::from("/games/data").join(paths::VANILLA_FILE_NAME)
        );
    }
}
