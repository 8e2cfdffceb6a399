//! In-memory preset registry with file synchronization.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::codec;
use crate::error::StoreError;
use crate::paths;
use crate::preset::Preset;

/// Ordered collection of uniquely-named presets, synchronized with the
/// storage file and the host-native preset file.
///
/// The registry owns every [`Preset`]; callers that need a snapshot across
/// mutations must clone. Insertion order is preserved — upserting an
/// existing name replaces the record in place without moving it.
///
/// None of the public operations return an error: failures degrade to
/// documented fallbacks and are reported through the tracing diagnostics,
/// so a UI driving the registry stays responsive on bad input.
pub struct PresetRegistry {
    presets: Vec<Preset>,
    storage_path: PathBuf,
    vanilla_path: PathBuf,
}

impl PresetRegistry {
    /// Create an empty registry bound to the given file locations.
    ///
    /// No I/O happens here; call [`load_from_storage`](Self::load_from_storage)
    /// to populate the registry.
    pub fn new(storage_path: impl Into<PathBuf>, vanilla_path: impl Into<PathBuf>) -> Self {
        Self {
            presets: Vec::new(),
            storage_path: storage_path.into(),
            vanilla_path: vanilla_path.into(),
        }
    }

    /// Create a registry bound to the default platform paths.
    ///
    /// Storage lives under [`paths::storage_file`]; the host-native file is
    /// resolved via [`paths::vanilla_presets_file`].
    pub fn with_default_paths() -> Self {
        Self::new(paths::storage_file(), paths::vanilla_presets_file())
    }

    /// Replace the in-memory list with the contents of the host-native
    /// preset file.
    ///
    /// Clears the list first, then parses every line. A missing or
    /// unreadable file leaves the registry empty and logs a warning.
    /// Duplicate names within the file collapse via upsert (last one wins).
    /// Returns the resulting preset count.
    pub fn import_from_vanilla(&mut self) -> usize {
        self.presets.clear();

        let content = match read_file(&self.vanilla_path) {
            Ok(content) => content,
            Err(e) => {
                warn!(error = %e, "could not import host-native presets");
                return 0;
            }
        };

        let mut parsed = 0usize;
        for line in content.lines() {
            if let Some(preset) = codec::parse_vanilla_line(line) {
                parsed += 1;
                self.upsert(preset);
            }
        }

        let count = self.presets.len();
        if count < parsed {
            info!(
                count,
                collapsed = parsed - count,
                "imported host-native presets (duplicate names overwritten)"
            );
        } else {
            info!(count, "imported host-native presets");
        }
        count
    }

    /// Replace the in-memory list with the contents of the storage file.
    ///
    /// If the storage file cannot be read, bootstraps instead: one import
    /// from the host-native file followed by one save, so the storage file
    /// exists (possibly empty) from then on. Malformed lines are skipped
    /// silently. Returns the resulting preset count.
    pub fn load_from_storage(&mut self) -> usize {
        self.presets.clear();

        let content = match read_file(&self.storage_path) {
            Ok(content) => content,
            Err(e) => {
                info!(
                    error = %e,
                    "no preset storage found, importing from the host-native file instead"
                );
                self.import_from_vanilla();
                self.save_to_storage();
                return self.presets.len();
            }
        };

        for line in content.lines() {
            if let Some(preset) = codec::parse_storage_line(line) {
                self.upsert(preset);
            }
        }

        debug!(count = self.presets.len(), path = %self.storage_path.display(), "loaded presets");
        self.presets.len()
    }

    /// Rewrite the storage file with the current in-memory list.
    ///
    /// Creates the containing directory if needed, then overwrites the file
    /// with one serialized line per preset in memory order. On failure the
    /// in-memory list is untouched, a warning is logged, and `false` is
    /// returned.
    pub fn save_to_storage(&self) -> bool {
        match self.write_storage_file() {
            Ok(()) => {
                debug!(
                    count = self.presets.len(),
                    path = %self.storage_path.display(),
                    "saved presets"
                );
                true
            }
            Err(e) => {
                warn!(error = %e, "preset save failed, in-memory changes were not persisted");
                false
            }
        }
    }

    fn write_storage_file(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.storage_path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::create_dir(parent, e))?;
        }

        let mut content = String::new();
        for preset in &self.presets {
            content.push_str(&codec::serialize_storage_line(preset));
            content.push('\n');
        }
        std::fs::write(&self.storage_path, content)
            .map_err(|e| StoreError::write_file(&self.storage_path, e))
    }

    /// Merge a catalog file (storage format) into the registry.
    ///
    /// Records whose name already exists are skipped unless
    /// `overwrite_existing` is set, preserving the user's customization.
    /// New names append in file order. The merge is purely in-memory — the
    /// caller decides whether to save afterwards. Returns the number of
    /// records actually applied; a missing or unreadable catalog logs a
    /// warning and applies nothing.
    pub fn import_catalog(&mut self, path: &Path, overwrite_existing: bool) -> usize {
        let content = match read_file(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(error = %e, "could not read preset catalog");
                return 0;
            }
        };

        let mut applied = 0usize;
        for line in content.lines() {
            let Some(preset) = codec::parse_storage_line(line) else {
                continue;
            };
            if !overwrite_existing && self.find(&preset.name).is_some() {
                continue;
            }
            self.upsert(preset);
            applied += 1;
        }

        info!(
            applied,
            overwrite = overwrite_existing,
            path = %path.display(),
            "catalog merge finished"
        );
        applied
    }

    /// Find a preset by exact name.
    pub fn find(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Index of the preset with the given name, or `len()` when absent.
    ///
    /// [`upsert`](Self::upsert) and [`remove`](Self::remove) share this scan
    /// instead of duplicating it.
    pub fn index_of(&self, name: &str) -> usize {
        self.presets
            .iter()
            .position(|p| p.name == name)
            .unwrap_or(self.presets.len())
    }

    /// Insert the preset, or replace the same-named record in place.
    ///
    /// This is the sole mutation path used by imports and edits alike, which
    /// is what keeps names unique without a separate index.
    pub fn upsert(&mut self, preset: Preset) {
        let index = self.index_of(&preset.name);
        if index == self.presets.len() {
            self.presets.push(preset);
        } else {
            self.presets[index] = preset;
        }
    }

    /// Remove the preset with the given name.
    ///
    /// Returns whether a preset was removed; an absent name is a no-op.
    pub fn remove(&mut self, name: &str) -> bool {
        let index = self.index_of(name);
        if index == self.presets.len() {
            return false;
        }
        self.presets.remove(index);
        true
    }

    /// All presets in memory order.
    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// Number of presets.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether the registry holds no presets.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Path of the storage file this registry reads and writes.
    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }

    /// Path of the host-native preset file this registry imports from.
    pub fn vanilla_path(&self) -> &Path {
        &self.vanilla_path
    }

    /// Point the registry at a different host-native preset file.
    ///
    /// Takes effect on the next [`import_from_vanilla`](Self::import_from_vanilla).
    pub fn set_vanilla_path(&mut self, path: impl Into<PathBuf>) {
        self.vanilla_path = path.into();
    }
}

fn read_file(path: &Path) -> Result<String, StoreError> {
    std::fs::read_to_string(path).map_err(|e| StoreError::read_file(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_registry() -> PresetRegistry {
        // Paths are never touched by the in-memory operations under test.
        PresetRegistry::new("unused/presets.cfg", "unused/presets.data")
    }

    fn named(name: &str) -> Preset {
        Preset::new(name, format!("{name}-code"))
    }

    #[test]
    fn upsert_appends_new_names_in_order() {
        let mut registry = scratch_registry();
        registry.upsert(named("A"));
        registry.upsert(named("B"));
        registry.upsert(named("C"));

        let names: Vec<_> = registry.presets().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn upsert_replaces_in_place() {
        let mut registry = scratch_registry();
        registry.upsert(named("A"));
        registry.upsert(named("B"));
        registry.upsert(named("C"));

        let mut replacement = named("B");
        replacement.loadout_code = "new-code".to_string();
        registry.upsert(replacement);

        let names: Vec<_> = registry.presets().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"], "replace must not move the record");
        assert_eq!(registry.find("B").unwrap().loadout_code, "new-code");
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn find_returns_first_exact_match() {
        let mut registry = scratch_registry();
        registry.upsert(named("Target"));
        assert!(registry.find("Target").is_some());
        assert!(registry.find("target").is_none(), "lookup is case-sensitive");
        assert!(registry.find("missing").is_none());
    }

    #[test]
    fn index_of_absent_name_is_len_sentinel() {
        let mut registry = scratch_registry();
        assert_eq!(registry.index_of("anything"), 0);

        registry.upsert(named("A"));
        registry.upsert(named("B"));
        assert_eq!(registry.index_of("A"), 0);
        assert_eq!(registry.index_of("B"), 1);
        assert_eq!(registry.index_of("missing"), registry.len());
    }

    #[test]
    fn remove_is_silent_noop_for_absent_names() {
        let mut registry = scratch_registry();
        registry.upsert(named("A"));

        assert!(!registry.remove("missing"));
        assert_eq!(registry.len(), 1);

        assert!(registry.remove("A"));
        assert!(registry.is_empty());
    }

    #[test]
    fn operations_on_empty_registry_are_valid() {
        let mut registry = scratch_registry();
        assert!(registry.find("x").is_none());
        assert_eq!(registry.index_of("x"), 0);
        assert!(!registry.remove("x"));
        assert!(registry.is_empty());
    }
}
