//! Main overlay state and UI layout.

use crate::editor::EditorForm;
use crate::host::{self, HostConsole, LoggingConsole};
use crate::preview::PresetPreview;
use crate::settings::OverlaySettings;
use egui::{
    Align, CentralPanel, Context, Layout, RichText, ScrollArea, SidePanel, TextStyle,
    TopBottomPanel,
};
use garage_presets::{Preset, PresetRegistry, paths};
use std::path::PathBuf;
use tracing::warn;

/// Deferred header action, applied after the widget borrows end.
enum HeaderAction {
    ImportVanilla,
    SaveAll,
    ImportCatalog { overwrite_existing: bool },
}

/// Deferred editor action, applied after the widget borrows end.
#[derive(Clone, Copy, PartialEq)]
enum EditorAction {
    None,
    Upsert,
    Reset,
    Delete,
    Preview,
    Equip,
}

/// Main overlay state.
pub struct OverlayApp {
    registry: PresetRegistry,
    settings: OverlaySettings,
    settings_path: PathBuf,

    /// Command sink for preview/equip actions.
    console: Box<dyn HostConsole>,

    // UI
    form: EditorForm,
    search: String,
    /// Name of the selected preset; selection is keyed by name so it
    /// survives list reordering.
    selected: Option<String>,
    status: String,
}

impl OverlayApp {
    /// Create a new overlay instance.
    ///
    /// Loads the persisted settings, applies any command-line path overrides,
    /// and loads the preset registry (which bootstraps itself from the game's
    /// native file on a first run).
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        game_data: Option<PathBuf>,
        catalog: Option<PathBuf>,
    ) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        // Create the data directory up front so it exists as a drop location
        // for downloaded catalog files even before the first save.
        if let Err(e) = paths::ensure_data_dir() {
            warn!("{e}");
        }

        let settings_path = OverlaySettings::default_file();
        let mut settings = OverlaySettings::load(&settings_path);
        if let Some(dir) = game_data {
            settings.game_data_dir = dir;
        }
        if let Some(path) = catalog {
            settings.catalog_path = path;
        }

        let mut registry = PresetRegistry::new(paths::storage_file(), settings.vanilla_file());
        let count = registry.load_from_storage();

        let mut form = EditorForm::default();
        let selected = settings
            .last_selected
            .clone()
            .filter(|name| registry.find(name).is_some());
        if let Some(name) = &selected
            && let Some(preset) = registry.find(name)
        {
            form.load(preset);
        }

        Self {
            registry,
            settings,
            settings_path,
            console: Box::new(LoggingConsole),
            form,
            search: String::new(),
            selected,
            status: format!("Loaded {count} presets"),
        }
    }

    /// Select a preset by name and load it into the editor.
    fn select(&mut self, name: &str) {
        if let Some(preset) = self.registry.find(name) {
            self.form.load(preset);
            self.selected = Some(name.to_string());
        }
    }

    /// Re-import from the game's native file, then persist the result.
    fn import_vanilla(&mut self) {
        let count = self.registry.import_from_vanilla();
        self.registry.save_to_storage();
        self.selected = None;
        self.form.clear();
        self.status = import_status(count, self.registry.vanilla_path());
    }

    fn save_all(&mut self) {
        if self.registry.save_to_storage() {
            self.status = format!("Saved {} presets", self.registry.len());
        } else {
            self.status = "Save failed, see log for details".to_string();
        }
    }

    /// Merge the configured catalog file into the registry.
    ///
    /// The merge itself does not persist; the next save (add, delete, Save
    /// all, or exit) picks the new records up.
    fn import_catalog(&mut self, overwrite_existing: bool) {
        let path = self.settings.catalog_path.clone();
        if !path.exists() {
            warn!(path = %path.display(), "catalog file not found");
            warn!("download a catalog or copy one into place, then import again");
            self.status = format!("Catalog file not found at {}", path.display());
            return;
        }

        let applied = self.registry.import_catalog(&path, overwrite_existing);
        if applied > 0 {
            self.selected = None;
            self.form.clear();
        }
        self.status = format!("Applied {applied} catalog presets");
    }

    fn add_or_update(&mut self) {
        match self.form.to_preset() {
            Ok(preset) => {
                let name = preset.name.clone();
                self.registry.upsert(preset);
                self.registry.save_to_storage();
                self.status = format!("Saved preset '{name}'");
                self.selected = Some(name);
            }
            Err(e) => {
                warn!("{e}");
                self.status = e;
            }
        }
    }

    fn delete_selected(&mut self) {
        if let Some(name) = self.selected.take() {
            self.registry.remove(&name);
            self.registry.save_to_storage();
            self.form.clear();
            self.status = format!("Deleted preset '{name}'");
        }
    }

    /// Issue the preview or equip console command for the form's loadout
    /// code, and copy the code to the clipboard as a manual fallback.
    fn send_to_car(&mut self, ctx: &Context, preview_only: bool) {
        let loadout_code = self.form.loadout_code.trim().to_string();
        if loadout_code.is_empty() {
            self.status = "No loadout code to send".to_string();
            return;
        }

        let command = if preview_only {
            host::preview_command(&loadout_code)
        } else {
            host::apply_command(&loadout_code)
        };
        self.console.execute(&command);
        ctx.copy_text(loadout_code);

        let name = self.form.name.trim();
        self.status = if preview_only {
            format!("Preview command sent for '{name}'")
        } else {
            format!("Equipped preset '{name}'")
        };
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.label(RichText::new("GARAGE").strong().size(16.0));
            ui.add_space(12.0);
            ui.label(format!("{} presets", self.registry.len()));

            ui.add_space(20.0);

            if ui.button("Import vanilla").clicked() {
                action = Some(HeaderAction::ImportVanilla);
            }
            if ui.button("Save all").clicked() {
                action = Some(HeaderAction::SaveAll);
            }

            let overwrite_existing = ui.input(|i| i.modifiers.shift);
            let catalog_button = ui.button("Import catalog");
            if catalog_button.clicked() {
                action = Some(HeaderAction::ImportCatalog { overwrite_existing });
            }
            catalog_button.on_hover_ui(|ui| {
                ui.label("Imports downloaded presets from the configured catalog file.");
                ui.label("Hold Shift to overwrite presets with matching names.");
            });
        });

        match action {
            Some(HeaderAction::ImportVanilla) => self.import_vanilla(),
            Some(HeaderAction::SaveAll) => self.save_all(),
            Some(HeaderAction::ImportCatalog { overwrite_existing }) => {
                self.import_catalog(overwrite_existing);
            }
            None => {}
        }
    }

    fn render_preset_list(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        ui.add(
            egui::TextEdit::singleline(&mut self.search)
                .hint_text("Search by name or loadout code")
                .desired_width(f32::INFINITY),
        );
        ui.separator();

        let filter = self.search.to_lowercase();
        let filtered: Vec<usize> = self
            .registry
            .presets()
            .iter()
            .enumerate()
            .filter(|(_, preset)| matches_filter(preset, &filter))
            .map(|(index, _)| index)
            .collect();

        let mut clicked = None;
        let row_height = ui.text_style_height(&TextStyle::Body);
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show_rows(ui, row_height, filtered.len(), |ui, rows| {
                for row in rows {
                    let preset = &self.registry.presets()[filtered[row]];
                    let is_selected = self.selected.as_deref() == Some(preset.name.as_str());

                    let response = ui.selectable_label(is_selected, &preset.name);
                    if response.clicked() {
                        clicked = Some(preset.name.clone());
                    }
                    response.on_hover_ui(|ui| {
                        ui.label("Loadout code:");
                        ui.monospace(&preset.loadout_code);
                    });
                }
            });

        // Apply the selection after the list borrows end.
        if let Some(name) = clicked {
            self.select(&name);
        }
    }

    fn render_editor(&mut self, ui: &mut egui::Ui, ctx: &Context) {
        ui.label(RichText::new("Preset details").strong());
        ui.separator();

        egui::Grid::new("preset_fields")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("Name");
                ui.text_edit_singleline(&mut self.form.name);
                ui.end_row();

                ui.label("Loadout code");
                ui.text_edit_singleline(&mut self.form.loadout_code);
                ui.end_row();

                ui.label("Car");
                ui.text_edit_singleline(&mut self.form.car);
                ui.end_row();

                ui.label("Decal");
                ui.text_edit_singleline(&mut self.form.decal);
                ui.end_row();

                ui.label("Wheels");
                ui.text_edit_singleline(&mut self.form.wheels);
                ui.end_row();

                ui.label("Primary color");
                ui.color_edit_button_rgb(&mut self.form.primary);
                ui.end_row();

                ui.label("Accent color");
                ui.color_edit_button_rgb(&mut self.form.accent);
                ui.end_row();
            });

        ui.checkbox(&mut self.form.matte, "Matte paint finish");
        ui.checkbox(&mut self.form.pearlescent, "Pearlescent sheen");

        ui.separator();
        ui.label("Preset preview");
        let customization = self.form.customization();
        ui.add(PresetPreview::new(&customization));

        ui.add_space(8.0);

        let mut action = EditorAction::None;
        ui.horizontal(|ui| {
            if ui.button("Add / Update").clicked() {
                action = EditorAction::Upsert;
            }
            if ui.button("Reset form").clicked() {
                action = EditorAction::Reset;
            }
            if self.selected.is_some() && ui.button("Delete").clicked() {
                action = EditorAction::Delete;
            }
        });

        if self.selected.is_some() {
            ui.horizontal(|ui| {
                if ui.button("Preview on car").clicked() {
                    action = EditorAction::Preview;
                }
                if ui.button("Equip preset").clicked() {
                    action = EditorAction::Equip;
                }
            });
        }

        match action {
            EditorAction::None => {}
            EditorAction::Upsert => self.add_or_update(),
            EditorAction::Reset => self.form.clear(),
            EditorAction::Delete => self.delete_selected(),
            EditorAction::Preview => self.send_to_car(ctx, true),
            EditorAction::Equip => self.send_to_car(ctx, false),
        }

        ui.add_space(8.0);
        self.render_settings_section(ui);
    }

    fn render_settings_section(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Settings").show(ui, |ui| {
            egui::Grid::new("overlay_settings")
                .num_columns(3)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Game data dir");
                    let mut game_data = self.settings.game_data_dir.to_string_lossy().into_owned();
                    if ui.text_edit_singleline(&mut game_data).changed() {
                        self.settings.game_data_dir = PathBuf::from(game_data);
                        self.registry.set_vanilla_path(self.settings.vanilla_file());
                    }
                    if ui.button("Browse").clicked()
                        && let Some(dir) = rfd::FileDialog::new().pick_folder()
                    {
                        self.settings.game_data_dir = dir;
                        self.registry.set_vanilla_path(self.settings.vanilla_file());
                    }
                    ui.end_row();

                    ui.label("Catalog file");
                    let mut catalog = self.settings.catalog_path.to_string_lossy().into_owned();
                    if ui.text_edit_singleline(&mut catalog).changed() {
                        self.settings.catalog_path = PathBuf::from(catalog);
                    }
                    if ui.button("Browse").clicked()
                        && let Some(file) = rfd::FileDialog::new()
                            .add_filter("Preset catalog", &["cfg"])
                            .pick_file()
                    {
                        self.settings.catalog_path = file;
                    }
                    ui.end_row();

                    ui.label("Storage file");
                    ui.label(
                        RichText::new(self.registry.storage_path().display().to_string())
                            .monospace()
                            .small(),
                    );
                    ui.end_row();
                });
        });
    }

    fn render_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(&self.status);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(format!("{} presets", self.registry.len()));
            });
        });
    }
}

impl eframe::App for OverlayApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Header
        TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_header(ui);
            ui.add_space(4.0);
        });

        // Status bar
        TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.add_space(2.0);
            self.render_status_bar(ui);
            ui.add_space(2.0);
        });

        // Preset list
        SidePanel::left("preset_list")
            .default_width(280.0)
            .show(ctx, |ui| {
                self.render_preset_list(ui);
            });

        // Editor
        CentralPanel::default().show(ctx, |ui| {
            self.render_editor(ui, ctx);
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.registry.save_to_storage();
        self.settings.last_selected = self.selected.clone();
        if let Err(e) = self.settings.save(&self.settings_path) {
            warn!("{e}");
        }
    }
}

/// Status line for a vanilla import, naming the file that was actually read
/// (which may be a user-configured game data directory, not the default).
fn import_status(count: usize, vanilla_path: &std::path::Path) -> String {
    format!("Imported {count} presets from {}", vanilla_path.display())
}

/// Case-insensitive substring match on preset name or loadout code.
///
/// The filter must already be lowercased; an empty filter matches everything.
fn matches_filter(preset: &Preset, filter_lower: &str) -> bool {
    if filter_lower.is_empty() {
        return true;
    }
    preset.name.to_lowercase().contains(filter_lower)
        || preset.loadout_code.to_lowercase().contains(filter_lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_matches_everything() {
        let preset = Preset::new("Anything", "AAAA-1");
        assert!(matches_filter(&preset, ""));
    }

    #[test]
    fn filter_matches_name_case_insensitively() {
        let preset = Preset::new("Octane Club", "AAAA-1");
        assert!(matches_filter(&preset, "octane"));
        assert!(matches_filter(&preset, "club"));
        assert!(!matches_filter(&preset, "fennec"));
    }

    #[test]
    fn import_status_names_configured_vanilla_file() {
        let status = import_status(3, std::path::Path::new("/custom/game/presets.data"));
        assert_eq!(status, "Imported 3 presets from /custom/game/presets.data");
    }

    #[test]
    fn filter_matches_loadout_code() {
        let preset = Preset::new("Octane Club", "AAAA-1");
        assert!(matches_filter(&preset, "aaaa"));
        assert!(!matches_filter(&preset, "bbbb"));
    }
}
