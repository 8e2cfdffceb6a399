//! Editor form state for creating and updating presets.

use garage_presets::{Customization, PaintColor, Preset};

/// Form state backing the editor panel.
///
/// Colors are plain arrays so they bind directly to egui's RGB picker; the
/// rest mirrors [`Preset`] field by field.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorForm {
    /// Preset name field.
    pub name: String,
    /// Loadout code field.
    pub loadout_code: String,
    /// Car body label field.
    pub car: String,
    /// Decal label field.
    pub decal: String,
    /// Wheels label field.
    pub wheels: String,
    /// Primary color as RGB channels.
    pub primary: [f32; 3],
    /// Accent color as RGB channels.
    pub accent: [f32; 3],
    /// Matte paint finish flag.
    pub matte: bool,
    /// Pearlescent sheen flag.
    pub pearlescent: bool,
}

impl Default for EditorForm {
    fn default() -> Self {
        let mut form = Self {
            name: String::new(),
            loadout_code: String::new(),
            car: String::new(),
            decal: String::new(),
            wheels: String::new(),
            primary: [0.0; 3],
            accent: [0.0; 3],
            matte: false,
            pearlescent: false,
        };
        form.set_customization(&Customization::default());
        form
    }
}

impl EditorForm {
    /// Load a preset into the form, replacing the current contents.
    pub fn load(&mut self, preset: &Preset) {
        self.name = preset.name.clone();
        self.loadout_code = preset.loadout_code.clone();
        self.set_customization(&preset.customization);
    }

    /// Reset every field to the defaults for a fresh preset.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn set_customization(&mut self, customization: &Customization) {
        self.car = customization.car.clone();
        self.decal = customization.decal.clone();
        self.wheels = customization.wheels.clone();
        self.primary = [
            customization.primary.r,
            customization.primary.g,
            customization.primary.b,
        ];
        self.accent = [
            customization.accent.r,
            customization.accent.g,
            customization.accent.b,
        ];
        self.matte = customization.matte;
        self.pearlescent = customization.pearlescent;
    }

    /// Cosmetic state assembled from the current field values.
    pub fn customization(&self) -> Customization {
        Customization {
            primary: PaintColor::new(self.primary[0], self.primary[1], self.primary[2]),
            accent: PaintColor::new(self.accent[0], self.accent[1], self.accent[2]),
            car: self.car.clone(),
            decal: self.decal.clone(),
            wheels: self.wheels.clone(),
            matte: self.matte,
            pearlescent: self.pearlescent,
        }
    }

    /// Build a preset from the form.
    ///
    /// Name and loadout code are trimmed; either one empty after trimming
    /// rejects the whole form, since both are required keys.
    pub fn to_preset(&self) -> Result<Preset, String> {
        let name = self.name.trim();
        let loadout_code = self.loadout_code.trim();
        if name.is_empty() || loadout_code.is_empty() {
            return Err("a preset name and loadout code are required".to_string());
        }
        Ok(Preset::new(name, loadout_code).with_customization(self.customization()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_matches_customization_defaults() {
        let form = EditorForm::default();
        assert!(form.name.is_empty());
        assert!(form.loadout_code.is_empty());
        assert_eq!(form.car, "Octane");
        assert_eq!(form.decal, "None");
        assert_eq!(form.wheels, "OEM");
        assert_eq!(form.customization(), Customization::default());
    }

    #[test]
    fn load_then_to_preset_round_trips() {
        let mut preset = Preset::new("Loaded", "LO-01");
        preset.customization.primary = PaintColor::new(0.25, 0.5, 0.75);
        preset.customization.wheels = "Cristiano".to_string();
        preset.customization.pearlescent = true;

        let mut form = EditorForm::default();
        form.load(&preset);

        assert_eq!(form.to_preset(), Ok(preset));
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut form = EditorForm::default();
        form.loadout_code = "CODE".to_string();
        assert!(form.to_preset().is_err());
    }

    #[test]
    fn whitespace_code_is_rejected() {
        let mut form = EditorForm::default();
        form.name = "Named".to_string();
        form.loadout_code = "   ".to_string();
        assert!(form.to_preset().is_err());
    }

    #[test]
    fn name_and_code_are_trimmed() {
        let mut form = EditorForm::default();
        form.name = "  Spaced  ".to_string();
        form.loadout_code = "\tCODE\t".to_string();

        let preset = form.to_preset().expect("form should validate");
        assert_eq!(preset.name, "Spaced");
        assert_eq!(preset.loadout_code, "CODE");
    }

    #[test]
    fn clear_restores_defaults() {
        let mut form = EditorForm::default();
        form.name = "Dirty".to_string();
        form.matte = true;
        form.primary = [1.0, 0.0, 0.0];

        form.clear();
        assert_eq!(form, EditorForm::default());
    }
}
