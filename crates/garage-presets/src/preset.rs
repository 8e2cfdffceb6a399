//! Preset record types.

use serde::{Deserialize, Serialize};

/// A normalized RGB paint color.
///
/// Channels are conceptually in `[0, 1]`. The codec clamps negative values to
/// zero at parse time and rescales values greater than 1 from the 0–255 range,
/// but the struct itself does not enforce a range — equality is exact
/// component-wise comparison.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PaintColor {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
}

impl PaintColor {
    /// All-zero (black) color. This is the value a color token component
    /// falls back to when it is missing or unparsable, distinct from the
    /// [`Customization`] defaults.
    pub const ZERO: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Create a color from three channel values.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl Default for PaintColor {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Cosmetic metadata attached to a preset.
///
/// Every field has a default so that records imported from the host-native
/// file (name + code only) and storage lines with missing trailing fields get
/// sensible values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customization {
    /// Primary body color.
    pub primary: PaintColor,

    /// Accent / stripe color.
    pub accent: PaintColor,

    /// Car body label (free text).
    pub car: String,

    /// Decal label (free text).
    pub decal: String,

    /// Wheels label (free text).
    pub wheels: String,

    /// Matte paint finish flag.
    pub matte: bool,

    /// Pearlescent sheen flag. Independent of `matte` — both may be set.
    pub pearlescent: bool,
}

impl Default for Customization {
    fn default() -> Self {
        Self {
            primary: PaintColor::new(0.18, 0.18, 0.18),
            accent: PaintColor::new(0.9, 0.35, 0.15),
            car: "Octane".to_string(),
            decal: "None".to_string(),
            wheels: "OEM".to_string(),
            matte: false,
            pearlescent: false,
        }
    }
}

/// A named loadout preset.
///
/// The name acts as the unique key within a [`PresetRegistry`]. The loadout
/// code is an opaque string understood only by the host game; this crate
/// never interprets it beyond storing and echoing it.
///
/// [`PresetRegistry`]: crate::PresetRegistry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preset {
    /// Display name, unique within a registry.
    pub name: String,

    /// Opaque loadout code consumed by the host game.
    pub loadout_code: String,

    /// Cosmetic metadata.
    #[serde(default)]
    pub customization: Customization,
}

impl Preset {
    /// Create a preset with the default customization.
    ///
    /// This is the shape produced by importing from the host-native preset
    /// file, which carries only names and loadout codes.
    pub fn new(name: impl Into<String>, loadout_code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            loadout_code: loadout_code.into(),
            customization: Customization::default(),
        }
    }

    /// Attach a customization.
    pub fn with_customization(mut self, customization: Customization) -> Self {
        self.customization = customization;
        self
    }
}
