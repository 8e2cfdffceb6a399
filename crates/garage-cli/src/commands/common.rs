//! Shared CLI helpers used across multiple commands.

use garage_presets::{PaintColor, PresetRegistry, parse_color_token};

/// Open the registry against the default storage locations.
///
/// Loading bootstraps the storage file from the game's native presets on a
/// first run, so every command sees the same records the overlay does.
pub fn open_registry() -> PresetRegistry {
    let mut registry = PresetRegistry::with_default_paths();
    registry.load_from_storage();
    registry
}

/// Persist the registry, turning a failed save into a CLI error.
pub fn save_registry(registry: &PresetRegistry) -> anyhow::Result<()> {
    if registry.save_to_storage() {
        Ok(())
    } else {
        anyhow::bail!(
            "could not write {}; check permissions and try again",
            registry.storage_path().display()
        )
    }
}

/// Parse an `R,G,B` color argument for clap's `value_parser`.
///
/// Requires all three components and rejects non-numeric ones up front;
/// normalization (negative clamp, 0-255 rescale) then follows the storage
/// format's rules.
pub fn parse_color_arg(s: &str) -> Result<PaintColor, String> {
    let components: Vec<&str> = s.split(',').collect();
    if components.len() != 3 {
        return Err(format!("invalid color '{s}' (expected R,G,B)"));
    }
    for component in &components {
        if component.trim().parse::<f32>().is_err() {
            return Err(format!("invalid color component '{}'", component.trim()));
        }
    }
    Ok(parse_color_token(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_arg_accepts_unit_range() {
        let color = parse_color_arg("0.1,0.2,0.3").unwrap();
        assert!((color.r - 0.1).abs() < 1e-6);
        assert!((color.g - 0.2).abs() < 1e-6);
        assert!((color.b - 0.3).abs() < 1e-6);
    }

    #[test]
    fn color_arg_rescales_byte_range() {
        let color = parse_color_arg("255,0,51").unwrap();
        assert!((color.r - 1.0).abs() < 1e-6);
        assert!((color.g - 0.0).abs() < 1e-6);
        assert!((color.b - 0.2).abs() < 1e-6);
    }

    #[test]
    fn color_arg_rejects_wrong_arity() {
        assert!(parse_color_arg("0.5,0.5").is_err());
        assert!(parse_color_arg("1,2,3,4").is_err());
        assert!(parse_color_arg("").is_err());
    }

    #[test]
    fn color_arg_rejects_non_numeric_components() {
        assert!(parse_color_arg("0.5,banana,1").is_err());
    }
}
