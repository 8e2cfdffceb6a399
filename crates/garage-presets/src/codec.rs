//! Line codec for preset records.
//!
//! Two textual formats meet here:
//!
//! - **Storage format**: one record per `|`-delimited line with up to 9
//!   fields (name, loadout code, two color tokens, three labels, two finish
//!   flags). Fields past the second are optional and fall back to their
//!   [`Customization`] defaults. This is the format of both the storage file
//!   and downloaded catalog files.
//! - **Host-native format**: one record per line, `Name<whitespace>Code`,
//!   split at the *last* whitespace run because names may contain spaces.
//!
//! All parse functions are tolerant: malformed numeric or flag tokens fall
//! back to documented defaults instead of rejecting the record, and no
//! function here returns an error or panics.

use crate::preset::{Customization, PaintColor, Preset};

/// Field delimiter of the storage format.
const FIELD_DELIMITER: char = '|';

/// Parse one storage-format line into a preset.
///
/// Returns `None` for blank lines, `#` comment lines, lines with fewer than
/// two fields, and lines whose name or loadout code is empty after trimming.
/// Every field is trimmed before use. Missing trailing fields leave the
/// corresponding customization attribute at its default; a lone trailing
/// delimiter does not count as an extra (empty) field.
pub fn parse_storage_line(line: &str) -> Option<Preset> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let mut fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    // A line ending in the delimiter yields one empty trailing field; treat
    // it as absent rather than as an explicitly empty value.
    if fields.last() == Some(&"") {
        fields.pop();
    }
    if fields.len() < 2 {
        return None;
    }

    let name = fields[0].trim();
    let loadout_code = fields[1].trim();
    if name.is_empty() || loadout_code.is_empty() {
        return None;
    }

    let mut customization = Customization::default();
    if let Some(token) = fields.get(2) {
        customization.primary = parse_color_token(token.trim());
    }
    if let Some(token) = fields.get(3) {
        customization.accent = parse_color_token(token.trim());
    }
    if let Some(token) = fields.get(4) {
        customization.car = token.trim().to_string();
    }
    if let Some(token) = fields.get(5) {
        customization.decal = token.trim().to_string();
    }
    if let Some(token) = fields.get(6) {
        customization.wheels = token.trim().to_string();
    }
    if let Some(token) = fields.get(7) {
        customization.matte = parse_finish_flag(token.trim(), "matte");
    }
    if let Some(token) = fields.get(8) {
        customization.pearlescent = parse_finish_flag(token.trim(), "pearlescent");
    }

    Some(Preset {
        name: name.to_string(),
        loadout_code: loadout_code.to_string(),
        customization,
    })
}

/// Parse one host-native preset line into a preset.
///
/// The host format is `Name<whitespace>LoadoutCode` with the split anchored
/// on the *last* space or tab, since names themselves may contain spaces.
/// Returns `None` for blank lines, `#` comment lines, lines without any
/// whitespace, and lines where either piece trims to empty. The resulting
/// preset carries the default customization.
pub fn parse_vanilla_line(line: &str) -> Option<Preset> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let split_at = line.rfind([' ', '\t'])?;
    let name = line[..split_at].trim();
    let loadout_code = line[split_at + 1..].trim();
    if name.is_empty() || loadout_code.is_empty() {
        return None;
    }

    Some(Preset::new(name, loadout_code))
}

/// Parse a `,`-separated color token into a [`PaintColor`].
///
/// Per component:
/// - unparsable values default to 0,
/// - negative values clamp to 0,
/// - values greater than 1 are read as 0–255 scale and divided by 255.
///
/// Missing components stay at the zero-initialized 0 (black), *not* the
/// [`Customization`] default colors — external files depend on this.
/// Components beyond the third are ignored.
pub fn parse_color_token(token: &str) -> PaintColor {
    let mut channels = [0.0f32; 3];
    for (channel, component) in channels.iter_mut().zip(token.split(',')) {
        let value = component.trim().parse::<f32>().unwrap_or(0.0);
        // max() also collapses NaN to 0 since it prefers the non-NaN operand.
        let value = value.max(0.0);
        *channel = if value > 1.0 { value / 255.0 } else { value };
    }
    PaintColor::new(channels[0], channels[1], channels[2])
}

/// Parse a finish flag token.
///
/// A token is truthy iff it equals `"1"`, `"true"`, or the finish-specific
/// literal (`"matte"` or `"pearlescent"`), compared case-sensitively.
/// Anything else, including the empty string, is falsy.
pub fn parse_finish_flag(token: &str, finish_literal: &str) -> bool {
    token == "1" || token == "true" || token == finish_literal
}

/// Serialize a preset into one storage-format line.
///
/// Always emits exactly 9 fields in fixed order. Colors are written as
/// fixed-point decimals with 3 digits after the point in `[0, 1]` scale;
/// flags as `1`/`0`. The caller appends the line terminator.
pub fn serialize_storage_line(preset: &Preset) -> String {
    let c = &preset.customization;
    format!(
        "{}|{}|{}|{}|{}|{}|{}|{}|{}",
        preset.name,
        preset.loadout_code,
        format_color_token(c.primary),
        format_color_token(c.accent),
        c.car,
        c.decal,
        c.wheels,
        u8::from(c.matte),
        u8::from(c.pearlescent),
    )
}

/// Format a color as a `r,g,b` token with 3 decimal places per channel.
pub fn format_color_token(color: PaintColor) -> String {
    format!("{:.3},{:.3},{:.3}", color.r, color.g, color.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn assert_color(color: PaintColor, r: f32, g: f32, b: f32) {
        assert!(
            (color.r - r).abs() < EPSILON
                && (color.g - g).abs() < EPSILON
                && (color.b - b).abs() < EPSILON,
            "expected ({r}, {g}, {b}), got {color:?}"
        );
    }

    // --- storage lines ---

    #[test]
    fn parses_full_record() {
        let preset =
            parse_storage_line("Night Rider|CODE-123|0.1,0.2,0.3|0.9,0.8,0.7|Fennec|Flames|Cristiano|1|0")
                .unwrap();
        assert_eq!(preset.name, "Night Rider");
        assert_eq!(preset.loadout_code, "CODE-123");
        assert_color(preset.customization.primary, 0.1, 0.2, 0.3);
        assert_color(preset.customization.accent, 0.9, 0.8, 0.7);
        assert_eq!(preset.customization.car, "Fennec");
        assert_eq!(preset.customization.decal, "Flames");
        assert_eq!(preset.customization.wheels, "Cristiano");
        assert!(preset.customization.matte);
        assert!(!preset.customization.pearlescent);
    }

    #[test]
    fn two_fields_use_default_customization() {
        let preset = parse_storage_line("Minimal|CODE").unwrap();
        assert_eq!(preset.customization, Customization::default());
    }

    #[test]
    fn partial_record_keeps_trailing_defaults() {
        let preset = parse_storage_line("P|C|0.5,0.5,0.5|0.1,0.1,0.1|Dominus").unwrap();
        assert_eq!(preset.customization.car, "Dominus");
        // Fields 6+ absent: labels and flags stay at their defaults.
        assert_eq!(preset.customization.decal, "None");
        assert_eq!(preset.customization.wheels, "OEM");
        assert!(!preset.customization.matte);
    }

    #[test]
    fn rejects_lines_with_fewer_than_two_fields() {
        assert!(parse_storage_line("JustOneField").is_none());
        assert!(parse_storage_line("|").is_none());
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        assert!(parse_storage_line("").is_none());
        assert!(parse_storage_line("   ").is_none());
        assert!(parse_storage_line("# comment").is_none());
        assert!(parse_storage_line("   # indented comment").is_none());
    }

    #[test]
    fn rejects_empty_name_or_code() {
        assert!(parse_storage_line("|CODE|0.1,0.1,0.1").is_none());
        assert!(parse_storage_line("Name| |0.1,0.1,0.1").is_none());
    }

    #[test]
    fn trims_whitespace_around_fields() {
        let preset = parse_storage_line("  Padded Name | CODE | 0.2,0.2,0.2 ").unwrap();
        assert_eq!(preset.name, "Padded Name");
        assert_eq!(preset.loadout_code, "CODE");
        assert_color(preset.customization.primary, 0.2, 0.2, 0.2);
    }

    #[test]
    fn single_trailing_delimiter_is_not_a_field() {
        // "Name|Code|" has two fields; the car label keeps its default.
        let preset = parse_storage_line("Name|Code|").unwrap();
        assert_eq!(preset.customization.primary, Customization::default().primary);

        // "Name|Code||" has three: the third is present but empty, so the
        // primary color is explicitly black rather than the default.
        let preset = parse_storage_line("Name|Code||").unwrap();
        assert_eq!(preset.customization.primary, PaintColor::ZERO);
    }

    #[test]
    fn interior_empty_fields_are_explicit_values() {
        let preset = parse_storage_line("Name|Code|||Fennec||OEM").unwrap();
        // Empty color tokens parse to black.
        assert_eq!(preset.customization.primary, PaintColor::ZERO);
        assert_eq!(preset.customization.accent, PaintColor::ZERO);
        assert_eq!(preset.customization.car, "Fennec");
        // Empty label is an explicit empty string, not the default.
        assert_eq!(preset.customization.decal, "");
        assert_eq!(preset.customization.wheels, "OEM");
    }

    #[test]
    fn fields_beyond_nine_are_ignored() {
        let preset = parse_storage_line("N|C|0,0,0|0,0,0|a|b|c|1|1|surplus|more").unwrap();
        assert_eq!(preset.name, "N");
        assert!(preset.customization.matte && preset.customization.pearlescent);
    }

    // --- color tokens ---

    #[test]
    fn color_token_rescales_255_range() {
        assert_color(parse_color_token("255,0,128"), 1.0, 0.0, 0.50196);
    }

    #[test]
    fn color_token_defaults_unparsable_component() {
        assert_color(parse_color_token("0.5,bad,1"), 0.5, 0.0, 1.0);
    }

    #[test]
    fn color_token_missing_component_stays_zero() {
        // Two components: the third channel stays at the zero default.
        assert_color(parse_color_token("1,1"), 1.0, 1.0, 0.0);
        assert_eq!(parse_color_token(""), PaintColor::ZERO);
    }

    #[test]
    fn color_token_clamps_negative_components() {
        assert_color(parse_color_token("-0.5,-2,0.3"), 0.0, 0.0, 0.3);
    }

    #[test]
    fn color_token_ignores_extra_components() {
        assert_color(parse_color_token("0.1,0.2,0.3,0.9,0.9"), 0.1, 0.2, 0.3);
    }

    #[test]
    fn color_token_trims_components() {
        assert_color(parse_color_token(" 0.25 , 0.5 , 0.75 "), 0.25, 0.5, 0.75);
    }

    #[test]
    fn color_token_nan_collapses_to_zero() {
        assert_eq!(parse_color_token("NaN,NaN,NaN"), PaintColor::ZERO);
    }

    // --- finish flags ---

    #[test]
    fn finish_flag_accepts_truthy_literals() {
        assert!(parse_finish_flag("1", "matte"));
        assert!(parse_finish_flag("true", "matte"));
        assert!(parse_finish_flag("matte", "matte"));
        assert!(parse_finish_flag("pearlescent", "pearlescent"));
    }

    #[test]
    fn finish_flag_is_case_sensitive() {
        assert!(!parse_finish_flag("Matte", "matte"));
        assert!(!parse_finish_flag("TRUE", "matte"));
        assert!(!parse_finish_flag("True", "pearlescent"));
    }

    #[test]
    fn finish_flag_rejects_everything_else() {
        assert!(!parse_finish_flag("", "matte"));
        assert!(!parse_finish_flag("0", "matte"));
        assert!(!parse_finish_flag("false", "matte"));
        assert!(!parse_finish_flag("pearlescent", "matte"));
        assert!(!parse_finish_flag("yes", "matte"));
    }

    // --- serialization ---

    #[test]
    fn serializes_all_nine_fields() {
        let mut preset = Preset::new("Octane Club", "ABCD-EFGH");
        preset.customization.matte = true;
        let line = serialize_storage_line(&preset);
        assert_eq!(
            line,
            "Octane Club|ABCD-EFGH|0.180,0.180,0.180|0.900,0.350,0.150|Octane|None|OEM|1|0"
        );
        assert_eq!(line.matches('|').count(), 8);
    }

    #[test]
    fn serialized_line_parses_back() {
        let mut preset = Preset::new("Round Trip", "CODE");
        preset.customization.primary = PaintColor::new(0.125, 0.5, 1.0);
        preset.customization.pearlescent = true;
        let parsed = parse_storage_line(&serialize_storage_line(&preset)).unwrap();
        assert_eq!(parsed, preset);
    }

    #[test]
    fn format_color_token_fixed_precision() {
        assert_eq!(format_color_token(PaintColor::new(0.5, 0.0, 1.0)), "0.500,0.000,1.000");
        assert_eq!(format_color_token(PaintColor::ZERO), "0.000,0.000,0.000");
    }

    // --- host-native lines ---

    #[test]
    fn vanilla_line_splits_at_last_whitespace() {
        let preset = parse_vanilla_line("My  Special Car\t00112233").unwrap();
        assert_eq!(preset.name, "My  Special Car");
        assert_eq!(preset.loadout_code, "00112233");
    }

    #[test]
    fn vanilla_line_space_separated() {
        let preset = parse_vanilla_line("Breakout GHJK0011").unwrap();
        assert_eq!(preset.name, "Breakout");
        assert_eq!(preset.loadout_code, "GHJK0011");
        assert_eq!(preset.customization, Customization::default());
    }

    #[test]
    fn vanilla_line_collapses_whitespace_run_before_code() {
        let preset = parse_vanilla_line("Spaced Name   CODE99").unwrap();
        assert_eq!(preset.name, "Spaced Name");
        assert_eq!(preset.loadout_code, "CODE99");
    }

    #[test]
    fn vanilla_line_rejects_missing_whitespace_or_empty_pieces() {
        assert!(parse_vanilla_line("NoWhitespaceHere").is_none());
        assert!(parse_vanilla_line("OnlyAName ").is_none());
        assert!(parse_vanilla_line("").is_none());
        assert!(parse_vanilla_line("# comment line").is_none());
    }
}
