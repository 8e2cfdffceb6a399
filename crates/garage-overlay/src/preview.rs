//! Painted preview of a preset's cosmetic look.

use egui::{Align2, Color32, FontId, Rect, Response, Sense, Ui, Widget, pos2, vec2};
use garage_presets::{Customization, PaintColor};

const PREVIEW_HEIGHT: f32 = 160.0;
const BODY_PADDING: f32 = 18.0;
const WHEEL_RADIUS: f32 = 30.0;

/// Stylized car mockup: body in the primary color, an accent stripe, two
/// wheels, and a label block summarizing the cosmetic fields.
pub struct PresetPreview<'a> {
    customization: &'a Customization,
}

impl<'a> PresetPreview<'a> {
    /// Create a preview for the given cosmetic state.
    pub fn new(customization: &'a Customization) -> Self {
        Self { customization }
    }
}

impl Widget for PresetPreview<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let size = vec2(ui.available_width(), PREVIEW_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();

            // Canvas background
            painter.rect_filled(rect, 12.0, Color32::from_rgb(18, 20, 23));

            // Car body
            let body = rect.shrink(BODY_PADDING);
            painter.rect_filled(body, 22.0, paint_to_color32(self.customization.primary));

            // Accent stripe across the lower half of the body
            let stripe = Rect::from_min_max(
                pos2(body.min.x, body.min.y + body.height() * 0.45),
                pos2(body.max.x, body.max.y - body.height() * 0.25),
            );
            painter.rect_filled(stripe, 18.0, paint_to_color32(self.customization.accent));

            // Wheels
            let wheel_color = Color32::from_rgb(31, 31, 31);
            let wheel_y = body.max.y - 25.0;
            painter.circle_filled(pos2(body.min.x + 60.0, wheel_y), WHEEL_RADIUS, wheel_color);
            painter.circle_filled(pos2(body.max.x - 60.0, wheel_y), WHEEL_RADIUS, wheel_color);

            // Label block in the top-left corner of the canvas
            let font = FontId::proportional(13.0);
            let text_color = Color32::from_rgb(230, 230, 235);
            let lines = [
                format!("Car: {}", self.customization.car),
                format!("Decal: {}", self.customization.decal),
                format!("Wheels: {}", self.customization.wheels),
                format!("Finish: {}", finish_text(self.customization)),
            ];
            for (row, line) in lines.iter().enumerate() {
                painter.text(
                    pos2(rect.min.x + 12.0, rect.min.y + 12.0 + 16.0 * row as f32),
                    Align2::LEFT_TOP,
                    line,
                    font.clone(),
                    text_color,
                );
            }
        }

        response
    }
}

/// Human-readable paint finish, e.g. `"Gloss"` or `"Matte, Pearlescent"`.
pub fn finish_text(customization: &Customization) -> String {
    let base = if customization.matte { "Matte" } else { "Gloss" };
    if customization.pearlescent {
        format!("{base}, Pearlescent")
    } else {
        base.to_string()
    }
}

fn paint_to_color32(color: PaintColor) -> Color32 {
    let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgb(channel(color.r), channel(color.g), channel(color.b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_text_covers_all_combinations() {
        let mut customization = Customization::default();
        assert_eq!(finish_text(&customization), "Gloss");

        customization.pearlescent = true;
        assert_eq!(finish_text(&customization), "Gloss, Pearlescent");

        customization.matte = true;
        assert_eq!(finish_text(&customization), "Matte, Pearlescent");

        customization.pearlescent = false;
        assert_eq!(finish_text(&customization), "Matte");
    }

    #[test]
    fn color_conversion_clamps_and_rounds() {
        assert_eq!(
            paint_to_color32(PaintColor::new(0.0, 0.5, 1.0)),
            Color32::from_rgb(0, 128, 255)
        );
        // Out-of-range channels stay displayable.
        assert_eq!(
            paint_to_color32(PaintColor::new(-0.5, 1.5, 0.12)),
            Color32::from_rgb(0, 255, 31)
        );
    }
}
