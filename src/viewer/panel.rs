//! "General settings" panel.

use crate::color;
use crate::config::{ranges, HelixConfig};
use crate::Vec3;

/// What the user did in the panel this frame.
#[derive(Default)]
pub struct PanelResponse {
    /// At least one field of the edited config changed.
    pub changed: bool,
    /// The regenerate button was clicked.
    pub regenerate: bool,
}

/// Draw sliders for every field of `config`, editing it in place.
pub fn settings_panel(
    ctx: &egui::Context,
    config: &mut HelixConfig,
    points: usize,
    height: f32,
) -> PanelResponse {
    let mut response = PanelResponse::default();

    egui::Window::new("General settings")
        .default_pos([12.0, 12.0])
        .resizable(false)
        .show(ctx, |ui| {
            let mut changed = false;

            changed |= ui
                .add(
                    egui::Slider::new(&mut config.size, ranges::SIZE)
                        .step_by(ranges::SIZE_STEP)
                        .text("size"),
                )
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut config.radius, ranges::RADIUS)
                        .step_by(ranges::RADIUS_STEP)
                        .text("radius"),
                )
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut config.height_step, ranges::HEIGHT_STEP)
                        .step_by(ranges::HEIGHT_STEP_STEP)
                        .text("height step"),
                )
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut config.turns, ranges::TURNS).text("turns"))
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut config.points_per_turn, ranges::POINTS_PER_TURN)
                        .step_by(ranges::POINTS_PER_TURN_STEP)
                        .text("points per turn"),
                )
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut config.randomness, ranges::RANDOMNESS)
                        .step_by(ranges::RANDOMNESS_STEP)
                        .text("randomness"),
                )
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut config.randomness_power, ranges::RANDOMNESS_POWER)
                        .step_by(ranges::RANDOMNESS_POWER_STEP)
                        .text("randomness power"),
                )
                .changed();

            changed |= color_row(ui, "inside color", &mut config.inside_color);
            changed |= color_row(ui, "outside color", &mut config.outside_color);

            ui.separator();
            ui.label(format!("{} points, height {:.1}", points, height));
            response.regenerate = ui.button("Regenerate").clicked();
            response.changed = changed;
        });

    response
}

/// Config colors are sRGB-encoded, so edit them as sRGB bytes.
fn color_row(ui: &mut egui::Ui, label: &str, value: &mut Vec3) -> bool {
    ui.horizontal(|ui| {
        let mut srgb = color::to_bytes(*value);
        let changed = ui.color_edit_button_srgb(&mut srgb).changed();
        ui.label(label);
        if changed {
            *value = color::from_bytes(srgb);
        }
        changed
    })
    .inner
}
