use eframe::egui;

use super::state::EditorState;
use crate::ui_components;

pub fn show(ui: &mut egui::Ui, state: &mut EditorState) {
    egui::CollapsingHeader::new("🎨 Background Color")
        .default_open(true)
        .show(ui, |ui| {
            if let Some(color) =
                ui_components::hex_color_row(ui, "Color:", &mut state.background_hex)
            {
                state.session.set_background_color(color);
                state.needs_render = true;
            }
        });
}
