use cover_compose::TransformPatch;
use eframe::egui;

use super::state::EditorState;
use crate::ui_components::{SliderBuilder, labeled_drag_clamped};

pub fn show(ui: &mut egui::Ui, state: &mut EditorState) {
    if state.session.committed().is_none() {
        return;
    }

    egui::CollapsingHeader::new("📐 Image Adjustment")
        .default_open(true)
        .show(ui, |ui| {
            let transform = state.session.transform();

            let mut opacity = transform.opacity;
            if SliderBuilder::new(&mut opacity, 0.0..=1.0)
                .text("Opacity")
                .show(ui)
            {
                state.session.apply_transform(TransformPatch {
                    opacity: Some(opacity),
                    ..Default::default()
                });
                state.needs_render = true;
            }

            let mut offset_x = transform.offset.x;
            if labeled_drag_clamped(ui, "Offset X:", &mut offset_x, -800.0..=800.0, " px") {
                state.session.apply_transform(TransformPatch {
                    offset_x: Some(offset_x),
                    ..Default::default()
                });
                state.needs_render = true;
            }

            let mut offset_y = transform.offset.y;
            if labeled_drag_clamped(ui, "Offset Y:", &mut offset_y, -800.0..=800.0, " px") {
                state.session.apply_transform(TransformPatch {
                    offset_y: Some(offset_y),
                    ..Default::default()
                });
                state.needs_render = true;
            }

            let mut scale = transform.scale;
            if SliderBuilder::new(&mut scale, 0.1..=3.0).text("Scale").show(ui) {
                state.session.apply_transform(TransformPatch {
                    scale: Some(scale),
                    ..Default::default()
                });
                state.needs_render = true;
            }
        });
}
