use cover_compose::{StylePatch, TEXT_OFFSET_LIMIT, TEXT_SCALE_MAX, TEXT_SCALE_MIN, TextStyle};
use eframe::egui;

use super::state::EditorState;
use crate::ui_components::{SliderBuilder, color_button, labeled_drag_clamped};

pub fn show(ui: &mut egui::Ui, state: &mut EditorState) {
    egui::CollapsingHeader::new("📝 Text")
        .default_open(true)
        .show(ui, |ui| {
            let styleable = state.session.template().styleable;
            let fields = state.session.template().fields.clone();

            for (idx, field) in fields.iter().enumerate() {
                if idx > 0 {
                    ui.separator();
                }

                ui.push_id(field.key, |ui| {
                    ui.label(egui::RichText::new(field.label).strong());

                    let mut text = state
                        .session
                        .text(field.key)
                        .unwrap_or_default()
                        .to_string();
                    if ui.text_edit_singleline(&mut text).changed() {
                        let _ = state.session.set_text(field.key, text);
                        state.needs_render = true;
                    }

                    if styleable {
                        if let Some(style) = state.session.text_style(field.key) {
                            show_style_controls(ui, state, field.key, style);
                        }
                    }
                });
            }
        });
}

fn show_style_controls(ui: &mut egui::Ui, state: &mut EditorState, key: &str, style: TextStyle) {
    let mut offset_x = style.offset.x;
    if labeled_drag_clamped(
        ui,
        "Offset X:",
        &mut offset_x,
        -TEXT_OFFSET_LIMIT..=TEXT_OFFSET_LIMIT,
        " px",
    ) {
        let _ = state.session.set_text_style(
            key,
            StylePatch {
                offset_x: Some(offset_x),
                ..Default::default()
            },
        );
        state.needs_render = true;
    }

    let mut offset_y = style.offset.y;
    if labeled_drag_clamped(
        ui,
        "Offset Y:",
        &mut offset_y,
        -TEXT_OFFSET_LIMIT..=TEXT_OFFSET_LIMIT,
        " px",
    ) {
        let _ = state.session.set_text_style(
            key,
            StylePatch {
                offset_y: Some(offset_y),
                ..Default::default()
            },
        );
        state.needs_render = true;
    }

    let mut scale = style.scale;
    if SliderBuilder::new(&mut scale, TEXT_SCALE_MIN..=TEXT_SCALE_MAX)
        .step(0.1)
        .text("Scale")
        .show(ui)
    {
        let _ = state.session.set_text_style(
            key,
            StylePatch {
                scale: Some(scale),
                ..Default::default()
            },
        );
        state.needs_render = true;
    }

    ui.horizontal(|ui| {
        ui.label("Color:");
        let mut color = style.color;
        if color_button(ui, &mut color) {
            let _ = state.session.set_text_style(
                key,
                StylePatch {
                    color: Some(color),
                    ..Default::default()
                },
            );
            state.needs_render = true;
        }
    });
}
