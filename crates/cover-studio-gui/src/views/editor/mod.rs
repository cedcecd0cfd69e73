mod actions_section;
mod background_section;
mod image_section;
mod state;
mod text_section;
mod upload_section;

pub use state::EditorState;

use cover_async_runtime::CoverCommand;
use eframe::egui;
use tokio::sync::mpsc;

pub fn show(
    ui: &mut egui::Ui,
    state: &mut EditorState,
    command_tx: &mpsc::UnboundedSender<CoverCommand>,
    status: &mut String,
) {
    egui::SidePanel::left("cover_controls")
        .min_width(340.0)
        .show_inside(ui, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading(format!("{} Cover", state.session.template().name));
                ui.separator();

                if state.session.template().styleable {
                    background_section::show(ui, state);
                    ui.add_space(10.0);
                    ui.separator();
                    ui.add_space(10.0);
                }

                upload_section::show(ui, state, command_tx, status);
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(10.0);

                image_section::show(ui, state);
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(10.0);

                text_section::show(ui, state);
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(10.0);

                actions_section::show(ui, state, command_tx, status);
            });
        });

    show_preview_area(ui, state);
    show_pending_dialog(ui.ctx().clone(), state, status);

    if state.needs_render {
        state.needs_render = false;
        let _ = command_tx.send(CoverCommand::RenderPreview {
            template: state.session.template().id,
            snapshot: state.session.snapshot(),
        });
    }
}

fn show_preview_area(ui: &mut egui::Ui, state: &EditorState) {
    egui::CentralPanel::default().show_inside(ui, |ui| {
        if let Some(texture) = &state.preview_texture {
            ui.centered_and_justified(|ui| {
                ui.image((texture.id(), texture.size_vec2()));
            });
        } else {
            ui.centered_and_justified(|ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("Rendering Preview");
                    ui.label("The live cover preview appears here");
                });
            });
        }
    });
}

/// Modal flow for a newly selected image: spinner while decoding, then
/// the decoded image with confirm/cancel.
fn show_pending_dialog(ctx: egui::Context, state: &mut EditorState, status: &mut String) {
    if state.session.is_loading() {
        egui::Window::new("Decoding Image")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(&ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new());
                    ui.label("Reading image file…");
                });
            });
        return;
    }

    let Some(pending) = state.session.pending().cloned() else {
        state.pending_texture = None;
        return;
    };

    if state.pending_texture.is_none() {
        let color_image = egui::ColorImage::from_rgba_unmultiplied(
            [pending.width as usize, pending.height as usize],
            &pending.rgba_data,
        );
        state.pending_texture = Some(ctx.load_texture(
            "pending_image",
            color_image,
            egui::TextureOptions::default(),
        ));
    }

    let mut confirm = false;
    let mut cancel = false;

    egui::Window::new("Confirm Background Image")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(&ctx, |ui| {
            if let Some(texture) = &state.pending_texture {
                let size = texture.size_vec2();
                let fit = (420.0 / size.x).min(540.0 / size.y).min(1.0);
                ui.image((texture.id(), size * fit));
            }
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("✔ Use This Image").clicked() {
                    confirm = true;
                }
                if ui.button("✖ Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if confirm {
        state.session.confirm_pending();
        state.pending_texture = None;
        state.needs_render = true;
        *status = "Background image updated".to_string();
    } else if cancel {
        state.session.cancel_pending();
        state.pending_texture = None;
        *status = "Image upload canceled".to_string();
    }
}
