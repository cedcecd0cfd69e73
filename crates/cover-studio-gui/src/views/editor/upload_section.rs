use cover_async_runtime::CoverCommand;
use eframe::egui;
use tokio::sync::mpsc;

use super::state::EditorState;

pub fn show(
    ui: &mut egui::Ui,
    state: &mut EditorState,
    command_tx: &mpsc::UnboundedSender<CoverCommand>,
    status: &mut String,
) {
    egui::CollapsingHeader::new("🖼 Background Image")
        .default_open(true)
        .show(ui, |ui| {
            let decoding = state.session.is_loading();

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!decoding, egui::Button::new("➕ Choose Image…"))
                    .clicked()
                {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Image", &["png", "jpg", "jpeg"])
                        .pick_file()
                    {
                        let seq = state.session.begin_upload();
                        let _ = command_tx.send(CoverCommand::DecodeImage {
                            template: state.session.template().id,
                            seq,
                            path,
                        });
                        *status = "Decoding image…".to_string();
                    }
                }

                if decoding {
                    ui.add(egui::Spinner::new());
                }
            });

            ui.add_space(5.0);

            if let Some(image) = state.session.committed() {
                ui.label(format!("Background: {}×{}", image.width, image.height));
            } else {
                ui.label("No background image");
            }
        });
}
