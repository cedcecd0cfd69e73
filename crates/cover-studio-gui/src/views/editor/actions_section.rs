use cover_async_runtime::CoverCommand;
use cover_compose::CoverDoc;
use eframe::egui;
use tokio::sync::mpsc;

use super::state::EditorState;

pub fn show(
    ui: &mut egui::Ui,
    state: &mut EditorState,
    command_tx: &mpsc::UnboundedSender<CoverCommand>,
    status: &mut String,
) {
    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            show_document_buttons(ui, state, command_tx);
        });

        ui.add_space(10.0);

        show_export_button(ui, state, command_tx, status);
    });
}

fn show_document_buttons(
    ui: &mut egui::Ui,
    state: &EditorState,
    command_tx: &mpsc::UnboundedSender<CoverCommand>,
) {
    if ui.button("💾 Save Document").clicked() {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("cover.json")
            .save_file()
        {
            let _ = command_tx.send(CoverCommand::SaveDoc {
                doc: CoverDoc::from_session(&state.session),
                path,
            });
        }
    }

    if ui.button("📂 Load Document").clicked() {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        {
            let _ = command_tx.send(CoverCommand::LoadDoc { path });
        }
    }
}

fn show_export_button(
    ui: &mut egui::Ui,
    state: &EditorState,
    command_tx: &mpsc::UnboundedSender<CoverCommand>,
    status: &mut String,
) {
    if ui.button("🖨 Export PNG…").clicked() {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name(state.session.template().export_file_name)
            .save_file()
        {
            log::info!("Exporting cover to {}", path.display());
            let _ = command_tx.send(CoverCommand::Export {
                snapshot: state.session.snapshot(),
                output_path: path,
            });
            *status = "Exporting cover…".to_string();
        }
    }
}
