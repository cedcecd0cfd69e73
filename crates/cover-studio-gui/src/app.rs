use cover_async_runtime::{CoverCommand, CoverUpdate};
use cover_compose::TemplateId;
use eframe::egui;
use tokio::sync::mpsc;

use crate::logger::AppLogger;
use crate::views::editor::{self, EditorState};

pub struct CoverStudioApp {
    mode: TemplateId,
    classic: EditorState,
    styled: EditorState,
    status: String,

    // Async infrastructure
    command_tx: mpsc::UnboundedSender<CoverCommand>,
    update_rx: mpsc::UnboundedReceiver<CoverUpdate>,

    logger: AppLogger,

    // Runtime handle
    _tokio_handle: tokio::runtime::Handle,
}

impl CoverStudioApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        tokio_handle: tokio::runtime::Handle,
        logger: AppLogger,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        // Spawn worker task
        tokio_handle.spawn(crate::worker::worker_task(command_rx, update_tx));

        Self {
            mode: TemplateId::Classic,
            classic: EditorState::new(TemplateId::Classic),
            styled: EditorState::new(TemplateId::Styled),
            status: String::new(),
            command_tx,
            update_rx,
            logger,
            _tokio_handle: tokio_handle,
        }
    }

    fn editor_mut(&mut self, template: TemplateId) -> &mut EditorState {
        match template {
            TemplateId::Classic => &mut self.classic,
            TemplateId::Styled => &mut self.styled,
        }
    }
}

impl eframe::App for CoverStudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process all pending updates from worker
        while let Ok(update) = self.update_rx.try_recv() {
            match update {
                CoverUpdate::ImageDecoded {
                    template,
                    seq,
                    image,
                } => {
                    let editor = self.editor_mut(template);
                    if editor.session.apply_decoded(seq, image) {
                        editor.pending_texture = None;
                        self.status = "Image decoded — confirm or cancel".to_string();
                    } else {
                        log::debug!("Discarding decode result from superseded upload");
                    }
                    ctx.request_repaint();
                }
                CoverUpdate::DecodeFailed {
                    template,
                    seq,
                    message,
                } => {
                    if self.editor_mut(template).session.decode_failed(seq) {
                        log::warn!("Image decode failed: {message}");
                        self.status = format!("Error: {message}");
                    }
                }
                CoverUpdate::PreviewRendered {
                    template,
                    width,
                    height,
                    rgba_data,
                } => {
                    let color_image =
                        egui::ColorImage::from_rgba_unmultiplied([width, height], &rgba_data);

                    let editor = self.editor_mut(template);
                    if let Some(texture) = &mut editor.preview_texture {
                        texture.set(color_image, egui::TextureOptions::default());
                    } else {
                        editor.preview_texture = Some(ctx.load_texture(
                            "cover_preview",
                            color_image,
                            egui::TextureOptions::default(),
                        ));
                    }
                }
                CoverUpdate::ExportComplete {
                    path,
                    width,
                    height,
                } => {
                    log::info!("Exported cover to {}", path.display());
                    self.status = format!("Exported {width}×{height} → {}", path.display());
                }
                CoverUpdate::DocSaved { path } => {
                    self.status = format!("Document saved → {}", path.display());
                }
                CoverUpdate::DocLoaded { doc } => {
                    let template = doc.template;
                    match doc.into_session() {
                        Ok(mut session) => {
                            let editor = self.editor_mut(template);
                            // Keep the decoded pixels; the document only
                            // describes texts, styles and the transform.
                            if let Some(image) = editor.session.committed() {
                                session.restore_committed(image.clone());
                            }
                            editor.session = session;
                            editor.sync_buffers();
                            editor.needs_render = true;
                            self.mode = template;
                            self.status = "Document loaded".to_string();
                        }
                        Err(e) => {
                            self.status = format!("Error: {e}");
                        }
                    }
                }
                CoverUpdate::Error { message } => {
                    self.status = format!("Error: {message}");
                }
            }
        }

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.mode, TemplateId::Classic, "📘 Classic");
                ui.selectable_value(&mut self.mode, TemplateId::Styled, "🎨 Styled");
            });
        });

        let latest_log = self.logger.latest_message();
        let log_entries = self.logger.entries();
        let Self {
            mode,
            classic,
            styled,
            status,
            command_tx,
            ..
        } = self;
        let editor = match mode {
            TemplateId::Classic => classic,
            TemplateId::Styled => styled,
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            editor::show(ui, editor, command_tx, status);

            if !status.is_empty() {
                ui.separator();
                ui.label(status.as_str());
            }
            if latest_log.is_some() {
                egui::CollapsingHeader::new("Log")
                    .default_open(false)
                    .show(ui, |ui| {
                        for entry in log_entries.iter().rev().take(20) {
                            ui.label(
                                egui::RichText::new(format!(
                                    "{} [{}] {}",
                                    entry.timestamp.format("%H:%M:%S"),
                                    entry.level,
                                    entry.message
                                ))
                                .weak(),
                            );
                        }
                    });
            }
        });
    }
}
