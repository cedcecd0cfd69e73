use std::sync::Arc;

use cover_async_runtime::{CoverCommand, CoverUpdate};
use cover_compose::FontBook;
use tokio::sync::mpsc;

use crate::handlers;

/// Async worker task that processes cover commands and sends updates
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<CoverCommand>,
    update_tx: mpsc::UnboundedSender<CoverUpdate>,
) {
    let fonts = match FontBook::from_system() {
        Ok(fonts) => Some(Arc::new(fonts)),
        Err(e) => {
            let _ = update_tx.send(CoverUpdate::Error {
                message: format!("Failed to load a font: {e}"),
            });
            None
        }
    };

    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, fonts.as_ref(), &mut command_rx, &update_tx).await;
    }
}

async fn process_command(
    cmd: CoverCommand,
    fonts: Option<&Arc<FontBook>>,
    command_rx: &mut mpsc::UnboundedReceiver<CoverCommand>,
    update_tx: &mpsc::UnboundedSender<CoverUpdate>,
) {
    match cmd {
        CoverCommand::DecodeImage {
            template,
            seq,
            path,
        } => {
            handlers::image::handle_decode(template, seq, path, update_tx).await;
        }
        CoverCommand::RenderPreview {
            mut template,
            mut snapshot,
        } => {
            // Drain any queued preview commands, keeping only the most recent
            while let Ok(next_cmd) = command_rx.try_recv() {
                if let CoverCommand::RenderPreview {
                    template: new_template,
                    snapshot: new_snapshot,
                } = next_cmd
                {
                    log::debug!("Discarding queued preview render, using newer request");
                    template = new_template;
                    snapshot = new_snapshot;
                } else {
                    // Non-preview command found, need to process it next
                    // Since we can't put it back, process it now before the preview
                    Box::pin(process_command(next_cmd, fonts, command_rx, update_tx)).await;
                }
            }

            handlers::preview::handle_render(template, snapshot, fonts, update_tx).await;
        }
        CoverCommand::Export {
            snapshot,
            output_path,
        } => {
            handlers::export::handle_export(snapshot, output_path, fonts, update_tx).await;
        }
        CoverCommand::SaveDoc { doc, path } => {
            handlers::document::handle_save(doc, path, update_tx).await;
        }
        CoverCommand::LoadDoc { path } => {
            handlers::document::handle_load(path, update_tx).await;
        }
    }
}
