use std::path::PathBuf;
use std::sync::Arc;

use cover_async_runtime::CoverUpdate;
use cover_compose::{CoverSnapshot, FontBook};
use tokio::sync::mpsc;

pub async fn handle_export(
    snapshot: CoverSnapshot,
    output_path: PathBuf,
    fonts: Option<&Arc<FontBook>>,
    update_tx: &mpsc::UnboundedSender<CoverUpdate>,
) {
    let Some(fonts) = fonts else {
        let _ = update_tx.send(CoverUpdate::Error {
            message: "Export unavailable: no font loaded".to_string(),
        });
        return;
    };

    match cover_compose::export_png(snapshot, fonts.clone(), &output_path).await {
        Ok((width, height)) => {
            let _ = update_tx.send(CoverUpdate::ExportComplete {
                path: output_path,
                width,
                height,
            });
        }
        Err(e) => {
            let _ = update_tx.send(CoverUpdate::Error {
                message: format!("Failed to export cover: {e}"),
            });
        }
    }
}
