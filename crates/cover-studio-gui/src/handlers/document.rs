use std::path::PathBuf;

use cover_async_runtime::CoverUpdate;
use cover_compose::CoverDoc;
use tokio::sync::mpsc;

pub async fn handle_save(
    doc: CoverDoc,
    path: PathBuf,
    update_tx: &mpsc::UnboundedSender<CoverUpdate>,
) {
    match doc.save(&path).await {
        Ok(()) => {
            log::info!("Document saved to {}", path.display());
            let _ = update_tx.send(CoverUpdate::DocSaved { path });
        }
        Err(e) => {
            let _ = update_tx.send(CoverUpdate::Error {
                message: format!("Failed to save document: {e}"),
            });
        }
    }
}

pub async fn handle_load(path: PathBuf, update_tx: &mpsc::UnboundedSender<CoverUpdate>) {
    match CoverDoc::load(&path).await {
        Ok(doc) => {
            let _ = update_tx.send(CoverUpdate::DocLoaded { doc });
        }
        Err(e) => {
            let _ = update_tx.send(CoverUpdate::Error {
                message: format!("Failed to load document: {e}"),
            });
        }
    }
}
