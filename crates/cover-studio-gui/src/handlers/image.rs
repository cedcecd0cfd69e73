use std::path::PathBuf;
use std::sync::Arc;

use cover_async_runtime::CoverUpdate;
use cover_compose::TemplateId;
use tokio::sync::mpsc;

pub async fn handle_decode(
    template: TemplateId,
    seq: u64,
    path: PathBuf,
    update_tx: &mpsc::UnboundedSender<CoverUpdate>,
) {
    match cover_compose::decode_image(&path).await {
        Ok(image) => {
            log::info!(
                "Decoded {} ({}×{})",
                path.display(),
                image.width,
                image.height
            );
            let _ = update_tx.send(CoverUpdate::ImageDecoded {
                template,
                seq,
                image: Arc::new(image),
            });
        }
        Err(e) => {
            let _ = update_tx.send(CoverUpdate::DecodeFailed {
                template,
                seq,
                message: format!("Failed to decode {}: {e}", path.display()),
            });
        }
    }
}
