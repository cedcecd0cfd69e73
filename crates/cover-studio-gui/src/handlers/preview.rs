use std::sync::Arc;

use cover_async_runtime::CoverUpdate;
use cover_compose::{CoverSnapshot, DISPLAY_SCALE, FontBook, TemplateId};
use tokio::sync::mpsc;

pub async fn handle_render(
    template: TemplateId,
    snapshot: CoverSnapshot,
    fonts: Option<&Arc<FontBook>>,
    update_tx: &mpsc::UnboundedSender<CoverUpdate>,
) {
    let Some(fonts) = fonts else {
        let _ = update_tx.send(CoverUpdate::Error {
            message: "Preview unavailable: no font loaded".to_string(),
        });
        return;
    };

    let fonts = fonts.clone();
    let rendered = tokio::task::spawn_blocking(move || {
        cover_compose::render_preview(&snapshot, &fonts, DISPLAY_SCALE)
    })
    .await;

    match rendered {
        Ok(Ok(preview)) => {
            let (width, height) = preview.dimensions();
            let _ = update_tx.send(CoverUpdate::PreviewRendered {
                template,
                width: width as usize,
                height: height as usize,
                rgba_data: preview.into_raw(),
            });
        }
        Ok(Err(e)) => {
            let _ = update_tx.send(CoverUpdate::Error {
                message: format!("Failed to render preview: {e}"),
            });
        }
        Err(e) => {
            let _ = update_tx.send(CoverUpdate::Error {
                message: format!("Preview task failed: {e}"),
            });
        }
    }
}
