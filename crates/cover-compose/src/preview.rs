use image::{RgbaImage, imageops};

use crate::compose;
use crate::font::FontBook;
use crate::session::CoverSnapshot;
use crate::types::Result;

/// Display factor the editor uses for its on-screen preview. Cosmetic
/// only: export always happens at the design resolution.
pub const DISPLAY_SCALE: f32 = 0.375;

/// Render the full-resolution surface, then downscale it for display.
pub fn render_preview(
    snapshot: &CoverSnapshot,
    fonts: &FontBook,
    display_scale: f32,
) -> Result<RgbaImage> {
    let full = compose::render(snapshot, fonts)?;
    let width = ((full.width() as f32 * display_scale).round()).max(1.0) as u32;
    let height = ((full.height() as f32 * display_scale).round()).max(1.0) as u32;
    Ok(imageops::resize(
        &full,
        width,
        height,
        imageops::FilterType::Triangle,
    ))
}
