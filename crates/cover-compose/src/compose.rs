//! CPU compositor producing the cover's render surface.
//!
//! Paint order is fixed: base paint, background image at its transform
//! and opacity, template decorations, then text fields in template
//! order. The surface rendered here is exactly what export encodes;
//! on-screen display scaling happens elsewhere and never feeds back.

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use image::RgbaImage;

use crate::font::FontBook;
use crate::session::CoverSnapshot;
use crate::template::{Align, BasePaint, Decoration, ImagePlacement};
use crate::types::{CoverError, DecodedImage, ImageTransform, Result, Rgba};

/// Straight-alpha source-over blend of one pixel. The canvas is opaque
/// after the base paint, so destination alpha only ever grows.
pub(crate) fn blend_px(dst: &mut image::Rgba<u8>, src: Rgba) {
    if src.a == 0 {
        return;
    }
    if src.a == 0xFF {
        *dst = image::Rgba([src.r, src.g, src.b, 0xFF]);
        return;
    }
    let sa = src.a as u16;
    let inv = 255 - sa;
    let channels = [src.r, src.g, src.b];
    for (i, s) in channels.into_iter().enumerate() {
        dst.0[i] = ((s as u16 * sa + dst.0[i] as u16 * inv + 127) / 255) as u8;
    }
    dst.0[3] = dst.0[3].max(src.a);
}

fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}

fn lerp_color(a: Rgba, b: Rgba, t: f32) -> Rgba {
    Rgba::rgba(
        lerp_channel(a.r, b.r, t),
        lerp_channel(a.g, b.g, t),
        lerp_channel(a.b, b.b, t),
        lerp_channel(a.a, b.a, t),
    )
}

/// Fill an axis-aligned rectangle with a paint, clipped to the canvas
fn paint_rect(img: &mut RgbaImage, x: f32, y: f32, width: f32, height: f32, paint: BasePaint) {
    let x0 = x.max(0.0) as u32;
    let y0 = y.max(0.0) as u32;
    let x1 = ((x + width).min(img.width() as f32)).max(0.0) as u32;
    let y1 = ((y + height).min(img.height() as f32)).max(0.0) as u32;
    if x1 <= x0 || y1 <= y0 {
        return;
    }

    for py in y0..y1 {
        for px in x0..x1 {
            let color = match paint {
                BasePaint::Solid(c) => c,
                BasePaint::VerticalGradient { top, bottom } => {
                    let t = (py as f32 - y) / height.max(1.0);
                    lerp_color(top, bottom, t.clamp(0.0, 1.0))
                }
                BasePaint::HorizontalGradient { left, right } => {
                    let t = (px as f32 - x) / width.max(1.0);
                    lerp_color(left, right, t.clamp(0.0, 1.0))
                }
            };
            blend_px(img.get_pixel_mut(px, py), color);
        }
    }
}

/// Filled circle with an anti-aliased rim
fn paint_disc(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, color: Rgba) {
    let x0 = ((cx - radius).floor().max(0.0)) as u32;
    let y0 = ((cy - radius).floor().max(0.0)) as u32;
    let x1 = ((cx + radius).ceil().min(img.width() as f32)).max(0.0) as u32;
    let y1 = ((cy + radius).ceil().min(img.height() as f32)).max(0.0) as u32;

    for py in y0..y1 {
        for px in x0..x1 {
            let dx = px as f32 + 0.5 - cx;
            let dy = py as f32 + 0.5 - cy;
            let coverage = (radius - (dx * dx + dy * dy).sqrt() + 0.5).clamp(0.0, 1.0);
            if coverage > 0.0 {
                let alpha = (color.a as f32 * coverage).round() as u8;
                blend_px(
                    img.get_pixel_mut(px, py),
                    Rgba::rgba(color.r, color.g, color.b, alpha),
                );
            }
        }
    }
}

fn sample_bilinear(img: &DecodedImage, u: f32, v: f32) -> Rgba {
    let max_x = img.width.saturating_sub(1) as f32;
    let max_y = img.height.saturating_sub(1) as f32;
    let u = u.clamp(0.0, max_x);
    let v = v.clamp(0.0, max_y);

    let x0 = u.floor() as u32;
    let y0 = v.floor() as u32;
    let x1 = (x0 + 1).min(img.width - 1);
    let y1 = (y0 + 1).min(img.height - 1);
    let fx = u - x0 as f32;
    let fy = v - y0 as f32;

    let at = |x: u32, y: u32| {
        let i = (y as usize * img.width as usize + x as usize) * 4;
        [
            img.rgba_data[i] as f32,
            img.rgba_data[i + 1] as f32,
            img.rgba_data[i + 2] as f32,
            img.rgba_data[i + 3] as f32,
        ]
    };

    let (p00, p10, p01, p11) = (at(x0, y0), at(x1, y0), at(x0, y1), at(x1, y1));
    let mut out = [0u8; 4];
    for i in 0..4 {
        let top = p00[i] + (p10[i] - p00[i]) * fx;
        let bottom = p01[i] + (p11[i] - p01[i]) * fx;
        out[i] = (top + (bottom - top) * fy).round() as u8;
    }
    Rgba::rgba(out[0], out[1], out[2], out[3])
}

/// Composite the background image onto the canvas at its placement fit
/// plus the user transform, sampling bilinearly so arbitrary scales stay
/// bounded by the canvas size.
fn draw_image(
    canvas: &mut RgbaImage,
    img: &DecodedImage,
    placement: ImagePlacement,
    transform: ImageTransform,
) {
    let opacity = transform.opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || img.width == 0 || img.height == 0 {
        return;
    }
    if !transform.scale.is_finite() || transform.scale <= 0.0 {
        return;
    }

    let (cw, ch) = canvas.dimensions();
    let fit_x = cw as f32 / img.width as f32;
    let fit_y = ch as f32 / img.height as f32;
    let base = match placement {
        ImagePlacement::Cover => fit_x.max(fit_y),
        ImagePlacement::Contain => fit_x.min(fit_y),
    };
    let scale = base * transform.scale;

    let dest_w = img.width as f32 * scale;
    let dest_h = img.height as f32 * scale;
    let dest_x = (cw as f32 - dest_w) / 2.0 + transform.offset.x;
    let dest_y = (ch as f32 - dest_h) / 2.0 + transform.offset.y;

    let x0 = dest_x.floor().max(0.0) as u32;
    let y0 = dest_y.floor().max(0.0) as u32;
    let x1 = ((dest_x + dest_w).ceil().min(cw as f32)).max(0.0) as u32;
    let y1 = ((dest_y + dest_h).ceil().min(ch as f32)).max(0.0) as u32;

    for py in y0..y1 {
        for px in x0..x1 {
            let u = (px as f32 + 0.5 - dest_x) / scale - 0.5;
            let v = (py as f32 + 0.5 - dest_y) / scale - 0.5;
            let sample = sample_bilinear(img, u, v);
            let alpha = (sample.a as f32 * opacity).round() as u8;
            blend_px(
                canvas.get_pixel_mut(px, py),
                Rgba::rgba(sample.r, sample.g, sample.b, alpha),
            );
        }
    }
}

/// Render the cover at its native design resolution.
pub fn render(snapshot: &CoverSnapshot, fonts: &FontBook) -> Result<RgbaImage> {
    let template = &snapshot.template;
    let mut img = RgbaImage::new(template.width, template.height);

    paint_rect(
        &mut img,
        0.0,
        0.0,
        template.width as f32,
        template.height as f32,
        snapshot.base,
    );

    if let Some(background) = &snapshot.image {
        draw_image(&mut img, background, template.placement, snapshot.transform);
    }

    for decoration in &template.decorations {
        match *decoration {
            Decoration::Bar {
                x,
                y,
                width,
                height,
                paint,
            } => paint_rect(&mut img, x, y, width, height, paint),
            Decoration::Label {
                text,
                x,
                y,
                font_px,
                color,
                align,
            } => fonts.draw_line(&mut img, text, x, y, font_px, color, align),
            Decoration::Disc {
                cx,
                cy,
                radius,
                color,
            } => paint_disc(&mut img, cx, cy, radius, color),
        }
    }

    for field in &template.fields {
        let text = snapshot.text(field.key);
        if text.is_empty() {
            continue;
        }
        let style = snapshot.style(field.key);
        let px = field.font_px * style.scale;
        let x = field.slot.x + style.offset.x;
        let y = field.slot.y + style.offset.y;
        match field.max_width {
            Some(width) => fonts.draw_paragraph(
                &mut img,
                text,
                x,
                y,
                px,
                style.color,
                field.slot.align,
                width,
            ),
            None => fonts.draw_line(&mut img, text, x, y, px, style.color, field.slot.align),
        }
    }

    Ok(img)
}

/// Encode a rendered surface as PNG bytes
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, image::ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// Render and write a PNG at the design resolution. CPU work runs on a
/// blocking task; the file write is async. Returns the exported pixel
/// dimensions.
pub async fn export_png(
    snapshot: CoverSnapshot,
    fonts: Arc<FontBook>,
    output_path: impl AsRef<Path>,
) -> Result<(u32, u32)> {
    let output_path = output_path.as_ref().to_owned();

    let (bytes, dimensions) = tokio::task::spawn_blocking(move || {
        let img = render(&snapshot, &fonts)?;
        let dimensions = img.dimensions();
        let bytes = encode_png(&img)?;
        Ok::<_, CoverError>((bytes, dimensions))
    })
    .await??;

    tokio::fs::write(&output_path, bytes).await?;
    Ok(dimensions)
}

/// Decode PNG/JPEG bytes into the session's image representation
pub fn decode_image_bytes(bytes: &[u8]) -> Result<DecodedImage> {
    let decoded = image::load_from_memory(bytes)?;
    Ok(DecodedImage::from_rgba_image(decoded.to_rgba8()))
}

/// Read and decode an image file. Decoding is CPU-bound and runs on a
/// blocking task.
pub async fn decode_image(path: impl AsRef<Path>) -> Result<DecodedImage> {
    let bytes = tokio::fs::read(path.as_ref()).await?;
    tokio::task::spawn_blocking(move || decode_image_bytes(&bytes)).await?
}
