//! TrueType text rasterization using fontdue (pure Rust)

use fontdue::{Font, FontSettings};
use image::RgbaImage;
use std::path::Path;

use crate::compose::blend_px;
use crate::template::Align;
use crate::types::{CoverError, Result, Rgba};

/// Loaded typeface used for all cover text
pub struct FontBook {
    font: Font,
}

impl FontBook {
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let font = Font::from_bytes(data, FontSettings::default())
            .map_err(|e| CoverError::Font(e.to_string()))?;
        Ok(Self { font })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read(path.as_ref())?;
        Self::from_bytes(data)
    }

    /// Find and load a common system font, honoring `COVER_FONT` when set
    pub fn from_system() -> Result<Self> {
        if let Ok(path) = std::env::var("COVER_FONT") {
            if let Ok(book) = Self::from_path(&path) {
                return Ok(book);
            }
        }

        const FONT_PATHS: [&str; 6] = [
            "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
            "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
            "/usr/share/fonts/liberation/LiberationSans-Bold.ttf",
        ];

        for path in FONT_PATHS {
            if let Ok(book) = Self::from_path(path) {
                return Ok(book);
            }
        }

        Err(CoverError::Font(format!(
            "no usable font found; tried COVER_FONT and {FONT_PATHS:?}"
        )))
    }

    /// Advance width of a single line at the given size
    pub fn line_width(&self, text: &str, px: f32) -> f32 {
        text.chars()
            .map(|ch| self.font.metrics(ch, px).advance_width)
            .sum()
    }

    fn ascent(&self, px: f32) -> f32 {
        self.font
            .horizontal_line_metrics(px)
            .map(|m| m.ascent)
            .unwrap_or(px * 0.8)
    }

    /// Vertical distance between successive line tops
    pub fn line_height(&self, px: f32) -> f32 {
        self.font
            .horizontal_line_metrics(px)
            .map(|m| m.new_line_size)
            .unwrap_or(px * 1.2)
    }

    /// Draw one line of text. `y` is the top of the line; `x` is the left
    /// edge or the horizontal center depending on `align`.
    pub fn draw_line(
        &self,
        img: &mut RgbaImage,
        text: &str,
        x: f32,
        y: f32,
        px: f32,
        color: Rgba,
        align: Align,
    ) {
        if text.is_empty() || color.a == 0 {
            return;
        }

        let mut pen_x = match align {
            Align::Left => x,
            Align::Center => x - self.line_width(text, px) / 2.0,
        };
        let baseline = y + self.ascent(px);

        for ch in text.chars() {
            let (metrics, coverage) = self.font.rasterize(ch, px);
            let glyph_left = pen_x.round() as i64 + metrics.xmin as i64;
            let glyph_top = baseline.round() as i64 - metrics.height as i64 - metrics.ymin as i64;

            for gy in 0..metrics.height {
                for gx in 0..metrics.width {
                    let cov = coverage[gy * metrics.width + gx];
                    if cov == 0 {
                        continue;
                    }
                    let px_x = glyph_left + gx as i64;
                    let px_y = glyph_top + gy as i64;
                    if px_x < 0
                        || px_y < 0
                        || px_x >= img.width() as i64
                        || px_y >= img.height() as i64
                    {
                        continue;
                    }
                    let alpha = (color.a as u16 * cov as u16 / 255) as u8;
                    let dst = img.get_pixel_mut(px_x as u32, px_y as u32);
                    blend_px(dst, Rgba::rgba(color.r, color.g, color.b, alpha));
                }
            }

            pen_x += metrics.advance_width;
        }
    }

    /// Draw text with greedy word-wrap at `max_width` design pixels.
    /// Lines that cannot be broken (single long words) overflow rather
    /// than truncate.
    pub fn draw_paragraph(
        &self,
        img: &mut RgbaImage,
        text: &str,
        x: f32,
        y: f32,
        px: f32,
        color: Rgba,
        align: Align,
        max_width: f32,
    ) {
        let mut line_y = y;
        let line_height = self.line_height(px);

        for line in self.wrap(text, px, max_width) {
            self.draw_line(img, &line, x, line_y, px, color, align);
            line_y += line_height;
        }
    }

    fn wrap(&self, text: &str, px: f32, max_width: f32) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();

        for word in text.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if self.line_width(&candidate, px) <= max_width || current.is_empty() {
                current = candidate;
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}
