use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoverError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid color: {0}")]
    Color(String),
    #[error("Unknown text field: {0}")]
    UnknownField(String),
    #[error("Font error: {0}")]
    Font(String),
    #[error("Invalid cover document: {0}")]
    Doc(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, CoverError>;

/// 2D offset in design-space pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Placement of the background image within the design canvas
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageTransform {
    /// Offset from the placement's natural position
    pub offset: Vec2,
    /// Scale factor applied on top of the placement's base fit
    pub scale: f32,
    /// Opacity in [0, 1]
    pub opacity: f32,
}

impl Default for ImageTransform {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
            opacity: 1.0,
        }
    }
}

/// Partial update for an [`ImageTransform`]. Values are stored as given;
/// interactive inputs are constrained by their widgets, not by the model.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformPatch {
    pub offset_x: Option<f32>,
    pub offset_y: Option<f32>,
    pub scale: Option<f32>,
    pub opacity: Option<f32>,
}

impl ImageTransform {
    pub fn apply(&mut self, patch: TransformPatch) {
        if let Some(x) = patch.offset_x {
            self.offset.x = x;
        }
        if let Some(y) = patch.offset_y {
            self.offset.y = y;
        }
        if let Some(scale) = patch.scale {
            self.scale = scale;
        }
        if let Some(opacity) = patch.opacity {
            self.opacity = opacity;
        }
    }
}

/// Offset bound for per-field text styles, per axis
pub const TEXT_OFFSET_LIMIT: f32 = 500.0;
/// Scale bounds for per-field text styles
pub const TEXT_SCALE_MIN: f32 = 0.5;
pub const TEXT_SCALE_MAX: f32 = 2.0;

/// Per-field styling for styleable templates
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextStyle {
    pub offset: Vec2,
    pub scale: f32,
    pub color: Rgba,
}

impl TextStyle {
    pub fn with_color(color: Rgba) -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
            color,
        }
    }
}

/// Partial update for a [`TextStyle`]. Unlike image transforms, style
/// merges clamp: rendered output never leaves the style bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct StylePatch {
    pub offset_x: Option<f32>,
    pub offset_y: Option<f32>,
    pub scale: Option<f32>,
    pub color: Option<Rgba>,
}

impl TextStyle {
    pub fn apply(&mut self, patch: StylePatch) {
        if let Some(x) = patch.offset_x {
            self.offset.x = x.clamp(-TEXT_OFFSET_LIMIT, TEXT_OFFSET_LIMIT);
        }
        if let Some(y) = patch.offset_y {
            self.offset.y = y.clamp(-TEXT_OFFSET_LIMIT, TEXT_OFFSET_LIMIT);
        }
        if let Some(scale) = patch.scale {
            self.scale = scale.clamp(TEXT_SCALE_MIN, TEXT_SCALE_MAX);
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }
}

/// Straight-alpha sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Rgba = Rgba::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB` or `#AARRGGBB` (leading `#` optional)
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.is_ascii() {
            return Err(CoverError::Color(hex.to_string()));
        }
        let byte = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| CoverError::Color(hex.to_string()))
        };
        match digits.len() {
            6 => Ok(Self::rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
            8 => Ok(Self::rgba(byte(2..4)?, byte(4..6)?, byte(6..8)?, byte(0..2)?)),
            _ => Err(CoverError::Color(hex.to_string())),
        }
    }

    /// Format as `#RRGGBB`, or `#AARRGGBB` when not fully opaque
    pub fn to_hex(self) -> String {
        if self.a == 0xFF {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        }
    }
}

impl std::fmt::Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for Rgba {
    type Err = CoverError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rgba {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rgba {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Rgba::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// A decoded background image: owned RGBA8 pixels plus dimensions.
/// This is the opaque handle the session stores in its pending and
/// committed slots.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba_data: Vec<u8>,
}

impl DecodedImage {
    pub fn new(width: u32, height: u32, rgba_data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if rgba_data.len() != expected {
            return Err(CoverError::Image(image::ImageError::Parameter(
                image::error::ParameterError::from_kind(
                    image::error::ParameterErrorKind::DimensionMismatch,
                ),
            )));
        }
        Ok(Self {
            width,
            height,
            rgba_data,
        })
    }

    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            rgba_data: img.into_raw(),
        }
    }

    pub fn to_rgba_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_raw(self.width, self.height, self.rgba_data.clone())
            .expect("dimensions validated at construction")
    }
}
