use crate::types::{Rgba, TextStyle, Vec2};

/// Built-in cover templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemplateId {
    /// Fixed-layout test-prep cover with brand bar
    #[default]
    Classic,
    /// Centered layout with per-field styling and a solid background color
    Styled,
}

impl TemplateId {
    pub fn all() -> [TemplateId; 2] {
        [TemplateId::Classic, TemplateId::Styled]
    }

    pub fn name(self) -> &'static str {
        match self {
            TemplateId::Classic => "Classic",
            TemplateId::Styled => "Styled",
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserialize, Serialize};

    impl Serialize for TemplateId {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for TemplateId {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            match s.as_str() {
                "Classic" => Ok(TemplateId::Classic),
                "Styled" => Ok(TemplateId::Styled),
                _ => Err(serde::de::Error::custom("Unknown template id")),
            }
        }
    }
}

/// Horizontal alignment of a layout slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Align {
    /// `x` is the left edge
    Left,
    /// `x` is the horizontal center
    Center,
}

/// Where a text field sits in the design canvas. `y` is the top of the
/// first text line in design pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub x: f32,
    pub y: f32,
    pub align: Align,
}

impl Slot {
    pub const fn left(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            align: Align::Left,
        }
    }

    pub const fn centered(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            align: Align::Center,
        }
    }
}

/// Base paint of the canvas or of a decoration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BasePaint {
    Solid(Rgba),
    /// Linear gradient, `top` color to `bottom` color
    VerticalGradient { top: Rgba, bottom: Rgba },
    /// Linear gradient, `left` color to `right` color
    HorizontalGradient { left: Rgba, right: Rgba },
}

/// How the committed background image is fitted before the user
/// transform is applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImagePlacement {
    /// Scale to fill the canvas, cropping overflow
    Cover,
    /// Scale to fit entirely within the canvas
    Contain,
}

/// One editable text field of a template. Declaration order is layout
/// order and drives the generated control list.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub default_text: &'static str,
    pub font_px: f32,
    pub slot: Slot,
    pub color: Rgba,
    /// Wrap width in design pixels for multi-line copy
    pub max_width: Option<f32>,
}

impl FieldSpec {
    pub fn default_style(&self) -> TextStyle {
        TextStyle {
            offset: Vec2::ZERO,
            scale: 1.0,
            color: self.color,
        }
    }
}

/// Non-editable template chrome, painted above the background image and
/// below the text fields
#[derive(Debug, Clone, PartialEq)]
pub enum Decoration {
    Bar {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        paint: BasePaint,
    },
    Label {
        text: &'static str,
        x: f32,
        y: f32,
        font_px: f32,
        color: Rgba,
        align: Align,
    },
    Disc {
        cx: f32,
        cy: f32,
        radius: f32,
        color: Rgba,
    },
}

/// A complete cover template: design resolution, base paint, image
/// placement, chrome and the ordered set of editable fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub id: TemplateId,
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
    pub export_file_name: &'static str,
    pub base: BasePaint,
    pub placement: ImagePlacement,
    /// Whether per-field text styles and the background color are editable
    pub styleable: bool,
    pub fields: Vec<FieldSpec>,
    pub decorations: Vec<Decoration>,
}

impl Template {
    pub fn builtin(id: TemplateId) -> Template {
        match id {
            TemplateId::Classic => classic(),
            TemplateId::Styled => styled(),
        }
    }

    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn field_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.key)
    }
}

const WHITE_90: Rgba = Rgba::rgba(0xFF, 0xFF, 0xFF, 0xE6);
const WHITE_80: Rgba = Rgba::rgba(0xFF, 0xFF, 0xFF, 0xCC);
const YELLOW: Rgba = Rgba::rgb(0xFA, 0xCC, 0x15);
const YELLOW_DEEP: Rgba = Rgba::rgb(0xEA, 0xB3, 0x08);
const AMBER: Rgba = Rgba::rgb(0xFB, 0xBF, 0x24);
const NAVY: Rgba = Rgba::rgb(0x1E, 0x3A, 0x8A);

fn classic() -> Template {
    Template {
        id: TemplateId::Classic,
        name: "Classic",
        width: 1600,
        height: 2560,
        export_file_name: "cover.png",
        base: BasePaint::VerticalGradient {
            top: Rgba::rgb(0x2A, 0x2A, 0x2A),
            bottom: Rgba::rgb(0x1A, 0x1A, 0x1A),
        },
        placement: ImagePlacement::Cover,
        styleable: false,
        fields: vec![
            FieldSpec {
                key: "title",
                label: "Title",
                default_text: "VTNE",
                font_px: 200.0,
                slot: Slot::left(96.0, 520.0),
                color: Rgba::WHITE,
                max_width: None,
            },
            FieldSpec {
                key: "subtitle",
                label: "Subtitle",
                default_text: "Secrets Study Guide",
                font_px: 120.0,
                slot: Slot::left(96.0, 800.0),
                color: YELLOW,
                max_width: None,
            },
            FieldSpec {
                key: "edition",
                label: "Edition",
                default_text: "by Caitlin Burton",
                font_px: 80.0,
                slot: Slot::left(96.0, 990.0),
                color: WHITE_90,
                max_width: None,
            },
            FieldSpec {
                key: "description",
                label: "Description",
                default_text: "Exam Review and VTNE Practice Test for the \
                               Veterinary Technician National Exam",
                font_px: 64.0,
                slot: Slot::left(96.0, 1180.0),
                color: WHITE_80,
                max_width: Some(1130.0),
            },
            FieldSpec {
                key: "checkmark",
                label: "Checkmark",
                default_text: "✓",
                font_px: 160.0,
                slot: Slot::centered(216.0, 1940.0),
                color: NAVY,
                max_width: None,
            },
            FieldSpec {
                key: "author",
                label: "Author",
                default_text: "AIDEN WHITLOCK",
                font_px: 72.0,
                slot: Slot::left(96.0, 2260.0),
                color: WHITE_90,
                max_width: None,
            },
        ],
        decorations: vec![
            Decoration::Bar {
                x: 0.0,
                y: 0.0,
                width: 1600.0,
                height: 420.0,
                paint: BasePaint::HorizontalGradient {
                    left: YELLOW,
                    right: YELLOW_DEEP,
                },
            },
            Decoration::Label {
                text: "Mastery®",
                x: 48.0,
                y: 60.0,
                font_px: 120.0,
                color: NAVY,
                align: Align::Left,
            },
            Decoration::Label {
                text: "TEST PREPARATION",
                x: 48.0,
                y: 240.0,
                font_px: 60.0,
                color: NAVY,
                align: Align::Left,
            },
            Decoration::Disc {
                cx: 216.0,
                cy: 2020.0,
                radius: 120.0,
                color: YELLOW,
            },
        ],
    }
}

fn styled() -> Template {
    Template {
        id: TemplateId::Styled,
        name: "Styled",
        width: 1600,
        height: 2560,
        export_file_name: "cover-styled.png",
        base: BasePaint::Solid(Rgba::rgb(0x1E, 0x40, 0xAF)),
        placement: ImagePlacement::Contain,
        styleable: true,
        fields: vec![
            FieldSpec {
                key: "title",
                label: "Title",
                default_text: "VTNE",
                font_px: 220.0,
                slot: Slot::centered(800.0, 220.0),
                color: Rgba::WHITE,
                max_width: None,
            },
            FieldSpec {
                key: "subtitle",
                label: "Subtitle",
                default_text: "PREP STUDY GUIDE",
                font_px: 100.0,
                slot: Slot::centered(800.0, 540.0),
                color: AMBER,
                max_width: None,
            },
            FieldSpec {
                key: "year",
                label: "Year",
                default_text: "2025-2026",
                font_px: 80.0,
                slot: Slot::centered(800.0, 700.0),
                color: Rgba::WHITE,
                max_width: None,
            },
            FieldSpec {
                key: "feature1",
                label: "Feature 1",
                default_text: "EXTRA 399+ STUDY TOOLS",
                font_px: 60.0,
                slot: Slot::left(96.0, 1560.0),
                color: Rgba::WHITE,
                max_width: None,
            },
            FieldSpec {
                key: "feature2",
                label: "Feature 2",
                default_text: "PRACTICE QUESTIONS",
                font_px: 60.0,
                slot: Slot::left(96.0, 1700.0),
                color: Rgba::WHITE,
                max_width: None,
            },
            FieldSpec {
                key: "feature3",
                label: "Feature 3",
                default_text: "DETAILED EXPLANATIONS",
                font_px: 60.0,
                slot: Slot::left(96.0, 1840.0),
                color: Rgba::WHITE,
                max_width: None,
            },
            FieldSpec {
                key: "author",
                label: "Author",
                default_text: "AIDEN WHITLOCK",
                font_px: 72.0,
                slot: Slot::centered(800.0, 2120.0),
                color: Rgba::WHITE,
                max_width: None,
            },
            FieldSpec {
                key: "bottom_text",
                label: "Bottom Text",
                default_text: "VETERINARY TECHNICIAN LICENSE",
                font_px: 48.0,
                slot: Slot::centered(800.0, 2260.0),
                color: AMBER,
                max_width: None,
            },
        ],
        decorations: Vec::new(),
    }
}
