use cover_compose::Rgba;
use eframe::egui;

/// Builder for creating sliders with automatic change tracking
pub struct SliderBuilder<'a, T> {
    value: &'a mut T,
    range: std::ops::RangeInclusive<T>,
    text: String,
    step: Option<f64>,
}

impl<'a, T> SliderBuilder<'a, T>
where
    T: egui::emath::Numeric,
{
    pub fn new(value: &'a mut T, range: std::ops::RangeInclusive<T>) -> Self {
        Self {
            value,
            range,
            text: String::new(),
            step: None,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> bool {
        let mut slider = egui::Slider::new(self.value, self.range);

        if !self.text.is_empty() {
            slider = slider.text(self.text);
        }

        if let Some(step) = self.step {
            slider = slider.step_by(step);
        }

        ui.add(slider).changed()
    }
}

/// Builder for creating drag values with automatic formatting
pub struct DragValueBuilder<'a, T> {
    value: &'a mut T,
    range: Option<std::ops::RangeInclusive<T>>,
    suffix: Option<String>,
    speed: Option<f32>,
}

impl<'a, T> DragValueBuilder<'a, T>
where
    T: egui::emath::Numeric,
{
    pub fn new(value: &'a mut T) -> Self {
        Self {
            value,
            range: None,
            suffix: None,
            speed: None,
        }
    }

    pub fn range(mut self, range: std::ops::RangeInclusive<T>) -> Self {
        self.range = Some(range);
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> bool {
        let mut drag = egui::DragValue::new(self.value);

        if let Some(range) = self.range {
            drag = drag.range(range);
        }

        if let Some(suffix) = self.suffix {
            drag = drag.suffix(suffix);
        }

        if let Some(speed) = self.speed {
            drag = drag.speed(speed);
        }

        ui.add(drag).changed()
    }
}

/// Helper for creating labeled horizontal drag values with range and suffix
pub fn labeled_drag_clamped<T>(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut T,
    range: std::ops::RangeInclusive<T>,
    suffix: &str,
) -> bool
where
    T: egui::emath::Numeric,
{
    ui.horizontal(|ui| {
        ui.label(label);
        DragValueBuilder::new(value)
            .range(range)
            .suffix(suffix)
            .speed(1.0)
            .show(ui)
    })
    .inner
}

/// Color swatch button bound to an [`Rgba`] value
pub fn color_button(ui: &mut egui::Ui, color: &mut Rgba) -> bool {
    let mut color32 = egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a);
    if ui.color_edit_button_srgba(&mut color32).changed() {
        *color = Rgba::rgba(color32.r(), color32.g(), color32.b(), color32.a());
        true
    } else {
        false
    }
}

/// Hex text edit paired with a color swatch. The hex string is the
/// source of truth; returns the new color when either control changes
/// it to something valid.
pub fn hex_color_row(ui: &mut egui::Ui, label: &str, hex: &mut String) -> Option<Rgba> {
    let mut changed = None;

    ui.horizontal(|ui| {
        ui.label(label);

        let text_edit = egui::TextEdit::singleline(hex).desired_width(100.0);
        if ui.add(text_edit).changed() {
            if let Ok(color) = Rgba::from_hex(hex) {
                changed = Some(color);
            }
        }

        if let Ok(mut color) = Rgba::from_hex(hex) {
            if color_button(ui, &mut color) {
                *hex = color.to_hex();
                changed = Some(color);
            }
        }
    });

    changed
}
