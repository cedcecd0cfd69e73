use std::collections::HashMap;
use std::sync::Arc;

use crate::template::{BasePaint, Template, TemplateId};
use crate::types::{
    CoverError, DecodedImage, ImageTransform, Result, Rgba, StylePatch, TextStyle, TransformPatch,
};

/// Phase of the upload/confirm flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    /// A decode is in flight for the given sequence number
    Loading { seq: u64 },
    /// A decoded image sits in the pending slot awaiting confirm/cancel
    PendingConfirmation,
}

/// All mutable editing state for one cover.
///
/// Decode results arrive asynchronously and are matched against the
/// sequence number handed out by [`begin_upload`](Self::begin_upload);
/// results from superseded uploads are discarded so the newest request
/// always wins.
pub struct CoverSession {
    template: Template,
    texts: HashMap<String, String>,
    styles: HashMap<String, TextStyle>,
    background_color: Rgba,
    transform: ImageTransform,
    committed: Option<Arc<DecodedImage>>,
    pending: Option<Arc<DecodedImage>>,
    phase: UploadPhase,
    next_seq: u64,
}

impl CoverSession {
    pub fn new(template: Template) -> Self {
        let texts = template
            .fields
            .iter()
            .map(|f| (f.key.to_string(), f.default_text.to_string()))
            .collect();
        let styles = template
            .fields
            .iter()
            .map(|f| (f.key.to_string(), f.default_style()))
            .collect();
        let background_color = match template.base {
            BasePaint::Solid(color) => color,
            _ => Rgba::BLACK,
        };
        Self {
            template,
            texts,
            styles,
            background_color,
            transform: ImageTransform::default(),
            committed: None,
            pending: None,
            phase: UploadPhase::Idle,
            next_seq: 0,
        }
    }

    pub fn with_builtin(id: TemplateId) -> Self {
        Self::new(Template::builtin(id))
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, UploadPhase::Loading { .. })
    }

    pub fn pending(&self) -> Option<&Arc<DecodedImage>> {
        self.pending.as_ref()
    }

    pub fn committed(&self) -> Option<&Arc<DecodedImage>> {
        self.committed.as_ref()
    }

    pub fn transform(&self) -> ImageTransform {
        self.transform
    }

    pub fn background_color(&self) -> Rgba {
        self.background_color
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.texts.get(key).map(String::as_str)
    }

    pub fn text_style(&self, key: &str) -> Option<TextStyle> {
        self.styles.get(key).copied()
    }

    /// Start a new upload. Any pending image from an earlier upload is
    /// discarded; the returned sequence number must accompany the decode
    /// result.
    pub fn begin_upload(&mut self) -> u64 {
        self.next_seq += 1;
        self.pending = None;
        self.phase = UploadPhase::Loading {
            seq: self.next_seq,
        };
        self.next_seq
    }

    /// Deliver a decode result. Returns `false` when the result belongs
    /// to a superseded upload and was discarded.
    pub fn apply_decoded(&mut self, seq: u64, image: Arc<DecodedImage>) -> bool {
        match self.phase {
            UploadPhase::Loading { seq: current } if current == seq => {
                self.pending = Some(image);
                self.phase = UploadPhase::PendingConfirmation;
                true
            }
            _ => false,
        }
    }

    /// Deliver a decode failure. The flow returns to idle; stale
    /// failures are ignored.
    pub fn decode_failed(&mut self, seq: u64) -> bool {
        match self.phase {
            UploadPhase::Loading { seq: current } if current == seq => {
                self.phase = UploadPhase::Idle;
                true
            }
            _ => false,
        }
    }

    /// Commit the pending image as the active background and reset the
    /// image transform to defaults. No-op outside `PendingConfirmation`.
    pub fn confirm_pending(&mut self) -> bool {
        if self.phase != UploadPhase::PendingConfirmation {
            return false;
        }
        self.committed = self.pending.take();
        self.transform = ImageTransform::default();
        self.phase = UploadPhase::Idle;
        true
    }

    /// Discard the pending image, leaving the committed background and
    /// its transform untouched. No-op outside `PendingConfirmation`.
    pub fn cancel_pending(&mut self) -> bool {
        if self.phase != UploadPhase::PendingConfirmation {
            return false;
        }
        self.pending = None;
        self.phase = UploadPhase::Idle;
        true
    }

    /// Replace one field's text. Arbitrary strings are accepted, but the
    /// key must name a field of this template.
    pub fn set_text(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        if !self.texts.contains_key(key) {
            return Err(CoverError::UnknownField(key.to_string()));
        }
        self.texts.insert(key.to_string(), value.into());
        Ok(())
    }

    /// Merge an image-transform update. Values are stored as given.
    pub fn apply_transform(&mut self, patch: TransformPatch) {
        self.transform.apply(patch);
    }

    /// Merge a text-style update, clamping to the style bounds. Ignored
    /// by templates without per-field styling.
    pub fn set_text_style(&mut self, key: &str, patch: StylePatch) -> Result<()> {
        let Some(style) = self.styles.get_mut(key) else {
            return Err(CoverError::UnknownField(key.to_string()));
        };
        if self.template.styleable {
            style.apply(patch);
        }
        Ok(())
    }

    /// Replace the solid background color. Ignored by templates that
    /// paint a fixed base.
    pub fn set_background_color(&mut self, color: Rgba) {
        if self.template.styleable {
            self.background_color = color;
        }
    }

    /// Install a committed background directly, bypassing the
    /// interactive confirm flow. The transform is left untouched; used
    /// when restoring a saved document.
    pub fn restore_committed(&mut self, image: Arc<DecodedImage>) {
        self.committed = Some(image);
    }

    /// Immutable value of everything the compositor needs.
    pub fn snapshot(&self) -> CoverSnapshot {
        let base = if self.template.styleable {
            BasePaint::Solid(self.background_color)
        } else {
            self.template.base
        };
        CoverSnapshot {
            template: self.template.clone(),
            base,
            image: self.committed.clone(),
            transform: self.transform,
            texts: self.texts.clone(),
            styles: self.styles.clone(),
        }
    }
}

/// Point-in-time copy of a session; the decoded image is shared, not
/// copied.
#[derive(Debug, Clone)]
pub struct CoverSnapshot {
    pub template: Template,
    pub base: BasePaint,
    pub image: Option<Arc<DecodedImage>>,
    pub transform: ImageTransform,
    pub texts: HashMap<String, String>,
    pub styles: HashMap<String, TextStyle>,
}

impl CoverSnapshot {
    pub fn text(&self, key: &str) -> &str {
        self.texts.get(key).map(String::as_str).unwrap_or_default()
    }

    pub fn style(&self, key: &str) -> TextStyle {
        self.styles
            .get(key)
            .copied()
            .unwrap_or(TextStyle::with_color(Rgba::WHITE))
    }
}
