use std::collections::HashMap;
use std::path::PathBuf;

use crate::session::CoverSession;
use crate::template::TemplateId;
use crate::types::{ImageTransform, Result, Rgba, StylePatch, TextStyle, TransformPatch};

/// Serializable description of a cover: everything a session holds
/// except the decoded pixels. Used by the CLI and by the GUI's explicit
/// save/load document actions; the editing session itself is never
/// persisted implicitly.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverDoc {
    pub template: TemplateId,
    pub texts: HashMap<String, String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub styles: HashMap<String, TextStyle>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub background_color: Option<Rgba>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub transform: ImageTransform,
    /// Optional image file committed as the background when rendering
    /// headlessly
    #[cfg_attr(feature = "serde", serde(default))]
    pub background_image: Option<PathBuf>,
}

impl CoverDoc {
    /// Starter document carrying a template's defaults
    pub fn for_template(id: TemplateId) -> Self {
        Self::from_session(&CoverSession::with_builtin(id))
    }

    pub fn from_session(session: &CoverSession) -> Self {
        let template = session.template();
        let texts = template
            .field_keys()
            .map(|key| {
                (
                    key.to_string(),
                    session.text(key).unwrap_or_default().to_string(),
                )
            })
            .collect();
        let styles = if template.styleable {
            template
                .field_keys()
                .filter_map(|key| session.text_style(key).map(|s| (key.to_string(), s)))
                .collect()
        } else {
            HashMap::new()
        };
        Self {
            template: template.id,
            texts,
            styles,
            background_color: template
                .styleable
                .then(|| session.background_color()),
            transform: session.transform(),
            background_image: None,
        }
    }

    /// Build a session from this document. Unknown field keys are
    /// rejected; the background image path, if any, is left for the
    /// caller to decode and install.
    pub fn into_session(self) -> Result<CoverSession> {
        let mut session = CoverSession::with_builtin(self.template);

        for (key, value) in self.texts {
            session.set_text(&key, value)?;
        }
        for (key, style) in self.styles {
            session.set_text_style(
                &key,
                StylePatch {
                    offset_x: Some(style.offset.x),
                    offset_y: Some(style.offset.y),
                    scale: Some(style.scale),
                    color: Some(style.color),
                },
            )?;
        }
        if let Some(color) = self.background_color {
            session.set_background_color(color);
        }
        session.apply_transform(TransformPatch {
            offset_x: Some(self.transform.offset.x),
            offset_y: Some(self.transform.offset.y),
            scale: Some(self.transform.scale),
            opacity: Some(self.transform.opacity),
        });

        Ok(session)
    }

    /// Load a document from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let doc = serde_json::from_slice(&bytes)
            .map_err(|e| crate::types::CoverError::Doc(format!("Failed to parse document: {e}")))?;
        Ok(doc)
    }

    /// Save this document to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            crate::types::CoverError::Doc(format!("Failed to serialize document: {e}"))
        })?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}
