use cover_compose::{CoverSession, TemplateId};
use eframe::egui;

pub struct EditorState {
    pub session: CoverSession,
    pub preview_texture: Option<egui::TextureHandle>,
    pub pending_texture: Option<egui::TextureHandle>,
    pub needs_render: bool,
    /// Widget buffer for the background color hex row
    pub background_hex: String,
}

impl EditorState {
    pub fn new(template: TemplateId) -> Self {
        let session = CoverSession::with_builtin(template);
        let background_hex = session.background_color().to_hex();
        Self {
            session,
            preview_texture: None,
            pending_texture: None,
            needs_render: true,
            background_hex,
        }
    }

    /// Refresh widget buffers after the session was replaced wholesale
    pub fn sync_buffers(&mut self) {
        self.background_hex = self.session.background_color().to_hex();
    }
}
