use std::path::PathBuf;
use std::sync::Arc;

// Re-export types from library crates
pub use cover_compose::{CoverDoc, CoverSnapshot, DecodedImage, TemplateId};

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum CoverCommand {
    /// Read and decode an image file for the given editor. `seq` is the
    /// session's upload sequence number and is echoed back so stale
    /// results can be discarded.
    DecodeImage {
        template: TemplateId,
        seq: u64,
        path: PathBuf,
    },
    /// Re-render the live preview for the given editor. Queued preview
    /// requests are deduplicated; only the newest is rendered.
    RenderPreview {
        template: TemplateId,
        snapshot: CoverSnapshot,
    },
    /// Render at design resolution and write a PNG
    Export {
        snapshot: CoverSnapshot,
        output_path: PathBuf,
    },
    SaveDoc {
        doc: CoverDoc,
        path: PathBuf,
    },
    LoadDoc {
        path: PathBuf,
    },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum CoverUpdate {
    ImageDecoded {
        template: TemplateId,
        seq: u64,
        image: Arc<DecodedImage>,
    },
    DecodeFailed {
        template: TemplateId,
        seq: u64,
        message: String,
    },
    PreviewRendered {
        template: TemplateId,
        width: usize,
        height: usize,
        rgba_data: Vec<u8>,
    },
    ExportComplete {
        path: PathBuf,
        width: u32,
        height: u32,
    },
    DocSaved {
        path: PathBuf,
    },
    DocLoaded {
        doc: CoverDoc,
    },
    Error {
        message: String,
    },
}
