pub mod compose;
mod doc;
mod font;
mod preview;
mod session;
mod template;
mod types;

pub use compose::{decode_image, decode_image_bytes, encode_png, export_png, render};
pub use doc::CoverDoc;
pub use font::FontBook;
pub use preview::{DISPLAY_SCALE, render_preview};
pub use session::{CoverSession, CoverSnapshot, UploadPhase};
pub use template::*;
pub use types::*;
