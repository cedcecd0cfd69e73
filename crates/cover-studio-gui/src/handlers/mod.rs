pub mod document;
pub mod export;
pub mod image;
pub mod preview;
