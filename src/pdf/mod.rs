/// PDF handling module
///
/// This module handles:
/// - Rasterizing pages through PDFium (render.rs)
/// - Building list thumbnails (thumbnail.rs)
/// - Writing rotated copies (rotate.rs)
/// - Converting pages to JPG files (convert.rs)

pub mod convert;
pub mod render;
pub mod rotate;
pub mod thumbnail;

pub use render::{PageRenderer, PdfiumRenderer};
