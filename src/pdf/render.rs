/// Page rasterization
///
/// The controller only talks to the `PageRenderer` trait; `PdfiumRenderer`
/// is the production implementation backed by the PDFium shared library.

use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{AppError, Result};

/// One rendered page handed to a `render_pages` sink
pub struct RenderedPage {
    /// Zero-based page index
    pub index: usize,
    /// Total pages in the document
    pub count: usize,
    pub image: DynamicImage,
}

pub trait PageRenderer {
    /// Render page zero of the PDF at `path`
    fn render_first_page(&self, path: &Path) -> Result<DynamicImage>;

    /// Render every page in order, passing each to `sink`.
    /// Stops at the first error. Returns the number of pages rendered.
    fn render_pages(
        &self,
        path: &Path,
        sink: &mut dyn FnMut(RenderedPage) -> Result<()>,
    ) -> Result<usize>;
}

pub struct PdfiumRenderer {
    pdfium: Pdfium,
    scale: f32,
}

impl PdfiumRenderer {
    /// Bind the PDFium library and render at `scale` (1.0 = 72 DPI)
    pub fn new(scale: f32) -> Result<Self> {
        Ok(Self {
            pdfium: bind_pdfium()?,
            scale,
        })
    }

    fn config(&self) -> PdfRenderConfig {
        PdfRenderConfig::new().scale_page_by_factor(self.scale)
    }
}

impl PageRenderer for PdfiumRenderer {
    fn render_first_page(&self, path: &Path) -> Result<DynamicImage> {
        let document = self.pdfium.load_pdf_from_file(path, None)?;
        let pages = document.pages();
        if pages.len() == 0 {
            return Err(AppError::EmptyDocument(path.to_path_buf()));
        }

        let page = pages.get(0)?;
        let bitmap = page.render_with_config(&self.config())?;
        Ok(bitmap.as_image())
    }

    fn render_pages(
        &self,
        path: &Path,
        sink: &mut dyn FnMut(RenderedPage) -> Result<()>,
    ) -> Result<usize> {
        let document = self.pdfium.load_pdf_from_file(path, None)?;
        let count = document.pages().len() as usize;
        if count == 0 {
            return Err(AppError::EmptyDocument(path.to_path_buf()));
        }
        let config = self.config();

        for (index, page) in document.pages().iter().enumerate() {
            let bitmap = page.render_with_config(&config)?;
            debug!("Rendered page {}/{} of {}", index + 1, count, path.display());
            sink(RenderedPage {
                index,
                count,
                image: bitmap.as_image(),
            })?;
        }

        Ok(count)
    }
}

/// Directories searched for the PDFium library before the system one
fn pdfium_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            paths.push(exe_dir.join("libs"));
            paths.push(exe_dir.to_path_buf());
        }
    }

    paths.push(PathBuf::from("libs"));
    paths.push(PathBuf::from("./"));
    paths
}

fn bind_pdfium() -> Result<Pdfium> {
    for dir in pdfium_search_paths() {
        let lib_path = Pdfium::pdfium_platform_library_name_at_path(&dir);
        debug!("Trying PDFium at {}", lib_path.display());

        if let Ok(bindings) = Pdfium::bind_to_library(&lib_path) {
            info!("📚 Loaded PDFium from {}", dir.display());
            return Ok(Pdfium::new(bindings));
        }
    }

    debug!("Trying system PDFium library");
    Pdfium::bind_to_system_library()
        .map(Pdfium::new)
        .map_err(|e| AppError::PdfiumUnavailable(e.to_string()))
}
