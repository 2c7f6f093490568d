/// PDF to JPG conversion
///
/// Output files land next to the source PDF. The base name is either
/// `{folder}_{tag}` when a tag is active or the source file stem.

use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::render::{PageRenderer, RenderedPage};
use crate::error::{AppError, Result};
use crate::state::settings::PageNaming;
use crate::state::tag::sanitize_label;

/// Options for writing converted pages
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertOptions {
    pub page_naming: PageNaming,
    pub jpeg_quality: u8,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            page_naming: PageNaming::Numbered,
            jpeg_quality: 90,
        }
    }
}

/// Output base name (without extension) for `source`.
///
/// With a non-empty `label`: `{parent-directory-name}_{label}`.
/// Otherwise: the source file stem.
pub fn output_base_name(source: &Path, label: Option<&str>) -> String {
    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default();

    match label.and_then(sanitize_label) {
        Some(label) => {
            let folder = source
                .parent()
                .and_then(Path::file_name)
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or(stem);
            format!("{}_{}", folder, label)
        }
        None => stem,
    }
}

/// Path page `index` of a `count`-page document is written to
pub fn output_path(
    directory: &Path,
    base_name: &str,
    index: usize,
    count: usize,
    naming: PageNaming,
) -> PathBuf {
    match naming {
        PageNaming::Numbered if count > 1 => {
            directory.join(format!("{}_{}.jpg", base_name, index + 1))
        }
        _ => directory.join(format!("{}.jpg", base_name)),
    }
}

/// Write `image` as a baseline JPEG, dropping any alpha channel
pub fn save_jpeg(image: &DynamicImage, path: &Path, quality: u8) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    let encoder = JpegEncoder::new_with_quality(&mut writer, quality.clamp(1, 100));
    DynamicImage::ImageRgb8(image.to_rgb8()).write_with_encoder(encoder)?;
    writer.flush()?;
    Ok(())
}

/// Render every page of `source` and write it as JPG next to it.
/// Returns the distinct output paths in page order.
pub fn convert_pdf(
    renderer: &dyn PageRenderer,
    source: &Path,
    label: Option<&str>,
    options: &ConvertOptions,
) -> Result<Vec<PathBuf>> {
    let directory = source.parent().unwrap_or_else(|| Path::new("."));
    let base_name = output_base_name(source, label);
    let mut written: Vec<PathBuf> = Vec::new();

    let pages = renderer.render_pages(source, &mut |page: RenderedPage| {
        let path = output_path(directory, &base_name, page.index, page.count, options.page_naming);
        save_jpeg(&page.image, &path, options.jpeg_quality)?;
        debug!("Wrote page {} to {}", page.index + 1, path.display());
        if !written.contains(&path) {
            written.push(path);
        }
        Ok(())
    })?;

    if pages == 0 || written.is_empty() {
        return Err(AppError::EmptyDocument(source.to_path_buf()));
    }

    info!("🖼️ Converted {} ({} pages) to {:?}", source.display(), pages, written);
    Ok(written)
}
