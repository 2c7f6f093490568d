use iced::widget::image::Handle;
use image::{imageops::FilterType, DynamicImage};

/// A list-sized preview ready for display
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

/// Resize a rendered page to a `size` x `size` thumbnail
pub fn from_page(page: &DynamicImage, size: u32) -> Thumbnail {
    let resized = page.resize_exact(size, size, FilterType::Lanczos3).to_rgba8();
    let (width, height) = resized.dimensions();

    Thumbnail {
        handle: Handle::from_rgba(width, height, resized.into_raw()),
        width,
        height,
    }
}
