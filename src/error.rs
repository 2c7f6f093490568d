/// Error type shared by every layer of the application
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// An action that needs a selected row was triggered without one
    #[error("no file is selected")]
    NoSelection,

    #[error("PDFium library is not available: {0}")]
    PdfiumUnavailable(String),

    #[error("{0}")]
    Pdfium(#[from] pdfium_render::prelude::PdfiumError),

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("document has no pages: {}", .0.display())]
    EmptyDocument(PathBuf),

    /// The file an operation would write is already another row of the list
    #[error("{} is already in the list", .0.display())]
    AlreadyListed(PathBuf),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings error: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("window error: {0}")]
    Gui(#[from] iced::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
