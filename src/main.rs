// Prevents additional console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use iced::widget::{column, container, row, text};
use iced::{Element, Length, Task, Theme};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod error;
mod pdf;
mod state;
mod ui;

use error::AppError;
use pdf::convert::ConvertOptions;
use pdf::PdfiumRenderer;
use state::data::{display_name, EntryId};
use state::file_list::FileList;
use state::settings::Settings;
use state::tag::{LabelRequest, Tag, TagState};

/// Main application state
struct PdfConverter {
    /// The PDFs the user picked, with their previews
    files: FileList,
    /// PDFium-backed page renderer
    renderer: PdfiumRenderer,
    settings: Settings,
    /// Active tag and the "Other" name prompt
    tags: TagState,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked "Browse PDF Files"
    BrowseFiles,
    RemoveFile,
    /// User clicked "Run"
    RunConversion,
    RotateFile,
    /// User clicked a row in the file list
    SelectFile(EntryId),
    TagSelected(Tag),
    PromptChanged(String),
    PromptSubmitted,
    PromptCancelled,
}

impl PdfConverter {
    fn new(renderer: PdfiumRenderer, settings: Settings) -> (Self, Task<Message>) {
        info!("🎨 PDF to JPG Converter initialized");

        (
            PdfConverter {
                files: FileList::new(settings.thumbnail_size),
                renderer,
                settings,
                tags: TagState::default(),
                status: String::from("Ready. Browse for PDF files to begin."),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::BrowseFiles => {
                let paths = ui::dialogs::pick_pdf_files(self.settings.last_directory.as_deref());
                if paths.is_empty() {
                    return Task::none();
                }

                self.remember_directory(&paths[0]);
                let added = self.files.add_files(paths, &self.renderer);
                self.status = format!("Added {} files. {} in list.", added, self.files.len());
            }
            Message::RemoveFile => match self.files.remove_selected(&self.renderer) {
                Ok(removed) => {
                    self.status = format!(
                        "Removed {}. {} in list.",
                        removed.filename(),
                        self.files.len()
                    );
                }
                Err(AppError::NoSelection) => {
                    ui::dialogs::show_info("No Selection", "Please select a file to remove.");
                }
                Err(e) => {
                    error!("Remove failed: {}", e);
                    ui::dialogs::show_error("Remove Error", &e.to_string());
                }
            },
            Message::RunConversion => {
                if self.files.selected().is_none() {
                    ui::dialogs::show_info("No Selection", "Please select a file to convert.");
                    return Task::none();
                }

                match self.tags.request_label() {
                    LabelRequest::Prompt => {
                        return iced::widget::text_input::focus(ui::prompt::input_id());
                    }
                    LabelRequest::Ready(label) => self.convert(label.as_deref()),
                }
            }
            Message::RotateFile => self.rotate(),
            Message::SelectFile(id) => {
                self.files.select(id);
            }
            Message::TagSelected(tag) => {
                if self.tags.select(tag) {
                    self.status = String::from("Conversion cancelled.");
                }
            }
            Message::PromptChanged(input) => self.tags.set_input(input),
            Message::PromptSubmitted => {
                if let Some(LabelRequest::Ready(label)) = self.tags.submit() {
                    self.convert(label.as_deref());
                }
            }
            Message::PromptCancelled => {
                if let Some(LabelRequest::Ready(label)) = self.tags.cancel() {
                    self.convert(label.as_deref());
                }
            }
        }

        Task::none()
    }

    /// Convert the selected file, naming the output after `label`
    fn convert(&mut self, label: Option<&str>) {
        let options = ConvertOptions {
            page_naming: self.settings.page_naming,
            jpeg_quality: self.settings.jpeg_quality,
        };
        let source = self.files.selected().map(|entry| entry.path.clone());

        match self.files.convert_selected(label, &options, &self.renderer) {
            Ok(conversion) => {
                let name = display_name(&conversion.source);
                self.status = format!(
                    "Converted {} into {} image(s). {} in list.",
                    name,
                    conversion.outputs.len(),
                    self.files.len()
                );
                ui::dialogs::show_info(
                    "Success",
                    &format!("File converted and removed from the list: {}", name),
                );
            }
            Err(AppError::NoSelection) => {
                ui::dialogs::show_info("No Selection", "Please select a file to convert.");
            }
            Err(e) => {
                let path = source.map(|p| p.display().to_string()).unwrap_or_default();
                error!("❌ Conversion of {} failed: {}", path, e);
                self.status = format!("Conversion failed: {}", e);
                ui::dialogs::show_error(
                    "Conversion Error",
                    &format!("Failed to convert {}.\nError: {}", path, e),
                );
            }
        }
    }

    fn rotate(&mut self) {
        let source = self.files.selected().map(|entry| entry.path.clone());

        match self.files.rotate_selected(&self.renderer) {
            Ok(rotation) => {
                self.status = format!(
                    "Rotated {} into {}.",
                    display_name(&rotation.source),
                    display_name(&rotation.rotated)
                );
            }
            Err(AppError::NoSelection) => {
                ui::dialogs::show_info("No Selection", "Please select a file to rotate.");
            }
            Err(e) => {
                let path = source.map(|p| p.display().to_string()).unwrap_or_default();
                error!("❌ Rotation of {} failed: {}", path, e);
                self.status = format!("Rotation failed: {}", e);
                ui::dialogs::show_error(
                    "Rotation Error",
                    &format!("Failed to rotate {}.\nError: {}", path, e),
                );
            }
        }
    }

    /// Open the next file dialog where the last pick came from
    fn remember_directory(&mut self, picked: &std::path::Path) {
        let Some(directory) = picked.parent() else { return };
        if self.settings.last_directory.as_deref() == Some(directory) {
            return;
        }

        self.settings.last_directory = Some(directory.to_path_buf());
        if let Err(e) = self.settings.save() {
            warn!("⚠️  Could not save settings: {}", e);
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let interactive = !self.tags.is_prompting();

        let side_panel = match self.tags.prompt() {
            Some(input) => ui::prompt::view(input),
            None => ui::actions::view(),
        };

        let body = row![
            container(ui::tag_panel::view(self.tags.active())).padding(10),
            container(ui::file_list::view(
                &self.files,
                self.settings.thumbnail_size,
                interactive,
            ))
            .width(Length::Fill)
            .height(Length::Fill),
            container(side_panel).padding(10),
        ]
        .spacing(10)
        .height(Length::Fill);

        column![body, text(&self.status).size(14)]
            .spacing(8)
            .padding(10)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<(), AppError> {
    init_logging();

    let settings = Settings::load();
    let renderer = match PdfiumRenderer::new(settings.render_scale) {
        Ok(renderer) => renderer,
        Err(e) => {
            error!("❌ {}", e);
            ui::dialogs::show_error(
                "PDFium Not Found",
                &format!(
                    "{}\n\nPlace the PDFium library next to the executable or in a libs folder.",
                    e
                ),
            );
            return Err(e);
        }
    };

    iced::application("PDF to JPG Converter", PdfConverter::update, PdfConverter::view)
        .theme(PdfConverter::theme)
        .window_size((800.0, 400.0))
        .centered()
        .run_with(move || PdfConverter::new(renderer, settings))?;

    Ok(())
}
