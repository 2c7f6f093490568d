/// Native dialogs (rfd)
///
/// All dialogs are modal and block the event loop until dismissed.

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::path::{Path, PathBuf};

/// Show the multi-select PDF picker. Returns an empty list on cancel.
pub fn pick_pdf_files(start_directory: Option<&Path>) -> Vec<PathBuf> {
    let mut dialog = FileDialog::new()
        .set_title("Select PDF Files")
        .add_filter("PDF files", &["pdf", "PDF"]);

    if let Some(directory) = start_directory.filter(|dir| dir.is_dir()) {
        dialog = dialog.set_directory(directory);
    }

    dialog.pick_files().unwrap_or_default()
}

pub fn show_info(title: &str, description: &str) {
    show(MessageLevel::Info, title, description);
}

pub fn show_error(title: &str, description: &str) {
    show(MessageLevel::Error, title, description);
}

fn show(level: MessageLevel, title: &str, description: &str) {
    MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show();
}
