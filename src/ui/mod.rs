/// View helpers for the main window
///
/// Each submodule builds one region of the window from application state;
/// none of them own state.

pub mod actions;
pub mod dialogs;
pub mod file_list;
pub mod prompt;
pub mod tag_panel;
