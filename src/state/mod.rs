/// State management module
///
/// This module handles all application state, including:
/// - The file list controller and its preview cache (file_list.rs)
/// - Shared data structures (data.rs)
/// - Document tags (tag.rs)
/// - Persisted user settings (settings.rs)

pub mod data;
pub mod file_list;
pub mod settings;
pub mod tag;
