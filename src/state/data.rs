/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the file-list controller and the UI layer.

use std::path::{Path, PathBuf};

use crate::pdf::thumbnail::Thumbnail;

/// Stable identifier of a list entry.
///
/// Ids are never reused within a session, so a row keeps its identity when
/// entries before it are removed or its path is replaced by rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl EntryId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// A single PDF in the file list
#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry {
    pub id: EntryId,
    /// Full path to the PDF
    pub path: PathBuf,
}

impl FileEntry {
    /// Filename only (e.g., "scan.pdf")
    pub fn filename(&self) -> String {
        display_name(&self.path)
    }
}

/// Cached first-page preview of an entry
#[derive(Debug, Clone)]
pub enum Preview {
    Ready(Thumbnail),
    /// Rendering failed; holds the error text for the row tooltip
    Unavailable(String),
}

/// Base name of a path for display, falling back to the whole path
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
