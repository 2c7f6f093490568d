use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::data::{EntryId, FileEntry, Preview};
use crate::error::{AppError, Result};
use crate::pdf::convert::{self, ConvertOptions};
use crate::pdf::{rotate, thumbnail, PageRenderer};

/// Result of a successful conversion
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// The PDF that was converted and dropped from the list
    pub source: PathBuf,
    /// JPG files written, in page order
    pub outputs: Vec<PathBuf>,
}

/// Result of a successful rotation
#[derive(Debug, Clone, PartialEq)]
pub struct Rotation {
    pub source: PathBuf,
    pub rotated: PathBuf,
}

/// The FileList owns the PDFs the user picked and their previews.
///
/// Entries keep insertion order. Previews are keyed by `EntryId` and every
/// entry always has exactly one preview. Adding or removing entries rebuilds
/// the whole preview cache; rotation refreshes only the rotated entry.
pub struct FileList {
    entries: Vec<FileEntry>,
    previews: HashMap<EntryId, Preview>,
    selected: Option<EntryId>,
    next_id: u64,
    thumbnail_size: u32,
}

impl FileList {
    pub fn new(thumbnail_size: u32) -> Self {
        Self {
            entries: Vec::new(),
            previews: HashMap::new(),
            selected: None,
            next_id: 0,
            thumbnail_size,
        }
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn preview(&self, id: EntryId) -> Option<&Preview> {
        self.previews.get(&id)
    }

    pub fn selected_id(&self) -> Option<EntryId> {
        self.selected
    }

    pub fn selected(&self) -> Option<&FileEntry> {
        self.selected.and_then(|id| self.entry(id))
    }

    /// Select the row for `id`. Unknown ids are ignored.
    pub fn select(&mut self, id: EntryId) -> bool {
        if self.position(id).is_some() {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    pub fn contains_path(&self, path: &Path) -> bool {
        self.entries.iter().any(|entry| entry.path == path)
    }

    fn entry(&self, id: EntryId) -> Option<&FileEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    fn selected_position(&self) -> Result<usize> {
        self.selected
            .and_then(|id| self.position(id))
            .ok_or(AppError::NoSelection)
    }

    /// Append every path not already in the list, then rebuild the previews.
    /// Returns how many entries were added.
    pub fn add_files<I>(&mut self, paths: I, renderer: &dyn PageRenderer) -> usize
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut added = 0;
        for path in paths {
            if self.contains_path(&path) {
                debug!("Skipping duplicate {}", path.display());
                continue;
            }
            let id = EntryId::new(self.next_id);
            self.next_id += 1;
            self.entries.push(FileEntry { id, path });
            added += 1;
        }

        info!("📄 Added {} files ({} in list)", added, self.entries.len());
        self.rebuild(renderer);
        added
    }

    /// Remove the selected entry and rebuild the previews
    pub fn remove_selected(&mut self, renderer: &dyn PageRenderer) -> Result<FileEntry> {
        let position = self.selected_position()?;
        let removed = self.entries.remove(position);
        self.selected = None;

        info!("🗑️ Removed {}", removed.path.display());
        self.rebuild(renderer);
        Ok(removed)
    }

    /// Convert the selected PDF to JPG files named after `label`.
    ///
    /// On success the entry leaves the list. On failure nothing changes, so
    /// the user can retry.
    pub fn convert_selected(
        &mut self,
        label: Option<&str>,
        options: &ConvertOptions,
        renderer: &dyn PageRenderer,
    ) -> Result<Conversion> {
        let position = self.selected_position()?;
        let source = self.entries[position].path.clone();

        let outputs = convert::convert_pdf(renderer, &source, label, options)?;

        let removed = self.entries.remove(position);
        self.previews.remove(&removed.id);
        self.selected = None;

        Ok(Conversion { source, outputs })
    }

    /// Rotate every page of the selected PDF into a `_rotated` sibling and
    /// point the entry at the new file.
    ///
    /// The entry keeps its id and position; only its preview is re-rendered.
    /// Refused when the rotated file is already listed, so it is never
    /// overwritten and no path appears twice.
    pub fn rotate_selected(&mut self, renderer: &dyn PageRenderer) -> Result<Rotation> {
        let position = self.selected_position()?;
        let source = self.entries[position].path.clone();
        let rotated = rotate::rotated_path(&source);
        if self.contains_path(&rotated) {
            return Err(AppError::AlreadyListed(rotated));
        }

        rotate::rotate_pages(&source, &rotated)?;

        let preview = self.render_preview(&rotated, renderer);
        let entry = &mut self.entries[position];
        entry.path = rotated.clone();
        self.previews.insert(entry.id, preview);

        Ok(Rotation { source, rotated })
    }

    /// Drop every preview and render a fresh one per entry, in list order
    pub fn rebuild(&mut self, renderer: &dyn PageRenderer) {
        self.previews.clear();

        let previews: Vec<(EntryId, Preview)> = self
            .entries
            .iter()
            .map(|entry| (entry.id, self.render_preview(&entry.path, renderer)))
            .collect();
        self.previews.extend(previews);

        debug!("Rebuilt {} previews", self.previews.len());
    }

    fn render_preview(&self, path: &Path, renderer: &dyn PageRenderer) -> Preview {
        match renderer.render_first_page(path) {
            Ok(page) => Preview::Ready(thumbnail::from_page(&page, self.thumbnail_size)),
            Err(e) => {
                warn!("⚠️  No preview for {}: {}", path.display(), e);
                Preview::Unavailable(e.to_string())
            }
        }
    }
}
