/// Page rotation
///
/// Rotation rewrites each page's `/Rotate` entry with lopdf and saves a copy;
/// the source document is never modified.

use lopdf::{Document, Object, ObjectId};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::Result;

/// Degrees added to every page per rotation
pub const ROTATION_STEP: i64 = 90;

/// Sibling path for a rotated copy: `/x/doc.pdf` -> `/x/doc_rotated.pdf`
pub fn rotated_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default();
    source.with_file_name(format!("{}_rotated.pdf", stem))
}

/// Rotate every page of `source` by 90 degrees clockwise and save to `destination`.
/// Returns the number of pages rotated.
pub fn rotate_pages(source: &Path, destination: &Path) -> Result<usize> {
    let mut doc = Document::load(source)?;
    let pages: Vec<ObjectId> = doc.get_pages().into_values().collect();

    for &page_id in &pages {
        let rotation = (page_rotation(&doc, page_id) + ROTATION_STEP).rem_euclid(360);
        if let Ok(Object::Dictionary(page)) = doc.get_object_mut(page_id) {
            page.set("Rotate", Object::Integer(rotation));
        }
    }

    doc.save(destination)?;
    info!(
        "🔄 Rotated {} pages of {} into {}",
        pages.len(),
        source.display(),
        destination.display()
    );
    Ok(pages.len())
}

/// Effective `/Rotate` of a page in `0..360`, including values inherited
/// from ancestor page-tree nodes
pub fn page_rotation(doc: &Document, page_id: ObjectId) -> i64 {
    let mut current = Some(page_id);
    // Bounded walk in case of a cyclic /Parent chain
    for _ in 0..64 {
        let Some(id) = current else { break };
        let Ok(Object::Dictionary(dict)) = doc.get_object(id) else { break };

        if let Ok(rotate) = dict.get(b"Rotate").and_then(Object::as_i64) {
            return rotate.rem_euclid(360);
        }

        current = match dict.get(b"Parent") {
            Ok(Object::Reference(parent)) => Some(*parent),
            _ => None,
        };
    }
    0
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use lopdf::dictionary;

    /// Write a PDF whose pages carry the given `/Rotate` values (`None` = no entry)
    pub(crate) fn write_pdf(path: &Path, rotations: &[Option<i64>]) {
        write_pdf_with_tree_rotation(path, rotations, None);
    }

    pub(crate) fn write_pdf_with_tree_rotation(
        path: &Path,
        rotations: &[Option<i64>],
        tree_rotation: Option<i64>,
    ) {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut kids = Vec::new();
        for rotation in rotations {
            let mut page = dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            };
            if let Some(rotation) = rotation {
                page.set("Rotate", Object::Integer(*rotation));
            }
            kids.push(Object::Reference(doc.add_object(page)));
        }

        let mut pages = dictionary! {
            "Type" => "Pages",
            "Count" => kids.len() as i64,
            "Kids" => kids,
        };
        if let Some(rotation) = tree_rotation {
            pages.set("Rotate", Object::Integer(rotation));
        }
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.save(path).unwrap();
    }

    pub(crate) fn read_rotations(path: &Path) -> Vec<i64> {
        let doc = Document::load(path).unwrap();
        doc.get_pages()
            .into_values()
            .map(|page_id| page_rotation(&doc, page_id))
            .collect()
    }

    #[test]
    fn test_rotated_path() {
        assert_eq!(rotated_path(Path::new("/x/doc.pdf")), PathBuf::from("/x/doc_rotated.pdf"));
        assert_eq!(
            rotated_path(Path::new("/x/doc_rotated.pdf")),
            PathBuf::from("/x/doc_rotated_rotated.pdf")
        );
        assert_eq!(rotated_path(Path::new("/x/SCAN.PDF")), PathBuf::from("/x/SCAN_rotated.pdf"));
    }

    #[test]
    fn test_rotated_path_only_touches_file_name() {
        assert_eq!(
            rotated_path(Path::new("/backup.pdf.d/a.pdf")),
            PathBuf::from("/backup.pdf.d/a_rotated.pdf")
        );
    }

    #[test]
    fn test_rotate_adds_ninety_and_wraps() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("doc.pdf");
        let destination = rotated_path(&source);
        write_pdf(&source, &[None, Some(90), Some(270), Some(-90)]);

        let rotated = rotate_pages(&source, &destination).unwrap();

        assert_eq!(rotated, 4);
        assert_eq!(read_rotations(&destination), vec![90, 180, 0, 0]);
        // Source untouched
        assert_eq!(read_rotations(&source), vec![0, 90, 270, 270]);
    }

    #[test]
    fn test_rotate_respects_inherited_rotation() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("inherited.pdf");
        let destination = dir.path().join("out.pdf");
        write_pdf_with_tree_rotation(&source, &[None, Some(0)], Some(180));

        rotate_pages(&source, &destination).unwrap();

        assert_eq!(read_rotations(&destination), vec![270, 90]);
    }

    #[test]
    fn test_rotate_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("missing.pdf");
        assert!(rotate_pages(&source, &rotated_path(&source)).is_err());
    }
}
