//! Page-at-a-time viewer for the bundled technical documents.
//!
//! Documents are loaded lazily the first time their slot is shown. A load
//! failure is captured as an inline error on that slot only; the other
//! slots keep their own state and current page.

use std::path::Path;

use anyhow::{bail, Context, Result};
use log::warn;
use lopdf::Document;

use crate::data::DOCUMENT_SLOTS;

/// Extracted text of a loaded document, one entry per page.
pub struct LoadedDocument {
    pages: Vec<String>,
}

impl LoadedDocument {
    /// Opens the file and extracts the text of every page.
    ///
    /// A page whose content cannot be decoded becomes an empty entry; the
    /// panel renders a placeholder for it instead of failing the document.
    pub fn load(path: &str) -> Result<Self> {
        let doc = Document::load(path).with_context(|| format!("failed to open {path}"))?;
        let pages: Vec<String> = doc
            .get_pages()
            .keys()
            .map(|number| doc.extract_text(&[*number]).unwrap_or_default())
            .collect();
        if pages.is_empty() {
            bail!("{path} contains no pages");
        }
        Ok(Self { pages })
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Text of the given 1-based page. Out-of-range pages render as empty,
    /// though navigation never produces them.
    pub fn page_text(&self, page: usize) -> &str {
        self.pages
            .get(page.wrapping_sub(1))
            .map_or("", String::as_str)
    }
}

/// Load state of one document slot.
pub enum DocumentState {
    NotLoaded,
    Ready(LoadedDocument),
    Failed(String),
}

struct Slot {
    path: String,
    state: DocumentState,
    page: usize,
}

impl Slot {
    fn new(path: String) -> Self {
        Self {
            path,
            state: DocumentState::NotLoaded,
            page: 1,
        }
    }
}

/// Selection, per-slot pages and load states of the document panel.
pub struct DocumentViewer {
    slots: Vec<Slot>,
    selected: usize,
}

impl Default for DocumentViewer {
    fn default() -> Self {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        Self::with_paths(
            DOCUMENT_SLOTS
                .iter()
                .map(|slot| root.join(slot.path).to_string_lossy().into_owned())
                .collect(),
        )
    }
}

impl DocumentViewer {
    fn with_paths(paths: Vec<String>) -> Self {
        Self {
            slots: paths.into_iter().map(Slot::new).collect(),
            selected: 0,
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Switches to the given slot, keeping each slot's current page.
    /// Indexes outside the configured set are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.slots.len() {
            self.selected = index;
        }
    }

    /// Loads the selected document if it has not been attempted yet.
    pub fn ensure_loaded(&mut self) {
        let slot = &mut self.slots[self.selected];
        if let DocumentState::NotLoaded = slot.state {
            slot.state = match LoadedDocument::load(&slot.path) {
                Ok(doc) => DocumentState::Ready(doc),
                Err(err) => {
                    warn!("document load failed: {err:#}");
                    DocumentState::Failed(format!("{err:#}"))
                }
            };
        }
    }

    /// Clears a failed load so the next frame attempts it again. Slots in
    /// any other state are left alone.
    pub fn retry(&mut self) {
        let slot = &mut self.slots[self.selected];
        if let DocumentState::Failed(_) = slot.state {
            slot.state = DocumentState::NotLoaded;
            slot.page = 1;
        }
    }

    pub fn state(&self) -> &DocumentState {
        &self.slots[self.selected].state
    }

    /// Current 1-based page of the selected slot.
    pub fn page(&self) -> usize {
        self.slots[self.selected].page
    }

    /// Page count of the selected slot, if it loaded.
    pub fn page_count(&self) -> Option<usize> {
        match &self.slots[self.selected].state {
            DocumentState::Ready(doc) => Some(doc.page_count()),
            _ => None,
        }
    }

    pub fn can_go_prev(&self) -> bool {
        matches!(self.state(), DocumentState::Ready(_)) && self.page() > 1
    }

    pub fn can_go_next(&self) -> bool {
        match self.page_count() {
            Some(count) => self.page() < count,
            None => false,
        }
    }

    pub fn prev_page(&mut self) {
        if self.can_go_prev() {
            self.slots[self.selected].page -= 1;
        }
    }

    pub fn next_page(&mut self) {
        if self.can_go_next() {
            self.slots[self.selected].page += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};
    use tempfile::TempDir;

    /// Builds a minimal real PDF with one text line per requested page.
    fn write_fixture(dir: &TempDir, name: &str, page_lines: &[&str]) -> String {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for line in page_lines {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*line)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().unwrap(),
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let path = dir.path().join(name);
        doc.save(&path).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn loads_pages_in_order() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "guide.pdf", &["Alpha", "Beta", "Gamma"]);
        let doc = LoadedDocument::load(&path).unwrap();
        assert_eq!(doc.page_count(), 3);
        assert!(doc.page_text(1).contains("Alpha"));
        assert!(doc.page_text(2).contains("Beta"));
        assert!(doc.page_text(3).contains("Gamma"));
        assert_eq!(doc.page_text(4), "");
    }

    #[test]
    fn navigation_clamps_at_both_bounds() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "two.pdf", &["First", "Second"]);
        let mut viewer = DocumentViewer::with_paths(vec![path]);
        viewer.ensure_loaded();
        assert_eq!(viewer.page(), 1);
        assert!(!viewer.can_go_prev());

        viewer.next_page();
        viewer.next_page();
        viewer.next_page();
        assert_eq!(viewer.page(), 2, "must stop at the last page");
        assert!(!viewer.can_go_next());

        viewer.prev_page();
        viewer.prev_page();
        assert_eq!(viewer.page(), 1, "must stop at the first page");
    }

    #[test]
    fn missing_file_fails_inline_without_touching_other_slots() {
        let dir = TempDir::new().unwrap();
        let good = write_fixture(&dir, "good.pdf", &["Fine"]);
        let mut viewer = DocumentViewer::with_paths(vec![good, "no_such_file.pdf".to_owned()]);

        viewer.ensure_loaded();
        viewer.next_page();
        assert!(matches!(viewer.state(), DocumentState::Ready(_)));

        viewer.select(1);
        viewer.ensure_loaded();
        match viewer.state() {
            DocumentState::Failed(msg) => assert!(msg.contains("no_such_file.pdf")),
            _ => panic!("expected a failed state"),
        }
        assert!(!viewer.can_go_next());
        assert!(!viewer.can_go_prev());

        // The healthy slot is untouched by the neighbour's failure.
        viewer.select(0);
        assert!(matches!(viewer.state(), DocumentState::Ready(_)));
        assert_eq!(viewer.page(), 1);
    }

    #[test]
    fn retry_clears_only_the_failed_slot() {
        let dir = TempDir::new().unwrap();
        let good = write_fixture(&dir, "good.pdf", &["Fine", "Pages"]);
        let late = dir.path().join("late.pdf").to_string_lossy().into_owned();
        let mut viewer = DocumentViewer::with_paths(vec![good, late]);

        viewer.ensure_loaded();
        viewer.next_page();

        viewer.select(1);
        viewer.ensure_loaded();
        assert!(matches!(viewer.state(), DocumentState::Failed(_)));

        // The document appears on disk after the failed attempt.
        write_fixture(&dir, "late.pdf", &["Now present"]);
        viewer.retry();
        assert!(matches!(viewer.state(), DocumentState::NotLoaded));
        viewer.ensure_loaded();
        assert!(matches!(viewer.state(), DocumentState::Ready(_)));

        viewer.select(0);
        assert!(matches!(viewer.state(), DocumentState::Ready(_)));
        assert_eq!(viewer.page(), 2, "retry must not disturb other slots");

        // Retrying a healthy slot is a no-op.
        viewer.retry();
        assert!(matches!(viewer.state(), DocumentState::Ready(_)));
        assert_eq!(viewer.page(), 2);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "only.pdf", &["Solo"]);
        let mut viewer = DocumentViewer::with_paths(vec![path]);
        viewer.select(7);
        assert_eq!(viewer.selected(), 0);
    }

    #[test]
    fn each_slot_keeps_its_own_page() {
        let dir = TempDir::new().unwrap();
        let a = write_fixture(&dir, "a.pdf", &["A1", "A2", "A3"]);
        let b = write_fixture(&dir, "b.pdf", &["B1", "B2"]);
        let mut viewer = DocumentViewer::with_paths(vec![a, b]);

        viewer.ensure_loaded();
        viewer.next_page();
        viewer.next_page();
        assert_eq!(viewer.page(), 3);

        viewer.select(1);
        viewer.ensure_loaded();
        assert_eq!(viewer.page(), 1);
        viewer.next_page();

        viewer.select(0);
        assert_eq!(viewer.page(), 3);
        viewer.select(1);
        assert_eq!(viewer.page(), 2);
    }

    #[test]
    fn default_viewer_exposes_the_configured_slots() {
        let viewer = DocumentViewer::default();
        assert_eq!(viewer.slot_count(), DOCUMENT_SLOTS.len());
        assert_eq!(viewer.selected(), 0);
    }
}
