//! # Document Store
//!
//! [`DocumentStore`] is the only surface through which the document is read
//! or written. A missing document is created with defaults and persisted on
//! first load.
//!
//! There is no cross-process locking. Concurrent writers race and the last
//! save wins.

use std::io;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::document::Document;
use crate::error::StoreError;
use crate::identity::generate_id;

/// Load/save access to the persisted [`Document`].
pub trait DocumentStore: Send + Sync {
    /// Return the persisted document, creating and persisting the default
    /// document if none exists yet.
    fn load(&self) -> Result<Document, StoreError>;

    /// Overwrite the persisted document.
    fn save(&self, document: &Document) -> Result<(), StoreError>;

    /// Human-readable location for logs and error messages.
    fn location(&self) -> String;
}

// ---------------------------------------------------------------------------
// File-backed store
// ---------------------------------------------------------------------------

/// A document stored as one pretty-printed JSON file.
///
/// Saves go to a sibling `<name>.<pid>.<random>.tmp` file which is then
/// renamed over the target, so readers see either the old or the new
/// document. Each save uses its own temp file, so concurrent writers (in
/// this process or another) never rename each other's file away; the last
/// rename wins.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// A store backed by the file at `path`. Nothing is touched until the
    /// first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "document".into());
        name.push(format!(".{}.{}.tmp", std::process::id(), generate_id()));
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            location: self.location(),
            source,
        }
    }
}

impl DocumentStore for FileStore {
    fn load(&self) -> Result<Document, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Document::from_json(&raw, &self.location()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let document = Document::default();
                self.save(&document)?;
                Ok(document)
            }
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn save(&self, document: &Document) -> Result<(), StoreError> {
        let json = document.to_pretty_json()?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }
        let tmp = self.temp_path();
        std::fs::write(&tmp, json.as_bytes()).map_err(|e| self.io_error(e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = std::fs::remove_file(&tmp);
            self.io_error(e)
        })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// A document held in memory as serialized JSON text.
///
/// Keeping the text rather than the parsed value means tests exercise the
/// same serialize/parse path as [`FileStore`], and can seed malformed
/// content.
#[derive(Debug, Default)]
pub struct MemoryStore {
    raw: Mutex<Option<String>>,
}

impl MemoryStore {
    /// An empty store; the first load creates the default document.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with `raw`, which need not be valid.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Mutex::new(Some(raw.into())),
        }
    }

    /// The currently persisted text, if any.
    pub fn raw(&self) -> Option<String> {
        self.raw.lock().clone()
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> Result<Document, StoreError> {
        let mut guard = self.raw.lock();
        if let Some(raw) = guard.as_deref() {
            return Document::from_json(raw, "memory");
        }
        let document = Document::default();
        *guard = Some(document.to_pretty_json()?);
        Ok(document)
    }

    fn save(&self, document: &Document) -> Result<(), StoreError> {
        let json = document.to_pretty_json()?;
        *self.raw.lock() = Some(json);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::Day;
    use crate::recipe::NewRecipe;
    use crate::RecipeId;

    const DEFAULT_TEXT: &str = "{\n  \"recipes\": [],\n  \"plan\": {\n    \"Sun\": [],\n    \"Mon\": [],\n    \"Tue\": [],\n    \"Wed\": [],\n    \"Thu\": []\n  },\n  \"grocery\": []\n}";

    #[test]
    fn first_load_creates_file_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let store = FileStore::new(&path);

        let doc = store.load().unwrap();
        assert_eq!(doc, Document::default());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_TEXT);
    }

    #[test]
    fn save_then_load_returns_same_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("data.json"));

        let mut doc = store.load().unwrap();
        let recipe = doc
            .add_recipe(NewRecipe {
                title: "Pasta".into(),
                url: "http://pasta".into(),
                ..NewRecipe::default()
            })
            .unwrap();
        doc.plan.set_day(Day::Mon, Some(recipe.id.clone()));
        doc.grocery.push_text("basil");
        store.save(&doc).unwrap();

        assert_eq!(store.load().unwrap(), doc);
    }

    #[test]
    fn save_of_load_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let store = FileStore::new(&path);

        let mut doc = store.load().unwrap();
        doc.plan.set_day(Day::Sun, Some(RecipeId::new("r1")));
        doc.grocery.push_text("rice");
        store.save(&doc).unwrap();
        let before = std::fs::read(&path).unwrap();

        store.save(&store.load().unwrap()).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), before);
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("data.json");
        let store = FileStore::new(&path);
        store.load().unwrap();
        assert!(path.exists());
    }

    #[test]
    fn no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("data.json"));
        store.save(&Document::default()).unwrap();
        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["data.json".to_string()]);
    }

    #[test]
    fn concurrent_saves_never_fail() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");

        let handles: Vec<_> = (0..8)
            .map(|n| {
                // Separate stores over one path, like the CLI racing the server.
                let store = FileStore::new(&path);
                std::thread::spawn(move || {
                    let mut doc = Document::default();
                    doc.grocery.push_text(format!("writer {n}"));
                    for _ in 0..25 {
                        store.save(&doc).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let doc = FileStore::new(&path).load().unwrap();
        assert_eq!(doc.grocery.len(), 1);
        assert!(doc.grocery.items()[0].text.starts_with("writer "));
        let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "{\"recipes\": [oops").unwrap();
        let err = FileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }), "got {err:?}");
        // The bad file is left for the operator to inspect.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\"recipes\": [oops");
    }

    #[test]
    fn unreadable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be.
        let err = FileStore::new(dir.path()).load().unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }), "got {err:?}");
    }

    #[test]
    fn memory_store_initializes_on_first_load() {
        let store = MemoryStore::new();
        assert!(store.raw().is_none());
        assert_eq!(store.load().unwrap(), Document::default());
        assert_eq!(store.raw().as_deref(), Some(DEFAULT_TEXT));
    }

    #[test]
    fn memory_store_seeded_with_garbage_fails() {
        let store = MemoryStore::with_raw("not json");
        assert!(matches!(
            store.load().unwrap_err(),
            StoreError::Malformed { .. }
        ));
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        let mut doc = store.load().unwrap();
        doc.grocery.push_text("apples");
        store.save(&doc).unwrap();
        assert_eq!(store.load().unwrap(), doc);
    }
}
