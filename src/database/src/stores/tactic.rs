use chrono::NaiveDateTime;
use core::TacticDocument;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::warn;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Corrupt(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "tactic store io error: {}", err),
            StoreError::Corrupt(message) => write!(f, "tactic store data corrupt: {}", message),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err)
    }
}

/// File-backed tactic document store: one gzip-compressed JSON file per
/// document under the data directory. Synchronous on purpose; callers on
/// the async side wrap operations in `spawn_blocking`.
pub struct TacticStore {
    root: PathBuf,
}

impl TacticStore {
    pub fn open(root: &Path) -> Result<Self, StoreError> {
        std::fs::create_dir_all(root)?;

        Ok(TacticStore {
            root: root.to_path_buf(),
        })
    }

    /// All stored documents, most recently updated first. Files that no
    /// longer parse are skipped with a warning instead of failing the
    /// whole listing.
    pub fn list(&self) -> Result<Vec<TacticDocument>, StoreError> {
        let mut documents = Vec::new();

        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();

            if Self::document_id_of(&path).is_none() {
                continue;
            }

            match Self::read_document(&path) {
                Ok(document) => documents.push(document),
                Err(err) => {
                    warn!("skipping unreadable tactic file {}: {}", path.display(), err);
                }
            }
        }

        documents.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

        Ok(documents)
    }

    pub fn get(&self, id: u32) -> Result<Option<TacticDocument>, StoreError> {
        let path = self.document_path(id);

        if !path.exists() {
            return Ok(None);
        }

        Self::read_document(&path).map(Some)
    }

    /// Stores a new document under a freshly allocated id and stamps both
    /// timestamps.
    pub fn insert(
        &self,
        mut document: TacticDocument,
        now: NaiveDateTime,
    ) -> Result<TacticDocument, StoreError> {
        document.id = Some(self.next_id()?);
        document.created_at = Some(now);
        document.updated_at = Some(now);

        self.write_document(&document)?;

        Ok(document)
    }

    /// Overwrites an existing document, keeping its creation timestamp.
    /// Returns `None` when no document exists under the id.
    pub fn replace(
        &self,
        mut document: TacticDocument,
        now: NaiveDateTime,
    ) -> Result<Option<TacticDocument>, StoreError> {
        let Some(id) = document.id else {
            return Ok(None);
        };

        let Some(existing) = self.get(id)? else {
            return Ok(None);
        };

        document.created_at = existing.created_at;
        document.updated_at = Some(now);

        self.write_document(&document)?;

        Ok(Some(document))
    }

    pub fn delete(&self, id: u32) -> Result<bool, StoreError> {
        let path = self.document_path(id);

        if !path.exists() {
            return Ok(false);
        }

        std::fs::remove_file(path)?;

        Ok(true)
    }

    fn next_id(&self) -> Result<u32, StoreError> {
        let mut highest = 0;

        for entry in std::fs::read_dir(&self.root)? {
            if let Some(id) = Self::document_id_of(&entry?.path()) {
                highest = highest.max(id);
            }
        }

        Ok(highest + 1)
    }

    fn document_path(&self, id: u32) -> PathBuf {
        self.root.join(format!("{}.json.gz", id))
    }

    fn document_id_of(path: &Path) -> Option<u32> {
        path.file_name()?
            .to_str()?
            .strip_suffix(".json.gz")?
            .parse()
            .ok()
    }

    fn read_document(path: &Path) -> Result<TacticDocument, StoreError> {
        let file = File::open(path)?;
        let decoder = GzDecoder::new(file);

        serde_json::from_reader(decoder).map_err(|err| StoreError::Corrupt(err.to_string()))
    }

    fn write_document(&self, document: &TacticDocument) -> Result<(), StoreError> {
        let id = document
            .id
            .ok_or_else(|| StoreError::Corrupt("document without id".to_string()))?;

        let file = File::create(self.document_path(id))?;
        let mut encoder = GzEncoder::new(file, Compression::default());

        serde_json::to_writer(&mut encoder, document)
            .map_err(|err| StoreError::Io(std::io::Error::other(err)))?;

        encoder.finish()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core::PitchMode;
    use std::sync::atomic::{AtomicU32, Ordering};

    static DIR_SEQUENCE: AtomicU32 = AtomicU32::new(0);

    fn temp_store() -> (TacticStore, PathBuf) {
        let dir = std::env::temp_dir().join(format!(
            "pitchside-store-test-{}-{}",
            std::process::id(),
            DIR_SEQUENCE.fetch_add(1, Ordering::SeqCst)
        ));

        let _ = std::fs::remove_dir_all(&dir);

        (TacticStore::open(&dir).unwrap(), dir)
    }

    fn document(name: &str) -> TacticDocument {
        TacticDocument {
            id: None,
            name: name.to_string(),
            mode: PitchMode::Football,
            formation_label: "4-4-2".to_string(),
            players: Vec::new(),
            drawing_data: String::new(),
            created_at: None,
            updated_at: None,
        }
    }

    fn time(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 9, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn insert_allocates_ids_and_round_trips() {
        let (store, dir) = temp_store();

        let first = store.insert(document("Press high"), time(9)).unwrap();
        let second = store.insert(document("Low block"), time(10)).unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));

        let loaded = store.get(1).unwrap().unwrap();
        assert_eq!(loaded, first);

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn list_is_most_recently_updated_first() {
        let (store, dir) = temp_store();

        store.insert(document("Older"), time(9)).unwrap();
        store.insert(document("Newer"), time(11)).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].name, "Newer");
        assert_eq!(listed[1].name, "Older");

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn replace_keeps_created_at() {
        let (store, dir) = temp_store();

        let stored = store.insert(document("Original"), time(9)).unwrap();

        let mut updated = stored.clone();
        updated.name = "Renamed".to_string();

        let replaced = store.replace(updated, time(12)).unwrap().unwrap();

        assert_eq!(replaced.created_at, Some(time(9)));
        assert_eq!(replaced.updated_at, Some(time(12)));
        assert_eq!(store.get(1).unwrap().unwrap().name, "Renamed");

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn replace_of_missing_document_returns_none() {
        let (store, dir) = temp_store();

        let mut ghost = document("Ghost");
        ghost.id = Some(42);

        assert!(store.replace(ghost, time(9)).unwrap().is_none());

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn delete_reports_whether_anything_was_removed() {
        let (store, dir) = temp_store();

        store.insert(document("Doomed"), time(9)).unwrap();

        assert!(store.delete(1).unwrap());
        assert!(!store.delete(1).unwrap());
        assert!(store.get(1).unwrap().is_none());

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn corrupt_files_are_skipped_in_listing() {
        let (store, dir) = temp_store();

        store.insert(document("Valid"), time(9)).unwrap();
        std::fs::write(dir.join("7.json.gz"), b"not gzip at all").unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Valid");

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn id_allocation_skips_over_corrupt_file_names() {
        let (store, dir) = temp_store();

        std::fs::write(dir.join("notes.txt"), b"ignore me").unwrap();
        let stored = store.insert(document("First"), time(9)).unwrap();

        assert_eq!(stored.id, Some(1));

        std::fs::remove_dir_all(dir).unwrap();
    }
}
