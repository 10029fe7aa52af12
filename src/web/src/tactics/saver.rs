use chrono::Utc;
use pitchside_core::{TacticDocument, TacticError};
use database::TacticStore;
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Persistence seam of the save pipeline. Synchronous on purpose: the
/// coordinator runs writes under `spawn_blocking`.
pub trait TacticWriter: Send + Sync + 'static {
    fn write(&self, document: TacticDocument) -> Result<TacticDocument, TacticError>;
}

/// Production writer backed by the file store. New documents are inserted,
/// documents with an id overwrite their stored version.
pub struct StoreWriter {
    store: Arc<TacticStore>,
}

impl StoreWriter {
    pub fn new(store: Arc<TacticStore>) -> Self {
        StoreWriter { store }
    }
}

impl TacticWriter for StoreWriter {
    fn write(&self, document: TacticDocument) -> Result<TacticDocument, TacticError> {
        let now = Utc::now().naive_utc();

        match document.id {
            Some(id) => self
                .store
                .replace(document, now)
                .map_err(|err| TacticError::Persistence(err.to_string()))?
                .ok_or_else(|| {
                    TacticError::Persistence(format!("tactic {} vanished during save", id))
                }),
            None => self
                .store
                .insert(document, now)
                .map_err(|err| TacticError::Persistence(err.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// The write completed; holds the document as stored.
    Stored(TacticDocument),
    /// A newer snapshot arrived while this one waited; the in-flight save
    /// will write the latest snapshot instead.
    Superseded,
}

struct Slot {
    pending: Option<TacticDocument>,
}

/// Serializes save requests per document: at most one write is in flight
/// per document id, and snapshots submitted meanwhile supersede each other
/// so only the latest reaches the store. Documents not yet created (no id)
/// share one slot, matching the single-board editing session.
pub struct SaveCoordinator<W> {
    writer: Arc<W>,
    slots: Mutex<HashMap<Option<u32>, Slot>>,
}

impl<W: TacticWriter> SaveCoordinator<W> {
    pub fn new(writer: Arc<W>) -> Self {
        SaveCoordinator {
            writer,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Submits a snapshot for persistence. Returns `Superseded` right away
    /// when a save for the same document is already in flight; the caller
    /// owning that save drains the latest pending snapshot before
    /// finishing, so its `Stored` result reflects the final state.
    pub async fn save(&self, document: TacticDocument) -> Result<SaveOutcome, TacticError> {
        let key = document.id;

        {
            let mut slots = self.slots.lock().await;

            if let Some(slot) = slots.get_mut(&key) {
                debug!("save for tactic {:?} superseded by a newer snapshot", key);
                slot.pending = Some(document);
                return Ok(SaveOutcome::Superseded);
            }

            slots.insert(key, Slot { pending: None });
        }

        let mut current = document;

        let result = loop {
            let writer = Arc::clone(&self.writer);

            let write_result = match tokio::task::spawn_blocking(move || writer.write(current))
                .await
            {
                Ok(inner) => inner,
                Err(err) => Err(TacticError::Persistence(format!(
                    "save task failed: {}",
                    err
                ))),
            };

            // pick up a snapshot that parked while the write ran
            let next = {
                let mut slots = self.slots.lock().await;

                match slots.get_mut(&key).and_then(|slot| slot.pending.take()) {
                    Some(next) => Some(next),
                    None => {
                        slots.remove(&key);
                        None
                    }
                }
            };

            match next {
                Some(next_document) => current = next_document,
                None => break write_result,
            }
        };

        result.map(SaveOutcome::Stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitchside_core::PitchMode;
    use std::sync::Mutex as StdMutex;
    use std::time::Duration;

    struct RecordingWriter {
        delay: Duration,
        written: StdMutex<Vec<String>>,
    }

    impl RecordingWriter {
        fn new(delay: Duration) -> Self {
            RecordingWriter {
                delay,
                written: StdMutex::new(Vec::new()),
            }
        }

        fn written(&self) -> Vec<String> {
            self.written.lock().unwrap().clone()
        }
    }

    impl TacticWriter for RecordingWriter {
        fn write(&self, mut document: TacticDocument) -> Result<TacticDocument, TacticError> {
            std::thread::sleep(self.delay);
            self.written.lock().unwrap().push(document.name.clone());
            document.id.get_or_insert(1);
            Ok(document)
        }
    }

    fn document(name: &str, id: Option<u32>) -> TacticDocument {
        TacticDocument {
            id,
            name: name.to_string(),
            mode: PitchMode::Football,
            formation_label: "4-4-2".to_string(),
            players: Vec::new(),
            drawing_data: String::new(),
            created_at: None,
            updated_at: None,
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn sequential_saves_are_all_stored() {
        let writer = Arc::new(RecordingWriter::new(Duration::from_millis(1)));
        let coordinator = SaveCoordinator::new(Arc::clone(&writer));

        for name in ["first", "second"] {
            let outcome = coordinator.save(document(name, Some(3))).await.unwrap();
            assert!(matches!(outcome, SaveOutcome::Stored(_)));
        }

        assert_eq!(writer.written(), vec!["first", "second"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn later_snapshots_supersede_parked_ones() {
        let writer = Arc::new(RecordingWriter::new(Duration::from_millis(120)));
        let coordinator = Arc::new(SaveCoordinator::new(Arc::clone(&writer)));

        let slow = tokio::spawn({
            let coordinator = Arc::clone(&coordinator);
            async move { coordinator.save(document("first", Some(5))).await }
        });

        // let the first save reach its blocking write
        tokio::time::sleep(Duration::from_millis(30)).await;

        let second = coordinator.save(document("second", Some(5))).await.unwrap();
        let third = coordinator.save(document("third", Some(5))).await.unwrap();

        assert_eq!(second, SaveOutcome::Superseded);
        assert_eq!(third, SaveOutcome::Superseded);

        let first = slow.await.unwrap().unwrap();

        // the draining save wrote the latest snapshot, skipping "second"
        assert_eq!(writer.written(), vec!["first", "third"]);
        match first {
            SaveOutcome::Stored(stored) => assert_eq!(stored.name, "third"),
            SaveOutcome::Superseded => panic!("draining save must report the stored document"),
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn saves_for_different_documents_run_independently() {
        let writer = Arc::new(RecordingWriter::new(Duration::from_millis(80)));
        let coordinator = Arc::new(SaveCoordinator::new(Arc::clone(&writer)));

        let left = tokio::spawn({
            let coordinator = Arc::clone(&coordinator);
            async move { coordinator.save(document("left", Some(1))).await }
        });

        tokio::time::sleep(Duration::from_millis(20)).await;

        let right = coordinator.save(document("right", Some(2))).await.unwrap();

        assert!(matches!(right, SaveOutcome::Stored(_)));
        assert!(matches!(left.await.unwrap().unwrap(), SaveOutcome::Stored(_)));
        assert_eq!(writer.written().len(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn slot_is_released_after_a_failed_save() {
        struct FailingWriter;

        impl TacticWriter for FailingWriter {
            fn write(&self, _: TacticDocument) -> Result<TacticDocument, TacticError> {
                Err(TacticError::Persistence("disk on fire".to_string()))
            }
        }

        let coordinator = SaveCoordinator::new(Arc::new(FailingWriter));

        let first = coordinator.save(document("first", Some(9))).await;
        assert!(matches!(first, Err(TacticError::Persistence(_))));

        // a failed save must not leave the slot occupied
        let second = coordinator.save(document("second", Some(9))).await;
        assert!(matches!(second, Err(TacticError::Persistence(_))));
    }
}
