//! Bounded, persisted travel history.
//!
//! The history is the authoritative list of completed generation events,
//! ordered newest-first and capped at [`HISTORY_CAP`] entries. Every mutation
//! persists the whole collection through a [`JsonStore`] key; the in-memory
//! list is updated first and is never rolled back on a persistence failure —
//! the failure is returned to the caller instead.

use chronolens_types::TravelRecord;

use crate::storage::{JsonStore, StorageError};

/// Maximum number of records retained. Insertion beyond the cap evicts the
/// oldest entries.
pub const HISTORY_CAP: usize = 50;

/// Storage key holding the serialized record collection.
const HISTORY_KEY: &str = "travel_history";

/// The bounded, ordered, persisted collection of [`TravelRecord`]s.
#[derive(Debug)]
pub struct HistoryStore {
    records: Vec<TravelRecord>,
    store: JsonStore,
}

impl HistoryStore {
    /// Load the persisted history from `store`.
    ///
    /// Missing data initializes an empty history. Corrupt data also falls
    /// back to an empty history: the error is logged and swallowed, since
    /// there is nothing actionable for the user in a broken history blob.
    pub fn load(store: JsonStore) -> Self {
        let mut records = match store.read::<Vec<TravelRecord>>(HISTORY_KEY) {
            Ok(Some(records)) => records,
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load travel history, starting empty");
                Vec::new()
            }
        };
        // Hold the cap invariant even if a previous run persisted more.
        records.truncate(HISTORY_CAP);

        Self { records, store }
    }

    /// Records, newest first.
    pub fn records(&self) -> &[TravelRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Prepend `record`, evict past the cap, persist.
    ///
    /// No uniqueness check is performed on `record.id`.
    pub fn add(&mut self, record: TravelRecord) -> Result<(), StorageError> {
        self.records.insert(0, record);
        self.records.truncate(HISTORY_CAP);
        self.persist()
    }

    /// Remove the first record whose id matches, then persist.
    ///
    /// An unknown id leaves the collection unchanged; the (identical)
    /// collection is still persisted.
    pub fn remove(&mut self, id: &str) -> Result<(), StorageError> {
        if let Some(idx) = self.records.iter().position(|r| r.id == id) {
            self.records.remove(idx);
        }
        self.persist()
    }

    /// Empty the collection and persist the empty state.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.records.clear();
        self.persist()
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.store.write(HISTORY_KEY, &self.records)
    }
}

#[cfg(test)]
mod tests;
