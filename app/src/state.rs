//! Shared application state: the selected year and the travel history.
//!
//! Owned by the root of the UI tree and handed to screens through context,
//! rather than living as ambient global state. The history store sits inside
//! a signal, so every reader re-renders when a mutation goes through —
//! subscription is the notification mechanism.

use chronolens_core::data::Landmark;
use chronolens_core::era::PRESENT_YEAR;
use chronolens_core::history::HistoryStore;
use chronolens_core::storage::{JsonStore, StorageError};
use chronolens_types::{TravelKind, TravelRecord};
use dioxus::prelude::*;

/// App-wide year/history state.
///
/// Access via [`use_time_explorer`] from any component.
#[derive(Clone, Copy)]
pub struct TimeExplorer {
    selected_year: Signal<i32>,
    store: Signal<HistoryStore>,
}

impl TimeExplorer {
    /// Create the state, loading persisted history from the default store.
    pub fn new() -> Self {
        Self {
            selected_year: Signal::new(PRESENT_YEAR),
            store: Signal::new(HistoryStore::load(JsonStore::open_default())),
        }
    }

    pub fn selected_year(&self) -> i32 {
        *self.selected_year.read()
    }

    pub fn set_selected_year(&mut self, year: i32) {
        self.selected_year.set(year);
    }

    /// Snapshot of the travel history, newest first.
    pub fn history(&self) -> Vec<TravelRecord> {
        self.store.read().records().to_vec()
    }

    pub fn history_len(&self) -> usize {
        self.store.read().len()
    }

    /// Push a completed generation into the history. The in-memory list is
    /// always updated; the returned error only reports a persistence failure.
    pub fn add_to_history(&mut self, record: TravelRecord) -> Result<(), StorageError> {
        self.store.write().add(record)
    }

    pub fn remove_from_history(&mut self, id: &str) -> Result<(), StorageError> {
        self.store.write().remove(id)
    }

    pub fn clear_history(&mut self) -> Result<(), StorageError> {
        self.store.write().clear()
    }
}

impl Default for TimeExplorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize the state provider at the app root.
///
/// Call this once in the App component before any children that use
/// [`use_time_explorer`].
pub fn use_time_explorer_provider() -> TimeExplorer {
    use_context_provider(TimeExplorer::new)
}

/// Get the shared state from context.
pub fn use_time_explorer() -> TimeExplorer {
    use_context::<TimeExplorer>()
}

/// Build a [`TravelRecord`] for a just-generated image. The id and creation
/// time both come from the current epoch-millis clock.
pub fn new_travel_record(
    landmark: &Landmark,
    year: i32,
    kind: TravelKind,
    image_uri: String,
) -> TravelRecord {
    let now = chrono::Utc::now().timestamp_millis();
    TravelRecord {
        id: now.to_string(),
        landmark_id: landmark.id.to_string(),
        landmark_name: landmark.name.to_string(),
        year,
        kind,
        image_uri,
        created_at: now,
    }
}
