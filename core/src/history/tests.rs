//! Tests for the bounded travel history.
//!
//! Covers the cap/eviction and ordering invariants, no-op removal, and
//! persistence across a simulated restart.

use chronolens_types::{TravelKind, TravelRecord};
use tempfile::tempdir;

use super::{HISTORY_CAP, HistoryStore};
use crate::storage::JsonStore;

/// Create a test record with the given id/year.
fn make_record(id: &str, year: i32) -> TravelRecord {
    TravelRecord {
        id: id.to_string(),
        landmark_id: "1".to_string(),
        landmark_name: "Kaaba".to_string(),
        year,
        kind: TravelKind::Past,
        image_uri: format!("data:image/png;base64,{id}"),
        created_at: 1_700_000_000_000,
    }
}

#[test]
fn add_prepends_newest_first() {
    let dir = tempdir().unwrap();
    let mut history = HistoryStore::load(JsonStore::at(dir.path()));

    history.add(make_record("a", 1500)).unwrap();
    history.add(make_record("b", 1600)).unwrap();
    history.add(make_record("c", 1700)).unwrap();

    let ids: Vec<&str> = history.records().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "b", "a"]);
}

#[test]
fn length_grows_until_cap() {
    let dir = tempdir().unwrap();
    let mut history = HistoryStore::load(JsonStore::at(dir.path()));

    for i in 0..60 {
        let prior = history.len();
        history.add(make_record(&format!("r{i}"), 1000 + i as i32)).unwrap();
        assert_eq!(history.len(), (prior + 1).min(HISTORY_CAP));
    }
    assert_eq!(history.len(), HISTORY_CAP);
}

#[test]
fn fifty_first_add_evicts_exactly_the_oldest() {
    let dir = tempdir().unwrap();
    let mut history = HistoryStore::load(JsonStore::at(dir.path()));

    for i in 0..HISTORY_CAP {
        history.add(make_record(&format!("r{i}"), 1000 + i as i32)).unwrap();
    }
    assert_eq!(history.len(), HISTORY_CAP);
    // Oldest is the very first insert, sitting at the highest index.
    assert_eq!(history.records().last().unwrap().id, "r0");

    history.add(make_record("newest", 2024)).unwrap();

    assert_eq!(history.len(), HISTORY_CAP);
    assert_eq!(history.records()[0].id, "newest");
    // r0 is gone, r1 survives as the new oldest.
    assert_eq!(history.records().last().unwrap().id, "r1");
    assert!(history.records().iter().all(|r| r.id != "r0"));
}

#[test]
fn remove_drops_only_the_matching_record() {
    let dir = tempdir().unwrap();
    let mut history = HistoryStore::load(JsonStore::at(dir.path()));

    history.add(make_record("a", 1500)).unwrap();
    history.add(make_record("b", 1600)).unwrap();
    history.add(make_record("c", 1700)).unwrap();

    history.remove("b").unwrap();

    let ids: Vec<&str> = history.records().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "a"]);
}

#[test]
fn remove_unknown_id_is_a_noop() {
    let dir = tempdir().unwrap();
    let mut history = HistoryStore::load(JsonStore::at(dir.path()));

    history.add(make_record("a", 1500)).unwrap();
    history.add(make_record("b", 1600)).unwrap();
    let before = history.records().to_vec();

    history.remove("does-not-exist").unwrap();

    assert_eq!(history.records(), before.as_slice());
}

#[test]
fn history_survives_restart() {
    let dir = tempdir().unwrap();

    {
        let mut history = HistoryStore::load(JsonStore::at(dir.path()));
        history.add(make_record("a", 1500)).unwrap();
        history.add(make_record("b", 1600)).unwrap();
    }

    let reloaded = HistoryStore::load(JsonStore::at(dir.path()));
    let ids: Vec<&str> = reloaded.records().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
}

#[test]
fn clear_then_restart_yields_empty() {
    let dir = tempdir().unwrap();

    {
        let mut history = HistoryStore::load(JsonStore::at(dir.path()));
        history.add(make_record("a", 1500)).unwrap();
        history.clear().unwrap();
    }

    let reloaded = HistoryStore::load(JsonStore::at(dir.path()));
    assert!(reloaded.is_empty());
}

#[test]
fn corrupt_persisted_history_loads_empty() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("travel_history.json"), b"]] nonsense").unwrap();

    let history = HistoryStore::load(JsonStore::at(dir.path()));
    assert!(history.is_empty());
}

#[test]
fn overlong_persisted_history_is_truncated_on_load() {
    let dir = tempdir().unwrap();
    let records: Vec<_> = (0..70).map(|i| make_record(&format!("r{i}"), 1000 + i)).collect();
    JsonStore::at(dir.path()).write("travel_history", &records).unwrap();

    let history = HistoryStore::load(JsonStore::at(dir.path()));
    assert_eq!(history.len(), HISTORY_CAP);
    assert_eq!(history.records()[0].id, "r0");
}
