use serde::{Deserialize, Serialize};
use tempfile::tempdir;

use super::{JsonStore, StorageError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Sample {
    name: String,
    count: u32,
}

#[test]
fn read_missing_key_returns_none() {
    let dir = tempdir().unwrap();
    let store = JsonStore::at(dir.path());

    let value: Option<Sample> = store.read("nothing_here").unwrap();
    assert!(value.is_none());
}

#[test]
fn write_then_read_roundtrip() {
    let dir = tempdir().unwrap();
    let store = JsonStore::at(dir.path());

    let sample = Sample {
        name: "eiffel".to_string(),
        count: 3,
    };
    store.write("sample", &sample).unwrap();

    let loaded: Option<Sample> = store.read("sample").unwrap();
    assert_eq!(loaded, Some(sample));
}

#[test]
fn write_replaces_previous_value() {
    let dir = tempdir().unwrap();
    let store = JsonStore::at(dir.path());

    store
        .write("sample", &Sample { name: "a".to_string(), count: 1 })
        .unwrap();
    store
        .write("sample", &Sample { name: "b".to_string(), count: 2 })
        .unwrap();

    let loaded: Sample = store.read("sample").unwrap().unwrap();
    assert_eq!(loaded.name, "b");
    assert_eq!(loaded.count, 2);
}

#[test]
fn corrupt_file_is_a_typed_error() {
    let dir = tempdir().unwrap();
    let store = JsonStore::at(dir.path());

    std::fs::write(dir.path().join("sample.json"), b"not json {{{").unwrap();

    let result: Result<Option<Sample>, _> = store.read("sample");
    assert!(matches!(result, Err(StorageError::Corrupt { .. })));
}

#[test]
fn write_creates_missing_directory() {
    let dir = tempdir().unwrap();
    let store = JsonStore::at(dir.path().join("nested").join("deeper"));

    store
        .write("sample", &Sample { name: "a".to_string(), count: 1 })
        .unwrap();

    let loaded: Option<Sample> = store.read("sample").unwrap();
    assert!(loaded.is_some());
}

#[test]
fn no_temp_file_left_behind_after_write() {
    let dir = tempdir().unwrap();
    let store = JsonStore::at(dir.path());

    store
        .write("sample", &Sample { name: "a".to_string(), count: 1 })
        .unwrap();

    assert!(!dir.path().join("sample.json.tmp").exists());
    assert!(dir.path().join("sample.json").exists());
}
