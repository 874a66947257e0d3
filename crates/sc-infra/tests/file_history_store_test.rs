//! Integration tests for [`FileHistoryStore`].

use sc_core::ports::HistoryStorePort;
use sc_core::{HistoryRecord, Registry, MAX_REGISTRY_LENGTH};
use sc_infra::FileHistoryStore;
use tempfile::TempDir;

#[test]
fn test_save_then_load_preserves_text_sticky_and_order() {
    let dir = TempDir::new().unwrap();
    let store = FileHistoryStore::new(dir.path().join("registry.json"));
    let records = vec![
        HistoryRecord::new("pinned", true),
        HistoryRecord::new("line one\nline two", false),
        HistoryRecord::new("emoji ✂️ and \"quotes\"", false),
    ];

    store.save(&records).unwrap();

    assert_eq!(store.load().unwrap(), records);
}

#[test]
fn test_registry_survives_a_restart() {
    let dir = TempDir::new().unwrap();
    let store = FileHistoryStore::new(dir.path().join("registry.json"));

    let mut registry = Registry::new(MAX_REGISTRY_LENGTH);
    registry.insert("a", false);
    let b = registry.insert("b", false).unwrap();
    registry.insert("c", false);
    registry.set_sticky(&b, true);
    store.save(&registry.records()).unwrap();

    let restored = Registry::from_records(store.load().unwrap(), MAX_REGISTRY_LENGTH);

    assert_eq!(restored.records(), registry.records());
    assert_eq!(restored.sticky_len(), 1);
}

#[test]
fn test_save_creates_missing_parent_dirs_and_leaves_no_temp_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("stickclip").join("registry.json");
    let store = FileHistoryStore::new(&path);

    store.save(&[HistoryRecord::new("a", false)]).unwrap();

    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn test_save_replaces_previous_contents() {
    let dir = TempDir::new().unwrap();
    let store = FileHistoryStore::new(dir.path().join("registry.json"));

    store.save(&[HistoryRecord::new("old", false)]).unwrap();
    store.save(&[HistoryRecord::new("new", true)]).unwrap();

    assert_eq!(store.load().unwrap(), vec![HistoryRecord::new("new", true)]);
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("registry.json");
    std::fs::write(&path, "{not json").unwrap();

    let err = FileHistoryStore::new(&path).load().unwrap_err();

    assert!(err.to_string().contains("parse history failed"));
}
