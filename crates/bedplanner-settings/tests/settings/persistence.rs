use bedplanner_settings::{FileStore, KeyValueStore};
use tempfile::tempdir;

#[test]
fn test_file_store_overwrites_single_slot() {
    let dir = tempdir().unwrap();
    let mut store = FileStore::new(dir.path().join("store"));

    assert_eq!(store.get("autosave.csv").unwrap(), None);

    store.set("autosave.csv", "first").unwrap();
    store.set("autosave.csv", "second").unwrap();
    assert_eq!(store.get("autosave.csv").unwrap().as_deref(), Some("second"));

    let entries = std::fs::read_dir(store.directory()).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn test_file_store_remove() {
    let dir = tempdir().unwrap();
    let mut store = FileStore::new(dir.path());

    store.set("autosave.csv", "value").unwrap();
    store.remove("autosave.csv").unwrap();
    assert_eq!(store.get("autosave.csv").unwrap(), None);

    // Removing again is fine
    store.remove("autosave.csv").unwrap();
}
