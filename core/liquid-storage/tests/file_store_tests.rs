use liquid_storage::{FileStore, KeyValueStore, MemoryStore, StorageError};

#[test]
fn get_missing_returns_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    assert_eq!(store.get("io.lqd.UUID").unwrap(), None);
}

#[test]
fn put_then_get() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    store.put("io.lqd.UUID", "abc").unwrap();
    assert_eq!(store.get("io.lqd.UUID").unwrap().as_deref(), Some("abc"));
}

#[test]
fn put_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    store.put("ns", "one").unwrap();
    store.put("ns", "two").unwrap();
    assert_eq!(store.get("ns").unwrap().as_deref(), Some("two"));
}

#[test]
fn put_creates_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("nested").join("liquid");
    let store = FileStore::new(&root);
    store.put("ns", "v").unwrap();
    assert!(root.join("ns").exists());
}

#[test]
fn put_leaves_no_temp_files() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    store.put("ns", "v").unwrap();
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn values_visible_to_other_instances() {
    let dir = tempfile::tempdir().unwrap();
    FileStore::new(dir.path()).put("ns", "shared").unwrap();
    let other = FileStore::new(dir.path());
    assert_eq!(other.get("ns").unwrap().as_deref(), Some("shared"));
}

#[test]
fn rejects_path_like_namespaces() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    for ns in ["", ".hidden", "../up", "a/b", "a\\b"] {
        assert!(matches!(
            store.put(ns, "v"),
            Err(StorageError::InvalidNamespace(_))
        ));
        assert!(store.get(ns).is_err());
    }
}

#[test]
fn default_location_ends_with_liquid() {
    assert!(FileStore::default_location().ends_with("liquid"));
}

#[test]
fn root_accessor() {
    let store = FileStore::new("/tmp/liquid-test");
    assert_eq!(store.root(), std::path::Path::new("/tmp/liquid-test"));
}

// ── MemoryStore ──────────────────────────────────────────────────

#[test]
fn memory_store_roundtrip_and_clear() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    store.put("a", "1").unwrap();
    assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
    assert_eq!(store.len(), 1);
    store.clear();
    assert_eq!(store.get("a").unwrap(), None);
}

#[test]
fn error_display() {
    let err = StorageError::InvalidNamespace("../x".into());
    assert!(err.to_string().contains("invalid namespace"));
    let err = StorageError::Unavailable("read-only".into());
    assert!(err.to_string().contains("unavailable"));
}
