use super::*;

#[test]
fn memory_store_round_trips_strings() {
    let store = MemoryStore::new();
    assert_eq!(store.get("k").unwrap(), None);
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").unwrap(), Some("v".to_owned()));
}

#[test]
fn memory_store_overwrites_existing_key() {
    let store = MemoryStore::new();
    store.set("k", "first").unwrap();
    store.set("k", "second").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));
}

#[test]
fn load_json_missing_key_is_none() {
    let store = MemoryStore::new();
    let value: Option<Vec<u32>> = load_json(&store, "missing").unwrap();
    assert!(value.is_none());
}

#[test]
fn load_json_rejects_malformed_value() {
    let store = MemoryStore::new();
    store.set("k", "{not json").unwrap();
    let err = load_json::<_, Vec<u32>>(&store, "k").unwrap_err();
    assert!(matches!(err, StorageError::Json(_)));
}

#[test]
fn save_json_writes_compact_json() {
    let store = MemoryStore::new();
    save_json(&store, "k", &serde_json::json!({ "a": 1 })).unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some(r#"{"a":1}"#));
}

#[test]
fn browser_storage_is_unavailable_natively() {
    assert_eq!(BrowserStorage.get("k"), Err(StorageError::Unavailable));
    assert_eq!(BrowserStorage.set("k", "v"), Err(StorageError::Unavailable));
}
