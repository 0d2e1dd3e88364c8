use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_starts_empty() {
    let storage = MemoryStorage::new();
    assert!(storage.is_empty());
    assert_eq!(storage.get_item("user"), Ok(None));
}

#[test]
fn memory_storage_set_then_get_returns_value() {
    let storage = MemoryStorage::new();
    storage.set_item("token", "abc").unwrap();
    assert_eq!(storage.get_item("token"), Ok(Some("abc".to_owned())));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_storage_set_overwrites_previous_value() {
    let storage = MemoryStorage::new();
    storage.set_item("token", "first").unwrap();
    storage.set_item("token", "second").unwrap();
    assert_eq!(storage.get_item("token"), Ok(Some("second".to_owned())));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_storage_remove_absent_key_succeeds() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.remove_item("missing"), Ok(()));
}

#[test]
fn memory_storage_clones_share_entries() {
    let storage = MemoryStorage::new();
    let other = storage.clone();
    storage.set_item("user", "{}").unwrap();
    assert!(other.contains_key("user"));
    other.remove_item("user").unwrap();
    assert!(!storage.contains_key("user"));
}

// =============================================================
// BrowserStorage outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_unavailable_without_hydrate() {
    let storage = BrowserStorage;
    assert_eq!(storage.get_item("user"), Err(StorageError::Unavailable));
    assert_eq!(storage.set_item("user", "{}"), Err(StorageError::Unavailable));
    assert_eq!(storage.remove_item("user"), Err(StorageError::Unavailable));
}

#[test]
fn operation_error_message_names_key_and_op() {
    let err = StorageError::operation("write", "token", "QuotaExceededError");
    assert_eq!(
        err.to_string(),
        "local storage write failed for key `token`: QuotaExceededError"
    );
}
