use super::*;

/// Storage whose every operation fails, to exercise the logging paths.
struct BrokenStorage;

impl SessionStorage for BrokenStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

fn sample_user() -> User {
    serde_json::from_str(r#"{"id":7,"email":"hr@corp.io","role_id":2}"#).unwrap()
}

#[test]
fn memory_storage_clones_share_entries() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.set("k", "v").unwrap();
    assert_eq!(b.get("k").unwrap().as_deref(), Some("v"));
    b.remove("k").unwrap();
    assert!(a.is_empty());
}

#[test]
fn remove_missing_key_is_ok() {
    let storage = MemoryStorage::new();
    assert!(storage.remove("nope").is_ok());
}

#[test]
fn load_empty_storage_is_logged_out() {
    let storage = MemoryStorage::new();
    assert_eq!(load(&storage), Persisted::default());
    assert!(!has_token(&storage));
}

#[test]
fn save_then_load_reproduces_pair() {
    let storage = MemoryStorage::new();
    save_token(&storage, "t1");
    save_user(&storage, &sample_user());

    let persisted = load(&storage);
    assert_eq!(persisted.token.as_deref(), Some("t1"));
    assert_eq!(persisted.user, Some(sample_user()));
}

#[test]
fn corrupt_user_entry_is_dropped() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "t1").unwrap();
    storage.set(USER_KEY, "{not json").unwrap();

    let persisted = load(&storage);
    assert_eq!(persisted.token.as_deref(), Some("t1"));
    assert!(persisted.user.is_none());
}

#[test]
fn empty_token_counts_as_absent() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "").unwrap();
    assert!(!has_token(&storage));
    assert!(load(&storage).token.is_none());
}

#[test]
fn clear_removes_both_keys() {
    let storage = MemoryStorage::new();
    save_token(&storage, "t1");
    save_user(&storage, &sample_user());
    clear(&storage);
    assert!(storage.is_empty());
}

#[test]
fn failing_backend_degrades_to_logged_out() {
    let storage = BrokenStorage;
    save_token(&storage, "t1");
    clear(&storage);
    assert_eq!(load(&storage), Persisted::default());
    assert!(!has_token(&storage));
}
