//! Durable key-value storage behind the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser this is `localStorage`; natively and in tests it is
//! [`MemoryStorage`]. Only [`crate::store::SessionStore`] writes these keys.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::StorageError;
use crate::user::User;

/// Key holding the raw bearer token.
pub const TOKEN_KEY: &str = "hrms.token";
/// Key holding the JSON-encoded [`User`].
pub const USER_KEY: &str = "hrms.user";

/// String key-value store with fallible operations.
pub trait SessionStorage {
    /// Read `key`, `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the delete.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Token and user as they were last persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Persisted {
    pub token: Option<String>,
    pub user: Option<User>,
}

/// Load the persisted pair. Unreadable or corrupt entries come back as absent.
pub fn load<S: SessionStorage + ?Sized>(storage: &S) -> Persisted {
    let token = read(storage, TOKEN_KEY).filter(|t| !t.is_empty());
    let user = read(storage, USER_KEY).and_then(|raw| match serde_json::from_str::<User>(&raw) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("discarding unreadable persisted user: {e}");
            None
        }
    });
    Persisted { token, user }
}

/// Whether storage currently holds a non-empty token.
pub fn has_token<S: SessionStorage + ?Sized>(storage: &S) -> bool {
    read(storage, TOKEN_KEY).is_some_and(|t| !t.is_empty())
}

pub(crate) fn save_token<S: SessionStorage + ?Sized>(storage: &S, token: &str) {
    if let Err(e) = storage.set(TOKEN_KEY, token) {
        log::warn!("failed to persist token: {e}");
    }
}

pub(crate) fn save_user<S: SessionStorage + ?Sized>(storage: &S, user: &User) {
    match serde_json::to_string(user) {
        Ok(raw) => {
            if let Err(e) = storage.set(USER_KEY, &raw) {
                log::warn!("failed to persist user: {e}");
            }
        }
        Err(e) => log::warn!("failed to encode user: {e}"),
    }
}

pub(crate) fn clear<S: SessionStorage + ?Sized>(storage: &S) {
    for key in [TOKEN_KEY, USER_KEY] {
        if let Err(e) = storage.remove(key) {
            log::warn!("failed to clear {key}: {e}");
        }
    }
}

fn read<S: SessionStorage + ?Sized>(storage: &S, key: &str) -> Option<String> {
    match storage.get(key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("failed to read {key}: {e}");
            None
        }
    }
}

/// In-process storage. Clones share the same map, so a second store built
/// from a clone sees what the first one persisted.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}
