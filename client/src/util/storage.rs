//! Browser `localStorage` backend for the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the hydrate-only web-sys glue. Outside the browser (SSR and
//! native tests) reads find nothing and writes are dropped.

use session::{SessionStorage, StorageError};

/// Zero-sized handle; the window's storage is looked up per call.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn backend_error(op: &'static str, key: &str, err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Backend { op, key: key.to_owned(), reason: format!("{err:?}") }
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(|e| backend_error("get", key, &e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.set_item(key, value).map_err(|e| backend_error("set", key, &e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.remove_item(key).map_err(|e| backend_error("remove", key, &e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(())
        }
    }
}
