//! Durable key-value storage used for the session record.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store only sees `KeyValueStore`. Hydrate builds back it with
//! browser `localStorage`; SSR and tests use `MemoryStorage`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Minimal string key-value surface.
pub trait KeyValueStore: Send + Sync {
    /// Read the value for `key`, `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns an error when the write is rejected (e.g. quota exceeded).
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns an error when the backing store cannot be modified.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Process-local storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.entries_mut().insert(key.to_owned(), value.to_owned());
        storage
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries_mut().contains_key(key)
    }

    fn entries_mut(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries_mut().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries_mut().remove(key);
        Ok(())
    }
}

/// Browser `localStorage`, looked up on every call.
///
/// Holding no `web_sys` handle keeps the type `Send + Sync`.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn local() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
fn js_message(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local()?
            .get_item(key)
            .map_err(|e| StorageError::Read(js_message(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(js_message(&e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::local()?
            .remove_item(key)
            .map_err(|e| StorageError::Write(js_message(&e)))
    }
}
