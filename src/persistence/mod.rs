//! Best-effort document persistence
//!
//! - `KeyValueStore`: string key/value backend (memory, file, LocalStorage)
//! - `Storage<T, S>`: one JSON document under a fixed key; never fails

mod memory;

pub use memory::MemoryStore;

use std::marker::PhantomData;

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Failure reported by a storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("document could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String key/value backend
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// A single JSON document stored under a fixed key.
///
/// Reads fall back to a default and writes are dropped on failure; problems
/// are logged and never returned.
#[derive(Debug)]
pub struct Storage<T, S> {
    key: String,
    backend: S,
    _doc: PhantomData<fn() -> T>,
}

impl<T, S> Storage<T, S>
where
    T: Serialize + DeserializeOwned,
    S: KeyValueStore,
{
    pub fn new(key: impl Into<String>, backend: S) -> Self {
        Self {
            key: key.into(),
            backend,
            _doc: PhantomData,
        }
    }

    /// Load the stored document, or `default()` if it is missing or unreadable
    pub fn get(&self, default: impl FnOnce() -> T) -> T {
        let raw = match self.backend.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::info!("No saved '{}' found, starting fresh", self.key);
                return default();
            }
            Err(e) => {
                log::warn!("Failed to read '{}': {}", self.key, e);
                return default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(doc) => doc,
            Err(e) => {
                log::warn!("Discarding unreadable '{}': {}", self.key, e);
                default()
            }
        }
    }

    /// Store the document, dropping it on failure
    pub fn set(&mut self, doc: &T) {
        let result = serde_json::to_string(doc)
            .map_err(StorageError::from)
            .and_then(|json| self.backend.set_item(&self.key, &json));
        if let Err(e) = result {
            log::warn!("Failed to save '{}': {}", self.key, e);
        }
    }

    /// Remove the stored document
    pub fn clear(&mut self) {
        if let Err(e) = self.backend.remove_item(&self.key) {
            log::warn!("Failed to clear '{}': {}", self.key, e);
        }
    }
}
