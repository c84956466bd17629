//! Persistence for the element store.
//!
//! The canvas writes its whole element list into one slot of a synchronous
//! string key-value store after every change, and reads it back once at
//! startup. Writes are best effort: the in-memory store stays authoritative
//! when a write fails, and a missing or malformed payload restores as an
//! empty canvas.

mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;

pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

use crate::store::ElementStore;
use thiserror::Error;

/// Slot key under which the canvas elements are persisted.
pub const ELEMENTS_SLOT_KEY: &str = "canvasElements";

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// A synchronous string key-value store.
///
/// Implementations can keep values in memory, on disk, or behind a browser
/// localStorage shim; the canvas only needs get and set over string slots.
pub trait KeyValueStore {
    /// Read the value stored under a key, if any.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store a value under a key, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> StorageResult<()>;
}

/// Serializes the element store into one key-value slot on every change and
/// restores it on startup.
#[derive(Debug)]
pub struct PersistenceBridge<S: KeyValueStore> {
    store: S,
    slot: String,
}

impl<S: KeyValueStore> PersistenceBridge<S> {
    /// Create a bridge over the default slot.
    pub fn new(store: S) -> Self {
        Self::with_slot(store, ELEMENTS_SLOT_KEY)
    }

    /// Create a bridge over a custom slot key.
    pub fn with_slot(store: S, slot: impl Into<String>) -> Self {
        Self {
            store,
            slot: slot.into(),
        }
    }

    /// The slot key this bridge writes to.
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Persist the current elements. Best effort: a failed write is logged
    /// and the in-memory model remains authoritative.
    pub fn flush(&mut self, elements: &ElementStore) {
        let payload = match serde_json::to_string(elements) {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!("failed to serialize canvas elements: {e}");
                return;
            }
        };
        if let Err(e) = self.store.set(&self.slot, &payload) {
            log::warn!("failed to persist canvas elements: {e}");
        }
    }

    /// Restore the persisted elements. A missing, unreadable, or malformed
    /// payload yields an empty store rather than an error.
    pub fn restore(&self) -> ElementStore {
        let payload = match self.store.get(&self.slot) {
            Ok(Some(payload)) => payload,
            Ok(None) => return ElementStore::new(),
            Err(e) => {
                log::warn!("failed to read persisted canvas: {e}");
                return ElementStore::new();
            }
        };
        match serde_json::from_str(&payload) {
            Ok(store) => store,
            Err(e) => {
                log::warn!("ignoring malformed persisted canvas: {e}");
                ElementStore::new()
            }
        }
    }
}
