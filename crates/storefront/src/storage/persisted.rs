//! Typed JSON slot over a [`KeyValueStore`].

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{KeyValueStore, StorageError};

/// A JSON document of type `T` stored under a fixed key.
///
/// Loading never fails: a missing key, an unreadable backend, or a payload
/// that does not decode as `T` all read as `None`. Undecodable payloads are
/// removed so the next load starts clean. Saving is fire-and-forget; errors
/// are logged and the in-memory state stays authoritative.
pub struct Persisted<T> {
    store: Arc<dyn KeyValueStore>,
    key: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> fmt::Debug for Persisted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Persisted").field("key", &self.key).finish()
    }
}

impl<T> Persisted<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Bind a slot to `key` in `store`.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, key: &'static str) -> Self {
        Self {
            store,
            key,
            _marker: PhantomData,
        }
    }

    /// The storage key.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Read and decode the stored document.
    pub fn load(&self) -> Option<T> {
        let raw = match self.store.get(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(key = self.key, error = %e, "Failed to read stored state");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(
                    key = self.key,
                    error = %e,
                    "Discarding stored state that no longer decodes"
                );
                if let Err(e) = self.store.remove(self.key) {
                    tracing::warn!(key = self.key, error = %e, "Failed to remove stored state");
                }
                None
            }
        }
    }

    /// Encode and write `value`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if encoding or the backend write fails.
    pub fn try_save(&self, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value).map_err(|source| StorageError::Encode {
            key: self.key.to_owned(),
            source,
        })?;
        self.store.set(self.key, &json)
    }

    /// Write `value`, logging rather than returning failures.
    pub fn save(&self, value: &T) {
        if let Err(e) = self.try_save(value) {
            tracing::error!(key = self.key, error = %e, "Failed to persist state");
        }
    }

    /// Remove the stored document, logging failures.
    pub fn clear(&self) {
        if let Err(e) = self.store.remove(self.key) {
            tracing::error!(key = self.key, error = %e, "Failed to clear stored state");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_missing_key_loads_none() {
        let slot: Persisted<Vec<u32>> = Persisted::new(Arc::new(MemoryStore::new()), "nums");
        assert_eq!(slot.load(), None);
    }

    #[test]
    fn test_save_then_load() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let slot: Persisted<Vec<u32>> = Persisted::new(Arc::clone(&store), "nums");

        slot.save(&vec![1, 2, 3]);
        assert_eq!(store.get("nums").unwrap().as_deref(), Some("[1,2,3]"));
        assert_eq!(slot.load(), Some(vec![1, 2, 3]));

        slot.clear();
        assert_eq!(slot.load(), None);
    }

    #[test]
    fn test_corrupted_payload_is_discarded() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        store.set("nums", "{not json").unwrap();

        let slot: Persisted<Vec<u32>> = Persisted::new(Arc::clone(&store), "nums");
        assert_eq!(slot.load(), None);
        assert_eq!(store.get("nums").unwrap(), None);
    }

    #[test]
    fn test_shape_change_is_discarded() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        store.set("nums", r#"{"items":[1]}"#).unwrap();

        let slot: Persisted<Vec<u32>> = Persisted::new(store, "nums");
        assert_eq!(slot.load(), None);
    }
}
