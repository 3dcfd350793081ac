//! On-device key-value storage.
//!
//! Every state container persists one JSON document under a fixed key.
//! Documents are not versioned: a payload that no longer matches its type
//! is discarded on load and the container starts from its empty default.
//!
//! # Backends
//!
//! - [`FileStore`] - one `<key>.json` file per key in a data directory
//! - [`MemoryStore`] - process-local map, for tests and ephemeral sessions
//!
//! # Typed access
//!
//! - [`Persisted`] - a typed slot bound to one key
//! - [`PersistedReducer`] - a reducer that is hydrated from, and written back
//!   to, a [`Persisted`] slot

mod file;
mod memory;
mod persisted;
mod reducer;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use persisted::Persisted;
pub use reducer::{PersistedReducer, Reducer};

use thiserror::Error;

/// Storage keys, one per state container.
pub mod keys {
    /// Cart line items.
    pub const CART: &str = "chapter2-cart";

    /// Wishlist entries.
    pub const WISHLIST: &str = "chapter2-wishlist";

    /// Signed-in user; absent when signed out.
    pub const AUTH_USER: &str = "chapter2-auth-user";

    /// Shopper preferences.
    pub const USER_PREFERENCES: &str = "chapter2-user-preferences";
}

/// Errors from a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("storage I/O error for key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Key cannot be mapped onto the backend.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// Value could not be encoded as JSON.
    #[error("failed to encode value for key {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Backend lock was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// A string-valued key-value store.
///
/// Implementations must be safe to share across threads; the storefront
/// itself only touches a store from one task at a time.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
