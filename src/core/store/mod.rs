//! Persistence for the mock user store
//!
//! Everything goes through the [`KeyValueStore`] trait so the browser's
//! `localStorage` can be swapped for [`MemoryStore`] in tests and during
//! server-side rendering.

#[cfg(feature = "hydrate")]
mod local;
mod memory;
mod users;

use std::sync::Arc;

#[cfg(feature = "hydrate")]
pub use local::LocalStorage;
pub use memory::MemoryStore;
pub use users::{CURRENT_USER_KEY, USERS_KEY, UserStore};

/// Storage error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Storage is unavailable")]
    Unavailable,

    #[error("Storage rejected write to '{key}'")]
    WriteRejected { key: String },

    #[error("Stored value under '{key}' is corrupt: {message}")]
    Corrupt { key: String, message: String },

    #[error("Failed to encode value for '{key}': {message}")]
    Encode { key: String, message: String },
}

/// Synchronous string key-value storage
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value under `key`, `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the raw value under `key`
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Store handle passed down the component tree
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Store backing the page in the current build.
///
/// The browser build talks to `localStorage`; the server build never runs
/// event handlers, so an empty in-memory store is enough there.
pub fn browser_store() -> SharedStore {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(LocalStorage)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(MemoryStore::new())
    }
}
