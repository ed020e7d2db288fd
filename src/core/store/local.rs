//! `localStorage` backed store for the browser build

use super::{KeyValueStore, StoreError};

/// Handle to the page's `localStorage`
///
/// The storage object is looked up on every call; it cannot be held across
/// threads and the lookup is cheap.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

fn storage() -> Result<web_sys::Storage, StoreError> {
    let window = web_sys::window().ok_or(StoreError::Unavailable)?;
    window
        .local_storage()
        .map_err(|_| StoreError::Unavailable)?
        .ok_or(StoreError::Unavailable)
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        storage()?
            .get_item(key)
            .map_err(|_| StoreError::Unavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        storage()?
            .set_item(key, value)
            .map_err(|_| StoreError::WriteRejected {
                key: key.to_string(),
            })
    }
}
