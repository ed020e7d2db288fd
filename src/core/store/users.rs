//! JSON-encoded user collection and session marker

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{SharedStore, StoreError};
use crate::core::user::UserRecord;

/// Key holding the ordered array of registered users
pub const USERS_KEY: &str = "users";

/// Key holding the record of the last user who logged in
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Typed access to the mock user store
///
/// Every call reads or writes the whole value; there is no caching, so a
/// change made by another tab is picked up on the next load.
#[derive(Clone)]
pub struct UserStore {
    store: SharedStore,
}

impl UserStore {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Load all registered users. A missing key is an empty collection.
    pub fn load_users(&self) -> Result<Vec<UserRecord>, StoreError> {
        Ok(self.read(USERS_KEY)?.unwrap_or_default())
    }

    /// Replace the whole user collection
    pub fn save_users(&self, users: &[UserRecord]) -> Result<(), StoreError> {
        self.write(USERS_KEY, &users)
    }

    /// Session marker, `None` until the first successful login
    pub fn load_current_user(&self) -> Result<Option<UserRecord>, StoreError> {
        self.read(CURRENT_USER_KEY)
    }

    /// Overwrite the session marker
    pub fn save_current_user(&self, user: &UserRecord) -> Result<(), StoreError> {
        self.write(CURRENT_USER_KEY, user)
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::Corrupt {
                key: key.to_string(),
                message: e.to_string(),
            })
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string(value).map_err(|e| StoreError::Encode {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.store.set(key, &json)
    }
}
