//! Mock user records
//!
//! Records are persisted as plain JSON objects `{ id, name, email, password }`.
//! The password is kept as plain text: this is demo data, not an account system.

use serde::{Deserialize, Serialize};

/// A registered user as stored under the `users` key.
///
/// The same shape is written under `currentUser` as the session marker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    /// Wall-clock timestamp (milliseconds) taken at registration
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl UserRecord {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Exact, case-sensitive comparison of both credentials
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

/// Pick an id for a record appended to `users`.
///
/// Ids follow the wall clock but never go backwards within the collection,
/// and two registrations in the same millisecond get distinct ids. An id of
/// `i64::MAX` left in edited storage pins the result instead of overflowing.
pub fn next_user_id(users: &[UserRecord], now_ms: i64) -> i64 {
    match users.iter().map(|u| u.id).max() {
        Some(last) if last >= now_ms => last.saturating_add(1),
        _ => now_ms,
    }
}
