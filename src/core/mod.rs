//! Core models and logic for the login/signup page
//!
//! Nothing in here depends on the browser; storage is injected through
//! [`store::KeyValueStore`].

pub mod auth;
#[cfg(feature = "ssr")]
pub mod config;
pub mod form;
pub mod notification;
pub mod store;
pub mod user;
pub mod validation;

pub use auth::{AuthError, MODE_SWITCH_DELAY_MS, MockAuthService, SubmitOutcome};
pub use form::{AuthMode, CredentialInput, FormState};
pub use notification::{
    ActiveNotice, DismissOnce, NOTIFICATION_TIMEOUT_MS, Notice, NotificationSlot, Severity,
};
pub use store::{KeyValueStore, MemoryStore, SharedStore, StoreError, UserStore};
pub use user::UserRecord;
pub use validation::{FieldErrors, FormField, PASSWORD_POLICY, PasswordPolicy, ValidationError};
