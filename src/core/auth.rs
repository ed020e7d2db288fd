//! Mock authentication against the local user store
//!
//! Login and registration only read and write the JSON records kept by
//! [`UserStore`]. Passwords are compared as plain text; nothing here is a
//! security boundary.

use crate::core::form::{AuthMode, CredentialInput, FormState};
use crate::core::notification::Notice;
use crate::core::store::{SharedStore, StoreError, UserStore};
use crate::core::user::{UserRecord, next_user_id};
use crate::core::validation::FieldErrors;

/// Delay before the form returns to login after a successful registration
pub const MODE_SWITCH_DELAY_MS: u32 = 1000;

/// Authentication error types
///
/// The `Display` text is what the user sees in the error notice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Please fix the errors in the form")]
    Validation(FieldErrors),

    /// Same for an unknown email and a wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("Storage is unavailable")]
    Storage(#[from] StoreError),
}

impl AuthError {
    pub fn notice(&self) -> Notice {
        Notice::error(self.to_string())
    }
}

/// Successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Session marker now holds this user
    LoggedIn(UserRecord),
    /// User was appended to the collection
    Registered(UserRecord),
}

impl SubmitOutcome {
    pub fn user(&self) -> &UserRecord {
        match self {
            SubmitOutcome::LoggedIn(user) | SubmitOutcome::Registered(user) => user,
        }
    }

    pub fn notice(&self) -> Notice {
        match self {
            SubmitOutcome::LoggedIn(_) => Notice::success("Login successful!"),
            SubmitOutcome::Registered(_) => Notice::success("Account created successfully!"),
        }
    }

    /// Mode the form moves to once the outcome is shown
    pub fn next_mode(&self) -> Option<AuthMode> {
        match self {
            SubmitOutcome::LoggedIn(_) => None,
            SubmitOutcome::Registered(_) => Some(AuthMode::Login),
        }
    }
}

fn wall_clock_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Login and registration over an injected store
#[derive(Clone)]
pub struct MockAuthService {
    users: UserStore,
    clock: fn() -> i64,
}

impl MockAuthService {
    pub fn new(store: SharedStore) -> Self {
        Self {
            users: UserStore::new(store),
            clock: wall_clock_ms,
        }
    }

    /// Replace the millisecond clock used for new user ids
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    pub fn users(&self) -> &UserStore {
        &self.users
    }

    /// Validate the form and run the action for its mode.
    ///
    /// Validation errors are left on `form` for inline display; storage is
    /// only touched when every field is valid.
    pub fn submit(&self, form: &mut FormState) -> Result<SubmitOutcome, AuthError> {
        if !form.validate() {
            return Err(AuthError::Validation(form.errors().clone()));
        }

        match form.mode() {
            AuthMode::Login => self.login(form.input()).map(SubmitOutcome::LoggedIn),
            AuthMode::Register => self.register(form.input()).map(SubmitOutcome::Registered),
        }
    }

    /// Look up the first record with this email and compare its password.
    /// On a match the record becomes the session marker.
    pub fn login(&self, input: &CredentialInput) -> Result<UserRecord, AuthError> {
        let users = self.users.load_users()?;
        let user = users
            .into_iter()
            .find(|u| u.email == input.email)
            .filter(|u| u.matches(&input.email, &input.password))
            .ok_or(AuthError::InvalidCredentials)?;

        self.users.save_current_user(&user)?;
        Ok(user)
    }

    /// Append a new record unless the email is already taken
    pub fn register(&self, input: &CredentialInput) -> Result<UserRecord, AuthError> {
        let mut users = self.users.load_users()?;
        if users.iter().any(|u| u.email == input.email) {
            return Err(AuthError::EmailAlreadyRegistered);
        }

        let user = UserRecord::new(
            next_user_id(&users, (self.clock)()),
            input.name.clone(),
            input.email.clone(),
            input.password.clone(),
        );
        users.push(user.clone());
        self.users.save_users(&users)?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::store::{KeyValueStore, MemoryStore, USERS_KEY};
    use crate::core::validation::FormField;

    fn fixed_clock() -> i64 {
        1_700_000_000_000
    }

    fn service(memory: &MemoryStore) -> MockAuthService {
        MockAuthService::new(Arc::new(memory.clone())).with_clock(fixed_clock)
    }

    fn seeded() -> MemoryStore {
        let memory = MemoryStore::new();
        service(&memory)
            .register(&CredentialInput::register(
                "Ada", "ada@example.com", "Secret123", "Secret123",
            ))
            .unwrap();
        memory
    }

    #[test]
    fn test_register_appends_record() {
        let memory = MemoryStore::new();
        let user = service(&memory)
            .register(&CredentialInput::register("A", "a@b.com", "Abc12345", "Abc12345"))
            .unwrap();

        assert_eq!(user.id, fixed_clock());
        assert_eq!(user.name, "A");
        let users = service(&memory).users().load_users().unwrap();
        assert_eq!(users, vec![user]);
    }

    #[test]
    fn test_register_same_millisecond_gets_distinct_ids() {
        let memory = seeded();
        let user = service(&memory)
            .register(&CredentialInput::register("B", "b@b.com", "Abc12345", "Abc12345"))
            .unwrap();

        assert_eq!(user.id, fixed_clock() + 1);
    }

    #[test]
    fn test_register_duplicate_email() {
        let memory = seeded();
        let before = memory.get(USERS_KEY).unwrap();

        let err = service(&memory)
            .register(&CredentialInput::register(
                "Other", "ada@example.com", "Other123", "Other123",
            ))
            .unwrap_err();

        assert_eq!(err, AuthError::EmailAlreadyRegistered);
        assert_eq!(memory.get(USERS_KEY).unwrap(), before);
    }

    #[test]
    fn test_email_comparison_is_case_sensitive() {
        let memory = seeded();
        let service = service(&memory);

        assert!(
            service
                .register(&CredentialInput::register(
                    "Ada", "ADA@example.com", "Secret123", "Secret123",
                ))
                .is_ok()
        );
        assert_eq!(
            service.login(&CredentialInput::login("Ada@example.com", "Secret123")),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_login_sets_current_user() {
        let memory = seeded();
        let service = service(&memory);

        let user = service
            .login(&CredentialInput::login("ada@example.com", "Secret123"))
            .unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(service.users().load_current_user().unwrap(), Some(user));
    }

    #[test]
    fn test_login_failures_look_the_same() {
        let memory = seeded();
        let service = service(&memory);

        let unknown = service
            .login(&CredentialInput::login("nobody@example.com", "Secret123"))
            .unwrap_err();
        let wrong = service
            .login(&CredentialInput::login("ada@example.com", "Secret124"))
            .unwrap_err();

        assert_eq!(unknown, wrong);
        assert_eq!(unknown.notice(), Notice::error("Invalid email or password"));
        assert_eq!(service.users().load_current_user().unwrap(), None);
    }

    #[test]
    fn test_submit_invalid_form_does_not_touch_storage() {
        let memory = MemoryStore::new();
        let mut form = FormState::new(AuthMode::Register);
        form.update(FormField::Name, "A".to_string());
        form.update(FormField::Email, "a@b".to_string());
        form.update(FormField::Password, "Abc12345".to_string());
        form.update(FormField::ConfirmPassword, "Abc12345".to_string());

        let err = service(&memory).submit(&mut form).unwrap_err();

        match err {
            AuthError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors.contains(FormField::Email));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(form.error(FormField::Email), Some("Please enter a valid email"));
        assert!(memory.is_empty());
    }

    #[test]
    fn test_corrupt_store_is_a_storage_error() {
        let memory = MemoryStore::new().with_entry(USERS_KEY, "{broken");
        let err = service(&memory)
            .login(&CredentialInput::login("a@b.com", "Abc12345"))
            .unwrap_err();

        assert!(matches!(err, AuthError::Storage(StoreError::Corrupt { .. })));
        assert_eq!(err.to_string(), "Storage is unavailable");
        assert_eq!(memory.get(USERS_KEY).unwrap().as_deref(), Some("{broken"));
    }

    #[test]
    fn test_outcome_notices() {
        let user = UserRecord::new(1, "A", "a@b.com", "Abc12345");

        let logged_in = SubmitOutcome::LoggedIn(user.clone());
        assert_eq!(logged_in.notice(), Notice::success("Login successful!"));
        assert_eq!(logged_in.next_mode(), None);

        let registered = SubmitOutcome::Registered(user);
        assert_eq!(
            registered.notice(),
            Notice::success("Account created successfully!")
        );
        assert_eq!(registered.next_mode(), Some(AuthMode::Login));
    }
}
