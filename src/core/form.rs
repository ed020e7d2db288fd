//! Credential form state machine
//!
//! The form is either in [`AuthMode::Login`] or [`AuthMode::Register`].
//! Entering a mode clears all values and errors; assigning the mode the form
//! is already in leaves it untouched.

use crate::core::validation::{
    FieldErrors, FormField, validate_confirm_password, validate_email, validate_name,
    validate_password,
};

/// Which form is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    pub fn is_login(self) -> bool {
        self == AuthMode::Login
    }

    /// Tab label
    pub fn label(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Sign Up",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            AuthMode::Login => "Login to your account",
            AuthMode::Register => "Create a new account",
        }
    }

    /// Fields shown and validated in this mode, in display order
    pub fn fields(self) -> &'static [FormField] {
        match self {
            AuthMode::Login => &[FormField::Email, FormField::Password],
            AuthMode::Register => &[
                FormField::Name,
                FormField::Email,
                FormField::Password,
                FormField::ConfirmPassword,
            ],
        }
    }
}

/// Raw values typed into the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl CredentialInput {
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    pub fn register(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
            FormField::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
            FormField::ConfirmPassword => self.confirm_password = value,
        }
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    /// Run the validator of every field `mode` shows
    pub fn validate(&self, mode: AuthMode) -> FieldErrors {
        let mut errors = FieldErrors::new();

        for &field in mode.fields() {
            let result = match field {
                FormField::Name => validate_name(&self.name),
                FormField::Email => validate_email(&self.email),
                FormField::Password => validate_password(&self.password),
                FormField::ConfirmPassword => {
                    validate_confirm_password(&self.password, &self.confirm_password)
                }
            };
            errors.check(field, result);
        }

        errors
    }
}

/// Values, errors and mode of the credential form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    mode: AuthMode,
    input: CredentialInput,
    errors: FieldErrors,
}

impl FormState {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn input(&self) -> &CredentialInput {
        &self.input
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn value(&self, field: FormField) -> &str {
        self.input.get(field)
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Enter `mode` with an empty form. Returns `false` and keeps everything
    /// as is when the form already shows `mode`.
    pub fn set_mode(&mut self, mode: AuthMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        self.input = CredentialInput::default();
        self.errors = FieldErrors::new();
        true
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    /// Store a typed value; the field's error goes away immediately
    pub fn update(&mut self, field: FormField, value: String) {
        self.input.set(field, value);
        self.errors.clear(field);
    }

    /// Validate the current values, keeping the resulting errors for display.
    /// Returns `true` when the form can be submitted.
    pub fn validate(&mut self) -> bool {
        self.errors = self.input.validate(self.mode);
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_login() {
        let state = FormState::default();
        assert_eq!(state.mode(), AuthMode::Login);
        assert!(state.input().is_blank());
        assert!(state.errors().is_empty());
    }

    #[test]
    fn test_toggle() {
        assert_eq!(AuthMode::Login.toggled(), AuthMode::Register);
        assert_eq!(AuthMode::Register.toggled(), AuthMode::Login);
    }

    #[test]
    fn test_login_validates_only_email_and_password() {
        let errors = CredentialInput::default().validate(AuthMode::Login);

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(FormField::Email), Some("Email is required"));
        assert_eq!(errors.get(FormField::Password), Some("Password is required"));
    }

    #[test]
    fn test_register_validates_all_fields() {
        let errors = CredentialInput::default().validate(AuthMode::Register);

        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(FormField::Name), Some("Name is required"));
        assert_eq!(
            errors.get(FormField::ConfirmPassword),
            Some("Please confirm your password")
        );
    }

    #[test]
    fn test_register_valid_input() {
        let input = CredentialInput::register("A", "a@b.com", "Abc12345", "Abc12345");
        assert!(input.validate(AuthMode::Register).is_empty());
    }

    #[test]
    fn test_update_clears_only_that_field_error() {
        let mut state = FormState::new(AuthMode::Register);
        assert!(!state.validate());
        assert_eq!(state.errors().len(), 4);

        state.update(FormField::Email, "a".to_string());
        assert_eq!(state.error(FormField::Email), None);
        assert!(state.error(FormField::Password).is_some());
        assert_eq!(state.value(FormField::Email), "a");
    }

    #[test]
    fn test_set_mode_resets_everything() {
        let mut state = FormState::new(AuthMode::Login);
        state.update(FormField::Email, "bad".to_string());
        state.update(FormField::Password, "short".to_string());
        assert!(!state.validate());

        assert!(state.set_mode(AuthMode::Register));
        assert_eq!(state.mode(), AuthMode::Register);
        assert!(state.input().is_blank());
        assert!(state.errors().is_empty());

        state.update(FormField::Name, "A".to_string());
        state.toggle_mode();
        assert_eq!(state.mode(), AuthMode::Login);
        assert!(state.input().is_blank());
    }

    #[test]
    fn test_set_same_mode_keeps_input() {
        let mut state = FormState::new(AuthMode::Login);
        state.update(FormField::Email, "a@b.com".to_string());
        state.update(FormField::Password, "short".to_string());
        assert!(!state.validate());

        assert!(!state.set_mode(AuthMode::Login));
        assert_eq!(state.value(FormField::Email), "a@b.com");
        assert_eq!(
            state.error(FormField::Password),
            Some("Password must be at least 8 characters with 1 uppercase, 1 lowercase, and 1 number")
        );
    }

    #[test]
    fn test_mode_fields() {
        assert_eq!(AuthMode::Login.fields(), &[FormField::Email, FormField::Password]);
        assert_eq!(AuthMode::Register.fields()[0], FormField::Name);
        for &mode in &[AuthMode::Login, AuthMode::Register] {
            let errors = CredentialInput::default().validate(mode);
            assert!(mode.fields().iter().all(|f| errors.contains(*f)));
            assert_eq!(errors.len(), mode.fields().len());
        }
        assert_eq!(AuthMode::Register.label(), "Sign Up");
        assert_eq!(AuthMode::Login.heading(), "Login to your account");
    }
}
