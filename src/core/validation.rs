//! Validation rules for the credential form
//!
//! Each validator checks a single field and returns the message shown under
//! that field. Validators never touch storage.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Email shape: dotted atoms or a quoted local part, then `@`, then either a
/// bracketed IPv4 literal or dotted labels ending in a 2+ letter label.
/// Matched against the lowercased input.
///
/// Whitespace is the ECMAScript set (includes U+FEFF, excludes U+0085), and
/// the quoted part stops at line terminators, so browsers and this crate agree
/// on which addresses are valid.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:@"\t\n\x0B\f\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+(\.[^<>()\[\]\\.,;:@"\t\n\x0B\f\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+)*)|("[^\n\r\x{2028}\x{2029}]+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern is a valid regex")
});

/// Rules a password has to satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub require_lowercase: bool,
    pub require_uppercase: bool,
    pub require_digit: bool,
    /// Whether characters other than ASCII letters and digits are accepted
    pub allow_symbols: bool,
}

/// Password policy used by the form.
///
/// Symbols are currently rejected outright, so `Abc12345!` fails.
pub const PASSWORD_POLICY: PasswordPolicy = PasswordPolicy {
    min_length: 8,
    require_lowercase: true,
    require_uppercase: true,
    require_digit: true,
    allow_symbols: false,
};

impl PasswordPolicy {
    pub fn is_satisfied_by(&self, password: &str) -> bool {
        if password.chars().count() < self.min_length {
            return false;
        }
        if !self.allow_symbols && !password.chars().all(|c| c.is_ascii_alphanumeric()) {
            return false;
        }
        if self.require_lowercase && !password.chars().any(|c| c.is_ascii_lowercase()) {
            return false;
        }
        if self.require_uppercase && !password.chars().any(|c| c.is_ascii_uppercase()) {
            return false;
        }
        if self.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            return false;
        }
        true
    }
}

/// Form inputs that can carry an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl FormField {
    /// Value of the input's `name` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Password => "password",
            FormField::ConfirmPassword => "confirmPassword",
        }
    }
}

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field was left empty
    Required(FormField),
    /// Email does not have an address shape
    InvalidEmail,
    /// Password fails [`PASSWORD_POLICY`]
    WeakPassword,
    /// Confirmation differs from the password
    PasswordMismatch,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required(FormField::Name) => write!(f, "Name is required"),
            ValidationError::Required(FormField::Email) => write!(f, "Email is required"),
            ValidationError::Required(FormField::Password) => write!(f, "Password is required"),
            ValidationError::Required(FormField::ConfirmPassword) => {
                write!(f, "Please confirm your password")
            }
            ValidationError::InvalidEmail => write!(f, "Please enter a valid email"),
            ValidationError::WeakPassword => write!(
                f,
                "Password must be at least 8 characters with 1 uppercase, 1 lowercase, and 1 number"
            ),
            ValidationError::PasswordMismatch => write!(f, "Passwords do not match"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Per-field error messages, at most one per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<FormField, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn insert(&mut self, field: FormField, error: &ValidationError) {
        self.errors.insert(field, error.to_string());
    }

    /// Record the outcome of a validator for `field`
    pub fn check(&mut self, field: FormField, result: Result<(), ValidationError>) {
        if let Err(error) = result {
            self.insert(field, &error);
        }
    }

    /// Drop the error of a single field, returns whether there was one
    pub fn clear(&mut self, field: FormField) -> bool {
        self.errors.remove(&field).is_some()
    }
}

/// Email must be present and shaped like an address
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        Err(ValidationError::Required(FormField::Email))
    } else if !EMAIL_PATTERN.is_match(&email.to_lowercase()) {
        Err(ValidationError::InvalidEmail)
    } else {
        Ok(())
    }
}

/// Password must be present and satisfy [`PASSWORD_POLICY`]
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        Err(ValidationError::Required(FormField::Password))
    } else if !PASSWORD_POLICY.is_satisfied_by(password) {
        Err(ValidationError::WeakPassword)
    } else {
        Ok(())
    }
}

/// Display name must not be empty
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        Err(ValidationError::Required(FormField::Name))
    } else {
        Ok(())
    }
}

/// Confirmation must be present and identical to the password
pub fn validate_confirm_password(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if confirm.is_empty() {
        Err(ValidationError::Required(FormField::ConfirmPassword))
    } else if password != confirm {
        Err(ValidationError::PasswordMismatch)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("first.last@example.co.uk").is_ok());
        assert!(validate_email("USER@EXAMPLE.COM").is_ok());
        assert!(validate_email("user+tag@sub-domain.example.org").is_ok());
        assert!(validate_email("\"odd local\"@example.com").is_ok());
        assert!(validate_email("user@[192.168.0.1]").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert_eq!(validate_email("plainaddress"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("a@b"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("a@b.c"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("@b.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("a..b@c.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email(".a@c.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("a b@c.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("a@b.com "), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("a@@b.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("a@b_c.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("a@example.c0m"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_empty_email() {
        assert_eq!(
            validate_email(""),
            Err(ValidationError::Required(FormField::Email))
        );
    }

    #[test]
    fn test_passwords() {
        assert!(validate_password("Abc12345").is_ok());
        assert!(validate_password("ZZZZzzzz9").is_ok());

        assert_eq!(
            validate_password(""),
            Err(ValidationError::Required(FormField::Password))
        );
        assert_eq!(validate_password("Abc1234"), Err(ValidationError::WeakPassword));
        assert_eq!(validate_password("abc12345"), Err(ValidationError::WeakPassword));
        assert_eq!(validate_password("ABC12345"), Err(ValidationError::WeakPassword));
        assert_eq!(validate_password("Abcdefgh"), Err(ValidationError::WeakPassword));
        assert_eq!(validate_password("Äbc12345"), Err(ValidationError::WeakPassword));
    }

    #[test]
    fn test_password_symbols_rejected() {
        assert_eq!(validate_password("Abc12345!"), Err(ValidationError::WeakPassword));
        assert_eq!(validate_password("Abc 12345"), Err(ValidationError::WeakPassword));
    }

    #[test]
    fn test_policy_with_symbols_allowed() {
        let relaxed = PasswordPolicy {
            allow_symbols: true,
            ..PASSWORD_POLICY
        };
        assert!(relaxed.is_satisfied_by("Abc12345!"));
        assert!(!relaxed.is_satisfied_by("abc12345!"));
    }

    #[test]
    fn test_name_and_confirm() {
        assert!(validate_name("A").is_ok());
        assert_eq!(
            validate_name(""),
            Err(ValidationError::Required(FormField::Name))
        );

        assert!(validate_confirm_password("Abc12345", "Abc12345").is_ok());
        assert_eq!(
            validate_confirm_password("Abc12345", ""),
            Err(ValidationError::Required(FormField::ConfirmPassword))
        );
        assert_eq!(
            validate_confirm_password("Abc12345", "Abc12346"),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn test_field_errors() {
        let mut errors = FieldErrors::new();
        errors.check(FormField::Email, validate_email("nope"));
        errors.check(FormField::Password, validate_password("Abc12345"));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FormField::Email), Some("Please enter a valid email"));
        assert!(!errors.contains(FormField::Password));

        assert!(errors.clear(FormField::Email));
        assert!(!errors.clear(FormField::Email));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_email_whitespace_matches_browsers() {
        assert_eq!(
            validate_email("a\u{FEFF}b@c.com"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_email("a\u{00A0}b@c.com"),
            Err(ValidationError::InvalidEmail)
        );
        assert!(validate_email("a\u{0085}b@c.com").is_ok());
    }

    #[test]
    fn test_quoted_local_part_stops_at_line_breaks() {
        for email in [
            "\"a\rb\"@c.com",
            "\"a\nb\"@c.com",
            "\"a\u{2028}b\"@c.com",
            "\"a\u{2029}b\"@c.com",
        ] {
            assert_eq!(validate_email(email), Err(ValidationError::InvalidEmail), "{email:?}");
        }
        assert!(validate_email("\"a\tb\"@c.com").is_ok());
    }

    #[test]
    fn test_form_field_names() {
        assert_eq!(FormField::Email.as_str(), "email");
        assert_eq!(FormField::ConfirmPassword.as_str(), "confirmPassword");
    }

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::Required(FormField::ConfirmPassword).to_string(),
            "Please confirm your password"
        );
        assert_eq!(
            ValidationError::PasswordMismatch.to_string(),
            "Passwords do not match"
        );
    }
}
