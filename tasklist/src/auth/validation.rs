//! Form validation run before anything is dispatched.
//!
//! Each validator takes raw field values and returns the per-field error
//! messages. An empty [`FieldErrors`] means the form may be submitted.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Minimum password length in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Shown for a malformed email address.
pub const INVALID_EMAIL: &str = "Invalid email address";
/// Shown for a password shorter than [`MIN_PASSWORD_LENGTH`].
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
/// Shown for an empty signup name.
pub const NAME_REQUIRED: &str = "Name is required";
/// Shown when the confirmation does not equal the password.
pub const PASSWORDS_MISMATCH: &str = "Passwords don't match";
/// Shown for an empty task title.
pub const TITLE_EMPTY: &str = "Title cannot be empty";

/// An input field that can carry an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Display name (signup).
    Name,
    /// Email address.
    Email,
    /// Password.
    Password,
    /// Password confirmation (signup).
    ConfirmPassword,
    /// Task title.
    Title,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Email => write!(f, "email"),
            Self::Password => write!(f, "password"),
            Self::ConfirmPassword => write!(f, "confirmPassword"),
            Self::Title => write!(f, "title"),
        }
    }
}

/// Per-field error messages in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<(FormField, String)>,
}

impl FieldErrors {
    /// `true` if no field has an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The message for `field`, if any.
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, msg)| msg.as_str())
    }

    /// The first error found.
    #[must_use]
    pub fn first(&self) -> Option<(FormField, &str)> {
        self.errors.first().map(|(f, msg)| (*f, msg.as_str()))
    }

    /// Drop the error for one field, e.g. when the user edits it.
    pub fn clear_field(&mut self, field: FormField) {
        self.errors.retain(|(f, _)| *f != field);
    }

    fn push(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    fn into_result<T>(self, ok: T) -> Result<T, Self> {
        if self.is_empty() { Ok(ok) } else { Err(self) }
    }
}

/// Validate the login form.
///
/// # Errors
///
/// Returns the field errors if the email is malformed or the password is
/// too short.
pub fn validate_login(email: &str, password: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    check_email(&mut errors, email);
    check_password(&mut errors, password);
    errors.into_result(())
}

/// Validate the signup form.
///
/// The confirmation is compared only once every other field is valid, so a
/// mismatch never hides a more basic error.
///
/// # Errors
///
/// Returns the field errors for an empty name, malformed email, short
/// password, or mismatched confirmation.
pub fn validate_signup(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    if name.is_empty() {
        errors.push(FormField::Name, NAME_REQUIRED);
    }
    check_email(&mut errors, email);
    check_password(&mut errors, password);
    if errors.is_empty() && password != confirm_password {
        errors.push(FormField::ConfirmPassword, PASSWORDS_MISMATCH);
    }
    errors.into_result(())
}

/// Validate a task title and return it trimmed.
///
/// # Errors
///
/// Returns a [`FormField::Title`] error if the trimmed title is empty or
/// longer than `max_len` characters.
pub fn validate_title(title: &str, max_len: usize) -> Result<String, FieldErrors> {
    let trimmed = title.trim();
    let mut errors = FieldErrors::default();
    if trimmed.is_empty() {
        errors.push(FormField::Title, TITLE_EMPTY);
    } else if trimmed.chars().count() > max_len {
        errors.push(
            FormField::Title,
            format!("Title must be at most {max_len} characters"),
        );
    }
    errors.into_result(trimmed.to_string())
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if !is_valid_email(email) {
        errors.push(FormField::Email, INVALID_EMAIL);
    }
}

fn check_password(errors: &mut FieldErrors, password: &str) {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(FormField::Password, PASSWORD_TOO_SHORT);
    }
}

/// Email shape accepted by the forms: a local part of letters, digits and
/// `_ ' + - .` ending in a letter, digit, `_`, `+` or `-`, then dot-separated
/// domain labels and an alphabetic TLD of at least two letters.
static EMAIL: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$").ok()
});

/// Whether `email` is a well-formed address.
///
/// The address must also not start with a dot or contain two dots in a row.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.')
        && !email.contains("..")
        && EMAIL.as_ref().is_some_and(|re| re.is_match(email))
}
