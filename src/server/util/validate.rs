//! Request body validation.
//!
//! Collects every failed check so the client receives all field errors at once.
//!
//! ```rust,ignore
//! Validator::new()
//!     .email("email", &payload.email)
//!     .min_len("password", &payload.password, 6)
//!     .finish()?;
//! ```

use crate::server::error::{AppError, FieldError};

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails `field` with `message` unless `ok` holds.
    pub fn check(mut self, ok: bool, field: &str, message: &str) -> Self {
        if !ok {
            self.errors.push(FieldError::new(field, message));
        }
        self
    }

    pub fn required(self, field: &str, value: &str) -> Self {
        let message = format!("{} is required", label(field));
        self.check(!value.trim().is_empty(), field, &message)
    }

    /// Same as `required`, but only when a value was supplied.
    pub fn not_blank(self, field: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.required(field, value),
            None => self,
        }
    }

    pub fn email(self, field: &str, value: &str) -> Self {
        self.check(is_valid_email(value), field, "Please include a valid email")
    }

    pub fn min_len(self, field: &str, value: &str, min: usize) -> Self {
        let message = format!("{} must be at least {} characters", label(field), min);
        self.check(value.chars().count() >= min, field, &message)
    }

    pub fn positive(self, field: &str, value: Option<i32>) -> Self {
        let message = format!("{} must be a positive number", label(field));
        self.check(value.is_none_or(|v| v > 0), field, &message)
    }

    pub fn finish(self) -> Result<(), AppError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.errors))
        }
    }
}

/// Human readable name for a camelCase field, e.g. `firstName` → `First name`.
fn label(field: &str) -> String {
    let mut out = String::with_capacity(field.len() + 2);
    for (i, c) in field.chars().enumerate() {
        if i == 0 {
            out.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            out.push(' ');
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Accepts `local@domain.tld` with no whitespace and a single `@`.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        && !domain.ends_with('.')
}

/// Trims optional text input, mapping blank values to `None`.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Maps a partial-update text field: omitted stays `None`, blank becomes `Some(None)`.
pub fn clearable(value: Option<String>) -> Option<Option<String>> {
    value.map(|v| normalize_optional(Some(v)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_emails() {
        assert!(is_valid_email("drummer@example.com"));
        assert!(is_valid_email("first.last+band@mail.example.org"));
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("user@exa mple.com"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@example."));
    }

    #[test]
    fn collects_every_failed_field() {
        let result = Validator::new()
            .email("email", "bad")
            .min_len("password", "123", MIN_PASSWORD_LEN)
            .required("firstName", "  ")
            .required("lastName", "Smith")
            .finish();

        match result {
            Err(AppError::Validation(errors)) => {
                let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["email", "password", "firstName"]);
                assert_eq!(errors[2].message, "First name is required");
            }
            other => panic!("Expected validation error, got: {:?}", other),
        }
    }

    #[test]
    fn clearable_distinguishes_blank_from_missing() {
        assert_eq!(clearable(None), None);
        assert_eq!(clearable(Some("  ".to_string())), Some(None));
        assert_eq!(
            clearable(Some(" Studio B ".to_string())),
            Some(Some("Studio B".to_string()))
        );
    }

    #[test]
    fn positive_allows_missing_values() {
        assert!(Validator::new()
            .positive("tempo", None)
            .positive("durationSeconds", Some(200))
            .finish()
            .is_ok());
        assert!(Validator::new().positive("tempo", Some(0)).finish().is_err());
    }

    #[test]
    fn normalizes_blank_optional_text() {
        assert_eq!(normalize_optional(Some("  ".to_string())), None);
        assert_eq!(
            normalize_optional(Some(" Studio B ".to_string())),
            Some("Studio B".to_string())
        );
        assert_eq!(normalize_optional(None), None);
    }
}
