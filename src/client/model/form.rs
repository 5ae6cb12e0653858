//! Client-side form checks and input conversions.
//!
//! The checks mirror the server's so most mistakes are caught before a request is sent.
//! The server still validates everything.

use chrono::{DateTime, NaiveDateTime, Utc};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Format used by `<input type="datetime-local">`.
const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Field errors collected from one form submission.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormErrors {
    errors: Vec<(&'static str, String)>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(mut self, ok: bool, field: &'static str, message: &str) -> Self {
        if !ok {
            self.errors.push((field, message.to_string()));
        }
        self
    }

    pub fn required(self, field: &'static str, label: &str, value: &str) -> Self {
        self.check(
            !value.trim().is_empty(),
            field,
            &format!("{} is required", label),
        )
    }

    pub fn email(self, field: &'static str, value: &str) -> Self {
        self.check(looks_like_email(value), field, "Please include a valid email")
    }

    pub fn min_len(self, field: &'static str, label: &str, value: &str, min: usize) -> Self {
        self.check(
            value.chars().count() >= min,
            field,
            &format!("{} must be at least {} characters", label, min),
        )
    }

    /// Accepts an empty value; otherwise it must parse as a positive whole number.
    pub fn optional_positive(self, field: &'static str, label: &str, value: &str) -> Self {
        let ok = value.trim().is_empty() || parse_optional_positive(value).is_some();
        self.check(ok, field, &format!("{} must be a positive number", label))
    }

    /// First error for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// `None` for blank or non-positive input.
pub fn parse_optional_positive(value: &str) -> Option<i32> {
    value.trim().parse::<i32>().ok().filter(|v| *v > 0)
}

/// Trimmed text, or `None` when blank.
pub fn optional_text(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Parses a `datetime-local` value. Times are entered and shown in UTC.
pub fn parse_datetime_local(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value.trim(), DATETIME_LOCAL_FORMAT)
        .ok()
        .map(|dt| dt.and_utc())
}

pub fn format_datetime_local(value: DateTime<Utc>) -> String {
    value.format(DATETIME_LOCAL_FORMAT).to_string()
}

/// Display format for rehearsal times.
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%a %d %b %Y, %H:%M UTC").to_string()
}

/// Parses `m:ss` or a plain number of seconds.
pub fn parse_duration(value: &str) -> Option<i32> {
    let value = value.trim();
    match value.split_once(':') {
        Some((minutes, seconds)) => {
            let minutes = minutes.parse::<i32>().ok()?;
            let seconds = seconds.parse::<i32>().ok()?;
            if !(0..60).contains(&seconds) || minutes < 0 {
                return None;
            }
            Some(minutes * 60 + seconds).filter(|total| *total > 0)
        }
        None => parse_optional_positive(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn collects_every_failed_check() {
        let errors = FormErrors::new()
            .email("email", "not-an-email")
            .min_len("password", "Password", "abc", MIN_PASSWORD_LEN)
            .required("firstName", "First name", "Ada");

        assert_eq!(errors.get("email"), Some("Please include a valid email"));
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 6 characters")
        );
        assert_eq!(errors.get("firstName"), None);
    }

    #[test]
    fn accepts_valid_email() {
        assert!(FormErrors::new().email("email", " ada@band.io ").is_empty());
        assert!(!FormErrors::new().email("email", "ada@band").is_empty());
    }

    #[test]
    fn datetime_local_is_read_as_utc() {
        let parsed = parse_datetime_local("2026-03-14T19:30").unwrap();

        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 3, 14, 19, 30, 0).unwrap());
        assert_eq!(format_datetime_local(parsed), "2026-03-14T19:30");
        assert!(parse_datetime_local("14/03/2026").is_none());
    }

    #[test]
    fn parses_durations() {
        assert_eq!(parse_duration("3:05"), Some(185));
        assert_eq!(parse_duration("240"), Some(240));
        assert_eq!(parse_duration("3:75"), None);
        assert_eq!(parse_duration("0:00"), None);
        assert_eq!(parse_duration(""), None);
    }
}
