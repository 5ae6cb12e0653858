use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_URL: &str = "http://localhost:8080";
const DEFAULT_MAIL_FROM: &str = "Band Rehearsal Scheduler <noreply@localhost>";
const DEFAULT_SMTP_PORT: u16 = 25;
/// Daily at 09:00 UTC (sec min hour day month weekday).
const DEFAULT_REMINDER_SCHEDULE: &str = "0 0 9 * * *";
const DEFAULT_REMINDER_WINDOW_HOURS: i64 = 24;

/// SMTP relay settings. Only present when `SMTP_HOST` is set.
#[derive(Clone, Debug)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
}

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,

    pub app_url: String,

    pub smtp: Option<SmtpConfig>,
    pub mail_from: String,

    pub reminder_schedule: String,
    pub reminder_window_hours: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let smtp = match optional("SMTP_HOST") {
            Some(host) => Some(SmtpConfig {
                host,
                port: parse_or("SMTP_PORT", optional("SMTP_PORT"), DEFAULT_SMTP_PORT)?,
                username: optional("SMTP_USERNAME"),
                password: optional("SMTP_PASSWORD"),
            }),
            None => None,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            app_url: optional("APP_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_APP_URL.to_string()),
            smtp,
            mail_from: optional("MAIL_FROM").unwrap_or_else(|| DEFAULT_MAIL_FROM.to_string()),
            reminder_schedule: optional("REMINDER_SCHEDULE")
                .unwrap_or_else(|| DEFAULT_REMINDER_SCHEDULE.to_string()),
            reminder_window_hours: parse_or(
                "REMINDER_WINDOW_HOURS",
                optional("REMINDER_WINDOW_HOURS"),
                DEFAULT_REMINDER_WINDOW_HOURS,
            )?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads an environment variable, treating blank values as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Parses `value` when present, falling back to `default` when absent.
fn parse_or<T: FromStr>(name: &str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: raw,
        }),
    }
}
