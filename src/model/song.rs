use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SongDto {
    pub id: i32,
    pub band_id: i32,
    pub title: String,
    pub artist: Option<String>,
    pub duration_seconds: Option<i32>,
    pub key: Option<String>,
    pub tempo: Option<i32>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SongDto {
    /// Formats the duration as `m:ss`, or an empty string when unknown.
    pub fn duration_label(&self) -> String {
        self.duration_seconds
            .map(format_duration)
            .unwrap_or_default()
    }
}

/// Formats a number of seconds as `m:ss`.
pub fn format_duration(seconds: i32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateSongDto {
    pub title: String,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub duration_seconds: Option<i32>,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub tempo: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial song update. Omitted fields are unchanged; empty strings clear text fields.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateSongDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub duration_seconds: Option<i32>,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub tempo: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
}
