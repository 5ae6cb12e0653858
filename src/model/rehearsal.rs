use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Upper bound on the rehearsals generated by one recurring create.
pub const MAX_OCCURRENCES: u32 = 52;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    Attending,
    NotAttending,
    Maybe,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attending => "ATTENDING",
            Self::NotAttending => "NOT_ATTENDING",
            Self::Maybe => "MAYBE",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ATTENDING" => Some(Self::Attending),
            "NOT_ATTENDING" => Some(Self::NotAttending),
            "MAYBE" => Some(Self::Maybe),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Attending => "Attending",
            Self::NotAttending => "Not attending",
            Self::Maybe => "Maybe",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecurrenceFrequency {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
}

/// Repeats a new rehearsal `occurrences` times (including the first).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct RecurrenceDto {
    pub frequency: RecurrenceFrequency,
    pub occurrences: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RehearsalDto {
    pub id: i32,
    pub band_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub setlist_id: Option<i32>,
    pub series_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpcomingRehearsalDto {
    pub rehearsal: RehearsalDto,
    pub band_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDto {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub status: AttendanceStatus,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RehearsalDetailDto {
    pub rehearsal: RehearsalDto,
    pub setlist_name: Option<String>,
    pub attendance: Vec<AttendanceDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateRehearsalDto {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub setlist_id: Option<i32>,
    #[serde(default)]
    pub recurrence: Option<RecurrenceDto>,
}

/// Partial rehearsal update.
///
/// Omitted fields are unchanged. Empty strings clear the description and location,
/// and an explicit `null` setlist detaches the setlist.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateRehearsalDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "crate::model::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "server", schema(value_type = Option<i32>))]
    pub setlist_id: Option<Option<i32>>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateAttendanceDto {
    pub status: AttendanceStatus,
}
