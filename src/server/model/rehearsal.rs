//! Rehearsal, attendance and recurrence domain models.

use chrono::{DateTime, Duration, Months, Utc};
use sea_orm::DbErr;

use crate::{
    model::rehearsal::{
        AttendanceDto, AttendanceStatus, CreateRehearsalDto, RecurrenceFrequency,
        RehearsalDetailDto, RehearsalDto, UpcomingRehearsalDto, UpdateRehearsalDto,
    },
    server::util::validate::{clearable, normalize_optional},
};

pub use crate::model::rehearsal::MAX_OCCURRENCES;

#[derive(Debug, Clone, PartialEq)]
pub struct Rehearsal {
    pub id: i32,
    pub band_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub setlist_id: Option<i32>,
    pub series_id: Option<String>,
    pub reminder_sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Rehearsal {
    pub fn from_entity(entity: entity::rehearsal::Model) -> Self {
        Self {
            id: entity.id,
            band_id: entity.band_id,
            title: entity.title,
            description: entity.description,
            location: entity.location,
            start_time: entity.start_time,
            end_time: entity.end_time,
            setlist_id: entity.setlist_id,
            series_id: entity.series_id,
            reminder_sent_at: entity.reminder_sent_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> RehearsalDto {
        RehearsalDto {
            id: self.id,
            band_id: self.band_id,
            title: self.title,
            description: self.description,
            location: self.location,
            start_time: self.start_time,
            end_time: self.end_time,
            setlist_id: self.setlist_id,
            series_id: self.series_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingRehearsal {
    pub rehearsal: Rehearsal,
    pub band_name: String,
}

impl UpcomingRehearsal {
    pub fn into_dto(self) -> UpcomingRehearsalDto {
        UpcomingRehearsalDto {
            rehearsal: self.rehearsal.into_dto(),
            band_name: self.band_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attendance {
    pub rehearsal_id: i32,
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub status: AttendanceStatus,
    pub updated_at: DateTime<Utc>,
}

impl Attendance {
    pub fn from_entity(
        attendance: entity::rehearsal_attendance::Model,
        user: entity::user::Model,
    ) -> Result<Self, DbErr> {
        let status = AttendanceStatus::parse(&attendance.status).ok_or_else(|| {
            DbErr::Custom(format!("Unknown attendance status '{}'", attendance.status))
        })?;

        Ok(Self {
            rehearsal_id: attendance.rehearsal_id,
            user_id: attendance.user_id,
            first_name: user.first_name,
            last_name: user.last_name,
            status,
            updated_at: attendance.updated_at,
        })
    }

    pub fn into_dto(self) -> AttendanceDto {
        AttendanceDto {
            user_id: self.user_id,
            first_name: self.first_name,
            last_name: self.last_name,
            status: self.status,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RehearsalDetail {
    pub rehearsal: Rehearsal,
    pub setlist_name: Option<String>,
    pub attendance: Vec<Attendance>,
}

impl RehearsalDetail {
    pub fn into_dto(self) -> RehearsalDetailDto {
        RehearsalDetailDto {
            rehearsal: self.rehearsal.into_dto(),
            setlist_name: self.setlist_name,
            attendance: self.attendance.into_iter().map(|a| a.into_dto()).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRehearsalParams {
    pub band_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub setlist_id: Option<i32>,
    pub series_id: Option<String>,
}

/// Partial rehearsal update. Outer `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateRehearsalParams {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub location: Option<Option<String>>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub setlist_id: Option<Option<i32>>,
    /// Set when the start time moved, so a new reminder goes out.
    pub clear_reminder: bool,
}

impl CreateRehearsalParams {
    /// Builds the parameters of a single rehearsal. Recurrence is expanded by the service.
    pub fn from_dto(band_id: i32, dto: CreateRehearsalDto) -> Self {
        Self {
            band_id,
            title: dto.title.trim().to_string(),
            description: normalize_optional(dto.description),
            location: normalize_optional(dto.location),
            start_time: dto.start_time,
            end_time: dto.end_time,
            setlist_id: dto.setlist_id,
            series_id: None,
        }
    }
}

impl UpdateRehearsalParams {
    pub fn from_dto(id: i32, dto: UpdateRehearsalDto) -> Self {
        Self {
            id,
            title: dto.title.map(|v| v.trim().to_string()),
            description: clearable(dto.description),
            location: clearable(dto.location),
            start_time: dto.start_time,
            end_time: dto.end_time,
            setlist_id: dto.setlist_id,
            clear_reminder: false,
        }
    }
}

/// Start/end pairs for a repeating rehearsal, first occurrence included.
///
/// Each occurrence keeps the original duration. Monthly recurrences land on the same
/// day of month, clamped to the month's last day.
///
/// # Returns
/// - `Some(occurrences)` - `occurrences` pairs in chronological order
/// - `None` - A date fell outside the representable range
pub fn occurrences(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    frequency: RecurrenceFrequency,
    count: u32,
) -> Option<Vec<(DateTime<Utc>, DateTime<Utc>)>> {
    let length = end - start;

    (0..count)
        .map(|i| {
            let offset_start = match frequency {
                RecurrenceFrequency::Daily => start.checked_add_signed(Duration::days(i as i64)),
                RecurrenceFrequency::Weekly => {
                    start.checked_add_signed(Duration::weeks(i as i64))
                }
                RecurrenceFrequency::Biweekly => {
                    start.checked_add_signed(Duration::weeks(2 * i as i64))
                }
                RecurrenceFrequency::Monthly => start.checked_add_months(Months::new(i)),
            }?;
            Some((offset_start, offset_start.checked_add_signed(length)?))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn single_occurrence_is_the_original() {
        let result = occurrences(
            at(2026, 3, 2, 19),
            at(2026, 3, 2, 21),
            RecurrenceFrequency::Weekly,
            1,
        )
        .unwrap();

        assert_eq!(result, vec![(at(2026, 3, 2, 19), at(2026, 3, 2, 21))]);
    }

    #[test]
    fn weekly_keeps_duration() {
        let result = occurrences(
            at(2026, 3, 2, 19),
            at(2026, 3, 2, 21),
            RecurrenceFrequency::Weekly,
            3,
        )
        .unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result[1].0, at(2026, 3, 9, 19));
        assert_eq!(result[2].0, at(2026, 3, 16, 19));
        assert!(result.iter().all(|(s, e)| *e - *s == Duration::hours(2)));
    }

    #[test]
    fn biweekly_skips_a_week() {
        let result = occurrences(
            at(2026, 3, 2, 19),
            at(2026, 3, 2, 21),
            RecurrenceFrequency::Biweekly,
            2,
        )
        .unwrap();

        assert_eq!(result[1].0, at(2026, 3, 16, 19));
    }

    #[test]
    fn daily_advances_one_day() {
        let result = occurrences(
            at(2026, 12, 31, 10),
            at(2026, 12, 31, 12),
            RecurrenceFrequency::Daily,
            2,
        )
        .unwrap();

        assert_eq!(result[1].0, at(2027, 1, 1, 10));
    }

    #[test]
    fn monthly_clamps_to_month_end() {
        let result = occurrences(
            at(2026, 1, 31, 18),
            at(2026, 1, 31, 20),
            RecurrenceFrequency::Monthly,
            3,
        )
        .unwrap();

        assert_eq!(result[1].0, at(2026, 2, 28, 18));
        assert_eq!(result[2].0, at(2026, 3, 31, 18));
    }

    #[test]
    fn out_of_range_end_is_none() {
        let start = DateTime::<Utc>::MAX_UTC - Duration::days(10);
        let end = DateTime::<Utc>::MAX_UTC - Duration::days(1);

        assert!(occurrences(start, end, RecurrenceFrequency::Weekly, 2).is_none());
    }

    #[test]
    fn out_of_range_start_is_none() {
        let start = DateTime::<Utc>::MAX_UTC - Duration::days(3);
        let end = start + Duration::hours(1);

        assert!(occurrences(start, end, RecurrenceFrequency::Daily, 5).is_none());
    }
}
