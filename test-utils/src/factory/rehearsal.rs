//! Rehearsal factory for creating test rehearsal entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rehearsals with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let rehearsal = RehearsalFactory::new(&db, band.id)
///     .start_time(Utc::now() + Duration::hours(3))
///     .reminder_sent_at(Some(Utc::now()))
///     .build()
///     .await?;
/// ```
pub struct RehearsalFactory<'a> {
    db: &'a DatabaseConnection,
    band_id: i32,
    title: String,
    location: Option<String>,
    start_time: DateTime<Utc>,
    duration: Duration,
    setlist_id: Option<i32>,
    series_id: Option<String>,
    reminder_sent_at: Option<DateTime<Utc>>,
}

impl<'a> RehearsalFactory<'a> {
    /// Creates a new RehearsalFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Rehearsal {id}"`
    /// - start_time: 2 days from now, lasting 2 hours
    /// - no setlist, no series, reminder not yet sent
    pub fn new(db: &'a DatabaseConnection, band_id: i32) -> Self {
        Self {
            db,
            band_id,
            title: format!("Rehearsal {}", next_id()),
            location: Some("Studio A".to_string()),
            start_time: Utc::now() + Duration::days(2),
            duration: Duration::hours(2),
            setlist_id: None,
            series_id: None,
            reminder_sent_at: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn setlist_id(mut self, setlist_id: Option<i32>) -> Self {
        self.setlist_id = setlist_id;
        self
    }

    pub fn series_id(mut self, series_id: Option<String>) -> Self {
        self.series_id = series_id;
        self
    }

    pub fn reminder_sent_at(mut self, reminder_sent_at: Option<DateTime<Utc>>) -> Self {
        self.reminder_sent_at = reminder_sent_at;
        self
    }

    /// Builds and inserts the rehearsal entity into the database.
    pub async fn build(self) -> Result<entity::rehearsal::Model, DbErr> {
        let now = Utc::now();
        entity::rehearsal::ActiveModel {
            band_id: ActiveValue::Set(self.band_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            location: ActiveValue::Set(self.location),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.start_time + self.duration),
            setlist_id: ActiveValue::Set(self.setlist_id),
            series_id: ActiveValue::Set(self.series_id),
            reminder_sent_at: ActiveValue::Set(self.reminder_sent_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a rehearsal with default values for the band.
pub async fn create_rehearsal(
    db: &DatabaseConnection,
    band_id: i32,
) -> Result<entity::rehearsal::Model, DbErr> {
    RehearsalFactory::new(db, band_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn creates_rehearsal_with_end_after_start() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_rehearsal_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let band = factory::band::create_band(db).await?;
        let rehearsal = create_rehearsal(db, band.id).await?;

        assert_eq!(rehearsal.band_id, band.id);
        assert!(rehearsal.end_time > rehearsal.start_time);
        assert!(rehearsal.reminder_sent_at.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn fails_for_nonexistent_band() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_rehearsal_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let result = create_rehearsal(db, 999_999).await;

        assert!(result.is_err());

        Ok(())
    }
}
