//! Rehearsal scheduling and attendance.
//!
//! A create request with a recurrence expands into a series of rehearsals that share a
//! `series_id` and are stored together in one transaction.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::rehearsal::{AttendanceStatus, RecurrenceDto},
    server::{
        data::{
            attendance::AttendanceRepository, band_member::BandMemberRepository,
            rehearsal::RehearsalRepository, setlist::SetlistRepository,
        },
        error::{AppError, FieldError},
        model::rehearsal::{
            occurrences, Attendance, CreateRehearsalParams, Rehearsal, RehearsalDetail,
            UpcomingRehearsal, UpdateRehearsalParams, MAX_OCCURRENCES,
        },
        util::validate::Validator,
    },
};

pub struct RehearsalService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RehearsalService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Rehearsals after `now` across every band the user belongs to, soonest first.
    pub async fn upcoming(
        &self,
        user_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Vec<UpcomingRehearsal>, AppError> {
        let band_ids = BandMemberRepository::new(self.db)
            .get_band_ids_for_user(user_id)
            .await?;

        Ok(RehearsalRepository::new(self.db)
            .get_upcoming_for_bands(band_ids, now)
            .await?)
    }

    pub async fn list(&self, band_id: i32) -> Result<Vec<Rehearsal>, AppError> {
        Ok(RehearsalRepository::new(self.db).get_by_band(band_id).await?)
    }

    /// Schedules a rehearsal, or a whole series when `recurrence` is given.
    ///
    /// # Returns
    /// - `Ok(Vec<Rehearsal>)` - Every created rehearsal in chronological order
    /// - `Err(AppError::Validation)` - Blank title, end not after start, occurrences out
    ///   of range or a setlist from another band
    pub async fn create(
        &self,
        params: CreateRehearsalParams,
        recurrence: Option<RecurrenceDto>,
    ) -> Result<Vec<Rehearsal>, AppError> {
        let mut validator = Validator::new()
            .required("title", &params.title)
            .check(
                params.end_time > params.start_time,
                "endTime",
                "End time must be after start time",
            );
        if let Some(recurrence) = recurrence {
            validator = validator.check(
                (1..=MAX_OCCURRENCES).contains(&recurrence.occurrences),
                "recurrence",
                &format!("Occurrences must be between 1 and {}", MAX_OCCURRENCES),
            );
        }
        validator.finish()?;

        if let Some(setlist_id) = params.setlist_id {
            self.check_setlist(params.band_id, setlist_id).await?;
        }

        let repo = RehearsalRepository::new(self.db);

        let Some(recurrence) = recurrence else {
            return Ok(vec![repo.create(params).await?]);
        };

        let Some(times) = occurrences(
            params.start_time,
            params.end_time,
            recurrence.frequency,
            recurrence.occurrences,
        ) else {
            return Err(AppError::BadRequest(
                "Recurrence extends past the supported date range".to_string(),
            ));
        };

        let series_id = uuid::Uuid::new_v4().to_string();
        let series = times
            .into_iter()
            .map(|(start_time, end_time)| CreateRehearsalParams {
                start_time,
                end_time,
                series_id: Some(series_id.clone()),
                ..params.clone()
            })
            .collect();

        Ok(repo.create_many(series).await?)
    }

    pub async fn find(&self, id: i32) -> Result<Rehearsal, AppError> {
        RehearsalRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Rehearsal not found".to_string()))
    }

    /// Gets a rehearsal with its setlist name and attendance responses.
    pub async fn detail(&self, rehearsal: Rehearsal) -> Result<RehearsalDetail, AppError> {
        let setlist_name = match rehearsal.setlist_id {
            Some(setlist_id) => SetlistRepository::new(self.db)
                .find_by_id(setlist_id)
                .await?
                .map(|s| s.name),
            None => None,
        };

        let attendance = AttendanceRepository::new(self.db)
            .get_by_rehearsal(rehearsal.id)
            .await?;

        Ok(RehearsalDetail {
            rehearsal,
            setlist_name,
            attendance,
        })
    }

    /// Applies a partial update to `existing`.
    ///
    /// The time order is checked against the merged start and end. Moving the start time
    /// clears the reminder stamp so members are reminded of the new time.
    pub async fn update(
        &self,
        existing: &Rehearsal,
        mut params: UpdateRehearsalParams,
    ) -> Result<Rehearsal, AppError> {
        let start_time = params.start_time.unwrap_or(existing.start_time);
        let end_time = params.end_time.unwrap_or(existing.end_time);

        Validator::new()
            .not_blank("title", params.title.as_deref())
            .check(
                end_time > start_time,
                "endTime",
                "End time must be after start time",
            )
            .finish()?;

        if let Some(Some(setlist_id)) = params.setlist_id {
            self.check_setlist(existing.band_id, setlist_id).await?;
        }

        params.clear_reminder = start_time != existing.start_time;

        RehearsalRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("Rehearsal not found".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !RehearsalRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Rehearsal not found".to_string()));
        }

        Ok(())
    }

    /// Records the user's response to a rehearsal, replacing any earlier one.
    pub async fn set_attendance(
        &self,
        rehearsal_id: i32,
        user_id: i32,
        status: AttendanceStatus,
    ) -> Result<Attendance, AppError> {
        Ok(AttendanceRepository::new(self.db)
            .upsert(rehearsal_id, user_id, status)
            .await?)
    }

    async fn check_setlist(&self, band_id: i32, setlist_id: i32) -> Result<(), AppError> {
        let setlist = SetlistRepository::new(self.db)
            .find_by_id(setlist_id)
            .await?;

        if setlist.is_none_or(|s| s.band_id != band_id) {
            return Err(AppError::Validation(vec![FieldError::new(
                "setlistId",
                "Setlist must belong to this band",
            )]));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::rehearsal::RecurrenceFrequency;
    use chrono::Duration;
    use test_utils::{builder::TestBuilder, factory};

    fn params(band_id: i32) -> CreateRehearsalParams {
        let start_time = Utc::now() + Duration::days(3);
        CreateRehearsalParams {
            band_id,
            title: "Weekly practice".to_string(),
            description: None,
            location: Some("Studio B".to_string()),
            start_time,
            end_time: start_time + Duration::hours(2),
            setlist_id: None,
            series_id: None,
        }
    }

    /// Tests a weekly series shares one series id.
    ///
    /// Expected: 4 rehearsals a week apart with the same series_id
    #[tokio::test]
    async fn creates_weekly_series() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_rehearsal_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let band = factory::band::create_band(db).await?;

        let created = RehearsalService::new(db)
            .create(
                params(band.id),
                Some(RecurrenceDto {
                    frequency: RecurrenceFrequency::Weekly,
                    occurrences: 4,
                }),
            )
            .await?;

        assert_eq!(created.len(), 4);
        let series_id = created[0].series_id.clone();
        assert!(series_id.is_some());
        assert!(created.iter().all(|r| r.series_id == series_id));
        assert_eq!(
            created[3].start_time - created[0].start_time,
            Duration::weeks(3)
        );

        Ok(())
    }

    /// Tests a single rehearsal has no series id.
    ///
    /// Expected: one rehearsal, series_id None
    #[tokio::test]
    async fn creates_single_rehearsal() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_rehearsal_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let band = factory::band::create_band(db).await?;

        let created = RehearsalService::new(db)
            .create(params(band.id), None)
            .await?;

        assert_eq!(created.len(), 1);
        assert!(created[0].series_id.is_none());

        Ok(())
    }

    /// Tests rejected inputs: reversed times, too many occurrences, foreign setlist.
    ///
    /// Expected: Err(AppError::Validation) for each
    #[tokio::test]
    async fn validates_new_rehearsal() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_rehearsal_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let band = factory::band::create_band(db).await?;
        let other = factory::band::create_band(db).await?;
        let foreign_setlist = factory::setlist::create_setlist(db, other.id).await?;
        let service = RehearsalService::new(db);

        let mut reversed = params(band.id);
        reversed.end_time = reversed.start_time - Duration::hours(1);
        assert!(matches!(
            service.create(reversed, None).await,
            Err(AppError::Validation(_))
        ));

        let too_many = service
            .create(
                params(band.id),
                Some(RecurrenceDto {
                    frequency: RecurrenceFrequency::Daily,
                    occurrences: MAX_OCCURRENCES + 1,
                }),
            )
            .await;
        assert!(matches!(too_many, Err(AppError::Validation(_))));

        let mut with_setlist = params(band.id);
        with_setlist.setlist_id = Some(foreign_setlist.id);
        assert!(matches!(
            service.create(with_setlist, None).await,
            Err(AppError::Validation(_))
        ));

        assert!(service.list(band.id).await?.is_empty());

        Ok(())
    }

    /// Tests moving a rehearsal re-arms its reminder.
    ///
    /// Expected: reminder_sent_at cleared after changing start_time
    #[tokio::test]
    async fn rescheduling_clears_reminder() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_rehearsal_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let band = factory::band::create_band(db).await?;
        let rehearsal = factory::rehearsal::RehearsalFactory::new(db, band.id)
            .reminder_sent_at(Some(Utc::now()))
            .build()
            .await?;
        let service = RehearsalService::new(db);
        let existing = service.find(rehearsal.id).await?;

        let renamed = service
            .update(
                &existing,
                UpdateRehearsalParams {
                    id: existing.id,
                    title: Some("Renamed".to_string()),
                    ..Default::default()
                },
            )
            .await?;
        assert!(renamed.reminder_sent_at.is_some());

        let moved = service
            .update(
                &renamed,
                UpdateRehearsalParams {
                    id: existing.id,
                    start_time: Some(existing.start_time + Duration::hours(1)),
                    end_time: Some(existing.end_time + Duration::hours(1)),
                    ..Default::default()
                },
            )
            .await?;
        assert!(moved.reminder_sent_at.is_none());

        Ok(())
    }

    /// Tests an update that would put the end before the start.
    ///
    /// Expected: Err(AppError::Validation)
    #[tokio::test]
    async fn update_checks_merged_times() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_rehearsal_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let band = factory::band::create_band(db).await?;
        let rehearsal = factory::rehearsal::create_rehearsal(db, band.id).await?;
        let service = RehearsalService::new(db);
        let existing = service.find(rehearsal.id).await?;

        let result = service
            .update(
                &existing,
                UpdateRehearsalParams {
                    id: existing.id,
                    start_time: Some(existing.end_time + Duration::minutes(5)),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));

        Ok(())
    }

    /// Tests the detail view includes setlist name and attendance.
    ///
    /// Expected: RehearsalDetail with the setlist name and one attendance row
    #[tokio::test]
    async fn detail_includes_attendance() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_rehearsal_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, member, band) = factory::helpers::create_band_with_member(db).await?;
        let setlist = factory::setlist::SetlistFactory::new(db, band.id)
            .name("Warm-up")
            .build()
            .await?;
        let rehearsal = factory::rehearsal::RehearsalFactory::new(db, band.id)
            .setlist_id(Some(setlist.id))
            .build()
            .await?;
        let service = RehearsalService::new(db);

        service
            .set_attendance(rehearsal.id, member.id, AttendanceStatus::Maybe)
            .await?;
        let detail = service.detail(service.find(rehearsal.id).await?).await?;

        assert_eq!(detail.setlist_name.as_deref(), Some("Warm-up"));
        assert_eq!(detail.attendance.len(), 1);
        assert_eq!(detail.attendance[0].user_id, member.id);
        assert_eq!(detail.attendance[0].status, AttendanceStatus::Maybe);

        Ok(())
    }

    /// Tests upcoming rehearsals only come from the user's bands.
    ///
    /// Expected: only the member's band's future rehearsal
    #[tokio::test]
    async fn upcoming_only_for_own_bands() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_rehearsal_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (leader, band) = factory::helpers::create_band_with_leader(db).await?;
        let other = factory::band::create_band(db).await?;
        let ours = factory::rehearsal::create_rehearsal(db, band.id).await?;
        factory::rehearsal::create_rehearsal(db, other.id).await?;

        let upcoming = RehearsalService::new(db)
            .upcoming(leader.id, Utc::now())
            .await?;

        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].rehearsal.id, ours.id);
        assert_eq!(upcoming[0].band_name, band.name);

        Ok(())
    }
}
