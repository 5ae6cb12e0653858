//! Rehearsal reminder dispatch.
//!
//! Invoked by the cron scheduler. Each due rehearsal is handled on its own: a failure to
//! email one member or to process one rehearsal is logged and the run carries on.
//! Rehearsals are stamped before any email goes out, trading a possibly missed reminder
//! for never mailing the same one twice.

use chrono::{DateTime, Duration, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::realtime::RealtimeEvent,
    server::{
        data::{
            band::BandRepository, band_member::BandMemberRepository,
            rehearsal::RehearsalRepository,
        },
        error::AppError,
        model::rehearsal::Rehearsal,
        service::{
            mail::{Email, Mailer},
            realtime::RealtimeHub,
        },
    },
};

/// Counts from a single reminder run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReminderSummary {
    pub rehearsals: usize,
    pub emails_sent: usize,
    pub failures: usize,
}

pub struct ReminderService<'a> {
    db: &'a DatabaseConnection,
    mailer: &'a dyn Mailer,
    realtime: &'a RealtimeHub,
}

impl<'a> ReminderService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        mailer: &'a dyn Mailer,
        realtime: &'a RealtimeHub,
    ) -> Self {
        Self {
            db,
            mailer,
            realtime,
        }
    }

    /// Sends reminders for rehearsals starting within `window` of `now`.
    ///
    /// Each rehearsal is stamped first, then every member who opted in to email is
    /// mailed and the band room receives a `rehearsal_reminder` event. A rehearsal that
    /// cannot be stamped is skipped without sending, so a reminder goes out at most once.
    ///
    /// # Returns
    /// - `Ok(ReminderSummary)` - Counts for the run
    /// - `Err(AppError)` - The due rehearsals could not be loaded
    pub async fn send_rehearsal_reminders(
        &self,
        now: DateTime<Utc>,
        window: Duration,
    ) -> Result<ReminderSummary, AppError> {
        let due = RehearsalRepository::new(self.db)
            .get_due_for_reminder(now, now + window)
            .await?;

        Ok(self.remind_all(due).await)
    }

    async fn remind_all(&self, due: Vec<Rehearsal>) -> ReminderSummary {
        let mut summary = ReminderSummary::default();

        for rehearsal in due {
            let id = rehearsal.id;
            match self.remind(rehearsal, &mut summary).await {
                Ok(()) => summary.rehearsals += 1,
                Err(e) => {
                    summary.failures += 1;
                    tracing::error!("Failed to send reminders for rehearsal {}: {}", id, e);
                }
            }
        }

        summary
    }

    async fn remind(
        &self,
        rehearsal: Rehearsal,
        summary: &mut ReminderSummary,
    ) -> Result<(), AppError> {
        RehearsalRepository::new(self.db)
            .mark_reminder_sent(rehearsal.id, Utc::now())
            .await?;

        let band_name = BandRepository::new(self.db)
            .find_by_id(rehearsal.band_id)
            .await?
            .map(|b| b.name)
            .unwrap_or_default();

        let recipients = BandMemberRepository::new(self.db)
            .get_email_recipients(rehearsal.band_id)
            .await?;

        for user in recipients {
            let email = Email::rehearsal_reminder(
                &user.email,
                &user.first_name,
                &band_name,
                &rehearsal.title,
                rehearsal.start_time,
                rehearsal.location.as_deref(),
            );

            match self.mailer.send(email).await {
                Ok(()) => summary.emails_sent += 1,
                Err(e) => {
                    summary.failures += 1;
                    tracing::warn!(
                        "Failed to email reminder for rehearsal {} to {}: {}",
                        rehearsal.id,
                        user.email,
                        e
                    );
                }
            }
        }

        let band_id = rehearsal.band_id;
        self.realtime.publish(
            band_id,
            RealtimeEvent::RehearsalReminder,
            &rehearsal.into_dto(),
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::service::mail::RecordingMailer;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests a due rehearsal reminds opted-in members once.
    ///
    /// Verifies members with email notifications off are skipped, the band room gets an
    /// event and a second run finds nothing left to send.
    ///
    /// Expected: one email on the first run, none on the second
    #[tokio::test]
    async fn reminds_opted_in_members_once() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_rehearsal_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (leader, band) = factory::helpers::create_band_with_leader(db).await?;
        let quiet = factory::user::UserFactory::new(db)
            .notify_email(false)
            .build()
            .await?;
        factory::band_member::create_member(db, band.id, quiet.id).await?;
        let rehearsal = factory::rehearsal::RehearsalFactory::new(db, band.id)
            .start_time(Utc::now() + Duration::hours(5))
            .build()
            .await?;
        factory::rehearsal::RehearsalFactory::new(db, band.id)
            .start_time(Utc::now() + Duration::days(5))
            .build()
            .await?;

        let mailer = RecordingMailer::default();
        let hub = RealtimeHub::new();
        let mut events = hub.subscribe();
        let service = ReminderService::new(db, &mailer, &hub);

        let summary = service
            .send_rehearsal_reminders(Utc::now(), Duration::hours(24))
            .await?;

        assert_eq!(
            summary,
            ReminderSummary {
                rehearsals: 1,
                emails_sent: 1,
                failures: 0,
            }
        );
        let sent = mailer.sent().await;
        assert_eq!(sent[0].to, leader.email);
        assert!(sent[0].subject.contains(&rehearsal.title));

        let event = events.recv().await.unwrap();
        assert_eq!(event.band_id, band.id);
        assert_eq!(event.event, RealtimeEvent::RehearsalReminder);

        let second = service
            .send_rehearsal_reminders(Utc::now(), Duration::hours(24))
            .await?;
        assert_eq!(second, ReminderSummary::default());

        Ok(())
    }

    /// Tests one failing recipient does not stop the others.
    ///
    /// Expected: one email sent, one failure, rehearsal still stamped
    #[tokio::test]
    async fn continues_after_mail_failure() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_rehearsal_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (leader, member, band) = factory::helpers::create_band_with_member(db).await?;
        let rehearsal = factory::rehearsal::RehearsalFactory::new(db, band.id)
            .start_time(Utc::now() + Duration::hours(2))
            .build()
            .await?;

        let mailer = RecordingMailer::failing_for(&[leader.email.as_str()]);
        let hub = RealtimeHub::new();

        let summary = ReminderService::new(db, &mailer, &hub)
            .send_rehearsal_reminders(Utc::now(), Duration::hours(24))
            .await?;

        assert_eq!(summary.emails_sent, 1);
        assert_eq!(summary.failures, 1);
        assert_eq!(mailer.sent().await[0].to, member.email);

        let stored = RehearsalRepository::new(db)
            .find_by_id(rehearsal.id)
            .await?
            .unwrap();
        assert!(stored.reminder_sent_at.is_some());

        Ok(())
    }

    /// Tests a rehearsal that fails mid-run does not stop the others.
    ///
    /// The first rehearsal is deleted after the due list is loaded, so stamping it fails.
    ///
    /// Expected: the remaining rehearsal is reminded and stamped, nothing is sent for
    /// the deleted one
    #[tokio::test]
    async fn continues_after_rehearsal_failure() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_rehearsal_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (leader, band) = factory::helpers::create_band_with_leader(db).await?;
        let gone = factory::rehearsal::RehearsalFactory::new(db, band.id)
            .title("Cancelled")
            .start_time(Utc::now() + Duration::hours(1))
            .build()
            .await?;
        let kept = factory::rehearsal::RehearsalFactory::new(db, band.id)
            .title("Still on")
            .start_time(Utc::now() + Duration::hours(3))
            .build()
            .await?;

        let repo = RehearsalRepository::new(db);
        let due = repo
            .get_due_for_reminder(Utc::now(), Utc::now() + Duration::hours(24))
            .await?;
        assert_eq!(due.len(), 2);
        repo.delete(gone.id).await?;

        let mailer = RecordingMailer::default();
        let hub = RealtimeHub::new();
        let summary = ReminderService::new(db, &mailer, &hub)
            .remind_all(due)
            .await;

        assert_eq!(
            summary,
            ReminderSummary {
                rehearsals: 1,
                emails_sent: 1,
                failures: 1,
            }
        );
        let sent = mailer.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, leader.email);
        assert!(sent[0].subject.contains("Still on"));

        let stored = repo.find_by_id(kept.id).await?.unwrap();
        assert!(stored.reminder_sent_at.is_some());

        Ok(())
    }
}
