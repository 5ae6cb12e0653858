use chrono::{Duration, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    service::{mail::Mailer, realtime::RealtimeHub, reminder::ReminderService},
};

/// Starts the rehearsal reminder scheduler
///
/// On every tick of `schedule` (six-field cron, seconds first) the job emails members
/// about rehearsals starting within the next `window_hours` and pushes a reminder to
/// each band room. Failures are logged; the job keeps its schedule.
///
/// # Arguments
/// - `db`: Database connection
/// - `mailer`: Mail transport for reminder emails
/// - `realtime`: Hub for band room notifications
/// - `schedule`: Cron expression from `REMINDER_SCHEDULE`
/// - `window_hours`: Look-ahead window from `REMINDER_WINDOW_HOURS`
pub async fn start_scheduler(
    db: DatabaseConnection,
    mailer: Arc<dyn Mailer>,
    realtime: RealtimeHub,
    schedule: String,
    window_hours: i64,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule.as_str(), move |_uuid, _lock| {
        let db = db.clone();
        let mailer = mailer.clone();
        let realtime = realtime.clone();

        Box::pin(async move {
            if let Err(e) = process_reminders(&db, mailer.as_ref(), &realtime, window_hours).await
            {
                tracing::error!("Error processing rehearsal reminders: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Rehearsal reminder scheduler started ({})", schedule);

    Ok(())
}

async fn process_reminders(
    db: &DatabaseConnection,
    mailer: &dyn Mailer,
    realtime: &RealtimeHub,
    window_hours: i64,
) -> Result<(), AppError> {
    let summary = ReminderService::new(db, mailer, realtime)
        .send_rehearsal_reminders(Utc::now(), Duration::hours(window_hours))
        .await?;

    tracing::info!(
        "Reminder run finished: {} rehearsals, {} emails sent, {} failures",
        summary.rehearsals,
        summary.emails_sent,
        summary.failures
    );

    Ok(())
}
