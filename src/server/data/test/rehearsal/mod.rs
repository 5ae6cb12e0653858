use crate::server::{
    data::rehearsal::RehearsalRepository,
    model::rehearsal::{CreateRehearsalParams, UpdateRehearsalParams},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create_many;
mod get_by_band;
mod get_due_for_reminder;
mod get_upcoming_for_bands;
mod mark_reminder_sent;
mod update;

fn create_params(band_id: i32, days_ahead: i64) -> CreateRehearsalParams {
    let start = Utc::now() + Duration::days(days_ahead);
    CreateRehearsalParams {
        band_id,
        title: format!("Rehearsal in {} days", days_ahead),
        description: None,
        location: Some("Studio".to_string()),
        start_time: start,
        end_time: start + Duration::hours(2),
        setlist_id: None,
        series_id: None,
    }
}
