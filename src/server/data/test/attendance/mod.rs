use crate::{model::rehearsal::AttendanceStatus, server::data::attendance::AttendanceRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_rehearsal;
mod upsert;
