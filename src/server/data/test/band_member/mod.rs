use crate::{model::band::BandRole, server::data::band_member::BandMemberRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add;
mod count_with_role;
mod get_email_recipients;
mod get_role;
mod remove;
mod update_role;
