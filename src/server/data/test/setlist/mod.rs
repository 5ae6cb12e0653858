use crate::server::{
    data::setlist::SetlistRepository,
    model::setlist::{CreateSetlistParams, UpdateSetlistParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_band;
mod get_with_songs;
mod replace_songs;
mod update;
