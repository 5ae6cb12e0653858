use crate::server::{
    data::song::SongRepository,
    model::song::{CreateSongParams, UpdateSongParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_in_band;
mod create;
mod get_by_band;
mod update;
