use crate::{
    model::band::BandRole,
    server::{
        data::band::BandRepository,
        model::band::{CreateBandParams, UpdateBandParams},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_for_user;
mod get_with_members;
mod update;
