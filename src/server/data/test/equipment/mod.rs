use crate::server::{
    data::equipment::EquipmentRepository,
    model::equipment::{CreateEquipmentParams, UpdateEquipmentParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_band;
mod get_by_owner;
mod update;
