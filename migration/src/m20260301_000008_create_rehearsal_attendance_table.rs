use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;
use super::m20260301_000007_create_rehearsal_table::Rehearsal;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RehearsalAttendance::Table)
                    .if_not_exists()
                    .col(integer(RehearsalAttendance::RehearsalId))
                    .col(integer(RehearsalAttendance::UserId))
                    .col(string_len(RehearsalAttendance::Status, 16))
                    .col(timestamp_with_time_zone(RehearsalAttendance::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .name("pk_rehearsal_attendance")
                            .col(RehearsalAttendance::RehearsalId)
                            .col(RehearsalAttendance::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rehearsal_attendance_rehearsal_id")
                            .from(RehearsalAttendance::Table, RehearsalAttendance::RehearsalId)
                            .to(Rehearsal::Table, Rehearsal::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rehearsal_attendance_user_id")
                            .from(RehearsalAttendance::Table, RehearsalAttendance::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RehearsalAttendance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RehearsalAttendance {
    Table,
    RehearsalId,
    UserId,
    Status,
    UpdatedAt,
}
