use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;
use super::m20260301_000002_create_band_table::Band;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BandMember::Table)
                    .if_not_exists()
                    .col(integer(BandMember::BandId))
                    .col(integer(BandMember::UserId))
                    .col(string_len(BandMember::Role, 16).default("MEMBER"))
                    .col(timestamp_with_time_zone(BandMember::JoinedAt))
                    .primary_key(
                        Index::create()
                            .name("pk_band_member")
                            .col(BandMember::BandId)
                            .col(BandMember::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_band_member_band_id")
                            .from(BandMember::Table, BandMember::BandId)
                            .to(Band::Table, Band::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_band_member_user_id")
                            .from(BandMember::Table, BandMember::UserId)
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
            .drop_table(Table::drop().table(BandMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BandMember {
    Table,
    BandId,
    UserId,
    Role,
    JoinedAt,
}
