use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_band_table::Band;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Song::Table)
                    .if_not_exists()
                    .col(pk_auto(Song::Id))
                    .col(integer(Song::BandId))
                    .col(string(Song::Title))
                    .col(string_null(Song::Artist))
                    .col(integer_null(Song::DurationSeconds))
                    .col(string_null(Song::SongKey))
                    .col(integer_null(Song::Tempo))
                    .col(text_null(Song::Notes))
                    .col(timestamp_with_time_zone(Song::CreatedAt))
                    .col(timestamp_with_time_zone(Song::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_song_band_id")
                            .from(Song::Table, Song::BandId)
                            .to(Band::Table, Band::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Song::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Song {
    Table,
    Id,
    BandId,
    Title,
    Artist,
    DurationSeconds,
    SongKey,
    Tempo,
    Notes,
    CreatedAt,
    UpdatedAt,
}
