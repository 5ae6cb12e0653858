use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000004_create_song_table::Song;
use super::m20260301_000005_create_setlist_table::Setlist;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SetlistSong::Table)
                    .if_not_exists()
                    .col(integer(SetlistSong::SetlistId))
                    .col(integer(SetlistSong::SongId))
                    .col(integer(SetlistSong::Position))
                    .primary_key(
                        Index::create()
                            .name("pk_setlist_song")
                            .col(SetlistSong::SetlistId)
                            .col(SetlistSong::SongId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_setlist_song_setlist_id")
                            .from(SetlistSong::Table, SetlistSong::SetlistId)
                            .to(Setlist::Table, Setlist::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_setlist_song_song_id")
                            .from(SetlistSong::Table, SetlistSong::SongId)
                            .to(Song::Table, Song::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SetlistSong::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SetlistSong {
    Table,
    SetlistId,
    SongId,
    Position,
}
