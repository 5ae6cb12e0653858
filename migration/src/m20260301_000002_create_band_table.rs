use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Band::Table)
                    .if_not_exists()
                    .col(pk_auto(Band::Id))
                    .col(string(Band::Name))
                    .col(text_null(Band::Description))
                    .col(timestamp_with_time_zone(Band::CreatedAt))
                    .col(timestamp_with_time_zone(Band::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Band::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Band {
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
}
