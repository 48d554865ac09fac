use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Board::Table)
                    .if_not_exists()
                    .col(string(Board::Id).primary_key())
                    .col(string(Board::Name))
                    .col(string(Board::Alias))
                    .col(timestamp_with_time_zone(Board::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Alias lookups are exact-match; duplicates are allowed.
        manager
            .create_index(
                Index::create()
                    .name("idx_board_alias")
                    .table(Board::Table)
                    .col(Board::Alias)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Board::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Board {
    Table,
    Id,
    Name,
    Alias,
    CreatedAt,
}
