use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_board_table::Board;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BoardCard::Table)
                    .if_not_exists()
                    .col(string(BoardCard::BoardId))
                    .col(string(BoardCard::CardId))
                    .primary_key(
                        Index::create()
                            .col(BoardCard::BoardId)
                            .col(BoardCard::CardId),
                    )
                    // No foreign key on card_id: boards reference cards weakly.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_card_board_id")
                            .from(BoardCard::Table, BoardCard::BoardId)
                            .to(Board::Table, Board::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BoardCard::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BoardCard {
    Table,
    BoardId,
    CardId,
}
