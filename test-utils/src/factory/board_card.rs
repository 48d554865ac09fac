//! Board membership factory for attaching cards to boards in tests.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a membership row linking a card to a board.
///
/// The card does not need to exist; only the board is referenced by a foreign key.
/// Inserting the same pair twice fails with a primary key violation.
///
/// # Arguments
/// - `db` - Database connection
/// - `board_id` - ID of the board
/// - `card_id` - ID of the card to attach
///
/// # Returns
/// - `Ok(entity::board_card::Model)` - Created membership row
/// - `Err(DbErr)` - Database error during insert
pub async fn add_card_to_board(
    db: &DatabaseConnection,
    board_id: &str,
    card_id: &str,
) -> Result<entity::board_card::Model, DbErr> {
    entity::board_card::ActiveModel {
        board_id: ActiveValue::Set(board_id.to_string()),
        card_id: ActiveValue::Set(card_id.to_string()),
    }
    .insert(db)
    .await
}
