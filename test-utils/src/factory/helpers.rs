//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

use crate::fixture::hex_id;

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Gets the next unique 24 character hex identifier for test data.
pub fn next_hex_id() -> String {
    hex_id(next_id())
}

/// Creates a board holding the given number of freshly created cards.
///
/// # Arguments
/// - `db` - Database connection
/// - `card_count` - Number of cards to create and attach
///
/// # Returns
/// - `Ok((board, cards))` - The board and the cards attached to it, in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_board_with_cards(
    db: &DatabaseConnection,
    card_count: usize,
) -> Result<(entity::board::Model, Vec<entity::card::Model>), DbErr> {
    let board = crate::factory::board::create_board(db).await?;

    let mut cards = Vec::with_capacity(card_count);
    for _ in 0..card_count {
        let card = crate::factory::card::create_card(db).await?;
        crate::factory::board_card::add_card_to_board(db, &board.id, &card.id).await?;
        cards.push(card);
    }

    Ok((board, cards))
}
