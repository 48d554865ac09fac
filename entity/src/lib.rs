//! SeaORM entities for the kanban store.

pub mod prelude;

pub mod board;
pub mod board_card;
pub mod card;
