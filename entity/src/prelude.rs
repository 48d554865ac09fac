pub use super::board::Entity as Board;
pub use super::board_card::Entity as BoardCard;
pub use super::card::Entity as Card;
