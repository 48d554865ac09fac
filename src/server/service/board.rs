//! Board service for business logic.
//!
//! Builds new boards with their derived alias and links cards to boards. Linking is the
//! only operation with real rules: both identifiers are validated before the store is
//! touched, the card is added with set-union semantics, and the referenced card is not
//! checked for existence.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::board::BoardRepository,
    error::AppError,
    model::{
        board::{Board, BoardUpdate, CreateBoardParams},
        object_id::ObjectId,
    },
};

/// Service providing business logic for boards.
pub struct BoardService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> BoardService<'a> {
    /// Creates a new BoardService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BoardService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every board with its card set.
    pub async fn get_all(&self) -> Result<Vec<Board>, AppError> {
        BoardRepository::new(self.db).get_all().await
    }

    /// Retrieves a board by its hex identifier.
    pub async fn get_by_id(&self, id: &str) -> Result<Board, AppError> {
        BoardRepository::new(self.db).get_by_id(id).await
    }

    /// Retrieves a board by exact alias match.
    pub async fn get_by_alias(&self, alias: &str) -> Result<Board, AppError> {
        BoardRepository::new(self.db).get_by_alias(alias).await
    }

    /// Creates an empty board whose alias is the lowercased name.
    ///
    /// Boards whose names differ only by case end up with the same alias; nothing
    /// prevents that.
    ///
    /// # Arguments
    /// - `name` - Display name of the board
    ///
    /// # Returns
    /// - `Ok(Board)` - The stored board with an empty card set
    /// - `Err(AppError::StoreUnavailable)` - Database error during insert
    pub async fn create_board(&self, name: String) -> Result<Board, AppError> {
        let params = CreateBoardParams {
            alias: name.to_lowercase(),
            name,
            created_at: Utc::now(),
        };

        BoardRepository::new(self.db).create_board(params).await
    }

    /// Adds a card to a board's card set and returns the updated board.
    ///
    /// Idempotent: adding a card that is already on the board leaves the set unchanged.
    /// The card identifier is only validated for shape, not for existence.
    ///
    /// # Arguments
    /// - `board_id` - Hex identifier of the board
    /// - `card_id` - Hex identifier of the card
    ///
    /// # Returns
    /// - `Ok(Board)` - The board as read after the update
    /// - `Err(AppError::InvalidIdentifier)` - Either identifier is malformed; nothing was
    ///   written
    /// - `Err(AppError::NotFound)` - The board does not exist
    /// - `Err(AppError::StoreUnavailable)` - Database error during update
    pub async fn add_card(&self, board_id: &str, card_id: &str) -> Result<Board, AppError> {
        let board_object_id = ObjectId::parse_str(board_id)?;
        let card_object_id = ObjectId::parse_str(card_id)?;

        BoardRepository::new(self.db)
            .update_board(board_object_id, BoardUpdate::AddCardId(card_object_id))
            .await
    }
}
