//! Board domain models and parameters.
//!
//! A board owns a name, a derived alias, and a set of weak references to cards. The
//! card set is stored as membership rows and reassembled here at the repository
//! boundary.

use chrono::{DateTime, Utc};

use crate::{
    model::board::BoardDto,
    server::{error::AppError, model::object_id::ObjectId, util::parse::parse_stored_object_id},
};

/// Board with its card membership set.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Store-assigned identifier.
    pub id: ObjectId,
    /// Display name.
    pub name: String,
    /// Lowercased name used as a secondary lookup key. Not unique.
    pub alias: String,
    /// Identifiers of the cards on this board, without duplicates.
    ///
    /// These are weak references: the cards they name may not exist.
    pub card_ids: Vec<ObjectId>,
    /// Server-assigned creation time.
    pub created_at: DateTime<Utc>,
}

impl Board {
    /// Converts entity models to a board domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The board row
    /// - `memberships` - The board's `board_card` rows
    ///
    /// # Returns
    /// - `Ok(Board)` - The converted board
    /// - `Err(AppError::DecodeError)` - A stored board or card identifier is malformed
    pub fn from_entity(
        entity: entity::board::Model,
        memberships: Vec<entity::board_card::Model>,
    ) -> Result<Self, AppError> {
        let card_ids = memberships
            .iter()
            .map(|m| parse_stored_object_id(&m.card_id))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: parse_stored_object_id(&entity.id)?,
            name: entity.name,
            alias: entity.alias,
            card_ids,
            created_at: entity.created_at,
        })
    }

    /// Converts the board to a DTO for API responses, rendering identifiers as hex.
    pub fn into_dto(self) -> BoardDto {
        BoardDto {
            id: self.id.to_hex(),
            name: self.name,
            card_ids: self.card_ids.iter().map(ObjectId::to_hex).collect(),
            alias: self.alias,
            created_at: self.created_at,
        }
    }
}

/// Parameters for inserting a new board. The repository assigns the identifier and the
/// card set starts empty.
#[derive(Debug, Clone)]
pub struct CreateBoardParams {
    pub name: String,
    pub alias: String,
    pub created_at: DateTime<Utc>,
}

/// Partial update applied atomically to a single board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardUpdate {
    /// Adds a card to the board's card set; a no-op when it is already present.
    AddCardId(ObjectId),
}
