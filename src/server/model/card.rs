//! Card domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::card::CardDto,
    server::{error::AppError, model::object_id::ObjectId, util::parse::parse_stored_object_id},
};

/// Card as stored. Cards are never updated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: ObjectId,
    pub title: String,
    pub description: String,
    /// Free-text column label such as "todo" or "done".
    pub section: String,
    pub created_at: DateTime<Utc>,
}

impl Card {
    /// Converts a card row to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Card)` - The converted card
    /// - `Err(AppError::DecodeError)` - The stored identifier is malformed
    pub fn from_entity(entity: entity::card::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: parse_stored_object_id(&entity.id)?,
            title: entity.title,
            description: entity.description,
            section: entity.section,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> CardDto {
        CardDto {
            id: self.id.to_hex(),
            title: self.title,
            description: self.description,
            created_at: self.created_at,
            section: self.section,
        }
    }
}

/// Parameters for inserting a new card. The repository assigns the identifier.
#[derive(Debug, Clone)]
pub struct CreateCardParams {
    pub title: String,
    pub description: String,
    pub section: String,
    pub created_at: DateTime<Utc>,
}
