//! Card data repository for database operations.
//!
//! Provides the `CardRepository` for inserting and querying cards with conversion between
//! entity models and domain models at the infrastructure boundary.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, QueryOrder};

use crate::server::{
    error::AppError,
    model::{
        card::{Card, CreateCardParams},
        object_id::ObjectId,
    },
};

/// Repository providing database operations for cards.
pub struct CardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CardRepository<'a> {
    /// Creates a new CardRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CardRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every stored card, oldest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Card>)` - All cards (empty if none exist)
    /// - `Err(AppError::StoreUnavailable)` - Database error during query
    /// - `Err(AppError::DecodeError)` - A stored row could not be converted
    pub async fn get_all(&self) -> Result<Vec<Card>, AppError> {
        let cards = entity::prelude::Card::find()
            .order_by_asc(entity::card::Column::CreatedAt)
            .order_by_asc(entity::card::Column::Id)
            .all(self.db)
            .await
            .inspect_err(|e| tracing::error!("Error finding cards: {}", e))?;

        cards
            .into_iter()
            .map(Card::from_entity)
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|e| tracing::error!("Error decoding cards: {}", e))
    }

    /// Gets a card by its hex identifier.
    ///
    /// # Arguments
    /// - `id` - Card identifier as supplied by the client
    ///
    /// # Returns
    /// - `Ok(Card)` - The matching card
    /// - `Err(AppError::InvalidIdentifier)` - `id` is not a valid identifier; the store
    ///   is not queried
    /// - `Err(AppError::NotFound)` - No card has this identifier
    /// - `Err(AppError::StoreUnavailable)` - Database error during query
    pub async fn get_by_id(&self, id: &str) -> Result<Card, AppError> {
        let object_id = ObjectId::parse_str(id)
            .inspect_err(|e| tracing::debug!("Invalid card id: {}", e))?;

        let entity = entity::prelude::Card::find_by_id(object_id.to_hex())
            .one(self.db)
            .await?
            .ok_or_else(|| {
                tracing::debug!("No card with ID {}", object_id);
                AppError::NotFound(format!("Card with id {} not found", object_id))
            })?;

        Card::from_entity(entity)
    }

    /// Inserts a new card under a freshly assigned identifier.
    ///
    /// # Arguments
    /// - `params` - Card fields including the server-assigned creation time
    ///
    /// # Returns
    /// - `Ok(Card)` - The stored card including its identifier
    /// - `Err(AppError::StoreUnavailable)` - Database error during insert
    pub async fn create(&self, params: CreateCardParams) -> Result<Card, AppError> {
        let entity = entity::card::ActiveModel {
            id: ActiveValue::Set(ObjectId::new().to_hex()),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            section: ActiveValue::Set(params.section),
            created_at: ActiveValue::Set(params.created_at),
        }
        .insert(self.db)
        .await
        .inspect_err(|e| tracing::error!("Error inserting card: {}", e))?;

        Card::from_entity(entity)
    }
}
