//! Card service for business logic.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::card::CardRepository,
    error::AppError,
    model::card::{Card, CreateCardParams},
};

/// Service providing business logic for cards.
pub struct CardService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CardService<'a> {
    /// Creates a new CardService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CardService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every card.
    pub async fn get_all(&self) -> Result<Vec<Card>, AppError> {
        CardRepository::new(self.db).get_all().await
    }

    /// Retrieves a card by its hex identifier.
    pub async fn get_by_id(&self, id: &str) -> Result<Card, AppError> {
        CardRepository::new(self.db).get_by_id(id).await
    }

    /// Creates a card stamped with the current UTC time.
    ///
    /// The creation time is always taken from the server clock at the moment of the call.
    ///
    /// # Arguments
    /// - `title` - Card title
    /// - `description` - Card description, may be empty
    /// - `section` - Free-text section label
    ///
    /// # Returns
    /// - `Ok(Card)` - The stored card including its assigned identifier
    /// - `Err(AppError::StoreUnavailable)` - Database error during insert
    pub async fn create(
        &self,
        title: String,
        description: String,
        section: String,
    ) -> Result<Card, AppError> {
        let params = CreateCardParams {
            title,
            description,
            section,
            created_at: Utc::now(),
        };

        CardRepository::new(self.db).create(params).await
    }
}
