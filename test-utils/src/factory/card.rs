//! Card factory for creating test card entities.

use crate::{factory::helpers::next_hex_id, fixture};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cards with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::card::CardFactory;
///
/// let card = CardFactory::new(&db)
///     .title("Fix bug")
///     .section("doing")
///     .build()
///     .await?;
/// ```
pub struct CardFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::card::Model,
}

impl<'a> CardFactory<'a> {
    /// Creates a new CardFactory with default values from the fixture and a unique ID.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let entity = fixture::card::entity_builder().id(next_hex_id()).build();

        Self { db, entity }
    }

    /// Sets the card title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.entity.title = title.into();
        self
    }

    /// Sets the card description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.entity.description = description.into();
        self
    }

    /// Sets the card section.
    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.entity.section = section.into();
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.entity.created_at = created_at;
        self
    }

    /// Builds and inserts the card entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::card::Model)` - Created card entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::card::Model, DbErr> {
        entity::card::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            title: ActiveValue::Set(self.entity.title),
            description: ActiveValue::Set(self.entity.description),
            section: ActiveValue::Set(self.entity.section),
            created_at: ActiveValue::Set(self.entity.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a card with default values.
///
/// Shorthand for `CardFactory::new(db).build().await`.
pub async fn create_card(db: &DatabaseConnection) -> Result<entity::card::Model, DbErr> {
    CardFactory::new(db).build().await
}
