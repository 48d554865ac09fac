//! Board factory for creating test board entities.

use crate::{factory::helpers::next_hex_id, fixture};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test boards with customizable fields.
///
/// Defaults come from `fixture::board` with a unique ID. Setting a name also derives
/// the alias the same way the backend does, unless an alias is set explicitly afterwards.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::board::BoardFactory;
///
/// let board = BoardFactory::new(&db)
///     .name("Sprint One")
///     .build()
///     .await?;
/// assert_eq!(board.alias, "sprint one");
/// ```
pub struct BoardFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::board::Model,
}

impl<'a> BoardFactory<'a> {
    /// Creates a new BoardFactory with default values from the fixture and a unique ID.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let entity = fixture::board::entity_builder().id(next_hex_id()).build();

        Self { db, entity }
    }

    /// Sets the board name and derives the lowercase alias from it.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self.entity.alias = self.entity.name.to_lowercase();
        self
    }

    /// Overrides the board alias.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.entity.alias = alias.into();
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.entity.created_at = created_at;
        self
    }

    /// Builds and inserts the board entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::board::Model)` - Created board entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::board::Model, DbErr> {
        entity::board::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            name: ActiveValue::Set(self.entity.name),
            alias: ActiveValue::Set(self.entity.alias),
            created_at: ActiveValue::Set(self.entity.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a board with default values.
///
/// Shorthand for `BoardFactory::new(db).build().await`.
pub async fn create_board(db: &DatabaseConnection) -> Result<entity::board::Model, DbErr> {
    BoardFactory::new(db).build().await
}
