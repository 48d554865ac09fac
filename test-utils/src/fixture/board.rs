//! Board fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::board;

use crate::fixture::hex_id;

/// Default test board name.
pub const DEFAULT_NAME: &str = "Test Board";

/// Default test board alias, the lowercase form of `DEFAULT_NAME`.
pub const DEFAULT_ALIAS: &str = "test board";

/// Default creation timestamp for fixture boards.
pub fn default_created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap()
}

/// Creates a board entity model with default values.
///
/// # Default Values
/// - id: `hex_id(1)`
/// - name: `"Test Board"`
/// - alias: `"test board"`
/// - created_at: `2026-01-05T12:00:00Z`
pub fn entity() -> board::Model {
    entity_builder().build()
}

/// Creates a board entity builder for customization.
pub fn entity_builder() -> BoardEntityBuilder {
    BoardEntityBuilder::default()
}

/// Builder for creating customized board entity models.
pub struct BoardEntityBuilder {
    id: String,
    name: String,
    alias: String,
    created_at: DateTime<Utc>,
}

impl Default for BoardEntityBuilder {
    fn default() -> Self {
        Self {
            id: hex_id(1),
            name: DEFAULT_NAME.to_string(),
            alias: DEFAULT_ALIAS.to_string(),
            created_at: default_created_at(),
        }
    }
}

impl BoardEntityBuilder {
    /// Sets the board ID.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the board name. The alias is left untouched.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the board alias.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and returns the board entity model.
    pub fn build(self) -> board::Model {
        board::Model {
            id: self.id,
            name: self.name,
            alias: self.alias,
            created_at: self.created_at,
        }
    }
}
