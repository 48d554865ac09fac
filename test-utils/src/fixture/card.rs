//! Card fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::card;

use crate::fixture::hex_id;

/// Default test card title.
pub const DEFAULT_TITLE: &str = "Test Card";

/// Default test card description.
pub const DEFAULT_DESCRIPTION: &str = "Test description";

/// Default test card section.
pub const DEFAULT_SECTION: &str = "todo";

/// Default creation timestamp for fixture cards.
pub fn default_created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 5, 12, 30, 0).unwrap()
}

/// Creates a card entity model with default values.
///
/// # Default Values
/// - id: `hex_id(1)`
/// - title: `"Test Card"`
/// - description: `"Test description"`
/// - section: `"todo"`
/// - created_at: `2026-01-05T12:30:00Z`
pub fn entity() -> card::Model {
    entity_builder().build()
}

/// Creates a card entity builder for customization.
pub fn entity_builder() -> CardEntityBuilder {
    CardEntityBuilder::default()
}

/// Builder for creating customized card entity models.
pub struct CardEntityBuilder {
    id: String,
    title: String,
    description: String,
    section: String,
    created_at: DateTime<Utc>,
}

impl Default for CardEntityBuilder {
    fn default() -> Self {
        Self {
            id: hex_id(1),
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            section: DEFAULT_SECTION.to_string(),
            created_at: default_created_at(),
        }
    }
}

impl CardEntityBuilder {
    /// Sets the card ID.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the card title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the card description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the card section.
    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and returns the card entity model.
    pub fn build(self) -> card::Model {
        card::Model {
            id: self.id,
            title: self.title,
            description: self.description,
            section: self.section,
            created_at: self.created_at,
        }
    }
}
