use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CardDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub section: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CardResponseDto {
    pub card: CardDto,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CardsResponseDto {
    pub cards: Vec<CardDto>,
}

/// Body of `POST /cards/add`. Any creation timestamp sent by the client is ignored.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct CreateCardDto {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub section: String,
}
