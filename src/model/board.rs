use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BoardDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "cardIds")]
    pub card_ids: Vec<String>,
    pub alias: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BoardResponseDto {
    pub board: BoardDto,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BoardsResponseDto {
    pub boards: Vec<BoardDto>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct CreateBoardDto {
    #[serde(default)]
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct AddCardToBoardDto {
    #[serde(default, rename = "boardId")]
    pub board_id: String,
    /// Older clients send `CardId`.
    #[serde(default, rename = "cardId", alias = "CardId")]
    pub card_id: String,
}
