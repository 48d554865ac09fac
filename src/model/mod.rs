//! JSON data transfer objects exchanged with API clients.

pub mod api;
pub mod board;
pub mod card;
