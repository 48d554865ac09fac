//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let board = factory::board::create_board(&db).await?;
//!     let card = factory::card::create_card(&db).await?;
//!     factory::board_card::add_card_to_board(&db, &board.id, &card.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let board = factory::board::BoardFactory::new(&db)
//!     .name("Sprint One")
//!     .build()
//!     .await?;
//! ```

pub mod board;
pub mod board_card;
pub mod card;
pub mod helpers;

pub use board::create_board;
pub use board_card::add_card_to_board;
pub use card::create_card;
