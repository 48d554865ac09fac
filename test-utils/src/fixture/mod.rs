//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests and supply default values
//! for the factories. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let board = fixture::board::entity();
//! let card = fixture::card::entity_builder().section("done").build();
//! ```

pub mod board;
pub mod card;

/// Formats a counter value as a 24 character lowercase hex identifier.
///
/// Matches the shape of identifiers the backend assigns, so fixture ids pass the same
/// validation as real ones.
pub fn hex_id(value: u64) -> String {
    format!("{:024x}", value)
}
