//! HTTP request handlers.
//!
//! Controllers decode request DTOs, run the service call under the per-request deadline,
//! and wrap the resulting domain model in its response envelope.

pub mod board;
pub mod card;
