//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary, keeping business logic separate from
//! database and API concerns.

pub mod board;
pub mod card;
pub mod object_id;
