//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer. They
//! build new entities with server-owned fields such as timestamps and aliases, coordinate
//! repository calls, and pass repository errors through unchanged.

pub mod board;
pub mod card;

#[cfg(test)]
mod test;
