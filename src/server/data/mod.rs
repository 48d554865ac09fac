//! Database repository layer for boards and cards.
//!
//! Repositories use SeaORM entity models internally and return domain models to the
//! service layer. They own identifier validation and translate `DbErr` into `AppError`;
//! they never retry a failed store call.

pub mod board;
pub mod card;

#[cfg(test)]
mod test;
