mod board;
mod card;
