//! Cards, the deck and player hands.
//!
//! - `card`: `Rank`, `Suit` and `Card` values
//! - `deck`: the shuffled draw pile
//! - `hand`: a player's cards, rank grouping and book extraction

pub mod card;
pub mod deck;
pub mod hand;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use hand::{Book, Hand, BOOK_SIZE};
