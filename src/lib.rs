//! # gofish
//!
//! A Go Fish simulator for 2+ players with pluggable decision strategies.
//!
//! ## Design Principles
//!
//! 1. **N-Player First**: Every seat is a `Player` with a boxed strategy;
//!    nothing assumes two players or a human at the table.
//!
//! 2. **Reproducible**: All randomness (shuffles, random picks) flows through
//!    one seeded `GameRng`. The same seed replays the same game.
//!
//! 3. **Configuration Over Convention**: Table size, dealt hand size, player
//!    types and batch size live in `GameConfig`.
//!
//! ## Modules
//!
//! - `core`: RNG, errors, configuration
//! - `cards`: Ranks, suits, the deck, hands and books
//! - `players`: `Player` and the `Strategy` implementations
//! - `rules`: The turn engine and game events
//! - `sim`: Multi-game batches and win statistics

pub mod core;
pub mod cards;
pub mod players;
pub mod rules;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GoFishError, PlayerKind};

pub use crate::cards::{Book, Card, Deck, Hand, Rank, Suit, BOOK_SIZE};

pub use crate::players::{
    GreedyStrategy, InteractiveStrategy, MemoryStrategy, Player, PlayerView, RandomStrategy,
    Strategy,
};

pub use crate::rules::{GameEvent, GameResult, GoFishGame, TurnState};

pub use crate::sim::{roster, BatchReport, Simulation};
