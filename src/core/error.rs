//! Construction-time errors.
//!
//! Everything here is fatal before a game starts: bad card strings, bad
//! rosters, bad player-type names. Running out of cards, asking for a rank
//! nobody holds and similar in-game situations are ordinary `Option`/`bool`
//! results, never errors.

use std::fmt;

/// Errors raised while building cards, configurations or games.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GoFishError {
    /// A rank string outside 2-10, J, Q, K, A.
    InvalidRank(String),
    /// A suit string outside Hearts, Diamonds, Clubs, Spades.
    InvalidSuit(String),
    /// Fewer than two players requested.
    TooFewPlayers(usize),
    /// The list of AI player kinds is empty.
    NoPlayerTypes,
    /// A player kind name that is not random, greedy/smart or memory.
    UnknownPlayerType(String),
    /// Two players in one game share a name.
    DuplicatePlayerName(String),
}

impl fmt::Display for GoFishError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoFishError::InvalidRank(rank) => write!(f, "invalid rank: {rank}"),
            GoFishError::InvalidSuit(suit) => write!(f, "invalid suit: {suit}"),
            GoFishError::TooFewPlayers(count) => {
                write!(f, "Go Fish requires at least 2 players, got {count}")
            }
            GoFishError::NoPlayerTypes => write!(f, "at least one player type is required"),
            GoFishError::UnknownPlayerType(name) => write!(
                f,
                "invalid player type '{name}'; valid types are: random, greedy (smart), memory"
            ),
            GoFishError::DuplicatePlayerName(name) => {
                write!(f, "player name '{name}' is used more than once")
            }
        }
    }
}

impl std::error::Error for GoFishError {}
