//! Game events.
//!
//! The engine records one `GameEvent` per notable thing that happens. The
//! `Display` form is the console narration line for that event.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// Something that happened during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Books already complete in a player's dealt hand.
    InitialBooks { player: String, ranks: Vec<Rank> },
    /// A new turn begins.
    TurnStarted { turn: u32, player: String },
    /// The player has no cards and the deck is empty; their turn is skipped.
    SkippedEmptyHanded { player: String },
    /// The player had no cards and drew one before asking.
    RefilledEmptyHand { player: String, card: Card },
    /// The strategy produced no rank to ask for.
    NothingToAsk { player: String },
    /// A player asks an opponent for a rank.
    Asked { player: String, target: String, rank: Rank },
    /// The opponent held the rank and handed over `count` cards.
    Hit { target: String, rank: Rank, count: usize },
    /// The opponent held none of the rank.
    GoFish { target: String },
    /// The asker drew a card from the deck.
    Drew { player: String },
    /// The drawn card was the rank asked for; the asker goes again.
    DrewAskedRank { player: String, card: Card },
    /// The asker had to fish but the deck was empty.
    DeckEmpty,
    /// A player completed a book.
    BookCompleted { player: String, rank: Rank },
    /// Final scores in seat order and the winners.
    GameOver { scores: Vec<(String, usize)>, winners: Vec<String>, top_score: usize },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::InitialBooks { player, ranks } => {
                let listed: Vec<&str> = ranks.iter().map(|r| r.label()).collect();
                write!(
                    f,
                    "{player} found {} book(s) in their initial hand: {}",
                    ranks.len(),
                    listed.join(", ")
                )
            }
            GameEvent::TurnStarted { turn, player } => {
                write!(f, "\n--- Turn {turn}: {player}'s turn ---")
            }
            GameEvent::SkippedEmptyHanded { player } => {
                write!(f, "{player} has no cards and the deck is empty.")
            }
            GameEvent::RefilledEmptyHand { player, card } => {
                write!(f, "{player} had no cards and drew {card} from the deck.")
            }
            GameEvent::NothingToAsk { player } => write!(f, "{player} has no cards to ask for."),
            GameEvent::Asked { player, target, rank } => {
                write!(f, "{player} asks {target} for {rank}s.")
            }
            GameEvent::Hit { target, rank, count } => write!(f, "{target} has {count} {rank}(s)!"),
            GameEvent::GoFish { target } => write!(f, "{target} says 'Go Fish!'"),
            GameEvent::Drew { player } => write!(f, "{player} draws a card from the deck."),
            GameEvent::DrewAskedRank { player, card } => {
                write!(f, "{player} drew the {card}, which is the rank they asked for!")
            }
            GameEvent::DeckEmpty => write!(f, "The deck is empty."),
            GameEvent::BookCompleted { player, rank } => {
                write!(f, "{player} completed a book of {rank}s!")
            }
            GameEvent::GameOver { scores, winners, top_score } => {
                writeln!(f, "\n--- Game Over ---")?;
                for (name, score) in scores {
                    writeln!(f, "{name}: {score} books")?;
                }
                match winners.as_slice() {
                    [winner] => write!(f, "\nThe winner is {winner} with {top_score} books!"),
                    _ => write!(
                        f,
                        "\nThe game ended in a tie between {} with {top_score} books each!",
                        winners.join(", ")
                    ),
                }
            }
        }
    }
}
