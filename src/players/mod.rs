//! Players and their decision strategies.
//!
//! `Player` holds the state every seat shares (hand, books, knowledge of
//! opponents) and delegates decisions to a boxed [`Strategy`]:
//!
//! - `RandomStrategy`: uniform random rank and opponent
//! - `GreedyStrategy`: most-held rank, known holders first
//! - `MemoryStrategy`: most-held rank, remembered askers first
//! - `InteractiveStrategy`: a human at a text prompt

pub mod greedy;
pub mod human;
pub mod memory;
pub mod player;
pub mod random;
pub mod strategy;

pub use greedy::GreedyStrategy;
pub use human::InteractiveStrategy;
pub use memory::MemoryStrategy;
pub use player::Player;
pub use random::RandomStrategy;
pub use strategy::{greedy_rank, PlayerView, RankMemory, Strategy};
