//! Go Fish rules: the turn engine and the events it reports.
//!
//! The engine never prints anything itself beyond optional narration of
//! its events; callers read results from `GameResult` and `history()`.

pub mod engine;
pub mod event;

pub use engine::{GameResult, GoFishGame, TurnState};
pub use event::GameEvent;
