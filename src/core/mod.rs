//! Core building blocks: RNG, configuration, errors.
//!
//! Nothing in here knows about cards or turns; the game modules build on top.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameConfig, PlayerKind};
pub use error::GoFishError;
pub use rng::GameRng;
