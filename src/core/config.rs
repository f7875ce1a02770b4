//! Simulation configuration types.
//!
//! `GameConfig` is the whole command surface of the simulator as a plain
//! value: the CLI fills one in, tests build one with the `with_*` methods,
//! and `validate` rejects anything that cannot start a game.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::GoFishError;

/// Strategy family of a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Uniform random rank and opponent.
    Random,
    /// Asks for its most-held rank, targets opponents known to hold it.
    Greedy,
    /// Greedy rank choice, targets opponents remembered asking for it.
    Memory,
    /// Reads decisions from a human at the terminal.
    Human,
}

impl PlayerKind {
    /// Kinds that can fill an AI slot.
    pub const AI: [PlayerKind; 3] = [PlayerKind::Random, PlayerKind::Greedy, PlayerKind::Memory];

    /// Parse a comma-separated list such as `"random,smart,memory"`.
    ///
    /// Blank entries are ignored; an empty result is an error.
    pub fn parse_list(list: &str) -> Result<Vec<PlayerKind>, GoFishError> {
        let kinds = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<_>, _>>()?;

        if kinds.is_empty() {
            return Err(GoFishError::NoPlayerTypes);
        }
        Ok(kinds)
    }
}

impl FromStr for PlayerKind {
    type Err = GoFishError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(PlayerKind::Random),
            "greedy" | "smart" => Ok(PlayerKind::Greedy),
            "memory" => Ok(PlayerKind::Memory),
            _ => Err(GoFishError::UnknownPlayerType(s.to_string())),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlayerKind::Random => "Random",
            PlayerKind::Greedy => "Greedy",
            PlayerKind::Memory => "Memory",
            PlayerKind::Human => "Human",
        })
    }
}

/// Complete simulation configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Total players at the table, human included (at least 2).
    pub player_count: usize,

    /// Seat a human player first.
    pub include_human: bool,

    /// Cards dealt to each player during setup.
    pub initial_cards: usize,

    /// Narrate every turn to stdout.
    pub verbose: bool,

    /// Independent games in the batch.
    pub game_count: usize,

    /// AI kinds, cycled across the non-human seats.
    pub player_types: Vec<PlayerKind>,

    /// Seed for the random source. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            include_human: false,
            initial_cards: 7,
            verbose: true,
            game_count: 1,
            player_types: vec![PlayerKind::Random],
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a config with the default table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of players.
    #[must_use]
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Seat a human player.
    #[must_use]
    pub fn with_human(mut self, include: bool) -> Self {
        self.include_human = include;
        self
    }

    /// Set the initial deal size.
    #[must_use]
    pub fn with_initial_cards(mut self, cards: usize) -> Self {
        self.initial_cards = cards;
        self
    }

    /// Toggle turn narration.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set the number of games in the batch.
    #[must_use]
    pub fn with_game_count(mut self, games: usize) -> Self {
        self.game_count = games;
        self
    }

    /// Set the AI kinds cycled across seats.
    #[must_use]
    pub fn with_player_types(mut self, kinds: Vec<PlayerKind>) -> Self {
        self.player_types = kinds;
        self
    }

    /// Fix the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of seats filled by AI players.
    #[must_use]
    pub fn ai_count(&self) -> usize {
        self.player_count.saturating_sub(usize::from(self.include_human))
    }

    /// Check the configuration can start a game.
    pub fn validate(&self) -> Result<(), GoFishError> {
        if self.player_count < 2 {
            return Err(GoFishError::TooFewPlayers(self.player_count));
        }
        if self.player_types.is_empty() {
            return Err(GoFishError::NoPlayerTypes);
        }
        if let Some(kind) = self.player_types.iter().find(|k| **k == PlayerKind::Human) {
            return Err(GoFishError::UnknownPlayerType(kind.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.player_count, 4);
        assert!(!config.include_human);
        assert_eq!(config.initial_cards, 7);
        assert!(config.verbose);
        assert_eq!(config.game_count, 1);
        assert_eq!(config.player_types, vec![PlayerKind::Random]);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::new()
            .with_player_count(3)
            .with_human(true)
            .with_initial_cards(5)
            .with_verbose(false)
            .with_game_count(10)
            .with_player_types(vec![PlayerKind::Greedy, PlayerKind::Memory])
            .with_seed(123);

        assert_eq!(config.player_count, 3);
        assert_eq!(config.ai_count(), 2);
        assert_eq!(config.initial_cards, 5);
        assert!(!config.verbose);
        assert_eq!(config.game_count, 10);
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_ai_count_without_seats() {
        let config = GameConfig::new().with_player_count(0).with_human(true);
        assert_eq!(config.ai_count(), 0);
        assert_eq!(config.validate(), Err(GoFishError::TooFewPlayers(0)));
    }

    #[test]
    fn test_validate_too_few_players() {
        let config = GameConfig::new().with_player_count(1);
        assert_eq!(config.validate(), Err(GoFishError::TooFewPlayers(1)));
    }

    #[test]
    fn test_validate_empty_player_types() {
        let config = GameConfig::new().with_player_types(vec![]);
        assert_eq!(config.validate(), Err(GoFishError::NoPlayerTypes));
    }

    #[test]
    fn test_validate_rejects_human_ai_slot() {
        let config = GameConfig::new().with_player_types(vec![PlayerKind::Human]);
        assert!(matches!(config.validate(), Err(GoFishError::UnknownPlayerType(_))));
    }

    #[test]
    fn test_parse_kinds() {
        assert_eq!("random".parse::<PlayerKind>(), Ok(PlayerKind::Random));
        assert_eq!("Smart".parse::<PlayerKind>(), Ok(PlayerKind::Greedy));
        assert_eq!("GREEDY".parse::<PlayerKind>(), Ok(PlayerKind::Greedy));
        assert_eq!("memory".parse::<PlayerKind>(), Ok(PlayerKind::Memory));
        assert_eq!(
            "human".parse::<PlayerKind>(),
            Err(GoFishError::UnknownPlayerType("human".into()))
        );
    }

    #[test]
    fn test_parse_list() {
        let kinds = PlayerKind::parse_list("random, smart,memory").unwrap();
        assert_eq!(kinds, vec![PlayerKind::Random, PlayerKind::Greedy, PlayerKind::Memory]);

        assert_eq!(PlayerKind::parse_list(" , "), Err(GoFishError::NoPlayerTypes));
        assert_eq!(
            PlayerKind::parse_list("random,oracle"),
            Err(GoFishError::UnknownPlayerType("oracle".into()))
        );
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new().with_seed(9).with_player_types(PlayerKind::AI.to_vec());
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
