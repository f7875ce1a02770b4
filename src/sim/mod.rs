//! Batch simulation.
//!
//! A `Simulation` plays `game_count` independent games from one
//! `GameConfig`. Each game gets a fresh table of players (no knowledge
//! carries over) and its own forked random stream, so a seeded batch is
//! reproducible game by game.

mod report;

pub use report::BatchReport;

use log::info;

use crate::core::{GameConfig, GameRng, GoFishError, PlayerKind};
use crate::players::Player;
use crate::rules::GoFishGame;

/// Seat names and kinds for one game, in seat order.
///
/// A human, when requested, takes the first seat as `"Human"`. The AI seats
/// cycle through `config.player_types` and are named `"<Kind>-<i>"` with a
/// 1-based slot index.
pub fn roster(config: &GameConfig) -> Result<Vec<(String, PlayerKind)>, GoFishError> {
    config.validate()?;

    let mut seats = Vec::with_capacity(config.player_count);
    if config.include_human {
        seats.push(("Human".to_string(), PlayerKind::Human));
    }
    for (i, &kind) in config.player_types.iter().cycle().take(config.ai_count()).enumerate() {
        seats.push((format!("{kind}-{}", i + 1), kind));
    }
    Ok(seats)
}

/// Runs a batch of games and tallies the winners.
pub struct Simulation {
    config: GameConfig,
    rng: GameRng,
}

impl Simulation {
    /// Validate `config` and seed the master random stream.
    pub fn new(config: GameConfig) -> Result<Self, GoFishError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!("simulation seed: {}", rng.seed());
        Ok(Self { config, rng })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed of the master stream, for replaying this batch.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Play every game in the batch.
    pub fn run(&mut self) -> Result<BatchReport, GoFishError> {
        let seats = roster(&self.config)?;
        let names: Vec<String> = seats.iter().map(|(name, _)| name.clone()).collect();
        let mut report = BatchReport::new(&names);
        let games = self.config.game_count;

        for game_number in 1..=games {
            if self.config.verbose && games > 1 {
                println!("\n=== Game {game_number} of {games} ===\n");
            }

            let players = seats
                .iter()
                .map(|(name, kind)| Player::with_kind(name.as_str(), *kind))
                .collect();
            let mut game = GoFishGame::new(players, self.config.initial_cards, self.rng.fork())?
                .with_verbose(self.config.verbose);

            let winners: Vec<String> =
                game.play_game().iter().map(|p| p.name().to_string()).collect();
            info!("game {game_number}/{games}: {} turns", game.turn_count());
            report.record(&winners);
        }

        Ok(report)
    }
}
