//! Uniform random player.

use super::strategy::{random_opponent, PlayerView, Strategy};
use crate::cards::Rank;
use crate::core::{GameRng, PlayerKind};

/// Picks a uniformly random held rank and a uniformly random opponent.
#[derive(Clone, Debug, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn kind(&self) -> PlayerKind {
        PlayerKind::Random
    }

    fn choose_opponent<'o>(
        &mut self,
        _view: &PlayerView<'_>,
        opponents: &'o [String],
        rng: &mut GameRng,
    ) -> Option<&'o str> {
        random_opponent(opponents, rng)
    }

    fn choose_rank(&mut self, view: &PlayerView<'_>, rng: &mut GameRng) -> Option<Rank> {
        rng.choose(&view.hand.distinct_ranks()).copied()
    }
}
