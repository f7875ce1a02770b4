//! Frequency-greedy player (the "smart" player of earlier versions).

use super::strategy::{greedy_rank, remembered_or_random, PlayerView, Strategy};
use crate::cards::Rank;
use crate::core::{GameRng, PlayerKind};

/// Asks for its most-held rank, preferring an opponent it has seen hand
/// that rank over.
///
/// Opponent knowledge lives on the `Player` and is filled by every ask
/// outcome, so this strategy itself is stateless.
#[derive(Clone, Debug, Default)]
pub struct GreedyStrategy;

impl Strategy for GreedyStrategy {
    fn kind(&self) -> PlayerKind {
        PlayerKind::Greedy
    }

    fn choose_opponent<'o>(
        &mut self,
        view: &PlayerView<'_>,
        opponents: &'o [String],
        rng: &mut GameRng,
    ) -> Option<&'o str> {
        remembered_or_random(view.known_cards, greedy_rank(view.hand), opponents, rng)
    }

    fn choose_rank(&mut self, view: &PlayerView<'_>, _rng: &mut GameRng) -> Option<Rank> {
        greedy_rank(view.hand)
    }
}
