//! Opponent-memory player.
//!
//! Remembers which ranks each opponent has asked for and targets the first
//! opponent remembered asking for the rank it wants. The engine does not
//! call `record_ask`, so in a normal game the memory stays empty and the
//! opponent choice is effectively random.

use super::strategy::{greedy_rank, remembered_or_random, PlayerView, RankMemory, Strategy};
use crate::cards::Rank;
use crate::core::{GameRng, PlayerKind};

#[derive(Clone, Debug, Default)]
pub struct MemoryStrategy {
    asked_ranks: RankMemory,
}

impl MemoryStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ranks `player` has been seen asking for.
    pub fn asked_by(&self, player: &str) -> impl Iterator<Item = Rank> + '_ {
        self.asked_ranks.get(player).into_iter().flatten().copied()
    }
}

impl Strategy for MemoryStrategy {
    fn kind(&self) -> PlayerKind {
        PlayerKind::Memory
    }

    fn choose_opponent<'o>(
        &mut self,
        view: &PlayerView<'_>,
        opponents: &'o [String],
        rng: &mut GameRng,
    ) -> Option<&'o str> {
        remembered_or_random(&self.asked_ranks, greedy_rank(view.hand), opponents, rng)
    }

    fn choose_rank(&mut self, view: &PlayerView<'_>, _rng: &mut GameRng) -> Option<Rank> {
        greedy_rank(view.hand)
    }

    fn record_ask(&mut self, asker: &str, rank: Rank) {
        self.asked_ranks.entry(asker.to_string()).or_default().insert(rank);
    }
}
