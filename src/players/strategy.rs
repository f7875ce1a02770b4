//! The decision interface every player kind implements.
//!
//! Strategies are trait objects so a table can mix kinds freely. Every
//! random decision goes through the `GameRng` passed in, never through
//! ambient randomness.
//!
//! The engine always asks for the opponent first and the rank second; the
//! order matters for seeded reproducibility.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::cards::{Hand, Rank};
use crate::core::{GameRng, PlayerKind};

/// Per-opponent sets of ranks, keyed by opponent name.
pub type RankMemory = FxHashMap<String, FxHashSet<Rank>>;

/// Read-only view of the deciding player.
#[derive(Clone, Copy, Debug)]
pub struct PlayerView<'a> {
    /// The deciding player's name.
    pub name: &'a str,
    /// The deciding player's own hand.
    pub hand: &'a Hand,
    /// Ranks this player believes each opponent holds.
    pub known_cards: &'a RankMemory,
}

impl PlayerView<'_> {
    /// Whether this player has a positive record of `opponent` holding `rank`.
    #[must_use]
    pub fn knows_holds(&self, opponent: &str, rank: Rank) -> bool {
        remembers(self.known_cards, opponent, rank)
    }
}

/// Player decision-maker.
pub trait Strategy {
    /// Which family this strategy belongs to.
    fn kind(&self) -> PlayerKind;

    /// Pick the opponent to ask. `None` only when `opponents` is empty.
    fn choose_opponent<'o>(
        &mut self,
        view: &PlayerView<'_>,
        opponents: &'o [String],
        rng: &mut GameRng,
    ) -> Option<&'o str>;

    /// Pick a rank from the player's own hand. `None` only when the hand is empty.
    fn choose_rank(&mut self, view: &PlayerView<'_>, rng: &mut GameRng) -> Option<Rank>;

    /// Observe that `asker` asked someone for `rank`.
    fn record_ask(&mut self, _asker: &str, _rank: Rank) {}
}

/// Whether `memory` records `rank` against `name`.
pub(crate) fn remembers(memory: &RankMemory, name: &str, rank: Rank) -> bool {
    memory.get(name).is_some_and(|ranks| ranks.contains(&rank))
}

/// Uniform random pick among opponents.
pub(crate) fn random_opponent<'o>(opponents: &'o [String], rng: &mut GameRng) -> Option<&'o str> {
    rng.choose(opponents).map(String::as_str)
}

/// The rank held most often. Ties go to the rank seen first in the hand.
#[must_use]
pub fn greedy_rank(hand: &Hand) -> Option<Rank> {
    hand.rank_counts()
        .into_iter()
        .fold(None, |best: Option<(Rank, usize)>, (rank, n)| match best {
            Some((_, top)) if top >= n => best,
            _ => Some((rank, n)),
        })
        .map(|(rank, _)| rank)
}

/// First opponent, in the order given, that `memory` ties to `rank`;
/// otherwise a uniform random opponent.
pub(crate) fn remembered_or_random<'o>(
    memory: &RankMemory,
    rank: Option<Rank>,
    opponents: &'o [String],
    rng: &mut GameRng,
) -> Option<&'o str> {
    let remembered = rank.and_then(|rank| {
        opponents
            .iter()
            .find(|name| remembers(memory, name, rank))
            .map(String::as_str)
    });
    remembered.or_else(|| random_opponent(opponents, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Suit};

    fn hand_of(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new();
        for (i, &rank) in ranks.iter().enumerate() {
            hand.add(Card::new(rank, Suit::ALL[i % 4]));
        }
        hand
    }

    #[test]
    fn test_greedy_rank_prefers_most_held() {
        let hand = hand_of(&[Rank::Two, Rank::Nine, Rank::Nine, Rank::Jack]);
        assert_eq!(greedy_rank(&hand), Some(Rank::Nine));
    }

    #[test]
    fn test_greedy_rank_ties_go_to_first_seen() {
        let hand = hand_of(&[Rank::Queen, Rank::Five, Rank::Five, Rank::Queen]);
        assert_eq!(greedy_rank(&hand), Some(Rank::Queen));

        let hand = hand_of(&[Rank::Eight, Rank::Three]);
        assert_eq!(greedy_rank(&hand), Some(Rank::Eight));
    }

    #[test]
    fn test_greedy_rank_empty_hand() {
        assert_eq!(greedy_rank(&Hand::new()), None);
    }

    #[test]
    fn test_remembered_or_random_uses_memory_in_order() {
        let mut memory = RankMemory::default();
        memory.entry("Carol".into()).or_default().insert(Rank::Seven);
        memory.entry("Bob".into()).or_default().insert(Rank::Seven);
        let opponents = vec!["Alice".to_string(), "Bob".to_string(), "Carol".to_string()];

        let mut rng = GameRng::new(1);
        let picked = remembered_or_random(&memory, Some(Rank::Seven), &opponents, &mut rng);
        assert_eq!(picked, Some("Bob"));
    }

    #[test]
    fn test_remembered_or_random_falls_back() {
        let memory = RankMemory::default();
        let opponents = vec!["Alice".to_string(), "Bob".to_string()];
        let mut rng = GameRng::new(1);

        let picked = remembered_or_random(&memory, Some(Rank::Ace), &opponents, &mut rng);
        assert!(picked.is_some_and(|name| opponents.iter().any(|o| o == name)));

        assert_eq!(remembered_or_random(&memory, None, &[], &mut rng), None);
    }
}
