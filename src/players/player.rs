//! A seat at the table: name, hand, books, knowledge and strategy.

use std::fmt;

use rustc_hash::FxHashSet;

use super::greedy::GreedyStrategy;
use super::human::InteractiveStrategy;
use super::memory::MemoryStrategy;
use super::random::RandomStrategy;
use super::strategy::{PlayerView, RankMemory, Strategy};
use crate::cards::{Card, Hand, Rank};
use crate::core::{GameRng, PlayerKind};

/// One player for the duration of one game.
pub struct Player {
    name: String,
    hand: Hand,
    /// Ranks of completed books, in completion order.
    books: Vec<Rank>,
    /// Ranks each opponent is believed to hold, from ask outcomes.
    known_cards: RankMemory,
    strategy: Box<dyn Strategy>,
}

impl Player {
    pub fn new(name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            books: Vec::new(),
            known_cards: RankMemory::default(),
            strategy,
        }
    }

    /// Build a player of `kind`. Human players prompt on the terminal.
    pub fn with_kind(name: impl Into<String>, kind: PlayerKind) -> Self {
        let strategy: Box<dyn Strategy> = match kind {
            PlayerKind::Random => Box::new(RandomStrategy),
            PlayerKind::Greedy => Box::new(GreedyStrategy),
            PlayerKind::Memory => Box::new(MemoryStrategy::new()),
            PlayerKind::Human => Box::new(InteractiveStrategy::stdio()),
        };
        Self::new(name, strategy)
    }

    pub fn random(name: impl Into<String>) -> Self {
        Self::new(name, Box::new(RandomStrategy))
    }

    pub fn greedy(name: impl Into<String>) -> Self {
        Self::new(name, Box::new(GreedyStrategy))
    }

    pub fn memory(name: impl Into<String>) -> Self {
        Self::new(name, Box::new(MemoryStrategy::new()))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> PlayerKind {
        self.strategy.kind()
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Ranks of completed books, in completion order.
    #[must_use]
    pub fn books(&self) -> &[Rank] {
        &self.books
    }

    /// One point per completed book.
    #[must_use]
    pub fn score(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.hand.is_empty()
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.add(card);
    }

    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.add_many(cards);
    }

    /// Give up every card of `rank` (the losing side of a hit).
    pub fn surrender_rank(&mut self, rank: Rank) -> Vec<Card> {
        self.hand.remove_rank(rank)
    }

    /// Pull completed books out of the hand and score them.
    ///
    /// Returns the ranks completed by this call; empty when there are none.
    pub fn check_for_books(&mut self) -> Vec<Rank> {
        let found: Vec<Rank> = self.hand.extract_books().into_iter().map(|book| book.rank).collect();
        self.books.extend_from_slice(&found);
        found
    }

    /// Record whether `opponent` turned out to hold `rank`.
    pub fn update_knowledge(&mut self, opponent: &str, rank: Rank, has_card: bool) {
        let ranks = self.known_cards.entry(opponent.to_string()).or_default();
        if has_card {
            ranks.insert(rank);
        } else {
            ranks.remove(&rank);
        }
    }

    /// Ranks `opponent` is believed to hold.
    #[must_use]
    pub fn known_ranks(&self, opponent: &str) -> FxHashSet<Rank> {
        self.known_cards.get(opponent).cloned().unwrap_or_default()
    }

    pub fn choose_player_to_ask<'o>(
        &mut self,
        opponents: &'o [String],
        rng: &mut GameRng,
    ) -> Option<&'o str> {
        let view = PlayerView {
            name: &self.name,
            hand: &self.hand,
            known_cards: &self.known_cards,
        };
        self.strategy.choose_opponent(&view, opponents, rng)
    }

    pub fn choose_rank_to_ask_for(&mut self, rng: &mut GameRng) -> Option<Rank> {
        let view = PlayerView {
            name: &self.name,
            hand: &self.hand,
            known_cards: &self.known_cards,
        };
        self.strategy.choose_rank(&view, rng)
    }

    /// Let the strategy observe that `asker` asked for `rank`.
    pub fn record_ask(&mut self, asker: &str, rank: Rank) {
        self.strategy.record_ask(asker, rank);
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Books: {})", self.name, self.books.len())
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .field("hand", &self.hand)
            .field("books", &self.books)
            .finish()
    }
}
