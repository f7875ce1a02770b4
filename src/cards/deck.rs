//! The draw pile.

use std::collections::VecDeque;

use super::card::{Card, Rank, Suit};
use crate::core::GameRng;

/// Ordered pile of cards. Draws come off the front, additions go on the back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// The standard 52-card deck, unshuffled.
    ///
    /// Suit-major, rank-minor: Hearts 2..A, then Diamonds, Clubs, Spades.
    /// The fixed order is what makes a seeded shuffle reproducible.
    #[must_use]
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
            .collect();
        Self { cards }
    }

    /// A deck over an explicit card list, front first.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Uniformly permute the deck in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(self.cards.make_contiguous());
    }

    /// Remove and return the front card, or `None` when the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Remove up to `count` cards from the front.
    ///
    /// Returns fewer than `count` when the deck runs out; never fails.
    pub fn draw_many(&mut self, count: usize) -> Vec<Card> {
        let take = count.min(self.cards.len());
        self.cards.drain(..take).collect()
    }

    /// Put a card on the back of the deck.
    pub fn add(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Put several cards on the back of the deck, in order.
    pub fn add_many(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
