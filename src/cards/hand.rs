//! A player's hand and the books pulled out of it.
//!
//! Rank listings (`distinct_ranks`, `rank_counts`, `by_rank`) come back in
//! order of first occurrence in the hand. Strategies rely on that order for
//! tie-breaking, so seeded games stay reproducible.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, Rank};

/// Number of same-rank cards that form a book.
pub const BOOK_SIZE: usize = 4;

/// Four cards of one rank, removed from a hand and scored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub rank: Rank,
    pub cards: SmallVec<[Card; BOOK_SIZE]>,
}

/// Unordered multiset of cards held by one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    /// Most hands stay under 16 cards; larger ones spill to the heap.
    cards: SmallVec<[Card; 16]>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn add_many(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Remove one card equal to `card`. Returns whether one was found.
    pub fn remove_card(&mut self, card: &Card) -> bool {
        match self.cards.iter().position(|c| c == card) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove and return every card of `rank`.
    pub fn remove_rank(&mut self, rank: Rank) -> Vec<Card> {
        let (removed, kept): (SmallVec<[Card; 16]>, SmallVec<[Card; 16]>) =
            self.cards.iter().copied().partition(|c| c.rank == rank);
        self.cards = kept;
        removed.into_vec()
    }

    #[must_use]
    pub fn has_rank(&self, rank: Rank) -> bool {
        self.cards.iter().any(|c| c.rank == rank)
    }

    /// Number of cards of `rank` held.
    #[must_use]
    pub fn count(&self, rank: Rank) -> usize {
        self.cards.iter().filter(|c| c.rank == rank).count()
    }

    /// Each rank held, once, in order of first occurrence.
    #[must_use]
    pub fn distinct_ranks(&self) -> Vec<Rank> {
        self.rank_counts().into_iter().map(|(rank, _)| rank).collect()
    }

    /// `(rank, copies held)` pairs built in one pass, in order of first occurrence.
    #[must_use]
    pub fn rank_counts(&self) -> Vec<(Rank, usize)> {
        let mut counts: Vec<(Rank, usize)> = Vec::with_capacity(Rank::ALL.len());
        for card in &self.cards {
            match counts.iter_mut().find(|(rank, _)| *rank == card.rank) {
                Some((_, n)) => *n += 1,
                None => counts.push((card.rank, 1)),
            }
        }
        counts
    }

    /// Cards grouped by rank, in order of first occurrence.
    #[must_use]
    pub fn by_rank(&self) -> Vec<(Rank, Vec<Card>)> {
        self.distinct_ranks()
            .into_iter()
            .map(|rank| {
                let cards = self.cards.iter().filter(|c| c.rank == rank).copied().collect();
                (rank, cards)
            })
            .collect()
    }

    /// Ranks currently held exactly [`BOOK_SIZE`] times.
    #[must_use]
    pub fn find_books(&self) -> Vec<Rank> {
        self.rank_counts()
            .into_iter()
            .filter(|&(_, n)| n == BOOK_SIZE)
            .map(|(rank, _)| rank)
            .collect()
    }

    /// Remove every complete book from the hand and return them.
    pub fn extract_books(&mut self) -> Vec<Book> {
        self.find_books()
            .into_iter()
            .map(|rank| Book {
                rank,
                cards: self.remove_rank(rank).into_iter().collect(),
            })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in insertion order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::Suit;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    fn four_kings_and_three() -> Hand {
        let mut hand = Hand::new();
        hand.add(card(Rank::Three, Suit::Clubs));
        hand.add_many(Suit::ALL.map(|s| card(Rank::King, s)));
        hand.add(card(Rank::Nine, Suit::Hearts));
        hand.add(card(Rank::Three, Suit::Spades));
        hand
    }

    #[test]
    fn test_add_and_len() {
        let mut hand = Hand::new();
        assert!(hand.is_empty());
        hand.add(card(Rank::Two, Suit::Hearts));
        hand.add_many([card(Rank::Two, Suit::Clubs), card(Rank::Jack, Suit::Clubs)]);
        assert_eq!(hand.len(), 3);
    }

    #[test]
    fn test_remove_card() {
        let mut hand = Hand::new();
        hand.add(card(Rank::Ace, Suit::Spades));

        assert!(!hand.remove_card(&card(Rank::Ace, Suit::Hearts)));
        assert!(hand.remove_card(&card(Rank::Ace, Suit::Spades)));
        assert!(hand.is_empty());
        assert!(!hand.remove_card(&card(Rank::Ace, Suit::Spades)));
    }

    #[test]
    fn test_remove_rank() {
        let mut hand = four_kings_and_three();
        let threes = hand.remove_rank(Rank::Three);

        assert_eq!(threes, vec![card(Rank::Three, Suit::Clubs), card(Rank::Three, Suit::Spades)]);
        assert!(!hand.has_rank(Rank::Three));
        assert_eq!(hand.len(), 5);
        assert!(hand.remove_rank(Rank::Two).is_empty());
    }

    #[test]
    fn test_remove_rank_from_large_hand() {
        // More cards than the inline capacity, order of the rest preserved.
        let mut hand = Hand::new();
        for suit in [Suit::Hearts, Suit::Clubs] {
            hand.add_many(Rank::ALL.map(|r| card(r, suit)));
        }
        assert_eq!(hand.len(), 26);

        let sevens = hand.remove_rank(Rank::Seven);
        assert_eq!(sevens, vec![card(Rank::Seven, Suit::Hearts), card(Rank::Seven, Suit::Clubs)]);
        assert_eq!(hand.len(), 24);
        assert_eq!(hand.cards()[5], card(Rank::Eight, Suit::Hearts));
        assert_eq!(hand.cards()[12], card(Rank::Two, Suit::Clubs));
    }

    #[test]
    fn test_rank_queries() {
        let hand = four_kings_and_three();

        assert!(hand.has_rank(Rank::King));
        assert!(!hand.has_rank(Rank::Queen));
        assert_eq!(hand.count(Rank::Three), 2);
        assert_eq!(hand.distinct_ranks(), vec![Rank::Three, Rank::King, Rank::Nine]);
        assert_eq!(
            hand.rank_counts(),
            vec![(Rank::Three, 2), (Rank::King, 4), (Rank::Nine, 1)]
        );
    }

    #[test]
    fn test_by_rank_groups() {
        let hand = four_kings_and_three();
        let groups = hand.by_rank();

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].0, Rank::Three);
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].1.len(), 4);
    }

    #[test]
    fn test_find_and_extract_books() {
        let mut hand = four_kings_and_three();
        assert_eq!(hand.find_books(), vec![Rank::King]);

        let books = hand.extract_books();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].rank, Rank::King);
        assert_eq!(books[0].cards.len(), BOOK_SIZE);

        assert_eq!(hand.len(), 3);
        assert!(!hand.has_rank(Rank::King));
        assert!(hand.find_books().is_empty());
    }

    #[test]
    fn test_three_of_a_kind_is_not_a_book() {
        let mut hand = Hand::new();
        hand.add_many([Suit::Hearts, Suit::Clubs, Suit::Spades].map(|s| card(Rank::Four, s)));

        assert!(hand.find_books().is_empty());
        assert!(hand.extract_books().is_empty());
        assert_eq!(hand.len(), 3);
    }

    #[test]
    fn test_extract_two_books() {
        let mut hand = Hand::new();
        hand.add_many(Suit::ALL.map(|s| card(Rank::Two, s)));
        hand.add_many(Suit::ALL.map(|s| card(Rank::Ace, s)));

        let books = hand.extract_books();
        let ranks: Vec<Rank> = books.iter().map(|b| b.rank).collect();
        assert_eq!(ranks, vec![Rank::Two, Rank::Ace]);
        assert!(hand.is_empty());
    }
}
