//! The Go Fish turn engine.
//!
//! `GoFishGame` owns the deck, the players and the random stream for one
//! game and resolves turns:
//! - Ask: the current player's strategy picks an opponent, then a rank
//! - Hit: the opponent hands over every card of that rank; the asker goes again
//! - Go Fish: the asker draws; drawing the asked rank earns another turn,
//!   anything else passes the turn on
//! - Books are extracted right after every change to the asker's hand
//!
//! The game ends when every hand is empty at once.

use log::{debug, info};
use rustc_hash::FxHashSet;

use super::event::GameEvent;
use crate::cards::{Deck, BOOK_SIZE};
use crate::core::{GameRng, GoFishError};
use crate::players::Player;

/// Where the turn state machine stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for the player at this seat to act.
    AwaitingTurn(usize),
    /// Every hand is empty; no more turns.
    GameOver,
}

/// Summary of a finished game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameResult {
    /// Every player tied on the top score, in seat order.
    pub winners: Vec<String>,
    /// `(name, books)` in seat order.
    pub scores: Vec<(String, usize)>,
    /// Turns played.
    pub turns: u32,
}

impl GameResult {
    /// Check if a player won (ties count).
    #[must_use]
    pub fn is_winner(&self, name: &str) -> bool {
        self.winners.iter().any(|w| w == name)
    }

    /// The winning number of books.
    #[must_use]
    pub fn top_score(&self) -> usize {
        self.scores.iter().map(|&(_, s)| s).max().unwrap_or(0)
    }
}

/// One game of Go Fish.
pub struct GoFishGame {
    players: Vec<Player>,
    deck: Deck,
    rng: GameRng,
    initial_cards: usize,
    current: usize,
    turn_count: u32,
    game_over: bool,
    /// Print narration to stdout as events happen.
    verbose: bool,
    history: Vec<GameEvent>,
}

impl GoFishGame {
    /// Create a game over a fresh standard deck.
    ///
    /// Fails with fewer than two players or when two players share a name.
    pub fn new(players: Vec<Player>, initial_cards: usize, rng: GameRng) -> Result<Self, GoFishError> {
        if players.len() < 2 {
            return Err(GoFishError::TooFewPlayers(players.len()));
        }
        {
            let mut names = FxHashSet::default();
            if let Some(dup) = players.iter().find(|p| !names.insert(p.name())) {
                return Err(GoFishError::DuplicatePlayerName(dup.name().to_string()));
            }
        }

        Ok(Self {
            players,
            deck: Deck::standard(),
            rng,
            initial_cards,
            current: 0,
            turn_count: 0,
            game_over: false,
            verbose: false,
            history: Vec::new(),
        })
    }

    /// Toggle stdout narration.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Replace the draw pile, e.g. with a stacked deck.
    #[must_use]
    pub fn with_deck(mut self, deck: Deck) -> Self {
        self.deck = deck;
        self
    }

    // === Accessors ===

    /// Players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Mutable access to one seat, for arranging positions before play.
    pub fn player_mut(&mut self, seat: usize) -> Option<&mut Player> {
        self.players.get_mut(seat)
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn state(&self) -> TurnState {
        if self.game_over {
            TurnState::GameOver
        } else {
            TurnState::AwaitingTurn(self.current)
        }
    }

    /// Every event so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[GameEvent] {
        &self.history
    }

    /// Cards in hands plus deck plus cards locked in books.
    ///
    /// Stays equal to the starting deck size for the whole game.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        let held: usize = self.players.iter().map(|p| p.hand().len()).sum();
        let booked: usize = self.players.iter().map(|p| p.score() * BOOK_SIZE).sum();
        held + self.deck.len() + booked
    }

    // === Game Flow ===

    /// Shuffle, deal `initial_cards` to each player in seat order, and score
    /// any books already in a dealt hand.
    pub fn setup(&mut self) {
        self.deck.shuffle(&mut self.rng);
        debug!("shuffled deck with seed {}", self.rng.seed());

        for seat in 0..self.players.len() {
            let cards = self.deck.draw_many(self.initial_cards);
            let player = &mut self.players[seat];
            player.add_cards(cards);

            let ranks = player.check_for_books();
            if !ranks.is_empty() {
                let player = player.name().to_string();
                self.emit(GameEvent::InitialBooks { player, ranks });
            }
        }
    }

    /// Play one turn. Returns whether the game continues.
    pub fn play_turn(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        self.turn_count += 1;
        let seat = self.current;
        let name = self.players[seat].name().to_string();
        self.emit(GameEvent::TurnStarted { turn: self.turn_count, player: name.clone() });

        if !self.players[seat].has_cards() {
            match self.deck.draw() {
                None => {
                    self.emit(GameEvent::SkippedEmptyHanded { player: name });
                    self.advance_turn();
                    return self.check_game_over();
                }
                Some(card) => {
                    self.players[seat].add_card(card);
                    self.emit(GameEvent::RefilledEmptyHand { player: name.clone(), card });
                    self.score_books(seat);
                }
            }
        }

        let opponents: Vec<String> = self
            .players
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != seat)
            .map(|(_, p)| p.name().to_string())
            .collect();
        if opponents.is_empty() {
            self.game_over = true;
            return false;
        }

        let target = self.players[seat]
            .choose_player_to_ask(&opponents, &mut self.rng)
            .and_then(|chosen| self.seat_of(chosen));
        let rank = self.players[seat].choose_rank_to_ask_for(&mut self.rng);

        let (Some(target), Some(rank)) = (target, rank) else {
            self.emit(GameEvent::NothingToAsk { player: name });
            self.advance_turn();
            return self.check_game_over();
        };

        let target_name = self.players[target].name().to_string();
        self.emit(GameEvent::Asked { player: name.clone(), target: target_name.clone(), rank });

        if self.players[target].hand().has_rank(rank) {
            let cards = self.players[target].surrender_rank(rank);
            self.emit(GameEvent::Hit { target: target_name.clone(), rank, count: cards.len() });

            let asker = &mut self.players[seat];
            asker.update_knowledge(&target_name, rank, true);
            asker.add_cards(cards);
            self.score_books(seat);

            // Same player goes again.
            return self.check_game_over();
        }

        self.emit(GameEvent::GoFish { target: target_name.clone() });
        self.players[seat].update_knowledge(&target_name, rank, false);

        match self.deck.draw() {
            Some(card) => {
                self.players[seat].add_card(card);
                self.emit(GameEvent::Drew { player: name.clone() });

                if card.rank == rank {
                    self.emit(GameEvent::DrewAskedRank { player: name, card });
                    self.score_books(seat);
                    return self.check_game_over();
                }
            }
            None => self.emit(GameEvent::DeckEmpty),
        }

        self.score_books(seat);
        self.advance_turn();
        self.check_game_over()
    }

    /// Pass the turn to the next seat.
    pub fn advance_turn(&mut self) {
        self.current = (self.current + 1) % self.players.len();
    }

    /// End the game once every hand is empty, regardless of the deck.
    ///
    /// Returns whether the game continues.
    pub fn check_game_over(&mut self) -> bool {
        if self.players.iter().all(|p| !p.has_cards()) {
            self.game_over = true;
            return false;
        }
        true
    }

    /// Players tied on the top score. Empty until the game is over.
    #[must_use]
    pub fn winners(&self) -> Vec<&Player> {
        if !self.game_over {
            return Vec::new();
        }
        let top = self.players.iter().map(Player::score).max().unwrap_or(0);
        self.players.iter().filter(|p| p.score() == top).collect()
    }

    /// Summary of the finished game, or `None` while it is still running.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.game_over {
            return None;
        }
        Some(GameResult {
            winners: self.winners().iter().map(|p| p.name().to_string()).collect(),
            scores: self.players.iter().map(|p| (p.name().to_string(), p.score())).collect(),
            turns: self.turn_count,
        })
    }

    /// Set up, play every turn, and return the winners.
    pub fn play_game(&mut self) -> Vec<&Player> {
        self.setup();
        while self.play_turn() {}

        if let Some(result) = self.result() {
            info!(
                "game over after {} turns; winners: {}",
                result.turns,
                result.winners.join(", ")
            );
            self.emit(GameEvent::GameOver {
                top_score: result.top_score(),
                scores: result.scores,
                winners: result.winners,
            });
        }

        self.winners()
    }

    // === Internals ===

    fn seat_of(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|p| p.name() == name)
    }

    fn score_books(&mut self, seat: usize) {
        for rank in self.players[seat].check_for_books() {
            let player = self.players[seat].name().to_string();
            self.emit(GameEvent::BookCompleted { player, rank });
        }
    }

    fn emit(&mut self, event: GameEvent) {
        debug!("{event:?}");
        if self.verbose {
            println!("{event}");
        }
        self.history.push(event);
    }
}
