//! Full-game behaviour of the turn engine.
//!
//! These tests drive complete games through the public API and check the
//! invariants that must hold at every turn, for any table size and any mix
//! of strategies.

use gofish::cards::BOOK_SIZE;
use gofish::core::GameRng;
use gofish::players::Player;
use gofish::rules::{GameEvent, GoFishGame, TurnState};

fn mixed_table() -> Vec<Player> {
    vec![
        Player::random("Random-1"),
        Player::random("Random-2"),
        Player::greedy("Greedy-3"),
        Player::memory("Memory-4"),
    ]
}

fn table_of(count: usize) -> Vec<Player> {
    (0..count)
        .map(|i| match i % 3 {
            0 => Player::random(format!("Random-{}", i + 1)),
            1 => Player::greedy(format!("Greedy-{}", i + 1)),
            _ => Player::memory(format!("Memory-{}", i + 1)),
        })
        .collect()
}

/// Seeded four-player game: cards are conserved at every turn.
#[test]
fn test_conservation_every_turn() {
    let mut game = GoFishGame::new(mixed_table(), 7, GameRng::new(42)).unwrap();
    game.setup();
    assert_eq!(game.cards_in_play(), 52);

    let mut turns = 0;
    while game.play_turn() {
        assert_eq!(game.cards_in_play(), 52);
        turns += 1;
        assert!(turns < 10_000, "game did not terminate");
    }
    assert_eq!(game.cards_in_play(), 52);
    assert_eq!(game.state(), TurnState::GameOver);
}

/// Winners are exactly the non-empty set of max-score players.
#[test]
fn test_winners_are_top_scorers() {
    let mut game = GoFishGame::new(mixed_table(), 7, GameRng::new(42)).unwrap();
    let winners: Vec<String> = game.play_game().iter().map(|p| p.name().to_string()).collect();
    assert!(!winners.is_empty());

    let top = game.players().iter().map(Player::score).max().unwrap();
    let expected: Vec<String> = game
        .players()
        .iter()
        .filter(|p| p.score() == top)
        .map(|p| p.name().to_string())
        .collect();
    assert_eq!(winners, expected);

    let result = game.result().unwrap();
    assert_eq!(result.top_score(), top);
    assert!(winners.iter().all(|w| result.is_winner(w)));
}

/// Every player count from 2 to 6 plays to completion.
#[test]
fn test_terminates_for_all_table_sizes() {
    for count in 2..=6 {
        for seed in 0..5 {
            let mut game = GoFishGame::new(table_of(count), 7, GameRng::new(seed)).unwrap();
            game.play_game();

            assert!(game.is_over(), "{count} players, seed {seed}");
            assert!(game.players().iter().all(|p| p.hand().is_empty()));
            let books: usize = game.players().iter().map(Player::score).sum();
            assert_eq!(books * BOOK_SIZE + game.deck_len(), 52);
        }
    }
}

/// Single-strategy tables terminate too.
#[test]
fn test_terminates_for_uniform_tables() {
    let builders: [fn(String) -> Player; 3] = [
        |name| Player::random(name),
        |name| Player::greedy(name),
        |name| Player::memory(name),
    ];
    for build in builders {
        let players = (1..=4).map(|i| build(format!("P{i}"))).collect();
        let mut game = GoFishGame::new(players, 5, GameRng::new(11)).unwrap();
        assert!(!game.play_game().is_empty());
        assert_eq!(game.cards_in_play(), 52);
    }
}

/// Same seed, same game.
#[test]
fn test_seeded_games_replay() {
    let mut first = GoFishGame::new(mixed_table(), 7, GameRng::new(99)).unwrap();
    let mut second = GoFishGame::new(mixed_table(), 7, GameRng::new(99)).unwrap();
    first.play_game();
    second.play_game();

    assert_eq!(first.history(), second.history());
    assert_eq!(first.result(), second.result());
}

/// A deal larger than the deck gives out what there is.
#[test]
fn test_oversized_deal() {
    let mut game = GoFishGame::new(table_of(3), 20, GameRng::new(8)).unwrap();
    game.setup();

    let held: Vec<usize> = game
        .players()
        .iter()
        .map(|p| p.hand().len() + p.score() * BOOK_SIZE)
        .collect();
    assert_eq!(held, vec![20, 20, 12]);
    assert_eq!(game.deck_len(), 0);

    while game.play_turn() {}
    assert!(game.is_over());
    assert_eq!(game.cards_in_play(), 52);
}

/// The history tells the story turn by turn and ends with the summary.
#[test]
fn test_history_shape() {
    let mut game = GoFishGame::new(mixed_table(), 7, GameRng::new(5)).unwrap();
    game.play_game();

    let history = game.history();
    let turn_starts = history
        .iter()
        .filter(|e| matches!(e, GameEvent::TurnStarted { .. }))
        .count();
    assert_eq!(turn_starts as u32, game.turn_count());

    let booked = history
        .iter()
        .filter(|e| matches!(e, GameEvent::BookCompleted { .. }))
        .count();
    let initial: usize = history
        .iter()
        .map(|e| match e {
            GameEvent::InitialBooks { ranks, .. } => ranks.len(),
            _ => 0,
        })
        .sum();
    let total: usize = game.players().iter().map(Player::score).sum();
    assert_eq!(booked + initial, total);

    match history.last() {
        Some(GameEvent::GameOver { scores, winners, .. }) => {
            assert_eq!(scores.len(), 4);
            assert!(!winners.is_empty());
        }
        other => panic!("expected game over, got {other:?}"),
    }
}
