//! Win statistics across a batch of games.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Wins per player over a batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Games played.
    pub games: usize,
    /// `(name, wins)` for every seat, in roster order.
    pub win_counts: Vec<(String, usize)>,
}

impl BatchReport {
    /// An empty report for the given seats.
    pub fn new(names: &[String]) -> Self {
        Self {
            games: 0,
            win_counts: names.iter().map(|name| (name.clone(), 0)).collect(),
        }
    }

    /// Count one finished game. Every tied winner is credited.
    pub fn record(&mut self, winners: &[String]) {
        self.games += 1;
        for winner in winners {
            match self.win_counts.iter_mut().find(|(name, _)| name == winner) {
                Some((_, wins)) => *wins += 1,
                None => self.win_counts.push((winner.clone(), 1)),
            }
        }
    }

    /// Wins for `name`, zero for unknown players.
    #[must_use]
    pub fn wins(&self, name: &str) -> usize {
        self.win_counts
            .iter()
            .find(|(n, _)| n == name)
            .map_or(0, |&(_, wins)| wins)
    }

    /// Players with at least one win, most wins first.
    ///
    /// Equal counts keep roster order.
    #[must_use]
    pub fn sorted_wins(&self) -> Vec<(&str, usize)> {
        let mut sorted: Vec<(&str, usize)> = self
            .win_counts
            .iter()
            .filter(|&&(_, wins)| wins > 0)
            .map(|(name, wins)| (name.as_str(), *wins))
            .collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }

    /// Share of games won by `name`, as a percentage.
    #[must_use]
    pub fn win_percentage(&self, name: &str) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins(name) as f64 / self.games as f64 * 100.0
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n=== Final Statistics ===")?;
        writeln!(f, "Total games: {}", self.games)?;
        write!(f, "\nWin counts:")?;
        for (name, wins) in self.sorted_wins() {
            write!(f, "\n{name}: {wins} wins ({:.1}%)", self.win_percentage(name))?;
        }
        Ok(())
    }
}
