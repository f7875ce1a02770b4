//! Human player driven through a text prompt.
//!
//! Invalid answers are re-prompted with a corrective message and never
//! escape this module. If the input stream closes, the player takes the
//! first listed option so the game can still run to completion.

use std::io::{self, BufRead, Write};

use log::warn;

use super::strategy::{PlayerView, Strategy};
use crate::cards::{Hand, Rank};
use crate::core::{GameRng, PlayerKind};

/// Reads answers from `input` and writes prompts to `output`.
pub struct InteractiveStrategy<R, W> {
    input: R,
    output: W,
}

impl InteractiveStrategy<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the process terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> InteractiveStrategy<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, e.g. to inspect what was shown.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one line. `Ok(None)` on end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_rank(&mut self, hand: &Hand) -> io::Result<Option<Rank>> {
        writeln!(self.output, "\nYour hand:")?;
        for (rank, cards) in hand.by_rank() {
            let listed: Vec<String> = cards.iter().map(|c| c.to_string()).collect();
            writeln!(self.output, "{rank}: {}", listed.join(", "))?;
        }

        loop {
            let Some(answer) = self.ask("\nWhich rank would you like to ask for? ")? else {
                return Ok(None);
            };
            match answer.parse::<Rank>() {
                Ok(rank) if hand.has_rank(rank) => return Ok(Some(rank)),
                _ => writeln!(self.output, "You must ask for a rank that you have in your hand.")?,
            }
        }
    }

    fn prompt_opponent(&mut self, opponents: &[String]) -> io::Result<Option<usize>> {
        writeln!(self.output, "\nOther players:")?;
        for (i, name) in opponents.iter().enumerate() {
            writeln!(self.output, "{}. {name}", i + 1)?;
        }

        loop {
            let Some(answer) = self.ask("\nWhich player would you like to ask? (enter number) ")?
            else {
                return Ok(None);
            };
            match answer.parse::<usize>() {
                Ok(choice) if (1..=opponents.len()).contains(&choice) => {
                    return Ok(Some(choice - 1))
                }
                Ok(_) => writeln!(
                    self.output,
                    "Please enter a number between 1 and {}.",
                    opponents.len()
                )?,
                Err(_) => writeln!(self.output, "Please enter a valid number.")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Strategy for InteractiveStrategy<R, W> {
    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }

    fn choose_opponent<'o>(
        &mut self,
        view: &PlayerView<'_>,
        opponents: &'o [String],
        _rng: &mut GameRng,
    ) -> Option<&'o str> {
        if opponents.is_empty() {
            return None;
        }
        let index = match self.prompt_opponent(opponents) {
            Ok(Some(index)) => index,
            Ok(None) | Err(_) => {
                warn!("{}: input closed, asking the first listed player", view.name);
                0
            }
        };
        opponents.get(index).map(String::as_str)
    }

    fn choose_rank(&mut self, view: &PlayerView<'_>, _rng: &mut GameRng) -> Option<Rank> {
        if view.hand.is_empty() {
            return None;
        }
        match self.prompt_rank(view.hand) {
            Ok(Some(rank)) => Some(rank),
            Ok(None) | Err(_) => {
                warn!("{}: input closed, asking for the first held rank", view.name);
                view.hand.distinct_ranks().first().copied()
            }
        }
    }
}
