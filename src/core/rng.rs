//! Deterministic random number generation shared by the deck and the players.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Explicit**: Every shuffle and every strategy decision draws from the
//!   handle it is given, so call order fully determines a seeded game
//! - **Forkable**: A batch runner derives one independent stream per game
//!
//! ```
//! use gofish::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut game_rng = rng.fork();
//!
//! // Forks are deterministic: same seed, same fork counter, same stream.
//! let mut again = GameRng::new(42).fork();
//! assert_eq!(game_rng.gen_range_usize(0..1000), again.gen_range_usize(0..1000));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG threaded through a game.
///
/// ChaCha8 underneath. The seed is kept so any run can be replayed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// The chosen seed stays readable through [`GameRng::seed`] so an
    /// unseeded run can still be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive the stream for the next game of a batch.
    ///
    /// The n-th fork of a given seed is always the same stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Uniform index in `range`.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Uniform in-place permutation, e.g. of the draw pile.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Uniform pick from `slice`; `None` when it is empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}
