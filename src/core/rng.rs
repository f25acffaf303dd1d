//! Deterministic random number generation for board generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical boards
//! - **Forkable**: Derive independent streams, e.g. one per board in a batch
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use rust_boggle::core::BoardRng;
//!
//! let mut rng = BoardRng::new(42);
//! let mut batch_rng = rng.fork();
//!
//! let mut rng2 = BoardRng::new(42);
//! let mut batch_rng2 = rng2.fork();
//! assert_eq!(batch_rng.gen_index(26), batch_rng2.gen_index(26));
//! ```

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seeded RNG used by the board generator.
///
/// Uses ChaCha8 for speed while keeping sequences reproducible across
/// platforms.
#[derive(Clone, Debug)]
pub struct BoardRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl BoardRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().next_u64())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Generate a random boolean with given probability of true.
    ///
    /// The probability is clamped to `0.0..=1.0`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> BoardRngState {
        BoardRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &BoardRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}
