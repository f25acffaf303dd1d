//! Random board generation.
//!
//! Every cell is an independent draw: with probability
//! `special_tile_probability` it gets the special tile (classically "Qu"),
//! otherwise a letter chosen uniformly from `A..=Z`. There are no per-letter
//! frequency tables.

use tracing::trace;

use crate::core::{BoardConfig, BoardRng, Result};

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Produces random boards from a [`BoardConfig`].
#[derive(Clone, Debug)]
pub struct BoardGenerator {
    config: BoardConfig,
}

impl BoardGenerator {
    /// Create a generator, rejecting sizes outside
    /// `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    pub fn new(config: BoardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Generator for a classic board of the given size.
    pub fn with_size(size: usize) -> Result<Self> {
        Self::new(BoardConfig::new(size))
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Generate one board as display rows (uppercase letters, "Qu" tiles).
    pub fn generate(&self, rng: &mut BoardRng) -> Vec<Vec<String>> {
        let size = self.config.size;
        let rows: Vec<Vec<String>> = (0..size)
            .map(|_| (0..size).map(|_| self.draw_tile(rng)).collect())
            .collect();
        trace!(size, seed = rng.seed(), ?rows, "generated board");
        rows
    }

    fn draw_tile(&self, rng: &mut BoardRng) -> String {
        if rng.gen_bool(self.config.special_tile_probability) {
            self.config.special_tile.clone()
        } else {
            char::from(ALPHABET[rng.gen_index(ALPHABET.len())]).to_string()
        }
    }
}

/// Generate a classic board seeded from OS entropy.
pub fn generate_board(size: usize) -> Result<Vec<Vec<String>>> {
    let generator = BoardGenerator::with_size(size)?;
    Ok(generator.generate(&mut BoardRng::from_entropy()))
}

/// Generate a classic board deterministically from a seed.
pub fn generate_board_seeded(size: usize, seed: u64) -> Result<Vec<Vec<String>>> {
    let generator = BoardGenerator::with_size(size)?;
    Ok(generator.generate(&mut BoardRng::new(seed)))
}
