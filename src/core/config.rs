//! Board and solver configuration.
//!
//! Both configs start from the classic rules (`Default`) and are adjusted
//! with `with_*` builder methods:
//! - `BoardConfig`: grid size and the special "Qu" tile
//! - `SolverConfig`: minimum reportable word length

use serde::{Deserialize, Serialize};

use super::error::{BoggleError, Result};

/// Smallest board the generator produces and the solver accepts.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest board the generator produces.
///
/// The solver itself does not cap the size; callers solving hand-built
/// grids are responsible for keeping them tractable.
pub const MAX_BOARD_SIZE: usize = 10;

/// Words shorter than this are never reported.
pub const MIN_WORD_LENGTH: usize = 3;

/// The two-letter die face.
pub const QU_TILE: &str = "Qu";

/// Chance that a generated cell holds [`QU_TILE`] instead of a single letter.
pub const QU_PROBABILITY: f64 = 0.06;

/// Configuration for random board generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of rows (and columns).
    pub size: usize,

    /// Multi-letter tile occasionally placed instead of a single letter.
    pub special_tile: String,

    /// Probability in `0.0..=1.0` of placing `special_tile` in a cell.
    pub special_tile_probability: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: 4,
            special_tile: QU_TILE.to_string(),
            special_tile_probability: QU_PROBABILITY,
        }
    }
}

impl BoardConfig {
    /// Create a config for a board of the given size with classic tiles.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Set the board size.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the special tile and its probability.
    #[must_use]
    pub fn with_special_tile(mut self, tile: impl Into<String>, probability: f64) -> Self {
        self.special_tile = tile.into();
        self.special_tile_probability = probability.clamp(0.0, 1.0);
        self
    }

    /// Disable the special tile entirely.
    #[must_use]
    pub fn without_special_tile(mut self) -> Self {
        self.special_tile_probability = 0.0;
        self
    }

    /// Check the size against `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    pub fn validate(&self) -> Result<()> {
        if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.size) {
            Ok(())
        } else {
            Err(BoggleError::InvalidBoardSize {
                size: self.size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            })
        }
    }
}

/// Configuration for the path search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Minimum number of characters for a word to be reported.
    pub min_word_length: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            min_word_length: MIN_WORD_LENGTH,
        }
    }
}

impl SolverConfig {
    /// Set the minimum reported word length.
    #[must_use]
    pub fn with_min_word_length(mut self, len: usize) -> Self {
        self.min_word_length = len;
        self
    }
}
