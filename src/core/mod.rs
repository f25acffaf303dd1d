//! Shared building blocks: RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{
    BoardConfig, SolverConfig, MAX_BOARD_SIZE, MIN_BOARD_SIZE, MIN_WORD_LENGTH, QU_PROBABILITY,
    QU_TILE,
};
pub use error::{BoggleError, Result};
pub use rng::{BoardRng, BoardRngState};
