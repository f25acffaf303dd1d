//! Error taxonomy for the typed APIs.
//!
//! The lenient entry points (`solve_board`, `solve_words`) never surface
//! these: a rejected grid simply produces no words. They exist so callers
//! that want to know *why* a grid was rejected can ask.

use thiserror::Error;

/// The error type for all fallible operations in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoggleError {
    /// The grid has no rows.
    #[error("grid is empty")]
    EmptyGrid,

    /// A row's length differs from the number of rows.
    #[error("grid is not square: row {row} has {found} cells, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell is empty or contains a non-alphabetic character.
    #[error("invalid tile {tile:?} at ({row}, {col})")]
    InvalidTile { row: usize, col: usize, tile: String },

    /// A board was requested outside the supported size range.
    #[error("board size {size} out of range {min}..={max}")]
    InvalidBoardSize { size: usize, min: usize, max: usize },

    /// A flattened grid does not hold `size * size` cells.
    #[error("grid data is incomplete: expected {expected} cells, found {found}")]
    IncompleteGrid { expected: usize, found: usize },

    /// A word list could not be parsed.
    #[error("invalid word list: {0}")]
    WordList(String),

    /// A cached dictionary index could not be encoded.
    #[error("failed to encode dictionary index: {0}")]
    IndexEncode(String),

    /// A cached dictionary index could not be decoded.
    #[error("failed to decode dictionary index: {0}")]
    IndexDecode(String),
}

/// Convenience `Result` alias using [`BoggleError`].
pub type Result<T> = std::result::Result<T, BoggleError>;
