//! # rust-boggle
//!
//! Boggle board generation and an exhaustive word solver.
//!
//! ## Design Principles
//!
//! 1. **Prefix Pruning**: The dictionary is indexed into a word set and a
//!    prefix set once. The search abandons a path as soon as the letters
//!    spelled so far begin no dictionary word.
//!
//! 2. **Lenient at the Edges**: `solve_board` never fails. Malformed grids
//!    (empty, ragged, non-square, non-alphabetic tiles) yield an empty
//!    word list. Typed errors are available through `Grid::from_rows` for
//!    callers that want the reason.
//!
//! 3. **Shareable, Deterministic**: A `DictionaryIndex` is read-only after
//!    construction and can serve concurrent solves. Boards come from a
//!    seeded ChaCha8 RNG, so a seed reproduces a board exactly.
//!
//! ## Example
//!
//! ```
//! use rust_boggle::{solve_board, DictionaryIndex};
//!
//! let index = DictionaryIndex::build(["bed", "ace", "ab"]);
//! let grid = vec![
//!     vec!["A", "B", "C"],
//!     vec!["D", "E", "F"],
//!     vec!["G", "H", "I"],
//! ];
//! assert_eq!(solve_board(&grid, &index), vec!["bed"]);
//! ```
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `board`: validated grids, adjacency, random generation
//! - `dictionary`: word/prefix index and word-list loading
//! - `solver`: prefix-pruned depth-first search
//! - `game`: scoring, guess tracking, built-in challenges

pub mod board;
pub mod core;
pub mod dictionary;
pub mod game;
pub mod solver;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, BoardRng, BoardRngState, BoggleError, Result, SolverConfig, MAX_BOARD_SIZE,
    MIN_BOARD_SIZE, MIN_WORD_LENGTH, QU_PROBABILITY, QU_TILE,
};

pub use crate::board::{
    flatten, generate_board, generate_board_seeded, unflatten, BoardGenerator, Grid, Position,
};

pub use crate::dictionary::{load_word_list_json, load_word_list_text, DictionaryIndex};

pub use crate::solver::{solve_board, solve_words, PathSearch, SearchStats};

pub use crate::game::{
    total_score, word_score, ChallengeLayout, Game, GameSession, GuessOutcome, ScoreBreakdown,
    CHALLENGES,
};
