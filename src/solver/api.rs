//! Lenient entry points for callers holding raw rows.
//!
//! Malformed grids (empty, ragged, non-square, non-alphabetic tiles)
//! are not errors here: they produce an empty word list. Callers
//! that need the reason should validate with [`Grid::from_rows`] first.

use tracing::debug;

use crate::board::Grid;
use crate::dictionary::DictionaryIndex;

use super::search::PathSearch;

/// Solve a board against a prebuilt index.
///
/// Returns every word of three or more letters that can be traced through
/// adjacent, distinct cells, lowercased and sorted. Invalid grids yield an
/// empty vector.
pub fn solve_board<S: AsRef<str>>(rows: &[Vec<S>], index: &DictionaryIndex) -> Vec<String> {
    match Grid::from_rows(rows) {
        Ok(grid) => PathSearch::new(index).solve(&grid),
        Err(err) => {
            debug!(%err, "rejected grid, returning no words");
            Vec::new()
        }
    }
}

/// Solve a board against a raw word list.
///
/// Builds a throwaway [`DictionaryIndex`]; prefer [`solve_board`] when the
/// same dictionary serves many boards.
pub fn solve_words<S, I, W>(rows: &[Vec<S>], words: I) -> Vec<String>
where
    S: AsRef<str>,
    I: IntoIterator<Item = W>,
    W: AsRef<str>,
{
    match Grid::from_rows(rows) {
        Ok(grid) => PathSearch::new(&DictionaryIndex::build(words)).solve(&grid),
        Err(err) => {
            debug!(%err, "rejected grid, returning no words");
            Vec::new()
        }
    }
}
