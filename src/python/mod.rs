//! Python bindings for the rust-boggle solver.
//!
//! # Quick Start
//!
//! ```python
//! import rust_boggle as boggle
//!
//! dictionary = boggle.Dictionary(["art", "rat", "tar"])
//! grid = boggle.generate_board(4, seed=42)
//! words = boggle.solve_board(grid, dictionary)
//! points = boggle.total_score(words)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// rust-boggle: board generation and exhaustive word search.
#[pymodule]
fn rust_boggle(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDictionary>()?;
    m.add_class::<PyGame>()?;

    m.add_function(wrap_pyfunction!(py_core::solve_board, m)?)?;
    m.add_function(wrap_pyfunction!(py_core::solve_words, m)?)?;
    m.add_function(wrap_pyfunction!(py_core::generate_board, m)?)?;
    m.add_function(wrap_pyfunction!(py_games::word_score, m)?)?;
    m.add_function(wrap_pyfunction!(py_games::total_score, m)?)?;

    Ok(())
}
