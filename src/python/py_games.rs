//! Game and scoring bindings for Python.

use pyo3::prelude::*;

use crate::core::BoardRng;
use crate::game::{self, Game};

use super::py_core::{to_py_err, PyDictionary};

/// Python wrapper for a solved Game.
#[pyclass(name = "Game")]
#[derive(Clone)]
pub struct PyGame(pub Game);

#[pymethods]
impl PyGame {
    /// Generate and solve a random board.
    #[staticmethod]
    #[pyo3(signature = (size, dictionary, seed = None))]
    fn create(size: usize, dictionary: &PyDictionary, seed: Option<u64>) -> PyResult<Self> {
        let mut rng = seed.map_or_else(BoardRng::from_entropy, BoardRng::new);
        Game::create(size, &dictionary.0, &mut rng)
            .map(Self)
            .map_err(to_py_err)
    }

    /// Solve a predefined layout.
    #[staticmethod]
    fn from_rows(
        name: String,
        grid: Vec<Vec<String>>,
        dictionary: &PyDictionary,
    ) -> PyResult<Self> {
        Game::from_rows(name, grid, &dictionary.0)
            .map(Self)
            .map_err(to_py_err)
    }

    #[getter]
    fn name(&self) -> String {
        self.0.name.clone()
    }

    #[getter]
    fn size(&self) -> usize {
        self.0.size
    }

    #[getter]
    fn grid(&self) -> Vec<Vec<String>> {
        self.0.grid.clone()
    }

    #[getter]
    fn solutions(&self) -> Vec<String> {
        self.0.solutions.clone()
    }

    fn max_score(&self) -> u32 {
        self.0.max_score()
    }

    /// Solutions not present in `found`.
    fn missed(&self, found: Vec<String>) -> Vec<String> {
        let mut session = self.0.session();
        for word in &found {
            session.guess(word);
        }
        session.missed().into_iter().map(str::to_string).collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "Game(name={:?}, size={}, solutions={})",
            self.0.name,
            self.0.size,
            self.0.solutions.len()
        )
    }
}

/// Points for a single word.
#[pyfunction]
pub fn word_score(word: &str) -> u32 {
    game::word_score(word)
}

/// Total points for a list of words.
#[pyfunction]
pub fn total_score(words: Vec<String>) -> u32 {
    game::total_score(&words)
}
