//! Dictionary and solver bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::board;
use crate::core::BoggleError;
use crate::dictionary::DictionaryIndex;
use crate::solver;

pub(crate) fn to_py_err(err: BoggleError) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// Python wrapper for DictionaryIndex.
///
/// Build once and reuse across many boards.
#[pyclass(name = "Dictionary", frozen)]
pub struct PyDictionary(pub DictionaryIndex);

#[pymethods]
impl PyDictionary {
    /// Build from a list of words. Case is ignored; empty entries are skipped.
    #[new]
    fn new(words: Vec<String>) -> Self {
        Self(DictionaryIndex::build(words))
    }

    /// Build from a JSON word list (`[...]` or `{"words": [...]}`).
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        DictionaryIndex::from_json_str(json)
            .map(Self)
            .map_err(to_py_err)
    }

    /// Restore an index saved with `to_bytes`.
    #[staticmethod]
    fn from_bytes(bytes: &[u8]) -> PyResult<Self> {
        DictionaryIndex::from_bytes(bytes)
            .map(Self)
            .map_err(to_py_err)
    }

    fn to_bytes(&self) -> PyResult<Vec<u8>> {
        self.0.to_bytes().map_err(to_py_err)
    }

    fn contains_word(&self, word: &str) -> bool {
        self.0.contains_word(&word.to_lowercase())
    }

    fn contains_prefix(&self, prefix: &str) -> bool {
        self.0.contains_prefix(&prefix.to_lowercase())
    }

    fn __len__(&self) -> usize {
        self.0.word_count()
    }

    fn __repr__(&self) -> String {
        format!(
            "Dictionary(words={}, prefixes={})",
            self.0.word_count(),
            self.0.prefix_count()
        )
    }
}

/// Solve a board. Invalid boards return an empty list.
#[pyfunction]
pub fn solve_board(grid: Vec<Vec<String>>, dictionary: &PyDictionary) -> Vec<String> {
    solver::solve_board(&grid, &dictionary.0)
}

/// Solve a board against a plain word list.
#[pyfunction]
pub fn solve_words(grid: Vec<Vec<String>>, words: Vec<String>) -> Vec<String> {
    solver::solve_words(&grid, words)
}

/// Generate a random board. Raises ValueError unless 3 <= size <= 10.
#[pyfunction]
#[pyo3(signature = (size, seed = None))]
pub fn generate_board(size: usize, seed: Option<u64>) -> PyResult<Vec<Vec<String>>> {
    match seed {
        Some(seed) => board::generate_board_seeded(size, seed),
        None => board::generate_board(size),
    }
    .map_err(to_py_err)
}
