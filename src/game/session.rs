//! Solved games and guess tracking.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::{flatten, BoardGenerator, Grid};
use crate::core::{BoardRng, BoardRngState, Result};
use crate::dictionary::DictionaryIndex;
use crate::solver::PathSearch;

use super::scoring::{total_score, word_score, ScoreBreakdown};

/// A board together with every word it contains.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Display name.
    pub name: String,

    /// Rows (and columns) on the board.
    pub size: usize,

    /// Board rows as displayed, e.g. `"A"` or `"Qu"`.
    pub grid: Vec<Vec<String>>,

    /// Every findable word, lowercased and sorted.
    pub solutions: Vec<String>,

    /// Generator state the board was drawn from; `None` for fixed layouts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rng_state: Option<BoardRngState>,
}

impl Game {
    /// Generate a random board of `size` and solve it.
    pub fn create(size: usize, index: &DictionaryIndex, rng: &mut BoardRng) -> Result<Self> {
        let generator = BoardGenerator::with_size(size)?;
        let state = rng.state();
        let grid = generator.generate(rng);
        let name = format!("Random {size}x{size} Grid #{:016x}", rng.seed());
        let mut game = Self::from_rows(name, grid, index)?;
        game.rng_state = Some(state);
        Ok(game)
    }

    /// Redraw a random game from its recorded generator state.
    ///
    /// Returns `Ok(None)` for fixed layouts, which carry no state.
    pub fn regenerate(&self, index: &DictionaryIndex) -> Result<Option<Self>> {
        match &self.rng_state {
            Some(state) => {
                Self::create(self.size, index, &mut BoardRng::from_state(state)).map(Some)
            }
            None => Ok(None),
        }
    }

    /// Solve a predefined layout.
    pub fn from_rows(
        name: impl Into<String>,
        grid: Vec<Vec<String>>,
        index: &DictionaryIndex,
    ) -> Result<Self> {
        let solutions = PathSearch::new(index).solve(&Grid::from_rows(&grid)?);
        Ok(Self {
            name: name.into(),
            size: grid.len(),
            grid,
            solutions,
            rng_state: None,
        })
    }

    /// Row-major tiles, as stored alongside the solutions.
    pub fn flat_grid(&self) -> Result<Vec<String>> {
        flatten(&self.grid)
    }

    /// Score for finding every word.
    #[must_use]
    pub fn max_score(&self) -> u32 {
        total_score(&self.solutions)
    }

    /// Start tracking guesses for this game.
    #[must_use]
    pub fn session(&self) -> GameSession<'_> {
        GameSession::new(self)
    }
}

/// Result of submitting one guess.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Blank input; nothing happened.
    Empty,
    /// A new word from the solution list.
    Accepted { word: String, points: u32 },
    /// Valid, but found earlier in this session.
    AlreadyFound(String),
    /// Not among the board's solutions.
    NotOnBoard(String),
}

/// A player's progress through one game.
#[derive(Clone, Debug)]
pub struct GameSession<'g> {
    game: &'g Game,
    solutions: FxHashSet<&'g str>,
    found: Vec<String>,
    found_set: FxHashSet<&'g str>,
    score: u32,
}

impl<'g> GameSession<'g> {
    pub fn new(game: &'g Game) -> Self {
        Self {
            game,
            solutions: game.solutions.iter().map(String::as_str).collect(),
            found: Vec::new(),
            found_set: FxHashSet::default(),
            score: 0,
        }
    }

    /// Check a guess. Input is trimmed and lowercased first.
    pub fn guess(&mut self, input: &str) -> GuessOutcome {
        let word = input.trim().to_lowercase();
        if word.is_empty() {
            return GuessOutcome::Empty;
        }
        let Some(&solution) = self.solutions.get(word.as_str()) else {
            return GuessOutcome::NotOnBoard(word);
        };
        if !self.found_set.insert(solution) {
            return GuessOutcome::AlreadyFound(word);
        }

        let points = word_score(&word);
        self.score += points;
        self.found.push(word.clone());
        GuessOutcome::Accepted { word, points }
    }

    /// Words found so far, in the order they were found.
    #[must_use]
    pub fn found(&self) -> &[String] {
        &self.found
    }

    /// Points earned so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Solutions not yet found, sorted.
    #[must_use]
    pub fn missed(&self) -> Vec<&'g str> {
        self.game
            .solutions
            .iter()
            .map(String::as_str)
            .filter(|w| !self.found_set.contains(w))
            .collect()
    }

    /// True once every solution has been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.found_set.len() == self.solutions.len()
    }

    /// Per-length tally of the words found.
    #[must_use]
    pub fn breakdown(&self) -> ScoreBreakdown {
        ScoreBreakdown::from_words(&self.found)
    }
}
