//! Fixed challenge layouts shipped with the game.

use crate::core::Result;
use crate::dictionary::DictionaryIndex;

use super::session::Game;

/// A named, hand-built board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChallengeLayout {
    pub name: &'static str,
    pub rows: &'static [&'static [&'static str]],
}

impl ChallengeLayout {
    /// Rows (and columns) on the board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Owned copy of the rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|t| (*t).to_string()).collect())
            .collect()
    }

    /// Solve this layout into a [`Game`].
    pub fn to_game(&self, index: &DictionaryIndex) -> Result<Game> {
        Game::from_rows(self.name, self.to_rows(), index)
    }
}

/// The built-in challenges.
pub const CHALLENGES: &[ChallengeLayout] = &[
    ChallengeLayout {
        name: "Easy Starter",
        rows: &[&["A", "B", "C"], &["D", "E", "F"], &["G", "H", "I"]],
    },
    ChallengeLayout {
        name: "Classic 4x4",
        rows: &[
            &["T", "W", "Y", "R"],
            &["E", "N", "P", "H"],
            &["G", "Z", "Qu", "R"],
            &["O", "N", "T", "A"],
        ],
    },
    ChallengeLayout {
        name: "Word Builder",
        rows: &[
            &["S", "T", "A", "R"],
            &["T", "R", "E", "E"],
            &["A", "R", "E", "A"],
            &["R", "E", "E", "D"],
        ],
    },
    ChallengeLayout {
        name: "Mixed Challenge",
        rows: &[
            &["B", "R", "A", "I", "N"],
            &["L", "O", "V", "E", "S"],
            &["G", "A", "M", "E", "S"],
            &["W", "O", "R", "D", "S"],
            &["F", "U", "N", "N", "Y"],
        ],
    },
    ChallengeLayout {
        name: "Quick Words",
        rows: &[&["C", "A", "T"], &["D", "O", "G"], &["R", "U", "N"]],
    },
    ChallengeLayout {
        name: "Letter Mix",
        rows: &[
            &["L", "I", "N", "E"],
            &["I", "N", "E", "R"],
            &["N", "E", "R", "D"],
            &["E", "R", "D", "S"],
        ],
    },
    ChallengeLayout {
        name: "Big Grid",
        rows: &[
            &["B", "E", "A", "U", "T", "Y"],
            &["E", "A", "R", "T", "H", "S"],
            &["A", "R", "T", "S", "T", "A"],
            &["U", "T", "S", "T", "A", "R"],
            &["T", "H", "T", "A", "R", "T"],
            &["Y", "S", "A", "R", "T", "S"],
        ],
    },
];

/// Look up a built-in challenge by name, ignoring case.
#[must_use]
pub fn find_challenge(name: &str) -> Option<&'static ChallengeLayout> {
    CHALLENGES.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

/// Solve every built-in challenge.
pub fn populate_challenges(index: &DictionaryIndex) -> Result<Vec<Game>> {
    CHALLENGES.iter().map(|c| c.to_game(index)).collect()
}
