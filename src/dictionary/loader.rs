//! Word-list parsing for the bundled dictionary assets.
//!
//! Two JSON shapes are in circulation: a bare array of words, and an object
//! with a `words` array. `null` entries in either are ignored. Plain text
//! lists have one word per line.

use serde::Deserialize;

use crate::core::{BoggleError, Result};

use super::index::DictionaryIndex;

#[derive(Deserialize)]
#[serde(untagged)]
enum WordListAsset {
    List(Vec<Option<String>>),
    Object { words: Vec<Option<String>> },
}

/// Parse a JSON word list (`[...]` or `{"words": [...]}`).
pub fn load_word_list_json(json: &str) -> Result<Vec<String>> {
    let asset: WordListAsset =
        serde_json::from_str(json).map_err(|e| BoggleError::WordList(e.to_string()))?;
    let entries = match asset {
        WordListAsset::List(words) | WordListAsset::Object { words } => words,
    };
    Ok(entries.into_iter().flatten().collect())
}

/// Parse a newline-separated word list, skipping blank lines.
#[must_use]
pub fn load_word_list_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

impl DictionaryIndex {
    /// Build an index straight from a JSON word list.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(Self::build(load_word_list_json(json)?))
    }
}
