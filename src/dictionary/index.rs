//! Word and prefix sets used to prune the board search.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{BoggleError, Result};

/// Lowercased dictionary words plus every prefix of every word.
///
/// Every word is also its own prefix, so `words ⊆ prefixes` always holds.
/// The index is immutable once built and can be shared across threads.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryIndex {
    words: FxHashSet<String>,
    prefixes: FxHashSet<String>,
}

impl DictionaryIndex {
    /// Build an index from raw dictionary entries.
    ///
    /// Entries are lowercased; entries that are empty after lowercasing are
    /// skipped. Non-alphabetic entries are kept as-is: they simply never
    /// match a valid grid.
    pub fn build<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        for entry in entries {
            index.insert(entry.as_ref());
        }
        debug!(
            words = index.words.len(),
            prefixes = index.prefixes.len(),
            "built dictionary index"
        );
        index
    }

    fn insert(&mut self, entry: &str) {
        let word = entry.to_lowercase();
        if word.is_empty() {
            return;
        }
        for (offset, ch) in word.char_indices() {
            self.prefixes.insert(word[..offset + ch.len_utf8()].to_string());
        }
        self.words.insert(word);
    }

    /// Whether `word` is a complete dictionary entry. Expects lowercase.
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Whether `prefix` starts at least one dictionary entry. Expects lowercase.
    #[must_use]
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.prefixes.contains(prefix)
    }

    /// Number of distinct words.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of distinct prefixes (words included).
    #[must_use]
    pub fn prefix_count(&self) -> usize {
        self.prefixes.len()
    }

    /// True when no words were indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate the indexed words in no particular order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Encode the index for caching between runs.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| BoggleError::IndexEncode(e.to_string()))
    }

    /// Decode an index produced by [`DictionaryIndex::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(|e| BoggleError::IndexDecode(e.to_string()))
    }
}

impl<S: AsRef<str>> FromIterator<S> for DictionaryIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::build(iter)
    }
}
