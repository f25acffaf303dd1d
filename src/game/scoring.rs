//! Classic Boggle scoring by word length.
//!
//! | letters | points |
//! |---------|--------|
//! | < 3     | 0      |
//! | 3-4     | 1      |
//! | 5       | 2      |
//! | 6       | 3      |
//! | 7       | 5      |
//! | 8+      | 11     |
//!
//! Length is counted in characters of the spelled word, so a "Qu" tile
//! contributes two.

use serde::{Deserialize, Serialize};

/// Shortest length with its own breakdown bucket.
pub const SHORTEST_SCORED: usize = 3;

/// Words this long or longer share the last bucket.
pub const LONGEST_BUCKET: usize = 8;

/// Points for a single word.
#[must_use]
pub fn word_score(word: &str) -> u32 {
    match word.chars().count() {
        0..=2 => 0,
        3 | 4 => 1,
        5 => 2,
        6 => 3,
        7 => 5,
        _ => 11,
    }
}

/// Sum of [`word_score`] over all words.
#[must_use]
pub fn total_score<S: AsRef<str>>(words: &[S]) -> u32 {
    words.iter().map(|w| word_score(w.as_ref())).sum()
}

/// Count and points for one word length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBucket {
    pub count: u32,
    pub points: u32,
}

/// Per-length tally of a word list; lengths 3 through 7 and "8 or more".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    buckets: [LengthBucket; LONGEST_BUCKET - SHORTEST_SCORED + 1],
}

impl ScoreBreakdown {
    /// Tally a word list. Words shorter than three letters are ignored.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let mut breakdown = Self::default();
        for word in words {
            let word = word.as_ref();
            let len = word.chars().count();
            if len < SHORTEST_SCORED {
                continue;
            }
            let bucket = &mut breakdown.buckets[len.min(LONGEST_BUCKET) - SHORTEST_SCORED];
            bucket.count += 1;
            bucket.points += word_score(word);
        }
        breakdown
    }

    /// Bucket for a length; lengths above eight map to the eight bucket.
    #[must_use]
    pub fn get(&self, len: usize) -> Option<LengthBucket> {
        if len < SHORTEST_SCORED {
            None
        } else {
            Some(self.buckets[len.min(LONGEST_BUCKET) - SHORTEST_SCORED])
        }
    }

    /// `(length, bucket)` pairs in ascending length order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, LengthBucket)> + '_ {
        self.buckets
            .iter()
            .enumerate()
            .map(|(i, b)| (i + SHORTEST_SCORED, *b))
    }

    /// Total points across all buckets.
    #[must_use]
    pub fn total_points(&self) -> u32 {
        self.buckets.iter().map(|b| b.points).sum()
    }
}
