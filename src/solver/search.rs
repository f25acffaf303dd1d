//! Exhaustive depth-first word search over a grid.
//!
//! Every cell is used as a root. From a root the search extends the current
//! path one neighbour at a time, abandoning the branch as soon as the path
//! spelled so far is not a prefix of any dictionary word. A cell appears at
//! most once in a path; different paths (and different words) share cells
//! freely.

use std::time::Instant;

use rustc_hash::FxHashSet;
use smallvec::{smallvec, SmallVec};
use tracing::debug;

use crate::board::{Grid, Neighbors};
use crate::core::SolverConfig;
use crate::dictionary::DictionaryIndex;

use super::stats::SearchStats;

/// Bitmask over the cells of one grid.
///
/// Two inline words cover grids up to 11x11 without allocating.
#[derive(Clone, Debug)]
pub struct VisitedMask {
    bits: SmallVec<[u64; 2]>,
}

impl VisitedMask {
    /// Mask with room for `cells` cells, all unvisited.
    #[must_use]
    pub fn with_cells(cells: usize) -> Self {
        Self {
            bits: smallvec![0; cells.div_ceil(64)],
        }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, cell: usize) -> bool {
        self.bits[cell / 64] & (1 << (cell % 64)) != 0
    }

    #[inline]
    pub fn insert(&mut self, cell: usize) {
        self.bits[cell / 64] |= 1 << (cell % 64);
    }

    #[inline]
    pub fn remove(&mut self, cell: usize) {
        self.bits[cell / 64] &= !(1 << (cell % 64));
    }

    /// Mark every cell unvisited.
    pub fn clear(&mut self) {
        self.bits.iter_mut().for_each(|w| *w = 0);
    }

    /// True when no cell is marked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&w| w == 0)
    }
}

/// Finds every dictionary word spelled by a path on a grid.
///
/// Borrows the index; the index is never mutated, so any number of searches
/// may run against it concurrently.
#[derive(Clone, Debug)]
pub struct PathSearch<'a> {
    index: &'a DictionaryIndex,
    config: SolverConfig,
}

impl<'a> PathSearch<'a> {
    /// Create a search with the default configuration.
    pub fn new(index: &'a DictionaryIndex) -> Self {
        Self {
            index,
            config: SolverConfig::default(),
        }
    }

    /// Set a custom configuration.
    #[must_use]
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// All words on the grid, lowercased, deduplicated and sorted.
    pub fn solve(&self, grid: &Grid) -> Vec<String> {
        self.solve_with_stats(grid).0
    }

    /// Like [`PathSearch::solve`], also returning search statistics.
    pub fn solve_with_stats(&self, grid: &Grid) -> (Vec<String>, SearchStats) {
        let start = Instant::now();
        let adjacency = grid.adjacency();
        let mut walker = Walker {
            grid,
            adjacency: &adjacency,
            index: self.index,
            min_word_length: self.config.min_word_length,
            visited: VisitedMask::with_cells(grid.cell_count()),
            path: String::new(),
            found: FxHashSet::default(),
            stats: SearchStats::new(),
        };

        if !self.index.is_empty() {
            for root in 0..grid.cell_count() {
                walker.visited.clear();
                walker.path.clear();
                walker.stats.roots += 1;
                walker.visit(root, 1);
            }
        }

        let mut stats = walker.stats;
        let mut words: Vec<String> = walker.found.into_iter().collect();
        words.sort_unstable();

        stats.words_found = u32::try_from(words.len()).unwrap_or(u32::MAX);
        stats.time_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
        debug!(
            size = grid.size(),
            words = stats.words_found,
            expanded = stats.cells_expanded,
            pruned = stats.branches_pruned,
            max_depth = stats.max_depth,
            prune_ratio = stats.prune_ratio(),
            cells_per_sec = stats.cells_per_second(),
            time_us = stats.time_us,
            "solved board"
        );
        (words, stats)
    }
}

/// Mutable state for the traversal of one grid.
struct Walker<'s> {
    grid: &'s Grid,
    adjacency: &'s [Neighbors],
    index: &'s DictionaryIndex,
    min_word_length: usize,
    visited: VisitedMask,
    path: String,
    found: FxHashSet<String>,
    stats: SearchStats,
}

impl Walker<'_> {
    fn visit(&mut self, cell: usize, depth: u16) {
        let base = self.path.len();
        self.path.push_str(self.grid.tile(cell));

        if !self.index.contains_prefix(&self.path) {
            self.stats.branches_pruned += 1;
            self.path.truncate(base);
            return;
        }

        self.stats.cells_expanded += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);
        self.visited.insert(cell);

        if self.path.chars().count() >= self.min_word_length
            && self.index.contains_word(&self.path)
            && !self.found.contains(self.path.as_str())
        {
            self.found.insert(self.path.clone());
        }

        let adjacency = self.adjacency;
        for &next in &adjacency[cell] {
            if !self.visited.contains(next) {
                self.visit(next, depth + 1);
            }
        }

        self.visited.remove(cell);
        self.path.truncate(base);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(layout: &[&str]) -> Grid {
        let rows: Vec<Vec<String>> = layout
            .iter()
            .map(|r| r.chars().map(|c| c.to_string()).collect())
            .collect();
        Grid::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_visited_mask() {
        let mut mask = VisitedMask::with_cells(100);
        assert!(mask.is_empty());

        mask.insert(0);
        mask.insert(63);
        mask.insert(64);
        mask.insert(99);
        assert!(mask.contains(63) && mask.contains(64) && mask.contains(99));
        assert!(!mask.contains(1));

        mask.remove(64);
        assert!(!mask.contains(64));
        assert!(mask.contains(63));

        mask.clear();
        assert!(mask.is_empty());
    }

    #[test]
    fn test_finds_straight_and_diagonal() {
        let index = DictionaryIndex::build(["abc", "aei", "ceg", "bed"]);
        let words = PathSearch::new(&index).solve(&grid(&["ABC", "DEF", "GHI"]));
        assert_eq!(words, vec!["abc", "aei", "bed", "ceg"]);
    }

    #[test]
    fn test_no_cell_reuse() {
        // "aba" would need the single "a" twice.
        let index = DictionaryIndex::build(["aba", "bab"]);
        let words = PathSearch::new(&index).solve(&grid(&["ABX", "XXX", "XXX"]));
        assert!(words.is_empty());
    }

    #[test]
    fn test_min_word_length_config() {
        let index = DictionaryIndex::build(["ab", "abc", "abcd"]);
        let g = grid(&["ABC", "XXD", "XXX"]);

        let default = PathSearch::new(&index).solve(&g);
        assert_eq!(default, vec!["abc", "abcd"]);

        let config = SolverConfig::default().with_min_word_length(4);
        let longer = PathSearch::new(&index).with_config(config).solve(&g);
        assert_eq!(longer, vec!["abcd"]);
    }

    #[test]
    fn test_stats_populated() {
        let index = DictionaryIndex::build(["bed"]);
        let (words, stats) =
            PathSearch::new(&index).solve_with_stats(&grid(&["ABC", "DEF", "GHI"]));
        assert_eq!(words, vec!["bed"]);
        assert_eq!(stats.roots, 9);
        assert_eq!(stats.words_found, 1);
        assert_eq!(stats.max_depth, 3);
        // Only "b" starts a prefix; the other eight roots are pruned at once.
        assert_eq!(stats.cells_expanded, 3);
        assert!(stats.branches_pruned >= 8);
        assert!(stats.prune_ratio() > 0.5);
    }

    #[test]
    fn test_empty_index_skips_search() {
        let index = DictionaryIndex::default();
        let (words, stats) =
            PathSearch::new(&index).solve_with_stats(&grid(&["ABC", "DEF", "GHI"]));
        assert!(words.is_empty());
        assert_eq!(stats.roots, 0);
    }
}
