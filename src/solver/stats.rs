//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one board solve.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Cells used as DFS roots.
    pub roots: u32,

    /// Cells entered because the extended path was a dictionary prefix.
    pub cells_expanded: u64,

    /// Branches abandoned because the extended path was not a prefix.
    pub branches_pruned: u64,

    /// Distinct words found.
    pub words_found: u32,

    /// Longest path (in cells) explored.
    pub max_depth: u16,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of candidate extensions that were pruned.
    #[must_use]
    pub fn prune_ratio(&self) -> f64 {
        let total = self.cells_expanded + self.branches_pruned;
        if total == 0 {
            0.0
        } else {
            self.branches_pruned as f64 / total as f64
        }
    }

    /// Cells expanded per second.
    #[must_use]
    pub fn cells_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.cells_expanded as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.roots, 0);
        assert_eq!(stats.prune_ratio(), 0.0);
        assert_eq!(stats.cells_per_second(), 0.0);
    }

    #[test]
    fn test_prune_ratio() {
        let mut stats = SearchStats::new();
        stats.cells_expanded = 25;
        stats.branches_pruned = 75;
        assert!((stats.prune_ratio() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_cells_per_second() {
        let mut stats = SearchStats::new();
        stats.cells_expanded = 1000;
        stats.time_us = 1_000_000;
        assert_eq!(stats.cells_per_second(), 1000.0);
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = SearchStats::new();
        stats.cells_expanded = 42;

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SearchStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats, deserialized);
    }
}
