//! Board solver: prefix-pruned depth-first search.
//!
//! - `search`: the traversal itself (`PathSearch`) and its visited bitmask
//! - `api`: lenient `solve_board` / `solve_words` over raw rows
//! - `stats`: counters describing one solve

pub mod api;
pub mod search;
pub mod stats;

pub use api::{solve_board, solve_words};
pub use search::{PathSearch, VisitedMask};
pub use stats::SearchStats;
