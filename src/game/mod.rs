//! Game-level helpers built on the solver.
//!
//! - `scoring`: points per word and per-length breakdowns
//! - `session`: `Game` (board + solutions) and guess tracking
//! - `challenges`: the built-in fixed layouts

pub mod challenges;
pub mod scoring;
pub mod session;

pub use challenges::{find_challenge, populate_challenges, ChallengeLayout, CHALLENGES};
pub use scoring::{total_score, word_score, LengthBucket, ScoreBreakdown};
pub use session::{Game, GameSession, GuessOutcome};
