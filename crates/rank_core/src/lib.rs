//! Core rating logic for pairwise file ranking.
//!
//! This crate provides:
//! - The Elo rating update applied after each human comparison
//! - Matchup selection that favors informative (close-skill) contests
//! - Population helpers for ranking and rating redistribution
//!
//! Everything here is pure computation over in-memory values. Persistence,
//! file discovery and the interactive loop live in the `ranker` binary and
//! call into this crate one comparison at a time.

pub mod elo;
pub mod population;
pub mod select;
pub mod types;

pub use elo::{expected_score, update};
pub use population::{rank_positions, ranked, redistribute, removal_delta};
pub use select::{select_pair, select_pair_with};
pub use types::{GameResult, Item, RankError, DEFAULT_RATING, K_FACTOR};
