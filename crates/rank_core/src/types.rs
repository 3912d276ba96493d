//! Shared types for the rating core.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Starting rating for items seen for the first time
pub const DEFAULT_RATING: f64 = 1000.0;

/// K-factor for rating updates (higher = more volatile)
pub const K_FACTOR: f64 = 32.0;

/// One file under comparison.
///
/// The path is the stable identifier. Win/loss/tie counters are kept for
/// display and diagnostics only; they never feed back into the rating
/// formula.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub path: String,
    pub rating: f64,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub ties: u32,
}

impl Item {
    /// Create a fresh item at the default rating with a zeroed record.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            rating: DEFAULT_RATING,
            wins: 0,
            losses: 0,
            ties: 0,
        }
    }

    /// Total comparisons this item has been part of.
    pub fn games_played(&self) -> u32 {
        self.wins + self.losses + self.ties
    }
}

/// Outcome of a single comparison, from the first-presented side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    FirstWins,
    SecondWins,
    Tie,
}

impl GameResult {
    /// Actual score pair `(S_first, S_second)` for the Elo update.
    pub fn score_pair(self) -> (f64, f64) {
        match self {
            GameResult::FirstWins => (1.0, 0.0),
            GameResult::SecondWins => (0.0, 1.0),
            GameResult::Tie => (0.5, 0.5),
        }
    }
}

impl FromStr for GameResult {
    type Err = RankError;

    /// Parse a user-entered result tag. Anything outside the three known
    /// tags is rejected, never coerced.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(GameResult::FirstWins),
            "b" => Ok(GameResult::SecondWins),
            "t" | "tie" => Ok(GameResult::Tie),
            other => Err(RankError::InvalidResult(other.to_string())),
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            GameResult::FirstWins => "A",
            GameResult::SecondWins => "B",
            GameResult::Tie => "tie",
        };
        write!(f, "{}", tag)
    }
}

/// Errors surfaced by the rating core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankError {
    /// Matchup selection needs at least two items.
    #[error("need at least 2 items to select a matchup, have {count}")]
    InsufficientPopulation { count: usize },

    /// A result tag other than A/B/tie reached a parse boundary.
    #[error("invalid result tag: {0:?}")]
    InvalidResult(String),
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
