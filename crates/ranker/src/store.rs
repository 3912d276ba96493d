//! Persistent store for ratings and game history.
//!
//! One JSON document per ranked directory. Ratings are written back after
//! every recorded game, before the next matchup is requested, so a killed
//! session never loses more than the comparison in flight.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use rank_core::{redistribute, removal_delta, update, GameResult, Item};

/// Store file name inside the target directory.
pub const STORE_FILE: &str = ".ranker.json";

/// One finished comparison, append-only. Never read back by the rating
/// logic; kept for reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub first: String,
    pub second: String,
    pub result: GameResult,
    pub timestamp: DateTime<Utc>,
}

/// The full population plus its outcome history.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Store {
    pub items: Vec<Item>,
    #[serde(default)]
    pub history: Vec<GameRecord>,
}

impl Store {
    /// Path of the store file for a target directory.
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(STORE_FILE)
    }

    /// Load the store for `dir`. A missing file is an empty store.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = Self::path_in(dir);
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Write the store for `dir`.
    pub fn save(&self, dir: &Path) -> Result<()> {
        let path = Self::path_in(dir);
        let json = serde_json::to_string_pretty(self).context("failed to serialize store")?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::debug!(path = %path.display(), items = self.items.len(), "store saved");
        Ok(())
    }

    pub fn index_of(&self, path: &str) -> Option<usize> {
        self.items.iter().position(|i| i.path == path)
    }

    /// Register newly discovered paths at the default rating. Paths already
    /// present are left untouched. Returns how many were added.
    pub fn sync(&mut self, discovered: &[String]) -> usize {
        let mut added = 0;
        for path in discovered {
            if self.index_of(path).is_none() {
                self.items.push(Item::new(path.clone()));
                added += 1;
            }
        }
        if added > 0 {
            tracing::debug!(added, total = self.items.len(), "synced new files into store");
        }
        added
    }

    /// Indices of items whose file still exists under `dir` and whose name
    /// matches `pattern`. Only these are eligible for comparison.
    pub fn active_indices(&self, dir: &Path, pattern: &Regex) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| pattern.is_match(&item.path) && dir.join(&item.path).exists())
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Apply one comparison outcome: update both ratings, bump the win/loss/
    /// tie counters, and append to the history log.
    pub fn record_game(&mut self, first: &str, second: &str, result: GameResult) -> Result<()> {
        let a = self
            .index_of(first)
            .with_context(|| format!("unknown item {:?}", first))?;
        let b = self
            .index_of(second)
            .with_context(|| format!("unknown item {:?}", second))?;
        if a == b {
            bail!("cannot record a game of {:?} against itself", first);
        }

        let (new_a, new_b) = update(self.items[a].rating, self.items[b].rating, result);
        self.items[a].rating = new_a;
        self.items[b].rating = new_b;

        match result {
            GameResult::FirstWins => {
                self.items[a].wins += 1;
                self.items[b].losses += 1;
            }
            GameResult::SecondWins => {
                self.items[a].losses += 1;
                self.items[b].wins += 1;
            }
            GameResult::Tie => {
                self.items[a].ties += 1;
                self.items[b].ties += 1;
            }
        }

        self.history.push(GameRecord {
            first: first.to_string(),
            second: second.to_string(),
            result,
            timestamp: Utc::now(),
        });
        tracing::debug!(first, second, %result, new_a, new_b, "recorded game");
        Ok(())
    }

    /// Drop an item and hand its rating surplus back to the remaining
    /// population, so the removal shifts no one's relative standing.
    pub fn remove(&mut self, path: &str) -> Result<Item> {
        let idx = self
            .index_of(path)
            .with_context(|| format!("unknown item {:?}", path))?;
        let removed = self.items.remove(idx);
        redistribute(&mut self.items, removal_delta(&removed));
        tracing::debug!(path, rating = removed.rating, "removed item");
        Ok(removed)
    }

    /// Rename an item in place. Returns false when `old` is not stored.
    pub fn rename(&mut self, old: &str, new: &str) -> bool {
        match self.index_of(old) {
            Some(idx) => {
                self.items[idx].path = new.to_string();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
