//! Population-level helpers: ranking order and rating redistribution.

use std::collections::HashMap;

use crate::types::{Item, DEFAULT_RATING};

/// Indices of `items` in leaderboard order (highest rating first).
pub fn ranked(items: &[Item]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| {
        items[b]
            .rating
            .partial_cmp(&items[a].rating)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order
}

/// 1-based rank position per item path.
pub fn rank_positions(items: &[Item]) -> HashMap<&str, usize> {
    ranked(items)
        .into_iter()
        .enumerate()
        .map(|(pos, idx)| (items[idx].path.as_str(), pos + 1))
        .collect()
}

/// Spread `delta` rating points uniformly across `items`.
///
/// Used when an item leaves the population: handing its surplus (or debt)
/// relative to the default rating back to the field keeps every pairwise
/// rating gap, and therefore every win probability, unchanged. Deltas below
/// 0.01 are ignored.
pub fn redistribute(items: &mut [Item], delta: f64) {
    if delta.abs() < 0.01 || items.is_empty() {
        return;
    }
    let adjustment = delta / items.len() as f64;
    for item in items.iter_mut() {
        item.rating += adjustment;
    }
}

/// The delta an item hands back when removed: how far it sits above or
/// below the default rating.
pub fn removal_delta(item: &Item) -> f64 {
    item.rating - DEFAULT_RATING
}

#[cfg(test)]
#[path = "population_tests.rs"]
mod population_tests;
