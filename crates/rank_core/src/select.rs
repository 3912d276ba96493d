//! Matchup selection.
//!
//! Picks the next pair to present as two independent weighted random draws:
//! the first pick leans toward items that hold their own against the field,
//! the second pick leans toward the closest available contest. Deliberately
//! stochastic rather than nearest-neighbor so the same two items are not
//! paired over and over, and every item keeps a nonzero chance of play.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::elo::expected_score;
use crate::types::{Item, RankError};

/// Select the next matchup using the thread-local RNG.
///
/// See [`select_pair_with`] for the selection scheme and `power`.
pub fn select_pair(items: &[Item], power: f64) -> Result<(usize, usize), RankError> {
    select_pair_with(items, power, &mut rand::thread_rng())
}

/// Select the next matchup, drawing randomness from `rng`.
///
/// Returns indices into `items` for (first, second). Stage 1 weights every
/// item by its expected score against an average opponent (the population
/// mean rating), times a games-played balancing factor `1/(games+1)^power`;
/// `power` of 0 disables balancing. Stage 2 weights every remaining item by
/// the probability that the weaker side of the would-be pair beats the
/// stronger, so near-even matchups dominate.
///
/// Stateless: ratings are re-read from `items` on every call.
pub fn select_pair_with(
    items: &[Item],
    power: f64,
    rng: &mut impl Rng,
) -> Result<(usize, usize), RankError> {
    if items.len() < 2 {
        return Err(RankError::InsufficientPopulation { count: items.len() });
    }
    assert!(
        items.iter().all(|i| i.rating.is_finite()),
        "non-finite rating in population"
    );

    let mean = items.iter().map(|i| i.rating).sum::<f64>() / items.len() as f64;

    // Stage 1: first pick, weighted by strength against the field.
    let weights: Vec<f64> = items
        .iter()
        .map(|item| first_pick_weight(item, mean, power))
        .collect();
    let first = weighted_choice(&weights, rng);

    // Stage 2: opponent, weighted by closeness of the match.
    let candidates: Vec<usize> = (0..items.len()).filter(|&j| j != first).collect();
    if candidates.len() == 1 {
        return Ok((first, candidates[0]));
    }

    let closeness_weights: Vec<f64> = candidates
        .iter()
        .map(|&j| closeness(items[first].rating, items[j].rating))
        .collect();
    let second = candidates[weighted_choice(&closeness_weights, rng)];

    Ok((first, second))
}

/// Stage-1 weight: expected score against the population mean, scaled down
/// for items that have already played a lot when balancing is enabled.
fn first_pick_weight(item: &Item, mean_rating: f64, power: f64) -> f64 {
    let strength = expected_score(item.rating, mean_rating);
    let balancing = 1.0 / (item.games_played() as f64 + 1.0).powf(power);
    strength * balancing
}

/// How evenly matched two ratings are: the weaker side's win probability.
/// 0.5 at equal ratings, falling toward 0 as the gap widens.
fn closeness(rating_a: f64, rating_b: f64) -> f64 {
    expected_score(rating_a, rating_b).min(expected_score(rating_b, rating_a))
}

/// Draw an index with probability proportional to its weight. Degenerate
/// weight vectors (all zero) fall back to a uniform draw.
fn weighted_choice(weights: &[f64], rng: &mut impl Rng) -> usize {
    match WeightedIndex::new(weights) {
        Ok(dist) => dist.sample(rng),
        Err(_) => rng.gen_range(0..weights.len()),
    }
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod select_tests;
