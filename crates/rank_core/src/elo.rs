//! Elo rating update.

use crate::types::{GameResult, K_FACTOR};

/// Expected score for a rating of `rating_a` against `rating_b`.
///
/// This is the standard logistic curve: 0.5 at equal ratings, approaching
/// 1.0 as `rating_a` pulls ahead. Also read as "probability that A beats B".
pub fn expected_score(rating_a: f64, rating_b: f64) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf((rating_b - rating_a) / 400.0))
}

/// Compute both new ratings after one comparison.
///
/// Pure and deterministic: `new = old + K * (actual - expected)` for each
/// side. The two deltas cancel exactly (up to float rounding), so a single
/// update never creates or destroys rating mass. No single update moves a
/// rating by more than `K_FACTOR` points.
///
/// Non-finite ratings can only come from corrupted external data and are
/// treated as a programmer error.
pub fn update(rating_a: f64, rating_b: f64, result: GameResult) -> (f64, f64) {
    assert!(
        rating_a.is_finite() && rating_b.is_finite(),
        "non-finite rating: {} vs {}",
        rating_a,
        rating_b
    );

    let expected_a = expected_score(rating_a, rating_b);
    let expected_b = 1.0 - expected_a;
    let (actual_a, actual_b) = result.score_pair();

    (
        rating_a + K_FACTOR * (actual_a - expected_a),
        rating_b + K_FACTOR * (actual_b - expected_b),
    )
}

#[cfg(test)]
#[path = "elo_tests.rs"]
mod elo_tests;
