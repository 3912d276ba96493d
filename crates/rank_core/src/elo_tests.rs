use super::*;
use crate::types::DEFAULT_RATING;

#[test]
fn equal_ratings_give_even_expected_score() {
    let expected = expected_score(DEFAULT_RATING, DEFAULT_RATING);
    assert!((expected - 0.5).abs() < 1e-12);
}

#[test]
fn expected_scores_are_complementary() {
    let e_a = expected_score(1200.0, 900.0);
    let e_b = expected_score(900.0, 1200.0);
    assert!((e_a + e_b - 1.0).abs() < 1e-12);
    assert!(e_a > 0.5);
}

#[test]
fn update_is_zero_sum() {
    let cases = [
        (1000.0, 1000.0, GameResult::FirstWins),
        (1520.0, 1480.0, GameResult::SecondWins),
        (800.0, 1600.0, GameResult::Tie),
        (1234.5, 987.6, GameResult::FirstWins),
    ];
    for (r_a, r_b, result) in cases {
        let (new_a, new_b) = update(r_a, r_b, result);
        let net = (new_a - r_a) + (new_b - r_b);
        assert!(net.abs() < 1e-9, "net rating change {} for {:?}", net, result);
    }
}

#[test]
fn winner_gains_and_loser_drops_at_equal_ratings() {
    let (new_a, new_b) = update(1000.0, 1000.0, GameResult::FirstWins);
    assert!(new_a > 1000.0);
    assert!(new_b < 1000.0);

    let (new_a, new_b) = update(1000.0, 1000.0, GameResult::SecondWins);
    assert!(new_a < 1000.0);
    assert!(new_b > 1000.0);
}

#[test]
fn tie_at_equal_ratings_changes_nothing() {
    let (new_a, new_b) = update(1000.0, 1000.0, GameResult::Tie);
    assert_eq!(new_a, 1000.0);
    assert_eq!(new_b, 1000.0);
}

#[test]
fn bigger_upsets_swing_harder() {
    // Fixed result of first-wins: gain grows with the deficit rB - rA.
    let gaps = [-400.0, -100.0, 0.0, 100.0, 400.0];
    let mut last_gain = f64::NEG_INFINITY;
    for gap in gaps {
        let r_a = 1000.0;
        let r_b = 1000.0 + gap;
        let (new_a, _) = update(r_a, r_b, GameResult::FirstWins);
        let gain = new_a - r_a;
        assert!(gain > last_gain, "gain not increasing at gap {}", gap);
        last_gain = gain;
    }
}

#[test]
fn single_update_is_bounded_by_k() {
    let cases = [
        (0.0, 3000.0, GameResult::FirstWins),
        (3000.0, 0.0, GameResult::SecondWins),
        (1000.0, 1000.0, GameResult::Tie),
    ];
    for (r_a, r_b, result) in cases {
        let (new_a, new_b) = update(r_a, r_b, result);
        assert!((new_a - r_a).abs() <= K_FACTOR + 1e-9);
        assert!((new_b - r_b).abs() <= K_FACTOR + 1e-9);
    }
}

#[test]
fn worked_example_matches_hand_calculation() {
    // A=1520 beats B=1480: E_A ~ 0.5571, so A gains ~14.17 points.
    let (new_a, new_b) = update(1520.0, 1480.0, GameResult::FirstWins);
    assert!((new_a - 1534.17).abs() < 0.01, "new_a = {}", new_a);
    assert!((new_b - 1465.83).abs() < 0.01, "new_b = {}", new_b);
}

#[test]
#[should_panic(expected = "non-finite rating")]
fn non_finite_rating_is_fatal() {
    update(f64::NAN, 1000.0, GameResult::FirstWins);
}
