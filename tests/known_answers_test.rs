// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Known answers for the bouncy proportion.
//!
//! The counter stops at the first number where `bouncy >= value * threshold`.
//! The target is phrased as "exactly" a proportion, so these tests also record
//! that each known answer hits the proportion exactly rather than overshooting.

mod common;

use bouncy_search::{solve, Counter, Threshold};

#[test]
fn test_fifty_percent_is_538() {
    assert_eq!(solve(Threshold::percent(50)), Ok(538));
}

#[test]
fn test_ninety_percent_is_21780() {
    assert_eq!(solve(Threshold::percent(90)), Ok(21780));
}

#[test]
fn test_ninety_nine_percent_is_1587000() {
    let mut counter = Counter::new(Threshold::percent(99));
    assert_eq!(counter.run(), Ok(1_587_000));
    assert_eq!(counter.first_over(), Some(1_587_000));
    assert_eq!(counter.level(), 6);
}

#[test]
fn test_known_answers_are_exact_matches() {
    for (percent, expected) in [(50u64, 538u64), (90, 21780), (99, 1_587_000)] {
        let mut counter = Counter::new(Threshold::percent(percent));
        assert_eq!(counter.run(), Ok(expected));
        assert_eq!(counter.bouncy_count() * 100, percent * expected);
    }
}

#[test]
fn test_one_third_matches_brute_force() {
    let threshold = Threshold::new(1, 3).unwrap();
    let mut counter = Counter::new(threshold);
    let answer = counter.run().unwrap();
    assert_eq!(answer, common::brute_force_first_over(1, 3));
    assert!(counter.bouncy_count() * 3 >= answer);
}

#[test]
fn test_matches_brute_force_for_other_thresholds() {
    for (numerator, denominator) in [(1, 10), (1, 2), (3, 4), (4, 5), (17, 20)] {
        let threshold = Threshold::new(numerator, denominator).unwrap();
        assert_eq!(
            solve(threshold),
            Ok(common::brute_force_first_over(numerator, denominator)),
            "threshold {}/{}",
            numerator,
            denominator
        );
    }
}

#[test]
fn test_idempotent() {
    let threshold = Threshold::percent(90);
    let first = solve(threshold);
    let second = solve(threshold);
    assert_eq!(first, second);

    let mut a = Counter::new(threshold);
    let mut b = Counter::new(threshold);
    a.run().unwrap();
    b.run().unwrap();
    assert_eq!(a.bouncy_count(), b.bouncy_count());
    assert_eq!(a.statistics(), b.statistics());
}
