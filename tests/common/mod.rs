// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use bouncy_search::Classification;

/// Number of bouncy integers in `1..=n`, by direct digit-by-digit classification.
#[allow(dead_code)]
pub fn brute_force_bouncy_count(n: u64) -> u64 {
    (1..=n)
        .filter(|&v| Classification::of_value(v) == Classification::Bouncy)
        .count() as u64
}

/// First `n` with `bouncy(1..=n) * denominator >= n * numerator`, by brute force.
#[allow(dead_code)]
pub fn brute_force_first_over(numerator: u64, denominator: u64) -> u64 {
    let mut bouncy = 0u64;
    let mut n = 0u64;
    loop {
        n += 1;
        if Classification::of_value(n) == Classification::Bouncy {
            bouncy += 1;
            if bouncy * denominator >= n * numerator {
                return n;
            }
        }
    }
}
