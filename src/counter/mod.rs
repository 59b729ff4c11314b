// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Level-expanding counter.
//!
//! The counter generates every number of digit-length L+1 from those of
//! length L by appending each digit 0..=9 in turn. This is a trie walked one
//! level at a time: the root is the empty digit sequence and each edge appends
//! a digit on the right.
//!
//! ```text
//!                  root
//!       +--+--+--+--+--+--+--+--+--+
//!       0  1  2  3  4  5  6  7  8  9            level 1
//!       |                       |
//!   00 01 .. 09             80 81 .. 89        level 2
//! ```
//!
//! Only the deepest level (the frontier) is kept. Each new number takes its
//! increasing/decreasing flags from its parent and the appended digit, so
//! classifying it is O(1) rather than O(digits).
//!
//! Paths with a leading zero (`07`, `0101`) duplicate shorter numbers and carry
//! flags that describe the path, not the value. They stay in the frontier so
//! that the children of index `i` land at `10 * i`, but they are never counted.
//!
//! # Example
//!
//! ```
//! use bouncy_search::{Counter, Threshold};
//!
//! let mut counter = Counter::new(Threshold::percent(50));
//! assert_eq!(counter.run(), Ok(538));
//! assert_eq!(counter.first_over(), Some(538));
//! ```

pub mod errors;
pub mod frontier;
pub mod node;

pub use errors::ExpansionError;
pub use frontier::Frontier;
pub use node::{Classification, Node};

use crate::statistics::Statistics;
use crate::threshold::Threshold;
use tracing::{debug, info};

/// Deepest level whose values still fit in a `u64` (19 digits).
pub const MAX_LEVEL: usize = 19;

/// The aggregate search state.
///
/// Created once, expanded level by level, and terminal once `first_over` is
/// set.
#[derive(Debug, Clone)]
pub struct Counter {
    threshold: Threshold,

    /// Numbers of the current digit-length, in ascending order.
    frontier: Frontier,

    /// Bouncy numbers seen so far, over every level.
    bouncy_count: u64,

    /// First number at which the bouncy proportion reaches `threshold`.
    first_over: Option<u64>,

    statistics: Statistics,
}

impl Counter {
    /// Seed the counter with the single-digit numbers (level 1).
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            frontier: Frontier::initial(),
            bouncy_count: 0,
            first_over: None,
            statistics: Statistics::new(),
        }
    }

    /// Add one digit position across the whole frontier.
    ///
    /// Every new number is generated in ascending order. Bouncy ones bump the
    /// running count, and the first one at which
    /// `bouncy_count >= value * threshold` becomes the answer. Expansion stops
    /// at that number: the rest of the level is not generated and the level
    /// does not advance.
    ///
    /// Returns `Ok(Some(answer))` once the answer is known (including on later
    /// calls, which change nothing) and `Ok(None)` if a full level was added
    /// without reaching the threshold.
    pub fn expand_level(&mut self) -> Result<Option<u64>, ExpansionError> {
        if self.first_over.is_some() {
            return Ok(self.first_over);
        }

        let level = self.frontier.level();
        if level >= MAX_LEVEL {
            return Err(ExpansionError::DigitLimit { level });
        }

        // Smallest number with level + 1 digits. It is itself decreasing, so
        // `>=` here agrees with counting bouncy values strictly above it.
        let lower = 10u64.pow(level as u32);
        let mut next = Vec::with_capacity(self.frontier.len() * 10);

        for parent in &self.frontier {
            for d in 0..10 {
                let child = parent.child(d);
                if child.value >= lower {
                    let class = child.classification();
                    self.statistics.increment_counter(class);
                    if class == Classification::Bouncy {
                        self.bouncy_count += 1;
                        if self.threshold.is_reached(self.bouncy_count, child.value) {
                            info!(
                                level = level + 1,
                                bouncy = self.bouncy_count,
                                value = child.value,
                                threshold = %self.threshold,
                                "threshold reached"
                            );
                            self.first_over = Some(child.value);
                            return Ok(self.first_over);
                        }
                    }
                }
                next.push(child);
            }
        }

        self.frontier = Frontier::from_level(level + 1, next);
        debug!(
            level = self.frontier.level(),
            frontier = self.frontier.len(),
            bouncy = self.bouncy_count,
            "level complete"
        );
        Ok(None)
    }

    /// Expand levels until the threshold is reached.
    pub fn run(&mut self) -> Result<u64, ExpansionError> {
        loop {
            if let Some(answer) = self.expand_level()? {
                return Ok(answer);
            }
        }
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Digit-length of the current frontier.
    pub fn level(&self) -> usize {
        self.frontier.level()
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    pub fn bouncy_count(&self) -> u64 {
        self.bouncy_count
    }

    pub fn first_over(&self) -> Option<u64> {
        self.first_over
    }

    pub fn is_done(&self) -> bool {
        self.first_over.is_some()
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}

/// Least number at which the bouncy proportion reaches `threshold`.
///
/// Runs a fresh [`Counter`], so the result depends on `threshold` alone.
pub fn solve(threshold: Threshold) -> Result<u64, ExpansionError> {
    Counter::new(threshold).run()
}

/// The two-line result printed by the `bouncy` binary.
pub fn report(threshold: Threshold, first_over: u64) -> String {
    format!(
        "The proportion needed is: {}\nThe first number to meet that proportion is:{}\n",
        threshold, first_over
    )
}
