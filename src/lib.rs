// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Least number at which the proportion of bouncy numbers reaches a threshold.
//!
//! Working left to right, an increasing number never has a digit exceeded by
//! the digit to its left (134468), and a decreasing number never has a digit
//! exceeded by the digit to its right (664210). A number that is neither is
//! *bouncy* (155349). The first bouncy number is 101. Below 1000 there are
//! 525 of them, and the proportion first reaches 50% at 538.
//!
//! This crate finds the first number at which the proportion reaches a
//! fixed [`THRESHOLD`] (99% by default, answer 1587000).
//!
//! # Architecture
//!
//! - [`threshold`]: the compile-time target proportion, as an exact fraction
//! - [`counter`]: the level-expanding counter that generates numbers in
//!   ascending order and classifies each one in O(1) from its parent
//! - [`statistics`]: per-classification tallies kept by the counter
//!
//! # Example
//!
//! ```
//! use bouncy_search::{solve, Threshold};
//!
//! assert_eq!(solve(Threshold::percent(90)), Ok(21780));
//! ```

pub mod counter;
pub mod statistics;
pub mod threshold;

// Re-export commonly used types
pub use counter::{report, solve, Classification, Counter, ExpansionError};
pub use statistics::Statistics;
pub use threshold::{Threshold, ThresholdError, THRESHOLD};
