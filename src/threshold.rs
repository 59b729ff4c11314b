// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time threshold for the bouncy proportion.
//!
//! THRESHOLD can be configured at compile time via cargo features.
//!
//! # Supported THRESHOLD values
//!
//! - 0.50: first reached at 538
//! - 0.90: first reached at 21780
//! - 0.99: first reached at 1587000 - **default**
//!
//! # Example
//!
//! ```bash
//! # Default: THRESHOLD=0.99
//! cargo build
//!
//! # Build for THRESHOLD=0.90
//! cargo build --features threshold_90
//! ```

use std::fmt;
use thiserror::Error;

/// Target proportion of bouncy numbers.
///
/// This is configurable at compile time via cargo features:
/// - `threshold_50` → 0.50
/// - `threshold_90` → 0.90
/// - `threshold_99` → 0.99 (explicit)
/// - (default) → 0.99 (when no feature specified)
#[cfg(not(any(
    feature = "threshold_50",
    feature = "threshold_90",
    feature = "threshold_99"
)))]
pub const THRESHOLD: Threshold = Threshold::percent(99);

#[cfg(feature = "threshold_50")]
pub const THRESHOLD: Threshold = Threshold::percent(50);

#[cfg(feature = "threshold_90")]
pub const THRESHOLD: Threshold = Threshold::percent(90);

#[cfg(feature = "threshold_99")]
pub const THRESHOLD: Threshold = Threshold::percent(99);

/// Errors raised when building a [`Threshold`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThresholdError {
    #[error("threshold denominator must be non-zero")]
    ZeroDenominator,

    /// The proportion is not strictly between 0 and 1.
    #[error("threshold {numerator}/{denominator} is outside the open interval (0, 1)")]
    OutOfRange { numerator: u64, denominator: u64 },
}

/// An exact rational proportion in the open interval (0, 1).
///
/// Kept as a fraction so the crossing test `bouncy >= value * threshold`
/// can be done in integer arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold {
    numerator: u64,
    denominator: u64,
}

impl Threshold {
    /// Create a threshold of `numerator / denominator`.
    pub fn new(numerator: u64, denominator: u64) -> Result<Self, ThresholdError> {
        if denominator == 0 {
            return Err(ThresholdError::ZeroDenominator);
        }
        if numerator == 0 || numerator >= denominator {
            return Err(ThresholdError::OutOfRange {
                numerator,
                denominator,
            });
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// A whole-number percentage, e.g. `percent(99)` for 0.99.
    ///
    /// # Panics
    ///
    /// Panics (at compile time, when used in a const) if `p` is not in 1..=99.
    pub const fn percent(p: u64) -> Self {
        assert!(p > 0 && p < 100, "percentage must be in 1..=99");
        Self {
            numerator: p,
            denominator: 100,
        }
    }

    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    pub fn as_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// True when `bouncy >= value * self`, evaluated exactly.
    #[inline]
    pub fn is_reached(&self, bouncy: u64, value: u64) -> bool {
        bouncy as u128 * self.denominator as u128 >= value as u128 * self.numerator as u128
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.as_f64())
    }
}
