// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! One counter per [`Classification`], incremented by the counter for every
//! number with at least two digits it generates.

use crate::counter::Classification;
use strum::EnumCount;

const COUNT: usize = Classification::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    #[inline]
    pub(crate) fn increment_counter(&mut self, counter: Classification) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Classification) -> u64 {
        self.stats[counter as usize]
    }

    /// Numbers tallied so far, across all classifications.
    pub fn total(&self) -> u64 {
        self.stats.iter().sum()
    }
}
