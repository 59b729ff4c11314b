// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for level expansion.

use thiserror::Error;

/// Errors that can occur while adding a digit level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpansionError {
    /// The next level would hold values that do not fit in a `u64`.
    #[error("cannot expand past level {level}: values would overflow u64")]
    DigitLimit { level: usize },
}
