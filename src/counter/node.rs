// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! One generated number and its monotonicity flags.
//!
//! A node stands for the digit path from the root to it. Its flags are
//! propagated from the parent, never recomputed from the digits.

use strum_macros::EnumCount as EnumCountMacro;

/// How the digits of a number move, read left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro)]
#[repr(u8)]
pub enum Classification {
    /// Non-decreasing, with at least one strict rise.
    Increasing,
    /// Non-increasing, with at least one strict fall.
    Decreasing,
    /// Both at once: a single repeated digit, like `5` or `111`.
    Constant,
    /// Neither.
    Bouncy,
}

impl Classification {
    fn from_flags(is_increasing: bool, is_decreasing: bool) -> Self {
        match (is_increasing, is_decreasing) {
            (true, true) => Classification::Constant,
            (true, false) => Classification::Increasing,
            (false, true) => Classification::Decreasing,
            (false, false) => Classification::Bouncy,
        }
    }

    /// Classify `value` by walking its decimal digits directly.
    ///
    /// This is the O(digits) reference the counter is checked against.
    pub fn of_value(value: u64) -> Self {
        let mut is_increasing = true;
        let mut is_decreasing = true;
        // Walk right to left: `right` is the digit after `left`.
        let mut rest = value / 10;
        let mut right = value % 10;
        while rest > 0 {
            let left = rest % 10;
            if left > right {
                is_increasing = false;
            }
            if left < right {
                is_decreasing = false;
            }
            right = left;
            rest /= 10;
        }
        Self::from_flags(is_increasing, is_decreasing)
    }
}

/// A frontier record: `(value, last_digit, is_increasing, is_decreasing)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub value: u64,
    pub last_digit: u8,
    pub is_increasing: bool,
    pub is_decreasing: bool,
}

impl Node {
    /// A single-digit number. Trivially both increasing and decreasing.
    pub fn digit(d: u8) -> Self {
        debug_assert!(d < 10);
        Self {
            value: d as u64,
            last_digit: d,
            is_increasing: true,
            is_decreasing: true,
        }
    }

    /// The number formed by appending digit `d` to this one.
    #[inline]
    pub fn child(&self, d: u8) -> Self {
        Self {
            value: self.value * 10 + d as u64,
            last_digit: d,
            is_increasing: self.is_increasing && d >= self.last_digit,
            is_decreasing: self.is_decreasing && d <= self.last_digit,
        }
    }

    pub fn classification(&self) -> Classification {
        Classification::from_flags(self.is_increasing, self.is_decreasing)
    }

    /// Neither flag set. Callers must still exclude leading-zero paths.
    #[inline]
    pub fn is_bouncy(&self) -> bool {
        !self.is_increasing && !self.is_decreasing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(digits: &[u8]) -> Node {
        let (first, rest) = digits.split_first().unwrap();
        rest.iter().fold(Node::digit(*first), |node, &d| node.child(d))
    }

    #[test]
    fn test_single_digits_are_constant() {
        for d in 0..10 {
            let node = Node::digit(d);
            assert_eq!(node.value, d as u64);
            assert_eq!(node.classification(), Classification::Constant);
        }
    }

    #[test]
    fn test_child_propagation() {
        assert_eq!(path(&[1, 3, 4, 4, 6, 8]).classification(), Classification::Increasing);
        assert_eq!(path(&[6, 6, 4, 2, 1, 0]).classification(), Classification::Decreasing);
        assert_eq!(path(&[1, 1, 1]).classification(), Classification::Constant);
        assert_eq!(path(&[1, 5, 5, 3, 4, 9]).classification(), Classification::Bouncy);

        let node = path(&[1, 0, 1]);
        assert_eq!(node.value, 101);
        assert_eq!(node.last_digit, 1);
        assert!(node.is_bouncy());
    }

    #[test]
    fn test_bouncy_is_sticky() {
        let node = path(&[1, 2, 1]);
        assert!(node.is_bouncy());
        for d in 0..10 {
            assert!(node.child(d).is_bouncy());
        }
    }

    #[test]
    fn test_of_value() {
        assert_eq!(Classification::of_value(0), Classification::Constant);
        assert_eq!(Classification::of_value(5), Classification::Constant);
        assert_eq!(Classification::of_value(134468), Classification::Increasing);
        assert_eq!(Classification::of_value(664210), Classification::Decreasing);
        assert_eq!(Classification::of_value(155349), Classification::Bouncy);
        assert_eq!(Classification::of_value(101), Classification::Bouncy);
        assert_eq!(Classification::of_value(100), Classification::Decreasing);
        assert_eq!(Classification::of_value(1_587_000), Classification::Bouncy);
    }

    #[test]
    fn test_first_bouncy_number_is_101() {
        let first = (1..1000).find(|&v| Classification::of_value(v) == Classification::Bouncy);
        assert_eq!(first, Some(101));
    }
}
