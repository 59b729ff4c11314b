// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The numbers generated at the current digit-length.
//!
//! The frontier is a flat buffer in ascending digit-path order, so element
//! `i + 1` is what a linked frontier would call the "next" node of element
//! `i`, and the children of element `i` become elements `10 * i .. 10 * i + 10`
//! of the next level. Ancestor levels are not kept.

use super::node::Node;

#[derive(Debug, Clone)]
pub struct Frontier {
    /// Digit-length of every path in `nodes`.
    level: usize,
    nodes: Vec<Node>,
}

impl Frontier {
    /// Level 1: the ten single-digit paths `0..=9`.
    pub fn initial() -> Self {
        Self {
            level: 1,
            nodes: (0..10).map(Node::digit).collect(),
        }
    }

    /// Wrap a fully built next-level buffer.
    pub(crate) fn from_level(level: usize, nodes: Vec<Node>) -> Self {
        Self { level, nodes }
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Smallest value with exactly `level` digits (1 for level 1).
    pub fn lower_bound(&self) -> u64 {
        10u64.pow(self.level as u32 - 1)
    }

    /// Paths without a leading zero: the numbers this level contributes to
    /// the count, in ascending order.
    pub fn counted(&self) -> impl Iterator<Item = &Node> + '_ {
        let lower = self.lower_bound();
        self.nodes.iter().filter(move |node| node.value >= lower)
    }
}

impl<'a> IntoIterator for &'a Frontier {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
