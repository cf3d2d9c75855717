//! Huffman tree construction.
//!
//! The builder repeatedly merges the two highest-priority nodes of a
//! min-priority queue. Priority is the key `(frequency, tie_char, sequence)`:
//!
//! - lower frequency first;
//! - on equal frequency, the smaller tie character first, where leaves use
//!   their own character and merged nodes use [`MERGE_SENTINEL`];
//! - on a full tie, the node inserted into the queue first.
//!
//! The last component makes the order total, so the same frequency table
//! always produces the same tree. The first node removed in a round becomes
//! the left child.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;

/// Tie-break character used by merged nodes.
pub const MERGE_SENTINEL: char = '#';

/// Huffman tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    /// A single input symbol.
    Leaf {
        /// The character this leaf stands for.
        symbol: char,
        /// Occurrences of `symbol`.
        freq: u64,
    },
    /// A merge of two subtrees. `freq` is the sum of both children.
    Internal {
        /// Combined frequency.
        freq: u64,
        /// Subtree reached with a `0` bit.
        left: Box<HuffmanNode>,
        /// Subtree reached with a `1` bit.
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Frequency of this node.
    pub fn frequency(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { freq, .. } => *freq,
            HuffmanNode::Internal { freq, .. } => *freq,
        }
    }

    /// Character used to break ties between nodes of equal frequency.
    pub fn tie_char(&self) -> char {
        match self {
            HuffmanNode::Leaf { symbol, .. } => *symbol,
            HuffmanNode::Internal { .. } => MERGE_SENTINEL,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    /// Left child, if this is an internal node.
    pub fn left(&self) -> Option<&HuffmanNode> {
        match self {
            HuffmanNode::Internal { left, .. } => Some(left.as_ref()),
            HuffmanNode::Leaf { .. } => None,
        }
    }

    /// Right child, if this is an internal node.
    pub fn right(&self) -> Option<&HuffmanNode> {
        match self {
            HuffmanNode::Internal { right, .. } => Some(right.as_ref()),
            HuffmanNode::Leaf { .. } => None,
        }
    }

    fn merge(left: Self, right: Self) -> Self {
        HuffmanNode::Internal {
            freq: left.frequency() + right.frequency(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 1,
            HuffmanNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    fn depth(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 0,
            HuffmanNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Queue entry: a node plus its insertion sequence number.
#[derive(Debug)]
struct Queued {
    seq: u64,
    node: HuffmanNode,
}

impl Queued {
    fn key(&self) -> (u64, char, u64) {
        (self.node.frequency(), self.node.tie_char(), self.seq)
    }
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Queued {}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key()) // Min-priority queue
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A Huffman code tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffmanNode,
}

impl HuffmanTree {
    /// Build the tree for `freq`.
    ///
    /// A table with a single symbol produces a tree whose root is that leaf.
    ///
    /// # Errors
    /// Returns `Error::EmptyInput` if `freq` has no symbols.
    pub fn build(freq: &FrequencyTable) -> Result<Self> {
        let mut pq = BinaryHeap::with_capacity(freq.len());
        let mut seq = 0u64;
        for (symbol, f) in freq {
            pq.push(Queued {
                seq,
                node: HuffmanNode::Leaf { symbol, freq: f },
            });
            seq += 1;
        }

        loop {
            let Some(left) = pq.pop() else {
                return Err(Error::EmptyInput);
            };
            let Some(right) = pq.pop() else {
                return Ok(Self { root: left.node });
            };
            pq.push(Queued {
                seq,
                node: HuffmanNode::merge(left.node, right.node),
            });
            seq += 1;
        }
    }

    /// The root node.
    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// Consume the tree, returning its root node.
    pub fn into_root(self) -> HuffmanNode {
        self.root
    }

    /// Number of leaves, i.e. distinct symbols.
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Length of the longest root-to-leaf path. Zero for a single leaf.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(symbol: char, freq: u64) -> HuffmanNode {
        HuffmanNode::Leaf { symbol, freq }
    }

    fn build(text: &str) -> HuffmanTree {
        HuffmanTree::build(&FrequencyTable::count(text)).unwrap()
    }

    fn assert_sums(node: &HuffmanNode) {
        if let HuffmanNode::Internal { freq, left, right } = node {
            assert_eq!(*freq, left.frequency() + right.frequency());
            assert_sums(left);
            assert_sums(right);
        }
    }

    #[test]
    fn test_empty_table_is_an_error() {
        let err = HuffmanTree::build(&FrequencyTable::default()).unwrap_err();
        assert!(matches!(err, Error::EmptyInput));
    }

    #[test]
    fn test_single_symbol_root_is_leaf() {
        let tree = build("aaaa");
        assert_eq!(tree.root(), &leaf('a', 4));
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.leaf_count(), 1);
    }

    #[test]
    fn test_two_symbols_smaller_char_goes_left() {
        let tree = build("bbaa");
        assert_eq!(tree.root().left(), Some(&leaf('a', 2)));
        assert_eq!(tree.root().right(), Some(&leaf('b', 2)));
        assert_eq!(tree.root().frequency(), 4);
    }

    #[test]
    fn test_three_way_tie_merges_alphabetically() {
        // a+b merge first; then c (2) beats the merged node (4).
        let tree = build("aabbcc");
        let root = tree.root();
        assert_eq!(root.left(), Some(&leaf('c', 2)));
        let merged = root.right().unwrap();
        assert_eq!(merged.left(), Some(&leaf('a', 2)));
        assert_eq!(merged.right(), Some(&leaf('b', 2)));
    }

    #[test]
    fn test_sentinel_orders_merged_nodes_before_later_letters() {
        // Merged a+b has weight 2 and tie char '#', which sorts before 'z'.
        let tree = build("abzz");
        let root = tree.root();
        assert_eq!(root.right(), Some(&leaf('z', 2)));
        assert!(!root.left().unwrap().is_leaf());
    }

    #[test]
    fn test_real_sentinel_leaf_vs_merged_node() {
        // The '#' leaf and merged a+b tie completely on (freq, char); the
        // leaf was queued first.
        let tree = build("##ab");
        let root = tree.root();
        assert_eq!(root.left(), Some(&leaf('#', 2)));
        assert!(!root.right().unwrap().is_leaf());
    }

    #[test]
    fn test_equal_internal_nodes_merge_in_creation_order() {
        let tree = build("aabbccdd");
        let root = tree.root();
        let first = root.left().unwrap();
        let second = root.right().unwrap();
        assert_eq!(first.left(), Some(&leaf('a', 2)));
        assert_eq!(first.right(), Some(&leaf('b', 2)));
        assert_eq!(second.left(), Some(&leaf('c', 2)));
        assert_eq!(second.right(), Some(&leaf('d', 2)));
    }

    #[test]
    fn test_internal_frequencies_are_child_sums() {
        let tree = build("the quick brown fox jumps over the lazy dog");
        assert_sums(tree.root());
        assert_eq!(tree.root().frequency(), 43);
        assert_eq!(tree.leaf_count(), 27);
    }

    #[test]
    fn test_build_is_deterministic() {
        let freq = FrequencyTable::count("mississippi river");
        let a = HuffmanTree::build(&freq).unwrap();
        let b = HuffmanTree::build(&freq).unwrap();
        assert_eq!(a, b);
    }
}
