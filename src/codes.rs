//! Code table generation.

use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::tree::HuffmanNode;

/// Mapping from symbol to its code, a string of `'0'` and `'1'`.
///
/// A tree consisting of a single leaf gives that symbol the empty code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, String>,
}

impl CodeTable {
    /// Assign a code to every leaf below `root`: `0` for a left edge,
    /// `1` for a right edge.
    pub fn generate(root: &HuffmanNode) -> Self {
        let mut codes = BTreeMap::new();
        Self::build_codes(root, String::new(), &mut codes);
        Self { codes }
    }

    fn build_codes(node: &HuffmanNode, prefix: String, codes: &mut BTreeMap<char, String>) {
        match node {
            HuffmanNode::Leaf { symbol, .. } => {
                codes.insert(*symbol, prefix);
            }
            HuffmanNode::Internal { left, right, .. } => {
                let mut left_prefix = prefix.clone();
                left_prefix.push('0');
                Self::build_codes(left, left_prefix, codes);

                let mut right_prefix = prefix;
                right_prefix.push('1');
                Self::build_codes(right, right_prefix, codes);
            }
        }
    }

    /// Code for `symbol`.
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(symbol, code)` pairs in ascending character order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.codes.iter(),
        }
    }

    /// Length of the longest code.
    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(String::len).max().unwrap_or(0)
    }

    /// Whether no code is a prefix of another.
    ///
    /// After sorting, a code that prefixes any other code also prefixes
    /// its immediate successor, so adjacent pairs suffice.
    pub fn is_prefix_free(&self) -> bool {
        let mut sorted: Vec<&str> = self.codes.values().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }
}

/// Iterator over the entries of a [`CodeTable`].
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, char, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (char, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&ch, code)| (ch, code.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a CodeTable {
    type Item = (char, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
