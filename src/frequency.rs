//! Symbol frequency analysis.
//!
//! A [`FrequencyTable`] is built once per input and never modified
//! afterwards. Iteration is in ascending character order.

use std::collections::btree_map;
use std::collections::BTreeMap;

/// Occurrence count for each distinct character of a text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<char, u64>,
}

impl FrequencyTable {
    /// Count every character of `text`.
    ///
    /// Empty text yields an empty table.
    pub fn count(text: &str) -> Self {
        text.chars().collect()
    }

    /// Occurrences of `symbol`, or `None` if it never appears.
    pub fn get(&self, symbol: char) -> Option<u64> {
        self.counts.get(&symbol).copied()
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the table has no symbols.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of characters counted.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// `(symbol, count)` pairs in ascending character order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.counts.iter(),
        }
    }
}

impl FromIterator<char> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let counts = iter.into_iter().fold(BTreeMap::new(), |mut acc, ch| {
            *acc.entry(ch).or_insert(0) += 1;
            acc
        });
        Self { counts }
    }
}

/// Iterator over the entries of a [`FrequencyTable`].
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, char, u64>,
}

impl Iterator for Iter<'_> {
    type Item = (char, u64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&ch, &n)| (ch, n))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = (char, u64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
