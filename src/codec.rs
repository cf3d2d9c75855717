//! Encoding text to bitstrings and decoding it back.
//!
//! Bitstrings are text made of `'0'` and `'1'` characters, one per bit.
//!
//! # Single-symbol trees
//!
//! When the tree is a lone leaf, its symbol has the empty code and every
//! encoding is the empty string. Decoding the empty string with such a tree
//! repeats the symbol as many times as the leaf's frequency, which restores
//! the text the tree was built from. Any non-empty bitstring is rejected.

use crate::codes::CodeTable;
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::tree::{HuffmanNode, HuffmanTree};

/// Concatenate the codes of every character of `text`.
///
/// # Errors
/// Returns `Error::UnknownSymbol` for a character without a code.
pub fn encode(text: &str, table: &CodeTable) -> Result<String> {
    let mut bits = String::with_capacity(text.len() * table.max_code_len().max(1));
    for ch in text.chars() {
        let code = table.get(ch).ok_or(Error::UnknownSymbol(ch))?;
        bits.push_str(code);
    }
    Ok(bits)
}

/// Walk the tree from `root` one bit at a time, emitting a symbol and
/// returning to the root at every leaf.
///
/// # Errors
/// - `Error::InvalidBit` if `bits` contains anything but `'0'`/`'1'`, or is
///   non-empty while `root` is a leaf.
/// - `Error::TruncatedCode` if `bits` ends before reaching a leaf.
pub fn decode(bits: &str, root: &HuffmanNode) -> Result<String> {
    if let HuffmanNode::Leaf { symbol, freq } = root {
        if let Some(found) = bits.chars().next() {
            return Err(Error::InvalidBit { position: 0, found });
        }
        return Ok(std::iter::repeat(*symbol).take(*freq as usize).collect());
    }

    let mut out = String::new();
    let mut curr = root;
    let mut mid_code = false;
    for (position, bit) in bits.chars().enumerate() {
        let next = match (bit, curr) {
            ('0', HuffmanNode::Internal { left, .. }) => left.as_ref(),
            ('1', HuffmanNode::Internal { right, .. }) => right.as_ref(),
            (found, _) => return Err(Error::InvalidBit { position, found }),
        };

        if let HuffmanNode::Leaf { symbol, .. } = next {
            out.push(*symbol);
            curr = root;
            mid_code = false;
        } else {
            curr = next;
            mid_code = true;
        }
    }

    if mid_code {
        return Err(Error::TruncatedCode {
            position: bits.chars().count(),
        });
    }
    Ok(out)
}

/// Huffman encoder.
#[derive(Debug, Clone)]
pub struct HuffmanEncoder {
    table: CodeTable,
}

impl HuffmanEncoder {
    /// Create an encoder from symbol frequencies, building a fresh tree.
    ///
    /// # Errors
    /// Returns `Error::EmptyInput` if `freq` is empty.
    pub fn new(freq: &FrequencyTable) -> Result<Self> {
        let tree = HuffmanTree::build(freq)?;
        Ok(Self::from_table(CodeTable::generate(tree.root())))
    }

    /// Create an encoder over an existing code table.
    pub fn from_table(table: CodeTable) -> Self {
        Self { table }
    }

    /// Encode `text` into a bitstring.
    pub fn encode(&self, text: &str) -> Result<String> {
        encode(text, &self.table)
    }

    /// The code table in use.
    pub fn table(&self) -> &CodeTable {
        &self.table
    }
}

/// Huffman decoder.
#[derive(Debug, Clone)]
pub struct HuffmanDecoder {
    tree: HuffmanTree,
}

impl HuffmanDecoder {
    /// Create a decoder over `tree`.
    pub fn new(tree: HuffmanTree) -> Self {
        Self { tree }
    }

    /// Create a decoder from symbol frequencies, building a fresh tree.
    pub fn from_frequencies(freq: &FrequencyTable) -> Result<Self> {
        HuffmanTree::build(freq).map(Self::new)
    }

    /// Decode a bitstring back into text.
    pub fn decode(&self, bits: &str) -> Result<String> {
        decode(bits, self.tree.root())
    }

    /// The tree in use.
    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }
}
