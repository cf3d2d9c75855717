//! Error types for Huffman coding.

use thiserror::Error;

/// Error variants for Huffman coding operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A tree was requested for a frequency table with no symbols.
    #[error("cannot build a Huffman tree from empty input")]
    EmptyInput,

    /// The text contains a character the code table does not cover.
    #[error("no code for symbol {0:?}")]
    UnknownSymbol(char),

    /// The bitstring contains something other than `'0'` or `'1'`.
    #[error("invalid bit {found:?} at position {position}")]
    InvalidBit {
        /// Character offset into the bitstring.
        position: usize,
        /// The offending character.
        found: char,
    },

    /// The bitstring ended in the middle of a code.
    #[error("encoding truncated: {position} bits consumed without reaching a leaf")]
    TruncatedCode {
        /// Length of the bitstring.
        position: usize,
    },

    /// An I/O error occurred while writing a report.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error means the bitstring handed to the decoder was malformed.
    pub fn is_malformed_encoding(&self) -> bool {
        matches!(self, Error::InvalidBit { .. } | Error::TruncatedCode { .. })
    }
}

/// A specialized Result type for Huffman coding operations.
pub type Result<T> = std::result::Result<T, Error>;
