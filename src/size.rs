//! Encoded size accounting.

use std::fmt;

use crate::codes::CodeTable;
use crate::frequency::FrequencyTable;

/// Fixed width of one stored symbol in the code table.
pub const TABLE_BITS_PER_SYMBOL: u64 = 8;

/// Theoretical size of a Huffman encoding, in bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeReport {
    /// Sum of `code length * frequency` over all symbols.
    pub message_bits: u64,
    /// `TABLE_BITS_PER_SYMBOL` per distinct symbol.
    pub table_overhead_bits: u64,
    /// `message_bits + table_overhead_bits`.
    pub total_bits: u64,
}

impl SizeReport {
    /// Compute the report for a code table and the frequencies it was built from.
    ///
    /// Symbols in `table` that `freq` does not know contribute no message bits.
    pub fn compute(table: &CodeTable, freq: &FrequencyTable) -> Self {
        let message_bits = table
            .iter()
            .map(|(symbol, code)| code.len() as u64 * freq.get(symbol).unwrap_or(0))
            .sum();
        let table_overhead_bits = TABLE_BITS_PER_SYMBOL * table.len() as u64;
        Self {
            message_bits,
            table_overhead_bits,
            total_bits: message_bits + table_overhead_bits,
        }
    }
}

impl fmt::Display for SizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The message size is {}.\nThe required ASCII table size is {}.\nThe total bits require via Hoffman coding is {}.",
            self.message_bits, self.table_overhead_bits, self.total_bits
        )
    }
}
