//! Full pipeline and its text rendering.
//!
//! [`Report::from_text`] runs every stage on one input and keeps the results.
//! Nothing is cached between calls: each report owns a freshly built
//! frequency table, tree and code table.
//!
//! The rendering is four blocks, concatenated by [`fmt::Display`]:
//!
//! ```text
//! a - 0
//! b - 1
//! The encoded message is 0011
//! The decoded message is aabb
//! The message size is 4.
//! The required ASCII table size is 16.
//! The total bits require via Hoffman coding is 20.
//! ```

use std::fmt::{self, Write as _};
use std::io;

use crate::codec::{decode, encode};
use crate::codes::CodeTable;
use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::size::SizeReport;
use crate::tree::HuffmanTree;

/// Every artefact of encoding one text.
#[derive(Debug, Clone)]
pub struct Report {
    frequencies: FrequencyTable,
    tree: HuffmanTree,
    codes: CodeTable,
    encoded: String,
    decoded: String,
    size: SizeReport,
}

impl Report {
    /// Count, build, encode, decode and measure `text`.
    ///
    /// # Errors
    /// Returns `Error::EmptyInput` for empty text.
    pub fn from_text(text: &str) -> Result<Self> {
        let frequencies = FrequencyTable::count(text);
        let tree = HuffmanTree::build(&frequencies)?;
        let codes = CodeTable::generate(tree.root());
        let encoded = encode(text, &codes)?;
        let decoded = decode(&encoded, tree.root())?;
        debug_assert_eq!(decoded, text);
        let size = SizeReport::compute(&codes, &frequencies);

        Ok(Self {
            frequencies,
            tree,
            codes,
            encoded,
            decoded,
            size,
        })
    }

    /// Symbol frequencies of the input.
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// The tree built from the frequencies.
    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    /// The generated code table.
    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }

    /// The encoded bitstring.
    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    /// The text recovered from the bitstring.
    pub fn decoded(&self) -> &str {
        &self.decoded
    }

    /// Size accounting for the encoding.
    pub fn size(&self) -> SizeReport {
        self.size
    }

    /// One `"<symbol> - <code>"` line per symbol.
    pub fn codes_listing(&self) -> String {
        let mut out = String::new();
        for (symbol, code) in &self.codes {
            let _ = writeln!(out, "{symbol} - {code}");
        }
        out
    }

    /// `"The encoded message is <bits>\n"`.
    pub fn encoded_line(&self) -> String {
        format!("The encoded message is {}\n", self.encoded)
    }

    /// `"The decoded message is <text>\n"`.
    pub fn decoded_line(&self) -> String {
        format!("The decoded message is {}\n", self.decoded)
    }

    /// The three size lines, without a trailing newline.
    pub fn size_lines(&self) -> String {
        self.size.to_string()
    }

    /// Write the full rendering to `w`.
    pub fn write_to<W: io::Write>(&self, w: &mut W) -> Result<()> {
        write!(w, "{self}")?;
        w.flush()?;
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.codes_listing())?;
        f.write_str(&self.encoded_line())?;
        f.write_str(&self.decoded_line())?;
        f.write_str(&self.size_lines())
    }
}
