//! # Huffman Coding
//!
//! *Optimal prefix-free codes from symbol frequencies.*
//!
//! ## Intuition First
//!
//! Morse code already gets the idea right: the letter you send most often
//! (`e`) gets the shortest signal. Huffman coding makes that rule exact.
//! Given how often each symbol occurs, it hands out binary codes so that the
//! total number of bits for the message is as small as it can be, while no
//! code is the beginning of another. The second property means a decoder can
//! read bits left to right and always know where one symbol ends.
//!
//! ## The Problem
//!
//! Fixed-width encodings (8 bits per character) waste space on skewed
//! distributions. Variable-width codes save space but need delimiters, unless
//! the code set is *prefix-free*. We want the prefix-free code with the
//! minimal expected length.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy bounds the average code length
//! 1949  Fano        Shannon-Fano coding: top-down splitting, not optimal
//! 1952  Huffman     Bottom-up merging: provably optimal prefix codes
//! 1978  Gallager    Adaptive Huffman coding
//! 1993  PKZIP/DEFLATE  Huffman as the entropy stage of LZ77 compressors
//! ```
//!
//! ## Mathematical Formulation
//!
//! For symbols $s$ with frequencies $f_s$ and code lengths $\ell_s$, Huffman's
//! greedy merge minimises the weighted path length
//!
//! ```text
//! L = Σ_s f_s · ℓ_s
//! ```
//!
//! over all prefix-free codes. Each merge of two subtrees adds their combined
//! weight to `L`, so `L` also equals the sum of all internal node weights.
//!
//! ## Complexity Analysis
//!
//! - **Build**: $O(n \log n)$ for $n$ distinct symbols (binary heap).
//! - **Encode / decode**: $O(m)$ in the length of the text, or of the bits.
//!
//! ## Failure Modes
//!
//! 1. **Empty input**: there is no tree to build ([`Error::EmptyInput`]).
//! 2. **Single symbol**: the lone code is empty. Decoding relies on the
//!    leaf's frequency to know how many symbols to emit.
//! 3. **Malformed bits**: non-binary characters or a truncated final code
//!    are rejected, never guessed at.
//!
//! ## Implementation Notes
//!
//! - Tie-breaking is fully deterministic: identical input always yields
//!   an identical code table (see [`tree`]).
//! - Bitstrings are `'0'`/`'1'` text, not packed bytes.
//! - [`Report`] runs the whole pipeline and renders the human-readable
//!   listing that the `huffcode` binary writes out.
//!
//! ```rust
//! use huffcode::{CodeTable, FrequencyTable, HuffmanTree};
//!
//! let freq = FrequencyTable::count("aabbcc");
//! let tree = HuffmanTree::build(&freq)?;
//! let codes = CodeTable::generate(tree.root());
//!
//! let bits = huffcode::encode("aabbcc", &codes)?;
//! assert_eq!(huffcode::decode(&bits, tree.root())?, "aabbcc");
//! # Ok::<(), huffcode::Error>(())
//! ```
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."
//! - Cover, T. M., & Thomas, J. A. (2006). *Elements of Information Theory*, ch. 5.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod codes;
pub mod error;
pub mod frequency;
pub mod report;
pub mod size;
pub mod tree;

pub use codec::{decode, encode, HuffmanDecoder, HuffmanEncoder};
pub use codes::CodeTable;
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use report::Report;
pub use size::SizeReport;
pub use tree::{HuffmanNode, HuffmanTree};
