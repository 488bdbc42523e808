//! Lexer
//!
//! This module orchestrates tokenization for Java-family source text.
//!
//! Structure:
//!     Tokenization is a single hand-rolled longest-match scan in
//! [`tokenizer`]. The scanner dispatches on the current character (newline,
//! whitespace run, comment, annotation, literal, separator, identifier,
//! operator) and carries line/column bookkeeping, including newlines consumed
//! inside multi-line block comments. Lexical anomalies never abort the scan:
//! they are recorded as plain-string diagnostics and the scanner consumes as
//! much as it can.
//!
//! The token stream is fully reconstructible: concatenating the `text` of an
//! unmodified lexer output reproduces the input source byte for byte
//! ([`detokenizer`] is that concatenation, and is also the final step of the
//! formatting pipeline).

pub mod detokenizer;
pub mod tokenizer;

pub use detokenizer::detokenize;
pub use tokenizer::{tokenize, Lexer};
