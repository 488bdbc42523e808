//! Detokenizer for the formatted token stream
//!
//! Every token carries the exact text it stands for, so turning a token list
//! back into a string is pure concatenation. On an unmodified lexer output
//! this reproduces the input byte for byte; after the pipeline has run it
//! produces the formatted result.

use crate::javafmt::tokens::Token;

/// Concatenate a token stream back into source text.
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}
