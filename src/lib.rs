//! # javafmt
//!
//! A lexical-level reformatter for Java-family source code. Source text is
//! re-tokenized into a flat, fully-reconstructible token stream and rewritten
//! by a pipeline of independent whitespace/line-break passes; no syntax tree
//! is ever built.
//!
//! ## Testing
//!
//! Unit tests live next to each module; integration suites under `tests/`
//! cover the tokenizer round-trip, literal classification and end-to-end
//! formatting scenarios. Shared token factories live in
//! [`javafmt::testing`](javafmt::testing).

pub mod javafmt;
