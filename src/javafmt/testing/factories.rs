//! Token factories for tests
//!
//! Building token lists by hand is noisy; these helpers keep test setups to
//! one line per token. All factory tokens carry no position, like tokens
//! inserted by the formatting passes.

use crate::javafmt::tokens::{Token, TokenKind};

pub fn tok(kind: TokenKind, text: &str) -> Token {
    Token::new(kind, text)
}

pub fn ws(text: &str) -> Token {
    Token::new(TokenKind::Whitespace, text)
}

pub fn important_ws(width: usize) -> Token {
    Token::new(TokenKind::ImportantWhitespace, " ".repeat(width))
}

pub fn lb() -> Token {
    Token::new(TokenKind::LineBreak, "\n")
}

pub fn kw(text: &str) -> Token {
    Token::new(TokenKind::Keyword, text)
}

pub fn ident(text: &str) -> Token {
    Token::new(TokenKind::Identifier, text)
}

pub fn sep(text: &str) -> Token {
    Token::new(TokenKind::Separator, text)
}

pub fn op(text: &str) -> Token {
    Token::new(TokenKind::Operator, text)
}

pub fn comment(text: &str) -> Token {
    Token::new(TokenKind::Comment, text)
}
