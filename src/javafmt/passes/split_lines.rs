//! Long line splitting
//!
//! Tracks the running visual column and the last safe split point: a `.` or
//! `::` token, or the token right after a `,`. When the column passes the
//! configured budget and a candidate exists, a line break goes in at the
//! candidate. Continuations inside an open `(...)` align to the column where
//! the paren opened; everything else indents by `split_indent` past the
//! current line's leading whitespace. The inserted padding is
//! `ImportantWhitespace` so the collapse pass leaves it alone.

use crate::javafmt::edit;
use crate::javafmt::passes::Pass;
use crate::javafmt::settings::Settings;
use crate::javafmt::tokens::{Token, TokenKind};

pub struct SplitLines;

impl Pass for SplitLines {
    fn name(&self) -> &str {
        "split_long_lines"
    }

    fn description(&self) -> &str {
        "Breaks lines over the preferred length at chain/comma boundaries"
    }

    fn enabled(&self, settings: &Settings) -> bool {
        settings.split_long_lines
    }

    fn apply(&self, tokens: Vec<Token>, settings: &Settings, _: &mut Vec<String>) -> Vec<Token> {
        split_long_lines(tokens, settings)
    }
}

fn split_long_lines(mut tokens: Vec<Token>, settings: &Settings) -> Vec<Token> {
    let mut i = 0;
    let mut split_index: Option<usize> = None;
    let mut column = 0usize;
    let mut line_start_column = 0usize;
    let mut at_line_start = true;
    let mut in_brackets = false;
    let mut bracket_column = 0usize;

    while i < tokens.len() {
        if let Some(si) = split_index {
            if column > settings.preferred_line_length {
                let indent = if in_brackets {
                    bracket_column
                } else {
                    line_start_column + settings.split_indent
                };
                let shift = edit::insert_or_replace_before(
                    &mut tokens,
                    si,
                    &[
                        Token::new(TokenKind::LineBreak, "\n"),
                        Token::new(TokenKind::ImportantWhitespace, " ".repeat(indent)),
                    ],
                );
                i = i.saturating_add_signed(shift);
                column = indent;
                split_index = None;
            }
        }

        let token = &tokens[i];
        if at_line_start && token.kind != TokenKind::LineBreak {
            line_start_column = match token.kind {
                TokenKind::Whitespace | TokenKind::ImportantWhitespace => {
                    token.text.chars().count()
                }
                _ => 0,
            };
            at_line_start = false;
        }

        match token.kind {
            TokenKind::Separator if token.text == "." => split_index = Some(i),
            TokenKind::Operator if token.text == "::" => split_index = Some(i),
            TokenKind::Separator if token.text == "," => split_index = Some(i + 1),
            TokenKind::Separator if token.text == "(" => {
                in_brackets = true;
                bracket_column = column;
            }
            TokenKind::Separator if token.text == ")" => in_brackets = false,
            TokenKind::LineBreak => {
                column = 0;
                split_index = None;
                at_line_start = true;
                i += 1;
                continue;
            }
            _ => {}
        }

        // Positions are stale by now; only the running count is trustworthy
        column += tokens[i].text.chars().count();
        i += 1;
    }

    tokens
}
