//! Line break after statement terminators
//!
//! Every `;` gets a line break after it, with two exceptions: a terminator
//! immediately followed by a same-line comment keeps the comment where it is,
//! and a doubled `;;` is flagged as a diagnostic without inserting anything
//! extra for the first terminator.

use crate::javafmt::edit;
use crate::javafmt::passes::Pass;
use crate::javafmt::settings::Settings;
use crate::javafmt::tokens::{Token, TokenKind};

pub struct SemicolonBreaks;

impl Pass for SemicolonBreaks {
    fn name(&self) -> &str {
        "line_break_after_semicolon"
    }

    fn description(&self) -> &str {
        "Starts a new line after every statement terminator"
    }

    fn enabled(&self, settings: &Settings) -> bool {
        settings.line_break_after_semicolon
    }

    fn apply(
        &self,
        tokens: Vec<Token>,
        _: &Settings,
        diagnostics: &mut Vec<String>,
    ) -> Vec<Token> {
        break_after_semicolons(tokens, diagnostics)
    }
}

fn is_semicolon(token: &Token) -> bool {
    token.kind == TokenKind::Separator && token.text == ";"
}

/// A comment directly after the terminator, or after one whitespace token,
/// is a trailing comment that should stay on this line.
fn followed_by_trailing_comment(tokens: &[Token], i: usize) -> bool {
    if edit::has_after(tokens, i, TokenKind::Comment) == Ok(true) {
        return true;
    }
    edit::has_after(tokens, i, TokenKind::Whitespace) == Ok(true)
        && i + 2 < tokens.len()
        && tokens[i + 2].kind == TokenKind::Comment
}

fn break_after_semicolons(mut tokens: Vec<Token>, diagnostics: &mut Vec<String>) -> Vec<Token> {
    let mut i = 0;
    while i < tokens.len() {
        if is_semicolon(&tokens[i]) {
            if i + 1 < tokens.len() && is_semicolon(&tokens[i + 1]) {
                let at = tokens[i + 1]
                    .position
                    .map(|p| format!(" at {}", p))
                    .unwrap_or_default();
                diagnostics.push(format!("double statement terminator{}", at));
            } else if !followed_by_trailing_comment(&tokens, i) {
                edit::insert_or_replace_after(
                    &mut tokens,
                    i,
                    &[Token::new(TokenKind::LineBreak, "\n")],
                );
            }
        }
        i += 1;
    }
    tokens
}
