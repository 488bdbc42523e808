//! Whitespace run collapse
//!
//! Any ordinary `Whitespace` token longer than one character is rewritten to
//! a single space. `ImportantWhitespace` is a different kind and is never
//! touched; it exists precisely so alignment padding survives this pass.

use crate::javafmt::passes::Pass;
use crate::javafmt::settings::Settings;
use crate::javafmt::tokens::{Token, TokenKind};

pub struct CollapseWhitespace;

impl Pass for CollapseWhitespace {
    fn name(&self) -> &str {
        "replace_multiple_spaces"
    }

    fn description(&self) -> &str {
        "Collapses multi-character whitespace runs to a single space"
    }

    fn enabled(&self, settings: &Settings) -> bool {
        settings.replace_multiple_spaces
    }

    fn apply(&self, tokens: Vec<Token>, _: &Settings, _: &mut Vec<String>) -> Vec<Token> {
        collapse(tokens)
    }
}

fn collapse(mut tokens: Vec<Token>) -> Vec<Token> {
    for token in &mut tokens {
        if token.kind == TokenKind::Whitespace && token.text.chars().count() > 1 {
            token.text = " ".to_string();
        }
    }
    tokens
}
