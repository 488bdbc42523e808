//! Bracket and dot space cleanup
//!
//! Removes whitespace immediately inside `(` and `[`, immediately before `)`
//! and `]`, and on both sides of the member-access `.`.

use crate::javafmt::edit;
use crate::javafmt::passes::Pass;
use crate::javafmt::settings::Settings;
use crate::javafmt::tokens::{Token, TokenKind};

pub struct BracketSpaces;

impl Pass for BracketSpaces {
    fn name(&self) -> &str {
        "clear_spaces_near_brackets"
    }

    fn description(&self) -> &str {
        "Removes whitespace just inside ( and [ and around ."
    }

    fn enabled(&self, settings: &Settings) -> bool {
        settings.clear_spaces_near_brackets
    }

    fn apply(&self, tokens: Vec<Token>, _: &Settings, _: &mut Vec<String>) -> Vec<Token> {
        clear_spaces(tokens)
    }
}

fn clear_spaces(mut tokens: Vec<Token>) -> Vec<Token> {
    let mut i = 0;
    while i < tokens.len() {
        if tokens[i].kind == TokenKind::Separator {
            match tokens[i].text.as_str() {
                "(" | "[" => {
                    edit::remove_after_if_exists(&mut tokens, i, TokenKind::Whitespace);
                }
                ")" | "]" => {
                    let shift = edit::remove_before_if_exists(&mut tokens, i, TokenKind::Whitespace);
                    i = i.saturating_add_signed(shift);
                }
                "." => {
                    let shift = edit::remove_before_if_exists(&mut tokens, i, TokenKind::Whitespace);
                    i = i.saturating_add_signed(shift);
                    edit::remove_after_if_exists(&mut tokens, i, TokenKind::Whitespace);
                }
                _ => {}
            }
        }
        i += 1;
    }
    tokens
}
