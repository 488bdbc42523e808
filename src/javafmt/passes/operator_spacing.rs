//! Operator spacing
//!
//! Infix and assignment operators get exactly one space on each side; prefix
//! and postfix operators get their adjacent whitespace stripped. The infix
//! check wins for operators that are both (`+`, `-`), matching the fixity
//! tables' precedence.

use crate::javafmt::edit;
use crate::javafmt::passes::Pass;
use crate::javafmt::settings::Settings;
use crate::javafmt::tokens::{Token, TokenKind};

pub struct OperatorSpacing;

impl Pass for OperatorSpacing {
    fn name(&self) -> &str {
        "spaces_near_operators"
    }

    fn description(&self) -> &str {
        "One space around infix/assignment operators, none around unary ones"
    }

    fn enabled(&self, settings: &Settings) -> bool {
        settings.spaces_near_operators
    }

    fn apply(&self, tokens: Vec<Token>, _: &Settings, _: &mut Vec<String>) -> Vec<Token> {
        space_operators(tokens)
    }
}

fn space_operators(mut tokens: Vec<Token>) -> Vec<Token> {
    let mut i = 0;
    while i < tokens.len() {
        if tokens[i].kind == TokenKind::Operator {
            if tokens[i].is_infix() || tokens[i].is_assignment() {
                let shift = edit::insert_or_replace_before(
                    &mut tokens,
                    i,
                    &[Token::new(TokenKind::Whitespace, " ")],
                );
                i = i.saturating_add_signed(shift);
                edit::insert_or_replace_after(
                    &mut tokens,
                    i,
                    &[Token::new(TokenKind::Whitespace, " ")],
                );
            } else if tokens[i].is_prefix() || tokens[i].is_postfix() {
                let shift = edit::remove_before_if_exists(&mut tokens, i, TokenKind::Whitespace);
                i = i.saturating_add_signed(shift);
                edit::remove_after_if_exists(&mut tokens, i, TokenKind::Whitespace);
            }
        }
        i += 1;
    }
    tokens
}
