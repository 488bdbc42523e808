//! Comma spacing
//!
//! Exactly one space after every `,`, none before it.

use crate::javafmt::edit;
use crate::javafmt::passes::Pass;
use crate::javafmt::settings::Settings;
use crate::javafmt::tokens::{Token, TokenKind};

pub struct CommaSpacing;

impl Pass for CommaSpacing {
    fn name(&self) -> &str {
        "space_after_comma"
    }

    fn description(&self) -> &str {
        "One space after each comma, none before"
    }

    fn enabled(&self, settings: &Settings) -> bool {
        settings.space_after_comma
    }

    fn apply(&self, tokens: Vec<Token>, _: &Settings, _: &mut Vec<String>) -> Vec<Token> {
        space_commas(tokens)
    }
}

fn space_commas(mut tokens: Vec<Token>) -> Vec<Token> {
    let mut i = 0;
    while i < tokens.len() {
        if tokens[i].kind == TokenKind::Separator && tokens[i].text == "," {
            let shift = edit::remove_before_if_exists(&mut tokens, i, TokenKind::Whitespace);
            i = i.saturating_add_signed(shift);
            edit::insert_or_replace_after(
                &mut tokens,
                i,
                &[Token::new(TokenKind::Whitespace, " ")],
            );
        }
        i += 1;
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::javafmt::lexing::{detokenize, tokenize};

    fn run(source: &str) -> String {
        let (tokens, _) = tokenize(source);
        detokenize(&space_commas(tokens))
    }

    #[test]
    fn inserts_missing_space() {
        assert_eq!(run("f(a,b,c)"), "f(a, b, c)");
    }

    #[test]
    fn removes_space_before() {
        assert_eq!(run("f(a , b)"), "f(a, b)");
    }

    #[test]
    fn widens_nothing_that_is_already_right() {
        assert_eq!(run("f(a, b)"), "f(a, b)");
    }
}
