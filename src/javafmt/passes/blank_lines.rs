//! Redundant blank line collapse
//!
//! Runs of more than two consecutive line breaks collapse to exactly two,
//! leaving at most one blank line between blocks. Whitespace tokens inside a
//! run do not interrupt it; any other token resets the count.

use crate::javafmt::passes::Pass;
use crate::javafmt::settings::Settings;
use crate::javafmt::tokens::{Token, TokenKind};

pub struct BlankLines;

impl Pass for BlankLines {
    fn name(&self) -> &str {
        "remove_redundant_line_breaks"
    }

    fn description(&self) -> &str {
        "Collapses runs of blank lines down to a single blank line"
    }

    fn enabled(&self, settings: &Settings) -> bool {
        settings.remove_redundant_line_breaks
    }

    fn apply(&self, tokens: Vec<Token>, _: &Settings, _: &mut Vec<String>) -> Vec<Token> {
        collapse_blank_lines(tokens)
    }
}

fn collapse_blank_lines(mut tokens: Vec<Token>) -> Vec<Token> {
    let mut i = 0;
    let mut breaks = 0usize;
    while i < tokens.len() {
        match tokens[i].kind {
            TokenKind::LineBreak => {
                breaks += 1;
                if breaks > 2 {
                    tokens.remove(i);
                    continue;
                }
            }
            TokenKind::Whitespace | TokenKind::ImportantWhitespace => {}
            _ => breaks = 0,
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
        detokenize(&collapse_blank_lines(tokens))
    }

    #[test]
    fn triple_breaks_collapse_to_double() {
        assert_eq!(run("a;\n\n\nb;"), "a;\n\nb;");
    }

    #[test]
    fn long_runs_collapse_too() {
        assert_eq!(run("a;\n\n\n\n\n\nb;"), "a;\n\nb;");
    }

    #[test]
    fn single_blank_line_is_preserved() {
        assert_eq!(run("a;\n\nb;"), "a;\n\nb;");
    }

    #[test]
    fn whitespace_between_breaks_does_not_restart_the_run() {
        assert_eq!(run("a;\n   \n\nb;"), "a;\n   \nb;");
    }

    #[test]
    fn tokens_reset_the_run() {
        assert_eq!(run("a;\n\nb;\n\nc;"), "a;\n\nb;\n\nc;");
    }
}
