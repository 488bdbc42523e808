//! Block expression spacing
//!
//! Normalizes the head of `if`/`for`/`while`/`switch` statements: one space
//! between the keyword and the condition's `(`, one space after the closing
//! `)`, and one space on both sides of `else`. Paren depth is tracked so the
//! `;` separators inside a `for` header are glued back onto one line instead
//! of being treated as statement terminators.
//!
//! Inside a `switch` body, each `case`/`default` label gets a line break
//! after its `:`, and the body lines that follow are marked with a fixed
//! extra indent (`switch_case_indent`) carried as `ImportantWhitespace` so
//! later passes stack it on top of the brace indent.

use crate::javafmt::edit;
use crate::javafmt::passes::Pass;
use crate::javafmt::settings::Settings;
use crate::javafmt::tokens::{Token, TokenKind};

pub struct BlockExpressions;

impl Pass for BlockExpressions {
    fn name(&self) -> &str {
        "put_spaces_near_block_expression"
    }

    fn description(&self) -> &str {
        "Spacing around if/for/while/switch headers, else, and case labels"
    }

    fn enabled(&self, settings: &Settings) -> bool {
        settings.put_spaces_near_block_expression
    }

    fn apply(&self, tokens: Vec<Token>, settings: &Settings, _: &mut Vec<String>) -> Vec<Token> {
        format_block_expressions(tokens, settings)
    }
}

fn space() -> Token {
    Token::new(TokenKind::Whitespace, " ")
}

fn is_block_keyword(token: &Token) -> bool {
    token.kind == TokenKind::Keyword
        && matches!(token.text.as_str(), "if" | "for" | "while" | "switch")
}

/// Case bodies end at the next label or closing brace; the line break right
/// before them must not carry the case indent.
fn next_significant_ends_case_body(tokens: &[Token], i: usize) -> bool {
    let mut k = i + 1;
    while k < tokens.len() && tokens[k].kind.is_trivia() {
        k += 1;
    }
    match tokens.get(k) {
        None => true,
        Some(t) => {
            (t.kind == TokenKind::Separator && t.text == "}")
                || (t.kind == TokenKind::Keyword && matches!(t.text.as_str(), "case" | "default"))
        }
    }
}

fn format_block_expressions(mut tokens: Vec<Token>, settings: &Settings) -> Vec<Token> {
    let mut i = 0;
    let mut in_header = false;
    let mut paren_depth = 0usize;
    let mut brace_depth = 0usize;
    // Brace depth of every switch body currently open
    let mut switch_bodies: Vec<usize> = Vec::new();
    let mut pending_switch = false;
    let mut awaiting_case_colon = false;
    let mut in_case_body = false;

    while i < tokens.len() {
        let kind = tokens[i].kind;

        if is_block_keyword(&tokens[i]) {
            if tokens[i].text == "switch" {
                pending_switch = true;
            }
            edit::insert_or_replace_after(&mut tokens, i, &[space()]);
            in_header = true;
        } else if in_header && kind == TokenKind::Separator && tokens[i].text == "(" {
            paren_depth += 1;
        } else if in_header && kind == TokenKind::Separator && tokens[i].text == ")" {
            paren_depth = paren_depth.saturating_sub(1);
            if paren_depth == 0 {
                edit::insert_or_replace_after(&mut tokens, i, &[space()]);
                in_header = false;
            }
        } else if in_header
            && paren_depth > 0
            && kind == TokenKind::Separator
            && tokens[i].text == ";"
        {
            // A for-header separator, not a statement terminator
            edit::remove_after_if_exists(&mut tokens, i, TokenKind::LineBreak);
            edit::insert_or_replace_after(&mut tokens, i, &[space()]);
        } else if kind == TokenKind::Keyword && tokens[i].text == "else" {
            let shift = edit::insert_or_replace_before(&mut tokens, i, &[space()]);
            i = i.saturating_add_signed(shift);
            edit::insert_or_replace_after(&mut tokens, i, &[space()]);
        } else if kind == TokenKind::Separator && tokens[i].text == "{" {
            brace_depth += 1;
            if pending_switch {
                switch_bodies.push(brace_depth);
                pending_switch = false;
            }
        } else if kind == TokenKind::Separator && tokens[i].text == "}" {
            if switch_bodies.last() == Some(&brace_depth) {
                switch_bodies.pop();
                in_case_body = false;
                awaiting_case_colon = false;
            }
            brace_depth = brace_depth.saturating_sub(1);
        } else if kind == TokenKind::Keyword
            && matches!(tokens[i].text.as_str(), "case" | "default")
            && switch_bodies.last() == Some(&brace_depth)
        {
            awaiting_case_colon = true;
            in_case_body = false;
        } else if awaiting_case_colon && kind == TokenKind::Operator && tokens[i].text == ":" {
            edit::insert_or_replace_after(&mut tokens, i, &[Token::new(TokenKind::LineBreak, "\n")]);
            awaiting_case_colon = false;
            in_case_body = true;
        } else if in_case_body && kind == TokenKind::LineBreak {
            if !next_significant_ends_case_body(&tokens, i) {
                edit::insert_or_replace_after(
                    &mut tokens,
                    i,
                    &[Token::new(
                        TokenKind::ImportantWhitespace,
                        " ".repeat(settings.switch_case_indent),
                    )],
                );
            }
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
        detokenize(&format_block_expressions(tokens, &Settings::default()))
    }

    #[test]
    fn spaces_around_if_condition() {
        assert_eq!(run("if(x){y();}"), "if (x) {y();}");
    }

    #[test]
    fn for_header_semicolons_stay_on_one_line() {
        // As if the semicolon pass had already run
        assert_eq!(run("for(int i = 0;\ni < n;\ni++){"), "for (int i = 0; i < n; i++) {");
    }

    #[test]
    fn else_gets_spaces_on_both_sides() {
        assert_eq!(run("}else{"), "} else {");
    }

    #[test]
    fn case_labels_break_and_bodies_are_marked() {
        let out = run("switch (x) {case 1:\nfoo();\ndefault:\nbar();\n}");
        assert_eq!(
            out,
            "switch (x) {case 1:\n    foo();\ndefault:\n    bar();\n}"
        );
    }

    #[test]
    fn colon_outside_switch_is_untouched() {
        assert_eq!(run("a = b ? c : d;"), "a = b ? c : d;");
    }

    #[test]
    fn nested_parens_in_header_are_tracked() {
        assert_eq!(run("while(f(a, b)){"), "while (f(a, b)) {");
    }
}
