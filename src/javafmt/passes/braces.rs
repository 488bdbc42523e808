//! Brace placement and indentation
//!
//! The central pass. It keeps one running indent counter (a multiple of the
//! configured unit) and rewrites line starts as it scans:
//!
//! - `{` stays on its own line if a line break already precedes it, otherwise
//!   it is pulled onto the current line with a single leading space; either
//!   way the indent grows and a line break follows it.
//! - `}` shrinks the indent (clamped at zero with a diagnostic) and forces a
//!   line break plus the shrunk indent in front of itself.
//! - The first line-starting token after a break gets the current indent as
//!   leading whitespace, then the pass skips to the next line break.
//! - `else`/`catch`/`finally` are cuddled instead: any preceding break and
//!   whitespace are stripped and the keyword joins the prior `}` with one
//!   space.
//! - A leading `.` or `::` is a method-chain continuation and indents by the
//!   chain offset on top of the current indent.
//! - Comments are re-indented line by line unless configured to be left
//!   alone.
//!
//! A stream that ends with unclosed braces gets a final diagnostic.

use crate::javafmt::edit;
use crate::javafmt::passes::Pass;
use crate::javafmt::settings::Settings;
use crate::javafmt::tokens::{Token, TokenKind};

pub struct Braces;

impl Pass for Braces {
    fn name(&self) -> &str {
        "format_curly_braces"
    }

    fn description(&self) -> &str {
        "Brace placement, indentation and cuddled else/catch/finally"
    }

    fn enabled(&self, settings: &Settings) -> bool {
        settings.format_curly_braces
    }

    fn apply(
        &self,
        tokens: Vec<Token>,
        settings: &Settings,
        diagnostics: &mut Vec<String>,
    ) -> Vec<Token> {
        format_braces(tokens, settings, diagnostics)
    }
}

fn line_break() -> Token {
    Token::new(TokenKind::LineBreak, "\n")
}

fn indent_ws(width: usize) -> Token {
    Token::new(TokenKind::Whitespace, " ".repeat(width))
}

fn is_separator(token: &Token, text: &str) -> bool {
    token.kind == TokenKind::Separator && token.text == text
}

fn is_cuddled_keyword(token: &Token) -> bool {
    token.kind == TokenKind::Keyword
        && matches!(token.text.as_str(), "else" | "catch" | "finally")
}

/// Is the nearest non-blank token before `i` a line break (or the start of
/// input)? Decides own-line vs same-line placement for `{`.
fn preceded_by_line_break(tokens: &[Token], i: usize) -> bool {
    let mut k = i;
    while k > 0 {
        match tokens[k - 1].kind {
            TokenKind::Whitespace | TokenKind::ImportantWhitespace => k -= 1,
            TokenKind::LineBreak => return true,
            _ => return false,
        }
    }
    true
}

fn format_braces(
    mut tokens: Vec<Token>,
    settings: &Settings,
    diagnostics: &mut Vec<String>,
) -> Vec<Token> {
    let unit = settings.indent;
    let mut indent = 0usize;
    let mut skip_to_line_break = false;
    let mut i = 0;

    while i < tokens.len() {
        let kind = tokens[i].kind;

        if is_separator(&tokens[i], "{") {
            if !preceded_by_line_break(&tokens, i) {
                let shift = edit::insert_or_replace_before(&mut tokens, i, &[indent_ws(1)]);
                i = i.saturating_add_signed(shift);
            }
            indent += unit;
            edit::insert_or_replace_after(&mut tokens, i, &[line_break()]);
        } else if is_separator(&tokens[i], "}") {
            if indent >= unit {
                indent -= unit;
            } else {
                let at = tokens[i]
                    .position
                    .map(|p| format!(" at {}", p))
                    .unwrap_or_default();
                diagnostics.push(format!("unexpected closing bracket{}, indent reset to 0", at));
                indent = 0;
            }
            let shift =
                edit::insert_or_replace_before(&mut tokens, i, &[line_break(), indent_ws(indent)]);
            i = i.saturating_add_signed(shift);
        } else if skip_to_line_break {
            if kind == TokenKind::LineBreak {
                skip_to_line_break = false;
            }
        } else if is_cuddled_keyword(&tokens[i]) {
            // Strip everything blank back to the prior token, then rejoin
            // with a single space
            i = cuddle_strip(&mut tokens, i);
            let shift = edit::insert_or_replace_before(&mut tokens, i, &[indent_ws(1)]);
            i = i.saturating_add_signed(shift);
            skip_to_line_break = true;
        } else if edit::is_line_start(&tokens[i]) {
            skip_to_line_break = true;
            let shift = edit::insert_or_replace_before(&mut tokens, i, &[indent_ws(indent)]);
            i = i.saturating_add_signed(shift);
        } else if is_separator(&tokens[i], ".") || tokens[i].is_method_reference() {
            // Method-chain continuation line
            skip_to_line_break = true;
            let shift = edit::insert_or_replace_before(
                &mut tokens,
                i,
                &[indent_ws(indent + settings.split_indent)],
            );
            i = i.saturating_add_signed(shift);
        } else if kind == TokenKind::Comment && !settings.preserve_comment_indent {
            tokens[i] = edit::format_comment(&tokens[i], indent);
            let shift = edit::insert_or_replace_before(&mut tokens, i, &[indent_ws(indent)]);
            i = i.saturating_add_signed(shift);
            if settings.line_break_after_comment {
                edit::insert_or_replace_after(&mut tokens, i, &[line_break()]);
            }
        }

        i += 1;
    }

    if indent > 0 {
        diagnostics.push("expected closing bracket at end of input".to_string());
    }

    tokens
}

/// Remove every whitespace and line-break token directly before `i`,
/// returning the shifted index.
fn cuddle_strip(tokens: &mut Vec<Token>, mut i: usize) -> usize {
    loop {
        let ws = edit::remove_before_if_exists(tokens, i, TokenKind::Whitespace);
        i = i.saturating_add_signed(ws);
        let br = edit::remove_before_if_exists(tokens, i, TokenKind::LineBreak);
        i = i.saturating_add_signed(br);
        if ws == 0 && br == 0 {
            return i;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::javafmt::lexing::{detokenize, tokenize};

    fn run(source: &str) -> (String, Vec<String>) {
        let (tokens, _) = tokenize(source);
        let mut diagnostics = Vec::new();
        let tokens = format_braces(tokens, &Settings::default(), &mut diagnostics);
        (detokenize(&tokens), diagnostics)
    }

    #[test]
    fn opening_brace_joins_the_current_line() {
        let (code, _) = run("class A\n{\n}");
        // An own-line brace is kept, a same-line one is spaced
        assert!(code.contains("class A\n{"));

        let (code, _) = run("class A{\n}");
        assert!(code.contains("class A {"));
    }

    #[test]
    fn statements_are_indented_one_unit_per_brace() {
        let (code, diagnostics) = run("class A {\nint x;\n}");
        assert_eq!(code, "class A {\n    int x;\n}");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn closing_brace_gets_its_own_line() {
        let (code, _) = run("{x;}");
        assert_eq!(code, "{\n    x;\n}");
    }

    #[test]
    fn else_is_cuddled_onto_the_closing_brace() {
        let (code, _) = run("{a;}\nelse {b;}");
        assert!(code.contains("} else {"));
    }

    #[test]
    fn chain_continuation_gets_extra_indent() {
        let (code, _) = run("{\nfoo()\n.bar();\n}");
        assert!(code.contains("\n            .bar()"), "got: {code:?}");
    }

    #[test]
    fn unmatched_closing_brace_clamps_and_reports() {
        let (code, diagnostics) = run("}\n}");
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].contains("unexpected closing bracket"));
        assert!(code.contains("}"));
    }

    #[test]
    fn missing_closing_brace_reports_at_end() {
        let (_, diagnostics) = run("{x;");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].contains("expected closing bracket at end of input"));
    }

    #[test]
    fn comments_are_reindented() {
        let (code, _) = run("{\n/* a\n b */\nx;\n}");
        assert!(code.contains("    /* a"));
    }
}
