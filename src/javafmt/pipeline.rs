//! Formatting pipeline
//!
//! Tokenize, fold the token list through every enabled pass in a fixed
//! order, concatenate. The token list is owned by the invocation from start
//! to finish; each pass takes it by value and hands back the rewritten list.
//! Diagnostics accumulate across the lexer and every pass and never abort a
//! run: malformed input still produces a complete, best-effort result.

use crate::javafmt::lexing::{detokenize, tokenize};
use crate::javafmt::passes::{
    blank_lines::BlankLines, block_expressions::BlockExpressions, braces::Braces,
    bracket_spaces::BracketSpaces, collapse_whitespace::CollapseWhitespace,
    comma_spacing::CommaSpacing, operator_spacing::OperatorSpacing,
    semicolon_breaks::SemicolonBreaks, signature_breaks::SignatureBreaks,
    split_lines::SplitLines, Pass,
};
use crate::javafmt::settings::Settings;

/// The outcome of one pipeline run: the formatted text and every diagnostic
/// collected along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattingResult {
    pub code: String,
    pub diagnostics: Vec<String>,
}

/// The pipeline in its required order. Each entry sees the output of the one
/// before it; order changes are behavior changes.
pub fn passes() -> Vec<Box<dyn Pass>> {
    vec![
        Box::new(BracketSpaces),
        Box::new(CollapseWhitespace),
        Box::new(OperatorSpacing),
        Box::new(CommaSpacing),
        Box::new(SignatureBreaks),
        Box::new(SemicolonBreaks),
        Box::new(BlockExpressions),
        Box::new(Braces),
        Box::new(SplitLines),
        Box::new(BlankLines),
    ]
}

/// Format a complete source text under the given settings.
///
/// Deterministic: the same text and settings always produce the same bytes
/// and the same diagnostics.
pub fn format(source: &str, settings: &Settings) -> FormattingResult {
    let (mut tokens, mut diagnostics) = tokenize(source);

    for pass in passes() {
        if pass.enabled(settings) {
            tokens = pass.apply(tokens, settings, &mut diagnostics);
        }
    }

    FormattingResult {
        code: detokenize(&tokens),
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_order_is_fixed() {
        let names: Vec<String> = passes().iter().map(|p| p.name().to_string()).collect();
        assert_eq!(
            names,
            vec![
                "clear_spaces_near_brackets",
                "replace_multiple_spaces",
                "spaces_near_operators",
                "space_after_comma",
                "clear_line_breaks_in_signatures",
                "line_break_after_semicolon",
                "put_spaces_near_block_expression",
                "format_curly_braces",
                "split_long_lines",
                "remove_redundant_line_breaks",
            ]
        );
    }

    #[test]
    fn disabled_passes_leave_input_alone() {
        let settings = Settings {
            format_curly_braces: false,
            clear_spaces_near_brackets: false,
            replace_multiple_spaces: false,
            spaces_near_operators: false,
            space_after_comma: false,
            clear_line_breaks_in_signatures: false,
            line_break_after_semicolon: false,
            put_spaces_near_block_expression: false,
            split_long_lines: false,
            remove_redundant_line_breaks: false,
            ..Settings::default()
        };
        let source = "if(x>0){foo( );}";
        let result = format(source, &settings);
        assert_eq!(result.code, source);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn formats_the_canonical_if_else() {
        let result = format("if(x>0){foo();}else{bar();}", &Settings::default());
        assert_eq!(
            result.code,
            "if (x > 0) {\n    foo();\n} else {\n    bar();\n}"
        );
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn lexer_diagnostics_flow_through() {
        let result = format("int x = \"oops;", &Settings::default());
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0].contains("unterminated"));
    }
}
