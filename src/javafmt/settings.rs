//! Formatting settings
//!
//! One flat struct of pass toggles and numeric knobs, read-only for the
//! whole pipeline. Loading and layering of configuration files lives in the
//! `javafmt-config` crate; applications map its rules section onto this
//! struct field for field.

use serde::Deserialize;

/// Pass toggles and numeric knobs for one pipeline invocation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Brace placement and indentation (the central pass).
    pub format_curly_braces: bool,
    /// Strip whitespace just inside `(`/`[` and around `.`.
    pub clear_spaces_near_brackets: bool,
    /// Collapse multi-character whitespace runs to a single space.
    pub replace_multiple_spaces: bool,
    /// One space around infix/assignment operators, none around unary ones.
    pub spaces_near_operators: bool,
    /// One space after `,`, none before.
    pub space_after_comma: bool,
    /// Join line-broken method/type signatures back onto one line.
    pub clear_line_breaks_in_signatures: bool,
    /// Line break after every statement terminator.
    pub line_break_after_semicolon: bool,
    /// Spacing around `if`/`for`/`while`/`switch` headers and `else`.
    pub put_spaces_near_block_expression: bool,
    /// Break lines that exceed `preferred_line_length`.
    pub split_long_lines: bool,
    /// Collapse runs of blank lines down to a single blank line.
    pub remove_redundant_line_breaks: bool,
    /// Leave comment indentation exactly as written.
    pub preserve_comment_indent: bool,
    /// Force a line break after each re-indented comment.
    pub line_break_after_comment: bool,

    /// Spaces per brace nesting level.
    pub indent: usize,
    /// Extra indent for method-chain continuations and long-line splits.
    pub split_indent: usize,
    /// Fixed extra indent for `case` bodies inside a `switch`.
    pub switch_case_indent: usize,
    /// Column budget checked by the long-line splitter.
    pub preferred_line_length: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format_curly_braces: true,
            clear_spaces_near_brackets: true,
            replace_multiple_spaces: true,
            spaces_near_operators: true,
            space_after_comma: true,
            clear_line_breaks_in_signatures: true,
            line_break_after_semicolon: true,
            put_spaces_near_block_expression: true,
            split_long_lines: true,
            remove_redundant_line_breaks: true,
            preserve_comment_indent: false,
            line_break_after_comment: false,
            indent: 4,
            split_indent: 8,
            switch_case_indent: 4,
            preferred_line_length: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_the_formatting_passes() {
        let settings = Settings::default();
        assert!(settings.format_curly_braces);
        assert!(settings.line_break_after_semicolon);
        assert!(!settings.preserve_comment_indent);
        assert_eq!(settings.indent, 4);
    }

    #[test]
    fn partial_deserialization_falls_back_to_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "indent": 2, "split_long_lines": false }"#)
                .expect("partial settings must deserialize");
        assert_eq!(settings.indent, 2);
        assert!(!settings.split_long_lines);
        assert!(settings.format_curly_braces);
        assert_eq!(settings.preferred_line_length, 100);
    }
}
