//! Token definitions for the Java lexer
//!
//! This module owns the closed set of token kinds and the static
//! classification tables (keyword subsets, operator fixity sets, separator
//! characters). The tables are immutable lazily-built statics; everything
//! else in the crate keys off [`TokenKind`] plus the predicate methods on
//! [`Token`], so there is no type hierarchy to test against.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// 1-based line and 0-based column of a token at the moment it was lexed.
///
/// Positions go stale as soon as a formatting pass mutates the stream; they
/// are only trustworthy for diagnostics about lexer-produced tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// All possible token kinds produced by the lexer or inserted by passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// A run of non-newline blank characters.
    Whitespace,
    /// Whitespace that downstream passes must not collapse (alignment padding).
    ImportantWhitespace,
    /// A single `\n`.
    LineBreak,
    /// Line or block comment, raw text including delimiters.
    Comment,
    /// Any reserved word; refined by [`Token::is_modifier`] / [`Token::is_basic_type`].
    Keyword,
    /// `true` or `false`.
    Boolean,
    /// The `null` literal.
    Null,
    /// A `'…'` literal.
    Character,
    /// A `"…"` literal.
    String,
    DecimalInteger,
    OctalInteger,
    BinaryInteger,
    HexInteger,
    DecimalFloatingPoint,
    HexFloatingPoint,
    /// Single-character structural punctuation: parens, braces, brackets, `;`, `,`, `.`.
    Separator,
    /// Symbolic operator from the static operator table.
    Operator,
    /// The `@` of an annotation.
    Annotation,
    Identifier,
}

impl TokenKind {
    /// True for the literal family: booleans, `null`, character/string and
    /// every numeric literal kind.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Boolean
                | TokenKind::Null
                | TokenKind::Character
                | TokenKind::String
                | TokenKind::DecimalInteger
                | TokenKind::OctalInteger
                | TokenKind::BinaryInteger
                | TokenKind::HexInteger
                | TokenKind::DecimalFloatingPoint
                | TokenKind::HexFloatingPoint
        )
    }

    /// True for tokens with no grammatical meaning: whitespace, line breaks
    /// and comments.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::ImportantWhitespace
                | TokenKind::LineBreak
                | TokenKind::Comment
        )
    }
}

/// The smallest lexical unit: a kind, the exact source text it reproduces,
/// and the position where the lexer saw it (absent on pass-inserted tokens).
///
/// Concatenating `text` over an unmodified lexer output reproduces the input
/// source byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: Option<Position>,
}

impl Token {
    /// A token without position information, as inserted by formatting passes.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            position: None,
        }
    }

    /// A token carrying its lexing position.
    pub fn at(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            position: Some(position),
        }
    }

    pub fn is_modifier(&self) -> bool {
        self.kind == TokenKind::Keyword && MODIFIERS.contains(self.text.as_str())
    }

    pub fn is_basic_type(&self) -> bool {
        self.kind == TokenKind::Keyword && BASIC_TYPES.contains(self.text.as_str())
    }

    pub fn is_infix(&self) -> bool {
        self.kind == TokenKind::Operator && INFIX_OPERATORS.contains(self.text.as_str())
    }

    pub fn is_prefix(&self) -> bool {
        self.kind == TokenKind::Operator && PREFIX_OPERATORS.contains(self.text.as_str())
    }

    pub fn is_postfix(&self) -> bool {
        self.kind == TokenKind::Operator && POSTFIX_OPERATORS.contains(self.text.as_str())
    }

    pub fn is_assignment(&self) -> bool {
        self.kind == TokenKind::Operator && ASSIGNMENT_OPERATORS.contains(self.text.as_str())
    }

    pub fn is_lambda(&self) -> bool {
        self.kind == TokenKind::Operator && self.text == LAMBDA_OPERATOR
    }

    pub fn is_method_reference(&self) -> bool {
        self.kind == TokenKind::Operator && self.text == METHOD_REFERENCE_OPERATOR
    }
}

/// Longest operator spelling in [`OPERATORS`].
pub const MAX_OPERATOR_LEN: usize = 4;

pub const NULL_LITERAL: &str = "null";
pub const LAMBDA_OPERATOR: &str = "->";
pub const METHOD_REFERENCE_OPERATOR: &str = "::";

pub static KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "abstract",
        "assert",
        "boolean",
        "break",
        "byte",
        "case",
        "catch",
        "char",
        "class",
        "const",
        "continue",
        "default",
        "do",
        "double",
        "else",
        "enum",
        "extends",
        "final",
        "finally",
        "float",
        "for",
        "goto",
        "if",
        "implements",
        "import",
        "instanceof",
        "int",
        "interface",
        "long",
        "native",
        "new",
        "package",
        "private",
        "protected",
        "public",
        "return",
        "short",
        "static",
        "strictfp",
        "super",
        "switch",
        "synchronized",
        "this",
        "throw",
        "throws",
        "transient",
        "try",
        "void",
        "volatile",
        "while",
    ]
    .into_iter()
    .collect()
});

pub static MODIFIERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "abstract",
        "default",
        "final",
        "native",
        "private",
        "protected",
        "public",
        "static",
        "strictfp",
        "synchronized",
        "transient",
        "volatile",
    ]
    .into_iter()
    .collect()
});

pub static BASIC_TYPES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "boolean", "byte", "char", "double", "float", "int", "long", "short",
    ]
    .into_iter()
    .collect()
});

pub static BOOLEAN_LITERALS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["true", "false"].into_iter().collect());

pub static SEPARATORS: Lazy<HashSet<char>> =
    Lazy::new(|| ['(', ')', '{', '}', '[', ']', ';', ',', '.'].into_iter().collect());

/// Every operator the lexer can emit. `>>` and `>>>` are deliberately absent:
/// they lex as separate `>` tokens so that closing generic brackets never
/// have to be split apart again downstream.
pub static OPERATORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        ">>>=", ">>=", "<<=", "%=", "^=", "|=", "&=", "/=", "*=", "-=", "+=", "<<", "--", "++",
        "||", "&&", "!=", ">=", "<=", "==", "%", "^", "|", "&", "/", "*", "-", "+", ":", "?", "~",
        "!", "<", ">", "=", "...", "->", "::",
    ]
    .into_iter()
    .collect()
});

/// Operator spellings bucketed by length, longest-match scan support.
pub static OPERATORS_BY_LEN: Lazy<[HashSet<&'static str>; MAX_OPERATOR_LEN]> = Lazy::new(|| {
    let mut buckets: [HashSet<&'static str>; MAX_OPERATOR_LEN] = Default::default();
    for op in OPERATORS.iter() {
        buckets[op.len() - 1].insert(*op);
    }
    buckets
});

/// Infix spellings keep `>>`/`>>>` even though the lexer never emits them;
/// the table describes the operator set of the language, not of the lexer.
pub static INFIX_OPERATORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "||", "&&", "|", "^", "&", "==", "!=", "<", ">", "<=", ">=", "<<", ">>", ">>>", "+", "-",
        "*", "/", "%",
    ]
    .into_iter()
    .collect()
});

pub static PREFIX_OPERATORS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["++", "--", "!", "~", "+", "-"].into_iter().collect());

pub static POSTFIX_OPERATORS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["++", "--"].into_iter().collect());

pub static ASSIGNMENT_OPERATORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "=", "+=", "-=", "*=", "/=", "&=", "|=", "^=", "%=", "<<=", ">>=", ">>>=",
    ]
    .into_iter()
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_refinements_overlap() {
        let public = Token::new(TokenKind::Keyword, "public");
        assert!(public.is_modifier());
        assert!(!public.is_basic_type());

        let int = Token::new(TokenKind::Keyword, "int");
        assert!(int.is_basic_type());
        assert!(!int.is_modifier());

        // `default` is both a keyword and a modifier
        let default = Token::new(TokenKind::Keyword, "default");
        assert!(default.is_modifier());
    }

    #[test]
    fn predicates_require_matching_kind() {
        // An identifier spelled like a modifier is not a modifier
        let ident = Token::new(TokenKind::Identifier, "public");
        assert!(!ident.is_modifier());

        let text = Token::new(TokenKind::String, "+");
        assert!(!text.is_infix());
    }

    #[test]
    fn every_fixity_spelling_is_consistent() {
        // Everything in a fixity table is spelled like an operator of the
        // language; the only spellings not in the lexer's operator table are
        // the deliberately under-lexed shifts.
        for op in INFIX_OPERATORS
            .iter()
            .chain(PREFIX_OPERATORS.iter())
            .chain(POSTFIX_OPERATORS.iter())
            .chain(ASSIGNMENT_OPERATORS.iter())
        {
            assert!(
                OPERATORS.contains(op) || *op == ">>" || *op == ">>>",
                "unknown operator spelling {op:?}"
            );
        }
    }

    #[test]
    fn fixity_classes_are_exact() {
        for op in OPERATORS.iter() {
            let token = Token::new(TokenKind::Operator, *op);
            let infix = token.is_infix();
            let prefix = token.is_prefix();
            let postfix = token.is_postfix();
            let assignment = token.is_assignment();

            match *op {
                "+" | "-" => assert!(infix && prefix && !postfix && !assignment),
                "++" | "--" => assert!(!infix && prefix && postfix && !assignment),
                "!" | "~" => assert!(!infix && prefix && !postfix && !assignment),
                "=" | "+=" | "-=" | "*=" | "/=" | "&=" | "|=" | "^=" | "%=" | "<<=" | ">>="
                | ">>>=" => assert!(assignment && !infix && !prefix && !postfix),
                "||" | "&&" | "|" | "^" | "&" | "==" | "!=" | "<" | ">" | "<=" | ">=" | "<<"
                | "*" | "/" | "%" => assert!(infix && !prefix && !postfix && !assignment),
                ":" | "?" | "..." | "->" | "::" => {
                    assert!(!infix && !prefix && !postfix && !assignment)
                }
                other => panic!("operator {other:?} missing from the fixity check"),
            }
        }
    }

    #[test]
    fn buckets_cover_all_lengths() {
        assert!(OPERATORS_BY_LEN[0].contains("="));
        assert!(OPERATORS_BY_LEN[1].contains("::"));
        assert!(OPERATORS_BY_LEN[2].contains("..."));
        assert!(OPERATORS_BY_LEN[3].contains(">>>="));
        let total: usize = OPERATORS_BY_LEN.iter().map(HashSet::len).sum();
        assert_eq!(total, OPERATORS.len());
    }

    #[test]
    fn literal_kind_family() {
        assert!(TokenKind::HexFloatingPoint.is_literal());
        assert!(TokenKind::Null.is_literal());
        assert!(!TokenKind::Identifier.is_literal());
        assert!(TokenKind::Comment.is_trivia());
        assert!(!TokenKind::Separator.is_trivia());
    }
}
