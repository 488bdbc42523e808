//! Token-list edit primitives
//!
//! Every formatting pass mutates the token list through this small API:
//! bounds-checked neighbor predicates, insert-or-replace of adjacent tokens,
//! and conditional removal of a neighbor. Each mutating primitive returns the
//! net change in list length; callers must fold that shift into their scan
//! cursor (`cursor.saturating_add_signed(shift)`) or the cursor silently
//! drifts off the token it was looking at. That contract is load-bearing:
//! passes insert in front of their own cursor all the time.

use crate::javafmt::tokens::{Token, TokenKind};

/// Errors from the bounds-checked neighbor predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    /// The index itself is outside the token list.
    NoSuchToken(usize),
    /// The index is the first token; it has no predecessor.
    NothingBefore(usize),
    /// The index is the last token; it has no successor.
    NothingAfter(usize),
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditError::NoSuchToken(i) => write!(f, "token at {} does not exist", i),
            EditError::NothingBefore(i) => write!(f, "nothing before {}", i),
            EditError::NothingAfter(i) => write!(f, "nothing after {}", i),
        }
    }
}

impl std::error::Error for EditError {}

/// Does the token before `i` have the given kind?
pub fn has_before(tokens: &[Token], i: usize, kind: TokenKind) -> Result<bool, EditError> {
    if i >= tokens.len() {
        return Err(EditError::NoSuchToken(i));
    }
    if i == 0 {
        return Err(EditError::NothingBefore(i));
    }
    Ok(tokens[i - 1].kind == kind)
}

/// Does the token after `i` have the given kind?
pub fn has_after(tokens: &[Token], i: usize, kind: TokenKind) -> Result<bool, EditError> {
    if i >= tokens.len() {
        return Err(EditError::NoSuchToken(i));
    }
    if i + 1 >= tokens.len() {
        return Err(EditError::NothingAfter(i));
    }
    Ok(tokens[i + 1].kind == kind)
}

/// Place `to_insert` directly before `i`, merging with same-kind neighbors.
///
/// Walking the insertions in reverse, each one either overwrites an adjacent
/// token of the same kind (no length change) or is inserted fresh (+1).
/// Returns the number of tokens actually inserted before the caller's index.
pub fn insert_or_replace_before(tokens: &mut Vec<Token>, i: usize, to_insert: &[Token]) -> isize {
    let mut at = i;
    let mut shift = 0isize;
    for token in to_insert.iter().rev() {
        if at > 0 && tokens[at - 1].kind == token.kind {
            tokens[at - 1] = token.clone();
            at -= 1;
        } else {
            tokens.insert(at, token.clone());
            shift += 1;
        }
    }
    shift
}

/// Place `to_insert` directly after `i`, merging with same-kind neighbors.
///
/// Returns the net length change; the caller's own index is unaffected, but
/// any cursor beyond `i` would need the shift.
pub fn insert_or_replace_after(tokens: &mut Vec<Token>, i: usize, to_insert: &[Token]) -> isize {
    let mut at = i;
    let mut shift = 0isize;
    for token in to_insert {
        if at + 1 < tokens.len() && tokens[at + 1].kind == token.kind {
            tokens[at + 1] = token.clone();
        } else {
            tokens.insert(at + 1, token.clone());
            shift += 1;
        }
        at += 1;
    }
    shift
}

/// Remove the token before `i` if it has the given kind. Returns -1 on
/// removal, 0 otherwise.
pub fn remove_before_if_exists(tokens: &mut Vec<Token>, i: usize, kind: TokenKind) -> isize {
    if i > 0 && i <= tokens.len() && tokens[i - 1].kind == kind {
        tokens.remove(i - 1);
        -1
    } else {
        0
    }
}

/// Remove the token after `i` if it has the given kind. Returns -1 on
/// removal, 0 otherwise.
pub fn remove_after_if_exists(tokens: &mut Vec<Token>, i: usize, kind: TokenKind) -> isize {
    if i + 1 < tokens.len() && tokens[i + 1].kind == kind {
        tokens.remove(i + 1);
        -1
    } else {
        0
    }
}

/// Tokens that can begin a fresh line: literals, keywords, identifiers, and
/// anything spelled with a leading `@`.
pub fn is_line_start(token: &Token) -> bool {
    token.kind.is_literal()
        || matches!(token.kind, TokenKind::Keyword | TokenKind::Identifier)
        || token.text.starts_with('@')
}

/// Re-indent the continuation lines of a multi-line comment.
///
/// The delta between the comment's original starting column and the target
/// indent is applied to every line after the first: positive deltas pad with
/// spaces, negative deltas trim that many leading characters.
pub fn format_comment(token: &Token, indent: usize) -> Token {
    let column = token.position.map_or(0, |p| p.column);
    let shift = indent as isize - column as isize;

    let mut lines = token.text.split('\n');
    let mut result: Vec<String> = Vec::new();
    if let Some(first) = lines.next() {
        result.push(first.to_string());
    }
    for line in lines {
        if shift < 0 {
            result.push(line.chars().skip(-shift as usize).collect());
        } else {
            result.push(format!("{}{}", " ".repeat(shift as usize), line));
        }
    }

    Token {
        kind: token.kind,
        text: result.join("\n"),
        position: token.position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::javafmt::testing::factories::{ident, kw, lb, sep, tok, ws};
    use crate::javafmt::tokens::Position;

    #[test]
    fn has_before_and_after() {
        let tokens = vec![sep(";"), kw("public"), kw("class")];

        assert_eq!(has_before(&tokens, 1, TokenKind::Separator), Ok(true));
        assert_eq!(has_after(&tokens, 1, TokenKind::Keyword), Ok(true));
        assert_eq!(has_after(&tokens, 0, TokenKind::Keyword), Ok(true));
        assert_eq!(has_before(&tokens, 2, TokenKind::Keyword), Ok(true));

        assert_eq!(has_after(&tokens, 0, TokenKind::Separator), Ok(false));
        assert_eq!(has_before(&tokens, 1, TokenKind::Identifier), Ok(false));

        assert_eq!(
            has_before(&tokens, 0, TokenKind::Separator),
            Err(EditError::NothingBefore(0))
        );
        assert_eq!(
            has_after(&tokens, 2, TokenKind::Keyword),
            Err(EditError::NothingAfter(2))
        );
        assert_eq!(
            has_before(&tokens, 3, TokenKind::Keyword),
            Err(EditError::NoSuchToken(3))
        );
    }

    #[test]
    fn insert_before_merges_same_kind() {
        let mut tokens = vec![lb(), ws(" "), kw("a")];

        let shift = insert_or_replace_before(&mut tokens, 2, &[ws(""), lb()]);
        assert_eq!(shift, 1);
        assert_eq!(tokens, vec![lb(), ws(""), lb(), kw("a")]);
    }

    #[test]
    fn insert_after_merges_same_kind() {
        let mut tokens = vec![lb(), ws(" "), kw("a")];

        let shift = insert_or_replace_after(&mut tokens, 2, &[lb()]);
        assert_eq!(shift, 1);
        assert_eq!(tokens, vec![lb(), ws(" "), kw("a"), lb()]);

        // A line break already in the slot is overwritten, not duplicated
        let shift = insert_or_replace_after(&mut tokens, 2, &[lb()]);
        assert_eq!(shift, 0);
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn insert_before_fresh_tokens_shift_the_cursor() {
        let mut tokens = vec![sep("}")];
        let shift = insert_or_replace_before(&mut tokens, 0, &[lb(), ws("    ")]);
        assert_eq!(shift, 2);
        assert_eq!(tokens, vec![lb(), ws("    "), sep("}")]);
    }

    #[test]
    fn conditional_removal_reports_shift() {
        let mut tokens = vec![ws(" "), sep(")"), ws(" ")];
        assert_eq!(remove_before_if_exists(&mut tokens, 1, TokenKind::Whitespace), -1);
        assert_eq!(remove_after_if_exists(&mut tokens, 0, TokenKind::Whitespace), -1);
        assert_eq!(tokens, vec![sep(")")]);
        assert_eq!(remove_before_if_exists(&mut tokens, 0, TokenKind::Whitespace), 0);
        assert_eq!(remove_after_if_exists(&mut tokens, 0, TokenKind::Whitespace), 0);
    }

    #[test]
    fn line_start_tokens() {
        assert!(is_line_start(&kw("return")));
        assert!(is_line_start(&ident("foo")));
        assert!(is_line_start(&tok(TokenKind::DecimalInteger, "1")));
        assert!(is_line_start(&tok(TokenKind::Annotation, "@")));
        assert!(!is_line_start(&sep("{")));
        assert!(!is_line_start(&tok(TokenKind::Operator, "+")));
        assert!(!is_line_start(&ws(" ")));
    }

    #[test]
    fn format_comment_pads_continuation_lines() {
        let comment = Token::at(
            TokenKind::Comment,
            "/* a\n * b\n */",
            Position { line: 1, column: 0 },
        );
        let formatted = format_comment(&comment, 4);
        assert_eq!(formatted.text, "/* a\n     * b\n     */");
    }

    #[test]
    fn format_comment_trims_when_dedenting() {
        let comment = Token::at(
            TokenKind::Comment,
            "/* a\n     * b\n     */",
            Position { line: 1, column: 4 },
        );
        let formatted = format_comment(&comment, 0);
        assert_eq!(formatted.text, "/* a\n * b\n */");
    }
}
