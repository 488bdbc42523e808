//! Hand-rolled longest-match lexer for Java-family source text
//!
//! The scanner is lazy, single-pass and non-restartable: [`Lexer`] yields
//! each token exactly once and its scan position only moves forward. Every
//! token carries the exact source substring it was cut from, so the stream
//! concatenates back to the input.
//!
//! Dispatch order at each scan position:
//! 1. `\n` (one `LineBreak` token per newline)
//! 2. other whitespace (maximal non-newline run)
//! 3. `//` / `/*` comments
//! 4. `..` lookahead into the operator table (`...` beats the `.` separator)
//! 5. `@` annotation marker
//! 6. `.` followed by a digit (fraction-first float)
//! 7. single-character separators
//! 8. `'`/`"` literals (escape-aware state machine)
//! 9. numeric literals (hex/binary/octal/decimal, `_` separators, suffixes)
//! 10. identifiers and keywords
//! 11. longest-match operators, 4 characters down to 1
//!
//! Anything else records a diagnostic and skips one character.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::javafmt::tokens::{
    Position, Token, TokenKind, BOOLEAN_LITERALS, KEYWORDS, MAX_OPERATOR_LEN, NULL_LITERAL,
    OPERATORS_BY_LEN, SEPARATORS,
};

/// Maximal run of blank characters that are not newlines.
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\n\S]+").unwrap());

/// Tokenize a complete source string.
///
/// Drains a [`Lexer`] and returns the token stream together with the
/// lexical diagnostics collected along the way. Diagnostics never suppress
/// tokens; the stream is always the scanner's best effort.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<String>) {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    for token in lexer.by_ref() {
        tokens.push(token);
    }
    (tokens, lexer.into_diagnostics())
}

/// The scanner state: a pair of cursors (`i` start of the current token,
/// `j` one past its end) over the source bytes, plus line bookkeeping.
pub struct Lexer<'a> {
    source: &'a str,
    length: usize,
    i: usize,
    j: usize,
    line: usize,
    line_start: usize,
    diagnostics: Vec<String>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            length: source.len(),
            i: 0,
            j: 0,
            line: 1,
            line_start: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Diagnostics recorded so far; the final list after the iterator is
    /// exhausted.
    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<String> {
        self.diagnostics
    }

    fn char_at(&self, pos: usize) -> Option<char> {
        self.source.get(pos..).and_then(|rest| rest.chars().next())
    }

    fn byte_at(&self, pos: usize) -> Option<u8> {
        self.source.as_bytes().get(pos).copied()
    }

    fn error(&mut self, message: &str, ch: Option<char>) {
        // Quote the offending source line in the message
        let line_start = self.source[..self.i].rfind('\n').map_or(0, |p| p + 1);
        let line_end = self.source[self.i..]
            .find('\n')
            .map_or(self.length, |p| self.i + p);
        let line_text = self.source[line_start..line_end].trim();
        let ch = ch.or_else(|| self.char_at(self.i)).unwrap_or(' ');
        self.diagnostics.push(format!(
            "{} at \"{}\", line {}: {}",
            message, ch, self.line, line_text
        ));
    }

    fn next_token(&mut self) -> Option<Token> {
        loop {
            if self.i >= self.length {
                return None;
            }
            let current = self.char_at(self.i)?;
            let lookahead = self.char_at(self.i + current.len_utf8());

            if current == '\n' {
                let position = Position {
                    line: self.line,
                    column: self.i - self.line_start,
                };
                self.i += 1;
                self.line += 1;
                self.line_start = self.i;
                return Some(Token::at(TokenKind::LineBreak, "\n", position));
            }

            let kind = if current.is_whitespace() {
                self.read_whitespace();
                TokenKind::Whitespace
            } else if current == '/' && matches!(lookahead, Some('/') | Some('*')) {
                self.read_comment();
                TokenKind::Comment
            } else if current == '.' && lookahead == Some('.') && self.try_operator() {
                TokenKind::Operator
            } else if current == '@' {
                self.j = self.i + 1;
                TokenKind::Annotation
            } else if current == '.' && lookahead.is_some_and(|c| c.is_ascii_digit()) {
                self.read_decimal_float_or_integer()
            } else if self.try_separator(current) {
                TokenKind::Separator
            } else if current == '\'' || current == '"' {
                self.read_string(current)
            } else if current.is_ascii_digit() {
                self.read_integer_or_float(current, lookahead)
            } else if current.is_alphabetic() {
                self.read_identifier()
            } else if self.try_operator() {
                TokenKind::Operator
            } else {
                self.error("could not process token", Some(current));
                self.i += current.len_utf8();
                continue;
            };

            let position = Position {
                line: self.line,
                column: self.i - self.line_start,
            };
            let text = &self.source[self.i..self.j];

            // Newlines consumed inside a token (multi-line block comments,
            // unterminated literals) still advance the line bookkeeping.
            if let Some(last_newline) = text.rfind('\n') {
                self.line += text.matches('\n').count();
                self.line_start = self.i + last_newline + 1;
            }

            let token = Token::at(kind, text, position);
            self.i = self.j;
            return Some(token);
        }
    }

    fn read_whitespace(&mut self) {
        self.j = match WHITESPACE_RUN.find(&self.source[self.i..]) {
            Some(m) => self.i + m.end(),
            None => self.i + 1,
        };
    }

    fn read_comment(&mut self) {
        if self.byte_at(self.i + 1) == Some(b'/') {
            // Line comment: up to but not including the newline
            self.j = self.source[self.i + 2..]
                .find('\n')
                .map_or(self.length, |p| self.i + 2 + p);
        } else {
            match self.source[self.i + 2..].find("*/") {
                Some(p) => self.j = self.i + 2 + p + 2,
                None => {
                    self.error("unterminated block comment", None);
                    self.j = self.length;
                }
            }
        }
    }

    /// Escape-aware literal scanner shared by character and string literals.
    ///
    /// State 0 is "normal text", state 1 is "right after a backslash",
    /// states 2 and 3 continue an octal escape of up to three digits. The
    /// delimiter only closes the literal from state 0 or right after a
    /// completed octal escape.
    fn read_string(&mut self, delimiter: char) -> TokenKind {
        let delim = delimiter as u8;
        let kind = if delimiter == '\'' {
            TokenKind::Character
        } else {
            TokenKind::String
        };

        let mut state = 0u8;
        let mut j = self.i + 1;
        loop {
            let Some(byte) = self.byte_at(j) else {
                self.error("unterminated character/string literal", Some(delimiter));
                self.j = self.length;
                return kind;
            };

            match state {
                0 => {
                    if byte == b'\\' {
                        state = 1;
                    } else if byte == delim {
                        break;
                    }
                }
                1 => match byte {
                    b'b' | b't' | b'n' | b'f' | b'r' | b'u' | b'"' | b'\'' | b'\\' => state = 0,
                    b'0'..=b'3' => state = 2,
                    b'4'..=b'7' => state = 3,
                    _ => {
                        self.error("illegal escape character", self.char_at(j));
                        state = 0;
                    }
                },
                2 => {
                    // Possibly a long octal escape
                    if byte.is_ascii_digit() && byte < b'8' {
                        state = 3;
                    } else if byte == b'\\' {
                        state = 1;
                    } else if byte == delim {
                        break;
                    } else {
                        state = 0;
                    }
                }
                _ => {
                    state = 0;
                    if byte == b'\\' {
                        state = 1;
                    } else if byte == delim {
                        break;
                    }
                }
            }

            j += 1;
        }

        self.j = j + 1;
        kind
    }

    fn try_operator(&mut self) -> bool {
        let max = MAX_OPERATOR_LEN.min(self.length - self.i);
        for len in (1..=max).rev() {
            if let Some(candidate) = self.source.get(self.i..self.i + len) {
                if OPERATORS_BY_LEN[len - 1].contains(candidate) {
                    self.j = self.i + len;
                    return true;
                }
            }
        }
        false
    }

    fn try_separator(&mut self, current: char) -> bool {
        if SEPARATORS.contains(&current) {
            self.j = self.i + 1;
            return true;
        }
        false
    }

    /// Advance `j` over a digit run. `_` separators are skipped without
    /// being accepted until another digit follows, so a trailing `_` is left
    /// unconsumed. A final `l`/`L` ending the run is taken as a suffix.
    fn read_digits(&mut self, accept: fn(u8) -> bool) {
        let mut pending = 0usize;
        let mut last = None;
        while let Some(byte) = self.byte_at(self.j + pending) {
            last = Some(byte);
            if accept(byte) {
                self.j += 1 + pending;
                pending = 0;
            } else if byte == b'_' {
                pending += 1;
            } else {
                break;
            }
        }
        if matches!(last, Some(b'l') | Some(b'L')) {
            self.j += 1;
        }
    }

    fn read_decimal_float_or_integer(&mut self) -> TokenKind {
        self.j = self.i;
        self.read_digits(|b| b.is_ascii_digit());

        if !matches!(
            self.byte_at(self.j),
            Some(b'.') | Some(b'e') | Some(b'E') | Some(b'f') | Some(b'F') | Some(b'd') | Some(b'D')
        ) {
            return TokenKind::DecimalInteger;
        }

        if self.byte_at(self.j) == Some(b'.') {
            self.j += 1;
            self.read_digits(|b| b.is_ascii_digit());
        }

        if matches!(self.byte_at(self.j), Some(b'e') | Some(b'E')) {
            self.j += 1;
            if matches!(self.byte_at(self.j), Some(b'-') | Some(b'+')) {
                self.j += 1;
            }
            self.read_digits(|b| b.is_ascii_digit());
        }

        if matches!(
            self.byte_at(self.j),
            Some(b'f') | Some(b'F') | Some(b'd') | Some(b'D')
        ) {
            self.j += 1;
        }

        TokenKind::DecimalFloatingPoint
    }

    fn read_hex_integer_or_float(&mut self) -> TokenKind {
        self.j = self.i + 2;
        self.read_digits(|b| b.is_ascii_hexdigit());

        if !matches!(self.byte_at(self.j), Some(b'.') | Some(b'p') | Some(b'P')) {
            return TokenKind::HexInteger;
        }

        if self.byte_at(self.j) == Some(b'.') {
            self.j += 1;
            self.read_digits(|b| b.is_ascii_hexdigit());
        }

        // The binary exponent is mandatory in a hex float
        if matches!(self.byte_at(self.j), Some(b'p') | Some(b'P')) {
            self.j += 1;
        } else {
            let offending = self.char_at(self.j);
            self.error("invalid hex float literal", offending);
        }

        if matches!(self.byte_at(self.j), Some(b'-') | Some(b'+')) {
            self.j += 1;
        }
        self.read_digits(|b| b.is_ascii_digit());

        if matches!(
            self.byte_at(self.j),
            Some(b'f') | Some(b'F') | Some(b'd') | Some(b'D')
        ) {
            self.j += 1;
        }

        TokenKind::HexFloatingPoint
    }

    fn read_integer_or_float(&mut self, current: char, lookahead: Option<char>) -> TokenKind {
        match (current, lookahead) {
            ('0', Some('x' | 'X')) => self.read_hex_integer_or_float(),
            ('0', Some('b' | 'B')) => {
                self.j = self.i + 2;
                self.read_digits(|b| b == b'0' || b == b'1');
                TokenKind::BinaryInteger
            }
            ('0', Some('0'..='7')) => {
                self.j = self.i + 1;
                self.read_digits(|b| (b'0'..=b'7').contains(&b));
                TokenKind::OctalInteger
            }
            _ => self.read_decimal_float_or_integer(),
        }
    }

    fn read_identifier(&mut self) -> TokenKind {
        let rest = &self.source[self.i..];
        let mut end = rest.len();
        for (offset, ch) in rest.char_indices() {
            if offset == 0 {
                continue;
            }
            if !ch.is_alphanumeric() {
                end = offset;
                break;
            }
        }
        self.j = self.i + end;

        let ident = &self.source[self.i..self.j];
        if KEYWORDS.contains(ident) {
            TokenKind::Keyword
        } else if BOOLEAN_LITERALS.contains(ident) {
            TokenKind::Boolean
        } else if ident == NULL_LITERAL {
            TokenKind::Null
        } else {
            TokenKind::Identifier
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}
