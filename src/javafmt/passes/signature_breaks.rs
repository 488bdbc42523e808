//! Signature line-break normalization
//!
//! Joins method and type signatures that were spread over several lines:
//! line breaks are stripped from the start of a signature up to the opening
//! `(` of the parameter list, and inside `< … >` generic argument lists.
//!
//! There is no grammar here, so "signature" is inferred: a modifier, a basic
//! type or a `class`/`interface`/`enum` keyword opens one. A `<` only counts
//! as a generic bracket when it follows a modifier or a return-type-shaped
//! token, or appears inside an open parameter list; everything else is a
//! comparison. The machine resets at `;`, `{`, `}`, on assignment operators
//! (an initializer is an expression, not a signature) and when the paren
//! depth returns to zero.

use crate::javafmt::passes::Pass;
use crate::javafmt::settings::Settings;
use crate::javafmt::tokens::{Token, TokenKind};

pub struct SignatureBreaks;

impl Pass for SignatureBreaks {
    fn name(&self) -> &str {
        "clear_line_breaks_in_signatures"
    }

    fn description(&self) -> &str {
        "Joins line-broken method and type signatures onto one line"
    }

    fn enabled(&self, settings: &Settings) -> bool {
        settings.clear_line_breaks_in_signatures
    }

    fn apply(&self, tokens: Vec<Token>, _: &Settings, _: &mut Vec<String>) -> Vec<Token> {
        clear_signature_breaks(tokens)
    }
}

#[derive(Default)]
struct SignatureState {
    active: bool,
    params_opened: bool,
    paren_depth: usize,
    generic_depth: usize,
    /// Last significant token could be a return type or type name.
    prev_typeish: bool,
}

impl SignatureState {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn stripping(&self) -> bool {
        self.active && (self.generic_depth > 0 || !self.params_opened)
    }
}

/// Keywords that open a signature without being modifiers or basic types:
/// type declarations and the `void` return type.
fn is_signature_opening_keyword(token: &Token) -> bool {
    token.kind == TokenKind::Keyword
        && matches!(token.text.as_str(), "class" | "interface" | "enum" | "void")
}

fn clear_signature_breaks(mut tokens: Vec<Token>) -> Vec<Token> {
    let mut state = SignatureState::default();
    let mut i = 0;

    while i < tokens.len() {
        if tokens[i].kind == TokenKind::LineBreak && state.stripping() {
            tokens.remove(i);
            // Two word-like tokens must not glue together after the join
            let needs_space = i > 0
                && i < tokens.len()
                && !tokens[i - 1].kind.is_trivia()
                && !tokens[i].kind.is_trivia();
            if needs_space {
                tokens.insert(i, Token::new(TokenKind::Whitespace, " "));
                i += 1;
            }
            continue;
        }

        match tokens[i].kind {
            TokenKind::Whitespace
            | TokenKind::ImportantWhitespace
            | TokenKind::LineBreak
            | TokenKind::Comment => {}
            TokenKind::Keyword => {
                if tokens[i].is_modifier()
                    || tokens[i].is_basic_type()
                    || is_signature_opening_keyword(&tokens[i])
                {
                    state.active = true;
                    state.prev_typeish = true;
                } else {
                    state.prev_typeish = false;
                }
            }
            TokenKind::Identifier => {
                if state.active {
                    state.prev_typeish = true;
                }
            }
            TokenKind::Operator => {
                let generic_open = tokens[i].text == "<"
                    && state.active
                    && (state.prev_typeish || state.paren_depth > 0);
                if generic_open {
                    state.generic_depth += 1;
                } else if tokens[i].text == ">" && state.generic_depth > 0 {
                    state.generic_depth -= 1;
                } else if tokens[i].is_assignment() {
                    state.reset();
                }
                state.prev_typeish = false;
            }
            TokenKind::Separator => {
                match tokens[i].text.as_str() {
                    "(" if state.active => {
                        state.paren_depth += 1;
                        state.params_opened = true;
                    }
                    ")" => {
                        state.paren_depth = state.paren_depth.saturating_sub(1);
                        if state.paren_depth == 0 {
                            state.reset();
                        }
                    }
                    ";" | "{" | "}" => state.reset(),
                    _ => {}
                }
                state.prev_typeish = false;
            }
            _ => state.prev_typeish = false,
        }

        i += 1;
    }

    tokens
}
