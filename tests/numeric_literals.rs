//! Numeric literal classification
//!
//! One case per literal shape: base prefixes, fraction-first floats,
//! exponents, suffixes and underscore separators.

use rstest::rstest;

use javafmt::javafmt::lexing::tokenize;
use javafmt::javafmt::tokens::TokenKind;

#[rstest]
#[case("0x1F", TokenKind::HexInteger)]
#[case("0xCAFE", TokenKind::HexInteger)]
#[case("0x1.8p3", TokenKind::HexFloatingPoint)]
#[case("0x1p-2", TokenKind::HexFloatingPoint)]
#[case("0b101", TokenKind::BinaryInteger)]
#[case("0B11", TokenKind::BinaryInteger)]
#[case("012", TokenKind::OctalInteger)]
#[case("0777", TokenKind::OctalInteger)]
#[case("3.14", TokenKind::DecimalFloatingPoint)]
#[case("3.14f", TokenKind::DecimalFloatingPoint)]
#[case("2.5d", TokenKind::DecimalFloatingPoint)]
#[case("1e9", TokenKind::DecimalFloatingPoint)]
#[case("6.02e+23", TokenKind::DecimalFloatingPoint)]
#[case(".5", TokenKind::DecimalFloatingPoint)]
#[case("10", TokenKind::DecimalInteger)]
#[case("0", TokenKind::DecimalInteger)]
#[case("10L", TokenKind::DecimalInteger)]
#[case("1_000", TokenKind::DecimalInteger)]
#[case("1_000_000L", TokenKind::DecimalInteger)]
fn classifies_numeric_literal(#[case] source: &str, #[case] expected: TokenKind) {
    let (tokens, diagnostics) = tokenize(source);
    assert!(
        diagnostics.is_empty(),
        "unexpected diagnostics for {source:?}: {diagnostics:?}"
    );
    assert_eq!(tokens.len(), 1, "expected one token for {source:?}");
    assert_eq!(tokens[0].kind, expected);
    assert_eq!(tokens[0].text, source);
}

#[rstest]
#[case("1+2", &["1", "+", "2"])]
#[case("a[0]", &["a", "[", "0", "]"])]
#[case("f(1,2)", &["f", "(", "1", ",", "2", ")"])]
fn literals_split_cleanly_from_neighbors(#[case] source: &str, #[case] expected: &[&str]) {
    let (tokens, _) = tokenize(source);
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, expected);
}

#[test]
fn hex_float_without_exponent_is_flagged() {
    let (tokens, diagnostics) = tokenize("0x1.8");
    assert_eq!(tokens[0].kind, TokenKind::HexFloatingPoint);
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].contains("invalid hex float literal"));
}
