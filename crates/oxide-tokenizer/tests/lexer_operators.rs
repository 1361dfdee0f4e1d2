//! Tests for symbolic operators, punctuators, comments and the fallback
//! for unrecognized input.

mod common;
use common::*;

use oxide_tokenizer::{precedence, CommentKind, CommonSymbol, OperatorCategory, TokenType};

fn operator(sql: &str, symbol: &str) -> (OperatorCategory, u8) {
    let token = tokens(sql)
        .into_iter()
        .find(|t| t.lexeme == symbol)
        .unwrap_or_else(|| panic!("No {symbol:?} token in {sql:?}"));
    assert_eq!(token.token_type, TokenType::Operator, "{sql:?}");
    let info = token.operator_info().unwrap();
    (info.category, info.precedence)
}

// =============================================================================
// Symbolic operators
// =============================================================================

#[test]
fn arithmetic_operators() {
    assert_eq!(
        operator("a + b", "+"),
        (OperatorCategory::Arithmetic, precedence::ADDITIVE)
    );
    assert_eq!(
        operator("a * b", "*"),
        (OperatorCategory::Arithmetic, precedence::MULTIPLICATIVE)
    );
    assert_eq!(operator("a % b", "%"), (OperatorCategory::Arithmetic, 70));
    assert_eq!(operator("a ** b", "**"), (OperatorCategory::Arithmetic, 70));
}

#[test]
fn equals_is_comparison() {
    assert_eq!(operator("a = b", "="), (OperatorCategory::Comparison, 35));
}

#[test]
fn assignment_operator() {
    assert_eq!(operator("x := 1", ":="), (OperatorCategory::Assign, precedence::ASSIGNMENT));
}

#[test]
fn typecast_operators() {
    let tokens = tokens("price::numeric");
    assert_eq!(tokens[1].lexeme, "::");
    assert_eq!(tokens[1].operator_category(), Some(OperatorCategory::Typecast));
    assert!(!tokens[1].operator_info().unwrap().left_associative);
    assert_eq!(tokens[2].keyword_category().map(|c| c.as_str()), Some("DATA_TYPE"));
}

#[test]
fn json_operators() {
    assert_eq!(operator("doc -> 'a'", "->"), (OperatorCategory::Json, precedence::MEMBER));
    assert_eq!(operator("doc ->> 'a'", "->>"), (OperatorCategory::Json, 90));
    assert_eq!(operator("doc #- '{a}'", "#-"), (OperatorCategory::Json, 90));
    assert_eq!(operator("doc ?| keys", "?|"), (OperatorCategory::Json, 35));
}

#[test]
fn containment_operators_are_array() {
    assert_eq!(operator("a @> b", "@>"), (OperatorCategory::Array, 35));
    assert_eq!(operator("a <@ b", "<@"), (OperatorCategory::Array, 35));
    assert_eq!(operator("a && b", "&&"), (OperatorCategory::Array, 10));
}

#[test]
fn regex_operators() {
    assert_eq!(operator("a ~ b", "~"), (OperatorCategory::Regex, precedence::PATTERN));
    assert_eq!(operator("a !~* b", "!~*"), (OperatorCategory::Regex, 15));
}

#[test]
fn bitwise_and_concat_operators() {
    assert_eq!(operator("a | b", "|"), (OperatorCategory::Bitwise, precedence::BITWISE_OR));
    assert_eq!(operator("a ^ b", "^"), (OperatorCategory::Bitwise, 45));
    assert_eq!(operator("a << 2", "<<"), (OperatorCategory::Bitwise, precedence::SHIFT));
    assert_eq!(operator("a || b", "||"), (OperatorCategory::Concat, 60));
}

#[test]
fn member_access() {
    assert_eq!(lexemes("s.t.c"), vec!["s", ".", "t", ".", "c", ""]);
    assert_eq!(operator("s.t", "."), (OperatorCategory::Arithmetic, precedence::MEMBER));
}

#[test]
fn operators_without_spaces() {
    assert_eq!(lexemes("a>=1"), vec!["a", ">=", "1", ""]);
    assert_eq!(lexemes("a!=b"), vec!["a", "!=", "b", ""]);
}

// =============================================================================
// Punctuators
// =============================================================================

#[test]
fn punctuators() {
    let tokens = tokens("f(a, b);");
    let symbols: Vec<CommonSymbol> = tokens
        .iter()
        .filter_map(|t| t.punctuator_info().map(|p| p.symbol))
        .collect();
    assert_eq!(
        symbols,
        vec![
            CommonSymbol::LParen,
            CommonSymbol::Comma,
            CommonSymbol::RParen,
            CommonSymbol::Semicolon,
        ]
    );
}

#[test]
fn closing_brackets_are_punctuators() {
    let tokens = tokens("] }");
    assert_eq!(tokens[0].punctuator_info().unwrap().symbol, CommonSymbol::RBracket);
    assert_eq!(tokens[1].punctuator_info().unwrap().symbol, CommonSymbol::RBrace);
}

// =============================================================================
// Comments
// =============================================================================

#[test]
fn comments_are_tokens() {
    let tokens = tokens("SELECT /* cols */ a -- trailing\nFROM t");
    assert_eq!(tokens[1].comment_kind(), Some(CommentKind::MultiLine));
    assert_eq!(tokens[1].lexeme, "/* cols */");
    assert_eq!(tokens[3].comment_kind(), Some(CommentKind::SingleLine));
    assert_eq!(tokens[3].lexeme, "-- trailing");
    assert_eq!((tokens[4].line, tokens[4].column), (2, 1));
}

#[test]
fn comment_marker_beats_operators() {
    let expected = vec![TokenType::Identifier, TokenType::Comment, TokenType::EndOfFile];
    assert_eq!(types("a--b"), expected);
    assert_eq!(types("a/*b*/"), expected);
}

// =============================================================================
// Fallback
// =============================================================================

#[test]
fn unknown_characters() {
    let tokens = tokens("a ¤ \\");
    assert_eq!(tokens[1].token_type, TokenType::Unknown);
    assert_eq!(tokens[1].lexeme, "¤");
    assert_eq!(tokens[2].token_type, TokenType::Unknown);
    assert_eq!(tokens[2].lexeme, "\\");
}
