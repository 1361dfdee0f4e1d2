#![allow(dead_code)]

use oxide_tokenizer::{tokenize, Token, TokenType};

pub fn tokens(sql: &str) -> Vec<Token> {
    let tokens = tokenize(sql);
    assert_well_formed(sql, &tokens);
    tokens
}

pub fn types(sql: &str) -> Vec<TokenType> {
    tokens(sql).into_iter().map(|t| t.token_type).collect()
}

pub fn lexemes(sql: &str) -> Vec<String> {
    tokens(sql).into_iter().map(|t| t.lexeme).collect()
}

/// Tokenizes input expected to hold exactly one token before EOF.
pub fn single(sql: &str) -> Token {
    let mut tokens = tokens(sql);
    assert_eq!(
        tokens.len(),
        2,
        "Expected one token for {sql:?}, got {tokens:#?}"
    );
    tokens.swap_remove(0)
}

/// 1-based (line, column) of byte offset `offset`, columns in characters.
pub fn position_of(sql: &str, offset: usize) -> (usize, usize) {
    let before = &sql[..offset];
    let line = 1 + before.matches('\n').count();
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = 1 + before[line_start..].chars().count();
    (line, column)
}

/// Checks the structural guarantees every token sequence must satisfy:
/// a single trailing EOF, spans that together with whitespace tile the
/// input, and positions that agree with the spans.
pub fn assert_well_formed(sql: &str, tokens: &[Token]) {
    let last = tokens
        .last()
        .unwrap_or_else(|| panic!("No tokens for {sql:?}"));
    assert!(last.is_eof(), "Last token is not EOF for {sql:?}: {last:?}");
    assert_eq!(last.lexeme, "");
    assert_eq!((last.span.start, last.span.end), (sql.len(), sql.len()));

    let mut cursor = 0;
    let mut prev_line = 1;
    for token in tokens {
        assert!(
            token.span.start >= cursor,
            "Overlapping span in {sql:?}: {token:?}"
        );
        let gap = &sql[cursor..token.span.start];
        assert!(
            gap.chars().all(char::is_whitespace),
            "Uncovered text {gap:?} in {sql:?}"
        );
        if !std::ptr::eq(token, last) {
            assert!(!token.is_eof(), "EOF before the end of {sql:?}");
            assert!(!token.span.is_empty(), "Empty span in {sql:?}: {token:?}");
        }
        assert_eq!(
            (token.line, token.column),
            position_of(sql, token.span.start),
            "Position mismatch in {sql:?}: {token:?}"
        );
        assert!(token.line >= prev_line);
        prev_line = token.line;
        cursor = token.span.end;
    }
}
