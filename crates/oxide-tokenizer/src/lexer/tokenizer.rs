//! SQL Tokenizer implementation.
//!
//! The lexer runs an ordered chain of recognizers at each position. A
//! recognizer inspects the remaining input without moving the cursor and
//! reports how far its token extends; the first one that matches wins and
//! the cursor then advances over the consumed text, keeping line and column
//! in step. Every recognizer consumes at least one character, and the last
//! one always matches, so the lexer makes progress on any input.

mod literal;
mod word;

use std::iter::FusedIterator;

use tracing::{debug, trace};

use super::{Classification, CommentKind, LiteralCategory, Span, Token, TokenType};
use crate::registry::Registries;

/// Longest symbolic operator, in characters.
const MAX_OPERATOR_CHARS: usize = 4;

/// A token recognized at the cursor, not yet emitted.
#[derive(Debug)]
struct Scanned {
    /// Byte offset just past the token.
    end: usize,
    token_type: TokenType,
    lexeme: String,
    classification: Option<Classification>,
}

impl Scanned {
    fn new(token_type: TokenType, end: usize, lexeme: impl Into<String>) -> Self {
        Self {
            end,
            token_type,
            lexeme: lexeme.into(),
            classification: None,
        }
    }

    fn literal(category: LiteralCategory, end: usize, lexeme: impl Into<String>) -> Self {
        Self::new(TokenType::Literal, end, lexeme).classified(Classification::Literal(category))
    }

    fn classified(mut self, classification: Classification) -> Self {
        self.classification = Some(classification);
        self
    }
}

/// A lexer that tokenizes SQL input.
///
/// The lexer is an [`Iterator`] over tokens that ends after yielding a
/// single [`TokenType::EndOfFile`] token.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// Lookup tables used to classify words and symbols.
    registries: &'a Registries,
    /// The current byte position.
    pos: usize,
    /// 1-based line of the cursor.
    line: usize,
    /// 1-based column of the cursor, in characters.
    column: usize,
    /// Tokens emitted so far.
    emitted: usize,
    /// Set once the EOF token has been yielded.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer using the built-in registries.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_registries(input, Registries::builtin())
    }

    /// Creates a new lexer that classifies with the given registries.
    #[must_use]
    pub const fn with_registries(input: &'a str, registries: &'a Registries) -> Self {
        Self {
            input,
            registries,
            pos: 0,
            line: 1,
            column: 1,
            emitted: 0,
            finished: false,
        }
    }

    /// Returns the line of the cursor.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the column of the cursor.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Returns the unscanned input.
    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Scans the next token.
    ///
    /// Once the input is exhausted every call returns an EOF token.
    #[must_use]
    pub fn next_token(&mut self) -> Token {
        if self.pos == 0 && self.emitted == 0 {
            debug!(bytes = self.input.len(), "Starting scan");
        }
        self.skip_whitespace();

        let (start, line, column) = (self.pos, self.line, self.column);
        if self.peek().is_none() {
            return Token::new(TokenType::EndOfFile, "", line, column, Span::new(start, start));
        }

        let scanned = self.scan_token();
        while self.pos < scanned.end {
            if self.advance().is_none() {
                break;
            }
        }
        self.emitted += 1;

        Token {
            token_type: scanned.token_type,
            lexeme: scanned.lexeme,
            line,
            column,
            span: Span::new(start, self.pos),
            classification: scanned.classification,
        }
    }

    /// Tokenizes the remaining input and returns all tokens, ending with EOF.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        self.by_ref().collect()
    }

    /// Runs the recognizers in priority order.
    fn scan_token(&self) -> Scanned {
        self.scan_comment()
            .or_else(|| self.scan_dollar_quoted())
            .or_else(|| self.scan_escape_string())
            .or_else(|| self.scan_bit_string())
            .or_else(|| self.scan_hex_string())
            .or_else(|| self.scan_prefixed_hex())
            .or_else(|| self.scan_prefixed_binary())
            .or_else(|| self.scan_array())
            .or_else(|| self.scan_json())
            .or_else(|| self.scan_xml())
            .or_else(|| self.scan_uuid())
            .or_else(|| self.scan_delimited_identifier())
            .or_else(|| self.scan_quoted())
            .or_else(|| self.scan_char())
            .or_else(|| self.scan_number())
            .or_else(|| self.scan_word())
            .or_else(|| self.scan_multi_char_operator())
            .or_else(|| self.scan_single_char_operator())
            .or_else(|| self.scan_punctuator())
            .unwrap_or_else(|| self.scan_unknown())
    }

    /// Scans a `-- ...` or `/* ... */` comment.
    fn scan_comment(&self) -> Option<Scanned> {
        let rest = self.rest();
        if rest.starts_with("--") {
            let len = rest.find('\n').unwrap_or(rest.len());
            return Some(
                Scanned::new(TokenType::Comment, self.pos + len, &rest[..len])
                    .classified(Classification::Comment(CommentKind::SingleLine)),
            );
        }
        if rest.starts_with("/*") {
            // Unterminated block comments run to the end of input.
            let len = rest[2..].find("*/").map_or(rest.len(), |i| i + 4);
            return Some(
                Scanned::new(TokenType::Comment, self.pos + len, &rest[..len])
                    .classified(Classification::Comment(CommentKind::MultiLine)),
            );
        }
        None
    }

    /// Scans the longest registered symbolic operator of 2 to 4 characters.
    fn scan_multi_char_operator(&self) -> Option<Scanned> {
        let rest = self.rest();
        let ends: Vec<usize> = rest
            .char_indices()
            .take(MAX_OPERATOR_CHARS)
            .map(|(i, c)| i + c.len_utf8())
            .collect();
        ends.iter().skip(1).rev().find_map(|&len| {
            let symbol = &rest[..len];
            let info = self.registries.operators.try_get(symbol)?;
            Some(
                Scanned::new(TokenType::Operator, self.pos + len, symbol)
                    .classified(Classification::Operator(info)),
            )
        })
    }

    fn scan_single_char_operator(&self) -> Option<Scanned> {
        let rest = self.rest();
        let len = rest.chars().next()?.len_utf8();
        let symbol = &rest[..len];
        let info = self.registries.operators.try_get(symbol)?;
        Some(
            Scanned::new(TokenType::Operator, self.pos + len, symbol)
                .classified(Classification::Operator(info)),
        )
    }

    fn scan_punctuator(&self) -> Option<Scanned> {
        let c = self.peek()?;
        let info = self.registries.punctuators.try_get(&c)?;
        let end = self.pos + c.len_utf8();
        Some(
            Scanned::new(TokenType::Punctuator, end, &self.input[self.pos..end])
                .classified(Classification::Punctuator(info)),
        )
    }

    /// Emits a single unrecognized character.
    fn scan_unknown(&self) -> Scanned {
        let len = self.peek().map_or(0, char::len_utf8);
        let end = self.pos + len;
        trace!(
            line = self.line,
            column = self.column,
            text = &self.input[self.pos..end],
            "Unrecognized character"
        );
        Scanned::new(TokenType::Unknown, end, &self.input[self.pos..end])
    }

    /// Emits the run of non-whitespace characters at the cursor as unknown.
    fn scan_unknown_run(&self) -> Scanned {
        let rest = self.rest();
        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        trace!(
            line = self.line,
            column = self.column,
            text = &rest[..len],
            "Unrecognized run"
        );
        Scanned::new(TokenType::Unknown, self.pos + len, &rest[..len])
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            self.finished = true;
            debug!(tokens = self.emitted, lines = self.line, "Finished scan");
        }
        Some(token)
    }
}

impl FusedIterator for Lexer<'_> {}

/// Byte length of the leading run of whitespace in `text`.
fn whitespace_len(text: &str) -> usize {
    text.find(|c: char| !c.is_whitespace()).unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{CommentKind, KeywordCategory, OperatorCategory};

    fn tokenize(input: &str) -> Vec<Token> {
        Lexer::new(input).tokenize()
    }

    fn token_types(input: &str) -> Vec<TokenType> {
        tokenize(input).into_iter().map(|t| t.token_type).collect()
    }

    #[test]
    fn test_empty_input() {
        let tokens = tokenize("");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
        assert_eq!(tokens[0].lexeme, "");
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
    }

    #[test]
    fn test_whitespace_only() {
        let tokens = tokenize("  \n\t ");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
        assert_eq!((tokens[0].line, tokens[0].column), (2, 3));
        assert_eq!(tokens[0].span, Span::new(5, 5));
    }

    #[test]
    fn test_single_line_comment() {
        let tokens = tokenize("-- hi\nSELECT");
        assert_eq!(tokens[0].token_type, TokenType::Comment);
        assert_eq!(tokens[0].lexeme, "-- hi");
        assert_eq!(tokens[0].comment_kind(), Some(CommentKind::SingleLine));
        assert_eq!(tokens[1].token_type, TokenType::Keyword);
        assert_eq!((tokens[1].line, tokens[1].column), (2, 1));
    }

    #[test]
    fn test_multi_line_comment() {
        let tokens = tokenize("/* a\n b */ x");
        assert_eq!(tokens[0].lexeme, "/* a\n b */");
        assert_eq!(tokens[0].comment_kind(), Some(CommentKind::MultiLine));
        assert_eq!(tokens[1].lexeme, "x");
        assert_eq!((tokens[1].line, tokens[1].column), (2, 7));
    }

    #[test]
    fn test_unterminated_block_comment() {
        let tokens = tokenize("SELECT /* never closed");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].lexeme, "/* never closed");
        assert!(tokens[2].is_eof());
    }

    #[test]
    fn test_simple_select() {
        let tokens = tokenize("SELECT 1;");
        assert_eq!(
            token_types("SELECT 1;"),
            vec![
                TokenType::Keyword,
                TokenType::Literal,
                TokenType::Punctuator,
                TokenType::EndOfFile,
            ]
        );
        assert_eq!(tokens[0].keyword_category(), Some(KeywordCategory::Dml));
        assert_eq!(tokens[1].literal_category(), Some(LiteralCategory::Integer));
        assert_eq!(tokens[2].lexeme, ";");
        assert_eq!(tokens[3].span, Span::new(9, 9));
    }

    #[test]
    fn test_longest_symbolic_operator_wins() {
        let tokens = tokenize("a->>'k' #>> b !~* c");
        let ops: Vec<&str> = tokens
            .iter()
            .filter(|t| t.token_type == TokenType::Operator)
            .map(|t| t.lexeme.as_str())
            .collect();
        assert_eq!(ops, vec!["->>", "#>>", "!~*"]);
    }

    #[test]
    fn test_comparison_operators() {
        let tokens = tokenize("a <> b <= c >= d != e");
        for token in tokens.iter().filter(|t| t.token_type == TokenType::Operator) {
            assert_eq!(token.operator_category(), Some(OperatorCategory::Comparison));
        }
        assert_eq!(tokens[1].lexeme, "<>");
        assert_eq!(tokens[7].lexeme, "!=");
    }

    #[test]
    fn test_unknown_character() {
        let tokens = tokenize("a § b");
        assert_eq!(tokens[1].token_type, TokenType::Unknown);
        assert_eq!(tokens[1].lexeme, "§");
        assert_eq!(tokens[2].column, 5);
    }

    #[test]
    fn test_column_counts_characters() {
        let tokens = tokenize("'é' x");
        assert_eq!(tokens[1].column, 5);
        assert_eq!(tokens[1].span, Span::new(5, 6));
    }

    #[test]
    fn test_iterator_is_fused() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next().unwrap().lexeme, "x");
        assert!(lexer.next().unwrap().is_eof());
        assert!(lexer.next().is_none());
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_next_token_repeats_eof() {
        let mut lexer = Lexer::new("");
        assert!(lexer.next_token().is_eof());
        assert!(lexer.next_token().is_eof());
    }

    #[test]
    fn test_custom_registries() {
        let mut registries = Registries::empty();
        let tokens = Lexer::with_registries("SELECT x", &registries).tokenize();
        assert_eq!(tokens[0].token_type, TokenType::Identifier);

        registries
            .keywords
            .register_custom(crate::registry::KeywordInfo::new(
                "select",
                KeywordCategory::Dml,
            ))
            .unwrap();
        let tokens = Lexer::with_registries("SELECT x", &registries).tokenize();
        assert_eq!(tokens[0].token_type, TokenType::Keyword);
        assert_eq!(tokens[0].lexeme, "SELECT");
    }
}
