//! # oxide-tokenizer
//!
//! A classifying SQL tokenizer for parsers, syntax highlighters, linters
//! and other tools that need to understand SQL text without parsing it.
//!
//! This crate provides:
//! - A single-pass lexer that never fails: every input produces a token
//!   sequence ending with one `END_OF_FILE` token
//! - Registry-driven classification of keywords, operators (including
//!   multi-word operators such as `IS NOT DISTINCT FROM`), functions and
//!   punctuators, with custom vocabulary per session
//! - Recognition of the common literal forms: quoted strings with date and
//!   time detection, `E''` escape strings, bit and hex strings, numbers,
//!   intervals, UUIDs, arrays, JSON objects and XML tags
//! - A cancellable `futures::Stream` over the same tokens
//! - JSON and CSV encodings
//!
//! ## Tokenizing
//!
//! ```rust
//! use oxide_tokenizer::{tokenize, OperatorCategory, TokenType};
//!
//! let tokens = tokenize("SELECT name FROM users WHERE name NOT LIKE 'a%'");
//!
//! assert_eq!(tokens[0].token_type, TokenType::Keyword);
//! assert_eq!(tokens[6].lexeme, "NOT LIKE");
//! assert_eq!(tokens[6].operator_category(), Some(OperatorCategory::Comparison));
//! assert!(tokens.last().is_some_and(|t| t.is_eof()));
//! ```
//!
//! ## Custom Vocabulary
//!
//! ```rust
//! use oxide_tokenizer::{KeywordCategory, KeywordInfo, TokenType, Tokenizer};
//!
//! let mut tokenizer = Tokenizer::new();
//! tokenizer
//!     .registries_mut()
//!     .keywords
//!     .register_custom(KeywordInfo::new("QUALIFY", KeywordCategory::Clause))
//!     .unwrap();
//!
//! let tokens: Vec<_> = tokenizer.tokenize("qualify").collect();
//! assert_eq!(tokens[0].token_type, TokenType::Keyword);
//! ```

pub mod encoding;
pub mod lexer;
pub mod registry;

pub use encoding::{from_json, to_csv, to_json, EncodingError};
pub use lexer::{
    CancellationFlag, Classification, CommentKind, CommonSymbol, DateTimePart, FunctionCategory,
    KeywordCategory, Lexer, LiteralCategory, OperatorCategory, Span, Token, TokenStream,
    TokenType, Tokenizer,
};
pub use registry::{
    precedence, FunctionInfo, FunctionRegistry, KeywordInfo, KeywordRegistry, OperatorInfo,
    OperatorRegistry, PunctuatorInfo, PunctuatorRegistry, Registries, Registry, RegistryError,
    Symbol,
};

/// Tokenizes `input` with the built-in registries.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize()
}
