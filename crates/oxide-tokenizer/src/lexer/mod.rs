//! SQL Lexer/Tokenizer
//!
//! This module provides a hand-written, registry-driven lexer for SQL that
//! produces a stream of classified tokens. Scanning never fails: malformed
//! input degrades to best-effort tokens and, at worst, `UNKNOWN` tokens.

mod category;
mod engine;
mod span;
mod stream;
mod token;
mod tokenizer;

pub use category::{
    CommentKind, CommonSymbol, DateTimePart, FunctionCategory, KeywordCategory, LiteralCategory,
    OperatorCategory, TokenType,
};
pub use engine::Tokenizer;
pub use span::Span;
pub use stream::{CancellationFlag, TokenStream};
pub use token::{Classification, Token};
pub use tokenizer::Lexer;
