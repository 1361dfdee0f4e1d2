//! Token types for the SQL tokenizer.

use std::fmt;
use std::sync::Arc;

use super::{
    CommentKind, DateTimePart, FunctionCategory, KeywordCategory, LiteralCategory,
    OperatorCategory, Span, TokenType,
};
use crate::registry::{FunctionInfo, KeywordInfo, OperatorInfo, PunctuatorInfo};

/// What a token was classified as, beyond its [`TokenType`].
///
/// Registry-backed variants share the registry's record, so the metadata a
/// token carries is the metadata that was current when it was scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Keyword(Arc<KeywordInfo>),
    Function(Arc<FunctionInfo>),
    Operator(Arc<OperatorInfo>),
    Punctuator(Arc<PunctuatorInfo>),
    Literal(LiteralCategory),
    Comment(CommentKind),
    DateTimePart(DateTimePart),
}

impl Classification {
    /// Returns the category name, if this classification has one.
    ///
    /// Punctuators report their structural symbol. Date-time parts have no
    /// category.
    #[must_use]
    pub fn category_name(&self) -> Option<&'static str> {
        match self {
            Self::Keyword(info) => Some(info.category.as_str()),
            Self::Function(info) => Some(info.category.as_str()),
            Self::Operator(info) => Some(info.category.as_str()),
            Self::Punctuator(info) => Some(info.symbol.as_str()),
            Self::Literal(category) => Some(category.as_str()),
            Self::Comment(kind) => Some(kind.as_str()),
            Self::DateTimePart(_) => None,
        }
    }
}

/// A token with its position in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The lexical class.
    pub token_type: TokenType,
    /// The token text. Quoted forms carry their content without delimiters.
    pub lexeme: String,
    /// 1-based line of the first consumed character.
    pub line: usize,
    /// 1-based column of the first consumed character, in characters.
    pub column: usize,
    /// The consumed source bytes.
    pub span: Span,
    /// Registry metadata or literal/comment shape.
    pub classification: Option<Classification>,
}

impl Token {
    /// Creates an unclassified token.
    #[must_use]
    pub fn new(
        token_type: TokenType,
        lexeme: impl Into<String>,
        line: usize,
        column: usize,
        span: Span,
    ) -> Self {
        Self {
            token_type,
            lexeme: lexeme.into(),
            line,
            column,
            span,
            classification: None,
        }
    }

    /// Attaches a classification.
    #[must_use]
    pub fn with_classification(mut self, classification: Classification) -> Self {
        self.classification = Some(classification);
        self
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.token_type, TokenType::EndOfFile)
    }

    /// Returns true if this is a comment.
    #[must_use]
    pub const fn is_comment(&self) -> bool {
        matches!(self.token_type, TokenType::Comment)
    }

    #[must_use]
    pub fn keyword_info(&self) -> Option<&KeywordInfo> {
        match &self.classification {
            Some(Classification::Keyword(info)) => Some(info),
            _ => None,
        }
    }

    #[must_use]
    pub fn function_info(&self) -> Option<&FunctionInfo> {
        match &self.classification {
            Some(Classification::Function(info)) => Some(info),
            _ => None,
        }
    }

    #[must_use]
    pub fn operator_info(&self) -> Option<&OperatorInfo> {
        match &self.classification {
            Some(Classification::Operator(info)) => Some(info),
            _ => None,
        }
    }

    #[must_use]
    pub fn punctuator_info(&self) -> Option<&PunctuatorInfo> {
        match &self.classification {
            Some(Classification::Punctuator(info)) => Some(info),
            _ => None,
        }
    }

    #[must_use]
    pub fn keyword_category(&self) -> Option<KeywordCategory> {
        self.keyword_info().map(|info| info.category)
    }

    #[must_use]
    pub fn function_category(&self) -> Option<FunctionCategory> {
        self.function_info().map(|info| info.category)
    }

    #[must_use]
    pub fn operator_category(&self) -> Option<OperatorCategory> {
        self.operator_info().map(|info| info.category)
    }

    #[must_use]
    pub const fn literal_category(&self) -> Option<LiteralCategory> {
        match self.classification {
            Some(Classification::Literal(category)) => Some(category),
            _ => None,
        }
    }

    #[must_use]
    pub const fn comment_kind(&self) -> Option<CommentKind> {
        match self.classification {
            Some(Classification::Comment(kind)) => Some(kind),
            _ => None,
        }
    }

    #[must_use]
    pub const fn date_time_part(&self) -> Option<DateTimePart> {
        match self.classification {
            Some(Classification::DateTimePart(part)) => Some(part),
            _ => None,
        }
    }

    /// Returns the category name of the classification, if any.
    #[must_use]
    pub fn category_name(&self) -> Option<&'static str> {
        self.classification
            .as_ref()
            .and_then(Classification::category_name)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: '{}' ({}:{})",
            self.token_type, self.lexeme, self.line, self.column
        )?;
        if let Some(category) = self.category_name() {
            write!(f, " [{category}]")?;
        }
        Ok(())
    }
}
