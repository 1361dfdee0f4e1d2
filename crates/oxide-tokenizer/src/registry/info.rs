//! Metadata records held by the symbol registries.
//!
//! Records are immutable once registered and shared with tokens through
//! `Arc`, so a token keeps the record it was classified with even if the
//! registry entry is replaced later.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lexer::{CommonSymbol, FunctionCategory, KeywordCategory, OperatorCategory};

/// A reserved or recognized SQL word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeywordInfo {
    /// The keyword text as registered.
    pub lexeme: String,
    /// The keyword category.
    pub category: KeywordCategory,
    /// Free-form discriminator for dialect-specific sub-kinds.
    #[serde(default)]
    pub sub_kind: i32,
}

impl KeywordInfo {
    /// Creates a keyword record with a zero sub-kind.
    #[must_use]
    pub fn new(lexeme: impl Into<String>, category: KeywordCategory) -> Self {
        Self {
            lexeme: lexeme.into(),
            category,
            sub_kind: 0,
        }
    }

    /// Sets the sub-kind discriminator.
    #[must_use]
    pub const fn with_sub_kind(mut self, sub_kind: i32) -> Self {
        self.sub_kind = sub_kind;
        self
    }
}

/// A built-in or user-registered SQL function.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionInfo {
    /// The function name as registered.
    pub name: String,
    /// The function category.
    pub category: FunctionCategory,
    /// Minimum number of arguments.
    pub min_args: i32,
    /// Maximum number of arguments, [`FunctionInfo::UNBOUNDED`] for variadic.
    pub max_args: i32,
    /// Short human readable summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FunctionInfo {
    /// Arity bound meaning "no limit".
    pub const UNBOUNDED: i32 = -1;

    /// Creates a function record without a description.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: FunctionCategory,
        min_args: i32,
        max_args: i32,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            min_args,
            max_args,
            description: None,
        }
    }

    /// Attaches a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns true if a call with `count` arguments fits the declared arity.
    ///
    /// Negative bounds are treated as open.
    #[must_use]
    pub fn accepts_arg_count(&self, count: usize) -> bool {
        let count = i64::try_from(count).unwrap_or(i64::MAX);
        let above_min = self.min_args < 0 || count >= i64::from(self.min_args);
        let below_max = self.max_args < 0 || count <= i64::from(self.max_args);
        above_min && below_max
    }

    /// Returns true if the function takes any number of trailing arguments.
    #[must_use]
    pub const fn is_variadic(&self) -> bool {
        self.max_args < 0
    }

    /// Returns the arity as `MIN..MAX`, with `∞` for an unbounded maximum.
    #[must_use]
    pub fn arity(&self) -> String {
        if self.is_variadic() {
            format!("{}..∞", self.min_args)
        } else {
            format!("{}..{}", self.min_args, self.max_args)
        }
    }
}

impl fmt::Display for FunctionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, args {})", self.name, self.category, self.arity())
    }
}

/// A built-in or user-registered operator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperatorInfo {
    /// The operator text, symbolic (`->>`) or words (`NOT LIKE`).
    pub symbol: String,
    /// The operator category.
    pub category: OperatorCategory,
    /// Binding strength, see [`crate::precedence`].
    pub precedence: u8,
    /// Whether chains group left to right.
    pub left_associative: bool,
    /// Whether the operator is a prefix operator.
    pub unary: bool,
}

impl OperatorInfo {
    /// Creates a binary, left-associative operator record.
    #[must_use]
    pub fn new(symbol: impl Into<String>, category: OperatorCategory, precedence: u8) -> Self {
        Self {
            symbol: symbol.into(),
            category,
            precedence,
            left_associative: true,
            unary: false,
        }
    }

    /// Marks the operator as right-associative.
    #[must_use]
    pub const fn right_associative(mut self) -> Self {
        self.left_associative = false;
        self
    }

    /// Marks the operator as a prefix operator.
    #[must_use]
    pub const fn prefix(mut self) -> Self {
        self.unary = true;
        self
    }
}

/// A structural punctuation character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PunctuatorInfo {
    /// The punctuator text; registrable only when exactly one character.
    pub lexeme: String,
    /// The structural role.
    pub symbol: CommonSymbol,
}

impl PunctuatorInfo {
    #[must_use]
    pub fn new(lexeme: impl Into<String>, symbol: CommonSymbol) -> Self {
        Self {
            lexeme: lexeme.into(),
            symbol,
        }
    }

    /// Returns the punctuator character if the lexeme is a single character.
    #[must_use]
    pub fn character(&self) -> Option<char> {
        let mut chars = self.lexeme.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}
