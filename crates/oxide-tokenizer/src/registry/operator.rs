//! Built-in operator vocabulary.
//!
//! Symbolic operators (`->>`, `::`) and word operators (`NOT LIKE`,
//! `IS DISTINCT FROM`) share one table. Word operators are stored with
//! single spaces between their words.

use super::precedence::{
    ADDITIVE, AND, ASSIGNMENT, BITWISE_AND, BITWISE_OR, BITWISE_XOR, COMPARISON, MEMBER,
    MULTIPLICATIVE, OR, PATTERN, SHIFT, TYPECAST, UNARY,
};
use super::{fold_key, text_key, OperatorInfo, Result, Symbol};
use crate::lexer::OperatorCategory as O;

impl Symbol for OperatorInfo {
    type Key = String;
    type Query = str;

    const REGISTRY: &'static str = "operator";

    fn key(&self) -> Result<String> {
        text_key(&self.symbol, Self::REGISTRY)
    }

    fn query_key(query: &str) -> String {
        fold_key(query)
    }

    fn builtins() -> Vec<Self> {
        vec![
            Self::new("+", O::Arithmetic, ADDITIVE),
            Self::new("-", O::Arithmetic, ADDITIVE),
            Self::new("*", O::Arithmetic, MULTIPLICATIVE),
            Self::new("/", O::Arithmetic, MULTIPLICATIVE),
            Self::new("%", O::Arithmetic, MULTIPLICATIVE),
            Self::new(":=", O::Assign, ASSIGNMENT),
            // `=` is registered again as a comparison below, which wins.
            Self::new("=", O::Assign, ASSIGNMENT),
            Self::new("=", O::Comparison, COMPARISON),
            Self::new("<", O::Comparison, COMPARISON),
            Self::new(">", O::Comparison, COMPARISON),
            Self::new("<=", O::Comparison, COMPARISON),
            Self::new(">=", O::Comparison, COMPARISON),
            Self::new("<>", O::Comparison, COMPARISON),
            Self::new("!=", O::Comparison, COMPARISON),
            Self::new("IS DISTINCT FROM", O::Comparison, COMPARISON),
            Self::new("IS NOT DISTINCT FROM", O::Comparison, COMPARISON),
            Self::new("LIKE", O::Comparison, PATTERN),
            Self::new("NOT LIKE", O::Comparison, PATTERN),
            Self::new("ILIKE", O::Comparison, PATTERN),
            Self::new("NOT ILIKE", O::Comparison, PATTERN),
            Self::new("SIMILAR TO", O::Comparison, PATTERN),
            Self::new("NOT SIMILAR TO", O::Comparison, PATTERN),
            Self::new("AND", O::Logical, AND),
            Self::new("OR", O::Logical, OR),
            Self::new("NOT", O::Logical, UNARY).prefix(),
            Self::new("XOR", O::Logical, AND),
            Self::new("IMPLIES", O::Logical, OR),
            Self::new("&", O::Bitwise, BITWISE_AND),
            Self::new("|", O::Bitwise, BITWISE_OR),
            Self::new("^", O::Bitwise, BITWISE_XOR),
            Self::new("~", O::Bitwise, UNARY).prefix(),
            Self::new("<<", O::Bitwise, SHIFT),
            Self::new(">>", O::Bitwise, SHIFT),
            Self::new("||", O::Concat, ADDITIVE),
            Self::new("->", O::Json, MEMBER),
            Self::new("->>", O::Json, MEMBER),
            Self::new("#>", O::Json, MEMBER),
            Self::new("#>>", O::Json, MEMBER),
            Self::new("@>", O::Json, COMPARISON),
            Self::new("<@", O::Json, COMPARISON),
            Self::new("?", O::Json, COMPARISON),
            Self::new("?|", O::Json, COMPARISON),
            Self::new("?&", O::Json, COMPARISON),
            Self::new("#-", O::Json, MEMBER),
            Self::new("~", O::Regex, PATTERN),
            Self::new("!~", O::Regex, PATTERN),
            Self::new("~*", O::Regex, PATTERN),
            Self::new("!~*", O::Regex, PATTERN),
            Self::new("&&", O::Array, AND),
            Self::new("@>", O::Array, COMPARISON),
            Self::new("<@", O::Array, COMPARISON),
            Self::new("::", O::Typecast, TYPECAST).right_associative(),
            Self::new(":", O::Typecast, TYPECAST),
            Self::new(".", O::Arithmetic, MEMBER),
            Self::new("**", O::Arithmetic, MULTIPLICATIVE),
        ]
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::OperatorCategory;
    use crate::registry::{precedence, OperatorRegistry};

    #[test]
    fn test_word_operators_are_case_insensitive() {
        let operators = OperatorRegistry::default();
        let info = operators.try_get("not like").unwrap();
        assert_eq!(info.symbol, "NOT LIKE");
        assert_eq!(info.category, OperatorCategory::Comparison);
        assert_eq!(info.precedence, precedence::PATTERN);
        assert!(operators.contains("Is Not Distinct From"));
    }

    #[test]
    fn test_duplicates_keep_last_definition() {
        let operators = OperatorRegistry::default();

        let eq = operators.try_get("=").unwrap();
        assert_eq!(eq.category, OperatorCategory::Comparison);
        assert_eq!(eq.precedence, 35);

        let contains = operators.try_get("@>").unwrap();
        assert_eq!(contains.category, OperatorCategory::Array);
        assert_eq!(operators.try_get("<@").unwrap().category, OperatorCategory::Array);

        let tilde = operators.try_get("~").unwrap();
        assert_eq!(tilde.category, OperatorCategory::Regex);
        assert!(!tilde.unary);
    }

    #[test]
    fn test_flags() {
        let operators = OperatorRegistry::default();
        assert!(operators.try_get("NOT").unwrap().unary);
        let cast = operators.try_get("::").unwrap();
        assert!(!cast.left_associative);
        assert_eq!(cast.precedence, precedence::TYPECAST);
        assert!(operators.try_get("||").unwrap().left_associative);
    }
}
