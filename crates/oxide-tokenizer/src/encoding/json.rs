//! Structured JSON encoding.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::Result;
use crate::lexer::{
    Classification, CommentKind, DateTimePart, LiteralCategory, Span, Token, TokenType,
};
use crate::registry::{FunctionInfo, KeywordInfo, OperatorInfo, PunctuatorInfo};

/// Wire form of a token: one optional field per classification slot.
#[derive(Debug, Serialize, Deserialize)]
struct TokenRecord {
    #[serde(rename = "type")]
    token_type: TokenType,
    lexeme: String,
    line: usize,
    column: usize,
    #[serde(default)]
    span: Span,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    keyword_info: Option<KeywordInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    function_info: Option<FunctionInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    operator_info: Option<OperatorInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    punctuator_info: Option<PunctuatorInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    literal_category: Option<LiteralCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    comment_type: Option<CommentKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date_time_part: Option<DateTimePart>,
}

impl From<&Token> for TokenRecord {
    fn from(token: &Token) -> Self {
        let mut record = Self {
            token_type: token.token_type,
            lexeme: token.lexeme.clone(),
            line: token.line,
            column: token.column,
            span: token.span,
            keyword_info: None,
            function_info: None,
            operator_info: None,
            punctuator_info: None,
            literal_category: None,
            comment_type: None,
            date_time_part: None,
        };
        match &token.classification {
            Some(Classification::Keyword(info)) => record.keyword_info = Some((**info).clone()),
            Some(Classification::Function(info)) => record.function_info = Some((**info).clone()),
            Some(Classification::Operator(info)) => record.operator_info = Some((**info).clone()),
            Some(Classification::Punctuator(info)) => {
                record.punctuator_info = Some((**info).clone());
            }
            Some(Classification::Literal(category)) => record.literal_category = Some(*category),
            Some(Classification::Comment(kind)) => record.comment_type = Some(*kind),
            Some(Classification::DateTimePart(part)) => record.date_time_part = Some(*part),
            None => {}
        }
        record
    }
}

impl From<TokenRecord> for Token {
    fn from(record: TokenRecord) -> Self {
        let classification = record
            .keyword_info
            .map(|info| Classification::Keyword(Arc::new(info)))
            .or_else(|| {
                record
                    .function_info
                    .map(|info| Classification::Function(Arc::new(info)))
            })
            .or_else(|| {
                record
                    .operator_info
                    .map(|info| Classification::Operator(Arc::new(info)))
            })
            .or_else(|| {
                record
                    .punctuator_info
                    .map(|info| Classification::Punctuator(Arc::new(info)))
            })
            .or_else(|| record.literal_category.map(Classification::Literal))
            .or_else(|| record.comment_type.map(Classification::Comment))
            .or_else(|| record.date_time_part.map(Classification::DateTimePart));

        Self {
            token_type: record.token_type,
            lexeme: record.lexeme,
            line: record.line,
            column: record.column,
            span: record.span,
            classification,
        }
    }
}

/// Encodes tokens as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(tokens: &[Token]) -> Result<String> {
    let records: Vec<TokenRecord> = tokens.iter().map(TokenRecord::from).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Decodes tokens from a JSON array produced by [`to_json`].
///
/// # Errors
///
/// Returns an error if the input is not a valid token array.
pub fn from_json(json: &str) -> Result<Vec<Token>> {
    let records: Vec<TokenRecord> = serde_json::from_str(json)?;
    Ok(records.into_iter().map(Token::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    #[test]
    fn test_field_names() {
        let tokens = Lexer::new("COUNT(x) -- c").tokenize();
        let json = to_json(&tokens).unwrap();
        assert!(json.contains("\"type\": \"FUNCTION\""));
        assert!(json.contains("\"function_info\""));
        assert!(json.contains("\"punctuator_info\""));
        assert!(json.contains("\"comment_type\": \"SINGLE_LINE\""));
        assert!(json.contains("\"type\": \"END_OF_FILE\""));
        assert!(!json.contains("\"keyword_info\""));
    }

    #[test]
    fn test_decode_minimal_record() {
        let json = r#"[{"type": "IDENTIFIER", "lexeme": "a", "line": 1, "column": 1}]"#;
        let tokens = from_json(json).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].token_type, TokenType::Identifier);
        assert_eq!(tokens[0].span, Span::default());
        assert!(tokens[0].classification.is_none());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(from_json("{not json").is_err());
        assert!(from_json(r#"[{"type": "BOGUS", "lexeme": "", "line": 1, "column": 1}]"#).is_err());
    }
}
