//! Tabular CSV encoding.

use std::fmt;

use crate::lexer::{Classification, Token};

const HEADER: &str = "Type,Lexeme,Category,Line,Column,Info";

/// Renders tokens as CSV with the header
/// `Type,Lexeme,Category,Line,Column,Info`.
///
/// Every field is quoted and embedded quotes are doubled.
#[derive(Debug, Clone, Copy)]
pub struct Csv<'a>(pub &'a [Token]);

impl fmt::Display for Csv<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADER}")?;
        for token in self.0 {
            writeln!(
                f,
                "{},{},{},{},{},{}",
                Quoted(token.token_type.as_str()),
                Quoted(&token.lexeme),
                Quoted(token.category_name().unwrap_or_default()),
                Quoted(&token.line.to_string()),
                Quoted(&token.column.to_string()),
                Quoted(&info(token)),
            )?;
        }
        Ok(())
    }
}

/// A CSV field, quoted with inner quotes doubled.
struct Quoted<'a>(&'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.0.replace('"', "\"\""))
    }
}

/// Registry metadata summary for the `Info` column.
fn info(token: &Token) -> String {
    match &token.classification {
        Some(Classification::Keyword(info)) => info.lexeme.clone(),
        Some(Classification::Function(info)) => info.to_string(),
        Some(Classification::Operator(info)) => info.symbol.clone(),
        Some(Classification::Punctuator(info)) => info.lexeme.clone(),
        _ => String::new(),
    }
}

/// Encodes tokens as CSV text.
#[must_use]
pub fn to_csv(tokens: &[Token]) -> String {
    Csv(tokens).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    #[test]
    fn test_header_and_rows() {
        let csv = to_csv(&Lexer::new("SELECT COUNT(*)").tokenize());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Type,Lexeme,Category,Line,Column,Info");
        assert_eq!(lines[1], r#""KEYWORD","SELECT","DML","1","1","SELECT""#);
        assert_eq!(
            lines[2],
            r#""FUNCTION","COUNT","AGGREGATE","1","8","COUNT (AGGREGATE, args 1..1)""#
        );
        assert_eq!(lines[3], r#""PUNCTUATOR","(","LPAREN","1","13","(""#);
        assert_eq!(lines[4], r#""OPERATOR","*","ARITHMETIC","1","14","*""#);
        assert_eq!(lines[6], r#""END_OF_FILE","","","1","16","""#);
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_quotes_are_doubled() {
        let csv = to_csv(&Lexer::new(r#"'say "hi"'"#).tokenize());
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, r#""LITERAL","say ""hi""","STRING","1","1","""#);
    }

    #[test]
    fn test_unbounded_arity() {
        let csv = to_csv(&Lexer::new("coalesce(a, b)").tokenize());
        assert!(csv.contains("COALESCE (SCALAR, args 1..∞)"));
    }
}
