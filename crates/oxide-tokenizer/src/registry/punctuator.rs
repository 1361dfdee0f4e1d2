//! Built-in punctuator vocabulary.

use super::{PunctuatorInfo, RegistryError, Result, Symbol};
use crate::lexer::CommonSymbol;

const BUILTIN_PUNCTUATORS: &[(&str, CommonSymbol)] = &[
    (",", CommonSymbol::Comma),
    (";", CommonSymbol::Semicolon),
    ("(", CommonSymbol::LParen),
    (")", CommonSymbol::RParen),
    ("{", CommonSymbol::LBrace),
    ("}", CommonSymbol::RBrace),
    ("[", CommonSymbol::LBracket),
    ("]", CommonSymbol::RBracket),
    (".", CommonSymbol::Dot),
    (":", CommonSymbol::Colon),
    ("?", CommonSymbol::ParamMarker),
    ("$", CommonSymbol::ParamMarker),
    ("@", CommonSymbol::ParamMarker),
    // Identifier quotes act as qualifiers between name parts.
    ("`", CommonSymbol::Dot),
    ("\"", CommonSymbol::Dot),
];

impl Symbol for PunctuatorInfo {
    type Key = char;
    type Query = char;

    const REGISTRY: &'static str = "punctuator";

    fn key(&self) -> Result<char> {
        if self.lexeme.is_empty() {
            return Err(RegistryError::EmptyKey {
                registry: Self::REGISTRY,
            });
        }
        self.character()
            .ok_or_else(|| RegistryError::InvalidPunctuator(self.lexeme.clone()))
    }

    fn query_key(query: &char) -> char {
        *query
    }

    fn builtins() -> Vec<Self> {
        BUILTIN_PUNCTUATORS
            .iter()
            .map(|&(lexeme, symbol)| Self::new(lexeme, symbol))
            .collect()
    }
}
