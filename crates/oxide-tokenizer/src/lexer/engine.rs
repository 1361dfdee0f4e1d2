//! Tokenizer facade owning a set of registries.

use super::{CancellationFlag, Lexer, TokenStream};
use crate::registry::Registries;

/// A tokenizer session.
///
/// Owns the registries used for classification, so custom vocabulary
/// registered on one tokenizer does not leak into others. Registration
/// takes `&mut self` and scanning borrows the registries, so the vocabulary
/// cannot change while a scan is running.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    registries: Registries,
}

impl Tokenizer {
    /// Creates a tokenizer seeded with the built-in vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tokenizer with the given registries.
    #[must_use]
    pub const fn with_registries(registries: Registries) -> Self {
        Self { registries }
    }

    #[must_use]
    pub const fn registries(&self) -> &Registries {
        &self.registries
    }

    /// Mutable access for registering custom symbols.
    pub fn registries_mut(&mut self) -> &mut Registries {
        &mut self.registries
    }

    /// Returns a lazy token iterator over `input`.
    #[must_use]
    pub fn tokenize<'a>(&'a self, input: &'a str) -> Lexer<'a> {
        Lexer::with_registries(input, &self.registries)
    }

    /// Returns a cancellable token stream over `input`.
    #[must_use]
    pub fn tokenize_stream<'a>(
        &'a self,
        input: &'a str,
        cancel: CancellationFlag,
    ) -> TokenStream<'a> {
        TokenStream::new(self.tokenize(input), cancel)
    }
}
