//! Symbol registries.
//!
//! Four lookup tables drive classification: keywords, operators,
//! functions and punctuators. They share one implementation,
//! [`Registry`], parameterized by the metadata record it stores. Text
//! keys are matched case-insensitively (Unicode upper-case folding, so
//! `über` finds `ÜBER`); punctuators are keyed by
//! their exact character.
//!
//! Registries start out seeded with a built-in vocabulary
//! ([`Registry::default`]) and can be extended with
//! [`Registry::register_custom`], which overwrites any entry with the same
//! key.

mod error;
mod function;
mod info;
mod keyword;
mod operator;
pub mod precedence;
mod punctuator;

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, LazyLock};

use tracing::trace;

pub use error::{RegistryError, Result};
pub use info::{FunctionInfo, KeywordInfo, OperatorInfo, PunctuatorInfo};

/// A metadata record that can be stored in a [`Registry`].
pub trait Symbol: Sized {
    /// Canonical lookup key.
    type Key: Eq + Hash + Clone + fmt::Debug;
    /// What callers look entries up by.
    type Query: ?Sized;

    /// Registry name used in errors and logs.
    const REGISTRY: &'static str;

    /// Returns the canonical key of this record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record has no usable key.
    fn key(&self) -> Result<Self::Key>;

    /// Canonicalizes a lookup query.
    fn query_key(query: &Self::Query) -> Self::Key;

    /// The built-in vocabulary, in registration order.
    fn builtins() -> Vec<Self>;
}

/// Case-folds a text key or query.
fn fold_key(text: &str) -> String {
    text.to_uppercase()
}

/// Canonical form of a text key: upper-case, rejecting blank text.
fn text_key(text: &str, registry: &'static str) -> Result<String> {
    if text.trim().is_empty() {
        return Err(RegistryError::EmptyKey { registry });
    }
    Ok(fold_key(text))
}

/// A lookup table from canonical keys to shared metadata records.
#[derive(Debug, Clone)]
pub struct Registry<S: Symbol> {
    entries: HashMap<S::Key, Arc<S>>,
}

impl<S: Symbol> Registry<S> {
    /// Creates a registry without any entries.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Looks up an entry.
    #[must_use]
    pub fn try_get(&self, query: &S::Query) -> Option<Arc<S>> {
        self.entries.get(&S::query_key(query)).cloned()
    }

    /// Returns true if an entry exists for `query`.
    #[must_use]
    pub fn contains(&self, query: &S::Query) -> bool {
        self.entries.contains_key(&S::query_key(query))
    }

    /// Inserts or replaces an entry, returning the record it replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the record has no usable key.
    pub fn register_custom(&mut self, info: S) -> Result<Option<Arc<S>>> {
        let key = info.key()?;
        trace!(registry = S::REGISTRY, key = ?key, "Registering custom entry");
        Ok(self.entries.insert(key, Arc::new(info)))
    }

    /// Returns a snapshot of all entries.
    #[must_use]
    pub fn all_entries(&self) -> HashMap<S::Key, Arc<S>> {
        self.entries.clone()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the registry has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Symbol> Default for Registry<S> {
    /// Creates a registry seeded with the built-in vocabulary. Later
    /// built-ins overwrite earlier ones with the same key.
    fn default() -> Self {
        let mut registry = Self::empty();
        for info in S::builtins() {
            if let Ok(key) = info.key() {
                registry.entries.insert(key, Arc::new(info));
            }
        }
        registry
    }
}

/// Keyword lookup table.
pub type KeywordRegistry = Registry<KeywordInfo>;
/// Operator lookup table, symbolic and multi-word.
pub type OperatorRegistry = Registry<OperatorInfo>;
/// Function lookup table.
pub type FunctionRegistry = Registry<FunctionInfo>;
/// Punctuator lookup table.
pub type PunctuatorRegistry = Registry<PunctuatorInfo>;

static BUILTIN: LazyLock<Registries> = LazyLock::new(Registries::default);

/// The four registries the lexer consults.
#[derive(Debug, Clone, Default)]
pub struct Registries {
    pub keywords: KeywordRegistry,
    pub operators: OperatorRegistry,
    pub functions: FunctionRegistry,
    pub punctuators: PunctuatorRegistry,
}

impl Registries {
    /// Creates a set of registries without any entries.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            keywords: Registry::empty(),
            operators: Registry::empty(),
            functions: Registry::empty(),
            punctuators: Registry::empty(),
        }
    }

    /// Returns the process-wide built-in registries, built on first use.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }
}
