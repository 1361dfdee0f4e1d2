//! Words: variables, word operators, keywords, functions and identifiers.

use std::sync::Arc;

use super::{whitespace_len, Lexer, Scanned};
use crate::lexer::{Classification, DateTimePart, KeywordCategory, LiteralCategory, TokenType};
use crate::registry::KeywordInfo;

/// Most words a registered word operator spans (`IS NOT DISTINCT FROM`).
const MAX_OPERATOR_WORDS: usize = 4;

fn is_word_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_word_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Byte length of the run of word characters at the start of `text`.
fn word_tail_len(text: &str) -> usize {
    text.find(|c: char| !is_word_continue(c))
        .unwrap_or(text.len())
}

/// Byte length of the identifier-shaped word at the start of `text`, or 0.
fn word_len(text: &str) -> usize {
    if text.chars().next().is_some_and(is_word_start) {
        word_tail_len(text)
    } else {
        0
    }
}

impl Lexer<'_> {
    /// Scans a word-like token.
    pub(super) fn scan_word(&self) -> Option<Scanned> {
        let rest = self.rest();
        let first = rest.chars().next()?;
        if first == '@' {
            return self.scan_variable();
        }
        if !is_word_start(first) {
            return None;
        }
        if let Some(operator) = self.scan_word_operator() {
            return Some(operator);
        }

        let len = word_len(rest);
        Some(self.classify_word(&rest[..len], self.pos + len))
    }

    /// Scans `@name` and `@@name`.
    fn scan_variable(&self) -> Option<Scanned> {
        let rest = self.rest();
        let prefix = if rest.starts_with("@@") { 2 } else { 1 };
        let name_len = word_tail_len(&rest[prefix..]);
        if name_len == 0 {
            return None;
        }
        let len = prefix + name_len;
        Some(Scanned::new(
            TokenType::Identifier,
            self.pos + len,
            &rest[..len],
        ))
    }

    /// Scans the longest registered operator made of whitespace-separated
    /// words, such as `NOT LIKE` or `IS DISTINCT FROM`.
    ///
    /// The lexeme keeps the source spacing and casing.
    fn scan_word_operator(&self) -> Option<Scanned> {
        let rest = self.rest();
        let mut words = Vec::with_capacity(MAX_OPERATOR_WORDS);
        let mut ends = Vec::with_capacity(MAX_OPERATOR_WORDS);
        let mut offset = 0;
        while words.len() < MAX_OPERATOR_WORDS {
            let len = word_len(&rest[offset..]);
            if len == 0 {
                break;
            }
            words.push(&rest[offset..offset + len]);
            offset += len;
            ends.push(offset);
            offset += whitespace_len(&rest[offset..]);
        }

        (1..=words.len()).rev().find_map(|count| {
            let info = self.registries.operators.try_get(&words[..count].join(" "))?;
            let end = ends[count - 1];
            Some(
                Scanned::new(TokenType::Operator, self.pos + end, &rest[..end])
                    .classified(Classification::Operator(info)),
            )
        })
    }

    /// Classifies a single word ending at byte offset `end`.
    fn classify_word(&self, word: &str, end: usize) -> Scanned {
        match word.to_ascii_uppercase().as_str() {
            "TRUE" | "FALSE" => return Scanned::literal(LiteralCategory::Boolean, end, word),
            "NULL" => return Scanned::literal(LiteralCategory::NullValue, end, word),
            "INTERVAL" => return self.scan_interval(word, end),
            _ => {}
        }

        if let Some(part) = DateTimePart::from_name(word) {
            return Scanned::new(TokenType::DateTimePart, end, word)
                .classified(Classification::DateTimePart(part));
        }
        if let Some(info) = self.registries.keywords.try_get(word) {
            return Scanned::new(TokenType::Keyword, end, word)
                .classified(Classification::Keyword(info));
        }
        if self.is_call(end) {
            if let Some(info) = self.registries.functions.try_get(word) {
                return Scanned::new(TokenType::Function, end, word)
                    .classified(Classification::Function(info));
            }
        }
        Scanned::new(TokenType::Identifier, end, word)
    }

    /// Returns true if the next non-whitespace character after `end` is `(`.
    fn is_call(&self, end: usize) -> bool {
        let tail = &self.input[end..];
        tail[whitespace_len(tail)..].starts_with('(')
    }

    /// Scans `INTERVAL '<value>' [unit]` after the `INTERVAL` word.
    ///
    /// The unit is taken only when it names a [`DateTimePart`] (`DAY`,
    /// `ISO_WEEK`, ...), in any case, optionally followed by one `s`
    /// (`days`, `HOURS`). Any other word, such as `mins`, is left for the
    /// next token.
    ///
    /// Without a quoted value the word stays a keyword and the cursor stops
    /// right after it.
    fn scan_interval(&self, word: &str, word_end: usize) -> Scanned {
        let quote = word_end + whitespace_len(&self.input[word_end..]);
        let quoted = self.input[quote..]
            .strip_prefix('\'')
            .and_then(|body| body.find('\'').map(|close| &body[..close]));

        let Some(value) = quoted else {
            return Scanned::new(TokenType::Keyword, word_end, word).classified(
                Classification::Keyword(Arc::new(KeywordInfo::new(
                    "INTERVAL",
                    KeywordCategory::Misc,
                ))),
            );
        };

        let value_end = quote + value.len() + 2;
        let unit_start = value_end + whitespace_len(&self.input[value_end..]);
        let unit_text = &self.input[unit_start..];
        let unit_len = word_len(unit_text);
        let unit = &unit_text[..unit_len];

        if unit_len > 0 && is_interval_unit(unit) {
            Scanned::literal(
                LiteralCategory::Interval,
                unit_start + unit_len,
                format!("INTERVAL '{value}' {unit}"),
            )
        } else {
            Scanned::literal(
                LiteralCategory::Interval,
                value_end,
                format!("INTERVAL '{value}'"),
            )
        }
    }
}

/// Returns true if `unit` names a date-time part, singular or plural.
fn is_interval_unit(unit: &str) -> bool {
    DateTimePart::from_name(unit).is_some()
        || unit
            .strip_suffix(['s', 'S'])
            .is_some_and(|singular| DateTimePart::from_name(singular).is_some())
}
