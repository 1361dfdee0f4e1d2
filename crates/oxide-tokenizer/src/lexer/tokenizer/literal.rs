//! Literal recognizers: strings, numbers, binary/hex forms and the
//! structured literals (arrays, JSON, XML, UUIDs).

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::trace;

use super::{Lexer, Scanned};
use crate::lexer::{LiteralCategory, TokenType};

static UUID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$",
    )
    .expect("UUID pattern is valid")
});

static DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is valid")
});

static TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[01][0-9]|2[0-3]):[0-5][0-9]:[0-5][0-9]$").expect("time pattern is valid")
});

/// Length of a canonical textual UUID.
const UUID_LEN: usize = 36;

fn is_date(text: &str) -> bool {
    DATE.is_match(text) && NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok()
}

fn is_time(text: &str) -> bool {
    TIME.is_match(text)
}

fn is_date_time(text: &str) -> bool {
    text.split_once(' ')
        .is_some_and(|(date, time)| is_date(date) && is_time(time))
}

/// Refines the category of a single-quoted literal from its content.
fn classify_quoted(content: &str) -> LiteralCategory {
    if is_date(content) {
        LiteralCategory::Date
    } else if is_date_time(content) {
        LiteralCategory::DateTime
    } else if is_time(content) {
        LiteralCategory::Time
    } else {
        LiteralCategory::String
    }
}

fn ascii_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

impl Lexer<'_> {
    /// Returns true if the input at the cursor is `prefix'` (either case).
    fn at_prefixed_quote(&self, prefix: char) -> bool {
        let mut chars = self.rest().chars();
        chars.next().is_some_and(|c| c.eq_ignore_ascii_case(&prefix)) && chars.next() == Some('\'')
    }

    /// Splits the `'`-quoted text opening at byte `open` into its raw body
    /// and the offset just past the closing quote. A doubled quote does not
    /// close the literal. Unterminated bodies run to the end of input.
    fn raw_quoted(&self, open: usize) -> (&str, usize) {
        let body_start = open + 1;
        let body = &self.input[body_start..];
        let mut chars = body.char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            if c == '\'' {
                if matches!(chars.peek(), Some((_, '\''))) {
                    chars.next();
                    continue;
                }
                return (&body[..i], body_start + i + 1);
            }
        }
        (body, self.input.len())
    }

    /// Scans `$tag$ ... $tag$`.
    pub(super) fn scan_dollar_quoted(&self) -> Option<Scanned> {
        let rest = self.rest();
        let after = rest.strip_prefix('$')?;
        let Some(tag_len) = after.find('$').map(|i| i + 2) else {
            return Some(self.scan_unknown_run());
        };
        let tag = &rest[..tag_len];
        match rest[tag_len..].find(tag) {
            Some(body_len) => {
                let len = tag_len + body_len + tag_len;
                Some(Scanned::literal(
                    LiteralCategory::String,
                    self.pos + len,
                    &rest[..len],
                ))
            }
            None => {
                trace!(tag, "Unclosed dollar-quoted string");
                Some(self.scan_unknown_run())
            }
        }
    }

    /// Scans `E'...'` with `\n`, `\t` and `\'` translated.
    pub(super) fn scan_escape_string(&self) -> Option<Scanned> {
        if !self.at_prefixed_quote('E') {
            return None;
        }
        let body_start = self.pos + 2;
        let body = &self.input[body_start..];
        let mut value = String::with_capacity(body.len().min(64));
        let mut end = self.input.len();
        let mut chars = body.char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            match c {
                '\'' if matches!(chars.peek(), Some((_, '\''))) => {
                    chars.next();
                    value.push('\'');
                }
                '\'' => {
                    end = body_start + i + 1;
                    break;
                }
                '\\' => match chars.next() {
                    Some((_, 'n')) => value.push('\n'),
                    Some((_, 't')) => value.push('\t'),
                    Some((_, '\'')) => value.push('\''),
                    Some((_, other)) => {
                        value.push('\\');
                        value.push(other);
                    }
                    None => value.push('\\'),
                },
                _ => value.push(c),
            }
        }
        Some(Scanned::literal(LiteralCategory::EscapeString, end, value))
    }

    /// Scans `B'0101'`, keeping only the binary digits.
    pub(super) fn scan_bit_string(&self) -> Option<Scanned> {
        if !self.at_prefixed_quote('B') {
            return None;
        }
        let (body, end) = self.raw_quoted(self.pos + 1);
        let digits: String = body.chars().filter(|c| matches!(c, '0' | '1')).collect();
        Some(Scanned::literal(LiteralCategory::Binary, end, digits))
    }

    /// Scans `X'1A2B'`, keeping only the hex digits.
    pub(super) fn scan_hex_string(&self) -> Option<Scanned> {
        if !self.at_prefixed_quote('X') {
            return None;
        }
        let (body, end) = self.raw_quoted(self.pos + 1);
        let digits: String = body.chars().filter(char::is_ascii_hexdigit).collect();
        Some(Scanned::literal(LiteralCategory::Hex, end, digits))
    }

    /// Scans `0x1A2B`.
    pub(super) fn scan_prefixed_hex(&self) -> Option<Scanned> {
        let rest = self.rest();
        let digits = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X"))?;
        let len = digits.bytes().take_while(u8::is_ascii_hexdigit).count();
        (len > 0).then(|| Scanned::literal(LiteralCategory::Hex, self.pos + 2 + len, &digits[..len]))
    }

    /// Scans `0b0101`.
    pub(super) fn scan_prefixed_binary(&self) -> Option<Scanned> {
        let rest = self.rest();
        let digits = rest.strip_prefix("0b").or_else(|| rest.strip_prefix("0B"))?;
        let len = digits.bytes().take_while(|b| matches!(b, b'0' | b'1')).count();
        (len > 0).then(|| {
            Scanned::literal(LiteralCategory::Binary, self.pos + 2 + len, &digits[..len])
        })
    }

    /// Scans `ARRAY[...]` with nested brackets.
    pub(super) fn scan_array(&self) -> Option<Scanned> {
        let rest = self.rest();
        let keyword = rest.get(..5)?;
        if !keyword.eq_ignore_ascii_case("ARRAY") || rest.as_bytes().get(5) != Some(&b'[') {
            return None;
        }
        let mut depth = 0usize;
        // Unbalanced arrays run to the end of input.
        let mut len = rest.len();
        for (i, c) in rest.char_indices().skip(5) {
            match c {
                '[' => depth += 1,
                ']' => {
                    depth -= 1;
                    if depth == 0 {
                        len = i + 1;
                        break;
                    }
                }
                _ => {}
            }
        }
        Some(Scanned::literal(
            LiteralCategory::Array,
            self.pos + len,
            &rest[..len],
        ))
    }

    /// Scans a balanced `{...}` object.
    pub(super) fn scan_json(&self) -> Option<Scanned> {
        let rest = self.rest();
        if !rest.starts_with('{') {
            return None;
        }
        let mut depth = 0usize;
        for (i, c) in rest.char_indices() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        let len = i + 1;
                        return Some(Scanned::literal(
                            LiteralCategory::Json,
                            self.pos + len,
                            &rest[..len],
                        ));
                    }
                }
                _ => {}
            }
        }
        None
    }

    /// Scans an XML-like tag up to the first `>`.
    ///
    /// The character after `<` must open a tag, so `<>`, `<=` and `< b`
    /// stay operators.
    pub(super) fn scan_xml(&self) -> Option<Scanned> {
        let rest = self.rest();
        let after = rest.strip_prefix('<')?;
        let opens_tag = after
            .chars()
            .next()
            .is_some_and(|c| c.is_alphabetic() || matches!(c, '/' | '!' | '?'));
        if !opens_tag {
            return None;
        }
        let len = rest.find('>')? + 1;
        Some(Scanned::literal(
            LiteralCategory::Xml,
            self.pos + len,
            &rest[..len],
        ))
    }

    /// Scans a canonical `8-4-4-4-12` hex UUID.
    pub(super) fn scan_uuid(&self) -> Option<Scanned> {
        let candidate = self.rest().get(..UUID_LEN)?;
        UUID.is_match(candidate).then(|| {
            Scanned::literal(LiteralCategory::Uuid, self.pos + UUID_LEN, candidate)
        })
    }

    /// Scans `"name"`, `[name]` or `` `name` ``; the lexeme is the content.
    pub(super) fn scan_delimited_identifier(&self) -> Option<Scanned> {
        let rest = self.rest();
        let close = match rest.chars().next()? {
            '"' => '"',
            '`' => '`',
            '[' => ']',
            _ => return None,
        };
        let body = &rest[1..];
        let (content, end) = match body.find(close) {
            Some(i) => (&body[..i], self.pos + 1 + i + 1),
            None => (body, self.input.len()),
        };
        Some(Scanned::new(TokenType::Identifier, end, content))
    }

    /// Scans `'...'` and classifies dates and times by content.
    ///
    /// A backslash takes the next character literally and `''` is a quote.
    pub(super) fn scan_quoted(&self) -> Option<Scanned> {
        let body = self.rest().strip_prefix('\'')?;
        let body_start = self.pos + 1;
        let mut value = String::new();
        let mut end = self.input.len();
        let mut chars = body.char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some((_, escaped)) => value.push(escaped),
                    None => value.push('\\'),
                },
                '\'' if matches!(chars.peek(), Some((_, '\''))) => {
                    chars.next();
                    value.push('\'');
                }
                '\'' => {
                    end = body_start + i + 1;
                    break;
                }
                _ => value.push(c),
            }
        }
        let category = classify_quoted(&value);
        Some(Scanned::literal(category, end, value))
    }

    /// Scans `C'x'`, exactly one character between the quotes.
    pub(super) fn scan_char(&self) -> Option<Scanned> {
        let mut chars = self.rest().char_indices();
        match (chars.next(), chars.next(), chars.next(), chars.next()) {
            (Some((_, prefix)), Some((_, '\'')), Some((_, value)), Some((i, '\'')))
                if prefix.eq_ignore_ascii_case(&'C') =>
            {
                Some(Scanned::literal(
                    LiteralCategory::Char,
                    self.pos + i + 1,
                    value.to_string(),
                ))
            }
            _ => None,
        }
    }

    /// Scans `-12`, `3.14`, `1.`, `.5`, `1e-3`.
    ///
    /// The exponent is only taken when a digit follows it.
    pub(super) fn scan_number(&self) -> Option<Scanned> {
        let rest = self.rest();
        let bytes = rest.as_bytes();
        let mut len = usize::from(bytes.first() == Some(&b'-'));
        let int_digits = ascii_digits(&bytes[len..]);
        len += int_digits;

        // A leading dot needs a digit so a bare `.` stays an operator.
        let mut is_float = false;
        let has_fraction = bytes.get(len) == Some(&b'.')
            && (int_digits > 0 || bytes.get(len + 1).is_some_and(u8::is_ascii_digit));
        if has_fraction {
            is_float = true;
            len += 1;
            len += ascii_digits(&bytes[len..]);
        } else if int_digits == 0 {
            return None;
        }

        if matches!(bytes.get(len), Some(b'e' | b'E')) {
            let mut exp = len + 1;
            if matches!(bytes.get(exp), Some(b'+' | b'-')) {
                exp += 1;
            }
            let exp_digits = ascii_digits(&bytes[exp..]);
            if exp_digits > 0 {
                is_float = true;
                len = exp + exp_digits;
            }
        }

        let category = if is_float {
            LiteralCategory::Float
        } else {
            LiteralCategory::Integer
        };
        Some(Scanned::literal(category, self.pos + len, &rest[..len]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_quoted() {
        assert_eq!(classify_quoted("2024-02-29"), LiteralCategory::Date);
        assert_eq!(classify_quoted("2023-02-29"), LiteralCategory::String);
        assert_eq!(classify_quoted("2024-13-01"), LiteralCategory::String);
        assert_eq!(classify_quoted("2024-01-05 23:59:59"), LiteralCategory::DateTime);
        assert_eq!(classify_quoted("2024-01-05 24:00:00"), LiteralCategory::String);
        assert_eq!(classify_quoted("12:30:00"), LiteralCategory::Time);
        assert_eq!(classify_quoted("24:00:00"), LiteralCategory::String);
        assert_eq!(classify_quoted("12:30"), LiteralCategory::String);
        assert_eq!(classify_quoted(""), LiteralCategory::String);
    }

    #[test]
    fn test_classify_quoted_needs_ascii_digits() {
        assert_eq!(classify_quoted("1\u{663}:00:00"), LiteralCategory::String);
        assert_eq!(classify_quoted("\u{662}024-01-05"), LiteralCategory::String);
        assert_eq!(
            classify_quoted("2024-01-05 1\u{663}:00:00"),
            LiteralCategory::String
        );
    }
}
