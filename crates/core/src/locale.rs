use serde::Serialize;
use std::fmt;

/// A locale code such as `en`, `zh-cn` or `pt-BR`.
///
/// The code is kept exactly as written in the configuration; only its shape
/// is checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    /// Parse a locale code, returning `None` if it does not look like a
    /// language tag.
    ///
    /// Accepted shape: a primary subtag of 2-3 or 5-8 ASCII letters, then any
    /// number of `-`-separated subtags of 1-8 ASCII alphanumerics.
    ///
    /// ```text
    /// Locale::parse("en")         → Some
    /// Locale::parse("zh-cn")      → Some
    /// Locale::parse("sr-Latn-RS") → Some
    /// Locale::parse("en_US")      → None
    /// Locale::parse("e")          → None
    /// ```
    pub fn parse(code: &str) -> Option<Self> {
        let mut subtags = code.split('-');

        let primary = subtags.next()?;
        if !matches!(primary.len(), 2..=3 | 5..=8)
            || !primary.chars().all(|c| c.is_ascii_alphabetic())
        {
            return None;
        }

        for subtag in subtags {
            if subtag.is_empty()
                || subtag.len() > 8
                || !subtag.chars().all(|c| c.is_ascii_alphanumeric())
            {
                return None;
            }
        }

        Some(Locale(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary language subtag (`zh` for `zh-cn`).
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    /// ASCII case-insensitive comparison, used to spot duplicates such as
    /// `en-US` and `en-us`.
    pub fn same_as(&self, other: &Locale) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
