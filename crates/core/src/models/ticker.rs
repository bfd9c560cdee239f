use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Longest accepted ticker symbol.
pub const MAX_TICKER_LEN: usize = 16;

/// A normalized equity ticker symbol (trimmed, uppercased, allow-listed).
///
/// Only `A-Z`, `0-9`, `.` and `-` survive validation, so a `Ticker` can be
/// embedded in a single-quoted SQL literal without escaping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Normalize and validate a raw symbol.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if !trimmed.is_ascii() {
            return Err(CoreError::Validation(format!(
                "invalid characters in ticker symbol: {trimmed}"
            )));
        }
        let symbol = trimmed.to_ascii_uppercase();
        if symbol.is_empty() {
            return Err(CoreError::Validation("ticker symbol is empty".into()));
        }
        if symbol.len() > MAX_TICKER_LEN {
            return Err(CoreError::Validation(format!(
                "ticker symbol too long: {symbol}"
            )));
        }
        if !symbol
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '.' || c == '-')
        {
            return Err(CoreError::Validation(format!(
                "invalid characters in ticker symbol: {symbol}"
            )));
        }
        Ok(Self(symbol))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The symbol as a quoted SQL string literal, e.g. `'AAPL'`.
    pub fn sql_literal(&self) -> String {
        format!("'{}'", self.0)
    }
}

impl std::fmt::Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Ticker {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Ticker> for String {
    fn from(t: Ticker) -> Self {
        t.0
    }
}

/// Normalize a list of raw ticker strings.
///
/// Entries that are blank after trimming are dropped; duplicates are kept in
/// input order. Any non-blank entry that fails the allow-list rejects the
/// whole list.
pub fn normalize_tickers<S: AsRef<str>>(raw: &[S]) -> Result<Vec<Ticker>, CoreError> {
    raw.iter()
        .map(AsRef::as_ref)
        .filter(|s| !s.trim().is_empty())
        .map(Ticker::parse)
        .collect()
}

