//! QuoteId - 7-character quote identifier
//!
//! Valid identifiers are exactly [`QUOTE_ID_LEN`] characters drawn from
//! `[A-Z0-9]`. Keys are stored uppercase, so lookups are case-sensitive;
//! callers shape raw input with [`normalize_quote_id_input`] first.

use serde::{Deserialize, Serialize};

use crate::error::QuoteIdError;
use crate::QUOTE_ID_LEN;

/// Outcome of checking a candidate quote identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteIdValidation {
    Valid,
    TooShortOrLong,
    InvalidCharacters,
}

impl QuoteIdValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, QuoteIdValidation::Valid)
    }
}

impl From<QuoteIdError> for QuoteIdValidation {
    fn from(err: QuoteIdError) -> Self {
        match err {
            QuoteIdError::TooShortOrLong => QuoteIdValidation::TooShortOrLong,
            QuoteIdError::InvalidCharacters => QuoteIdValidation::InvalidCharacters,
        }
    }
}

/// Check length first, then character class. No normalization happens here.
pub fn validate_quote_id(id: &str) -> QuoteIdValidation {
    match check(id) {
        Ok(()) => QuoteIdValidation::Valid,
        Err(err) => err.into(),
    }
}

/// Shape raw user input: uppercase, then keep the first 7 characters
pub fn normalize_quote_id_input(raw: &str) -> String {
    raw.to_uppercase().chars().take(QUOTE_ID_LEN).collect()
}

fn check(id: &str) -> Result<(), QuoteIdError> {
    if id.chars().count() != QUOTE_ID_LEN {
        return Err(QuoteIdError::TooShortOrLong);
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        return Err(QuoteIdError::InvalidCharacters);
    }
    Ok(())
}

/// A well-formed quote identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuoteId(String);

impl QuoteId {
    /// Parse a quote identifier exactly as given
    ///
    /// # Example
    /// ```
    /// use autoquote_common::{QuoteId, QuoteIdError};
    ///
    /// assert!(QuoteId::parse("Q123456").is_ok());
    /// assert_eq!(QuoteId::parse("Q123"), Err(QuoteIdError::TooShortOrLong));
    /// ```
    pub fn parse(id: &str) -> Result<Self, QuoteIdError> {
        check(id)?;
        Ok(Self(id.to_string()))
    }

    /// Build the `Q######` form used for newly generated quotes
    ///
    /// Only the last six decimal digits of `number` are kept, zero-padded,
    /// so the result is always well-formed.
    pub fn numbered(number: u32) -> Self {
        Self(format!("Q{:06}", number % 1_000_000))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QuoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for QuoteId {
    type Err = QuoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for QuoteId {
    type Error = QuoteIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        check(&value)?;
        Ok(Self(value))
    }
}

impl From<QuoteId> for String {
    fn from(id: QuoteId) -> Self {
        id.0
    }
}

impl std::borrow::Borrow<str> for QuoteId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for QuoteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
