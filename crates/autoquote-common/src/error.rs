//! Error types for Autoquote
//!
//! Provides a unified error type and domain-specific error variants

use serde::Serialize;
use thiserror::Error;

/// Result type alias using AutoquoteError
pub type Result<T> = std::result::Result<T, AutoquoteError>;

/// Unified error type for Autoquote operations
#[derive(Debug, Error)]
pub enum AutoquoteError {
    // Quote identifier errors
    #[error("Quote ID error: {0}")]
    QuoteId(#[from] QuoteIdError),

    // Applicant form errors
    #[error("Form error: {0}")]
    Form(#[from] FormError),

    // Directory lookup errors
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    // Terminal / stream errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Quote identifier format errors
///
/// Messages are shown to the user verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteIdError {
    #[error("Quote ID must be exactly 7 characters")]
    TooShortOrLong,

    #[error("Quote ID must contain only letters and numbers")]
    InvalidCharacters,
}

/// Quote directory lookup errors
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupError {
    #[error(transparent)]
    InvalidId(#[from] QuoteIdError),

    #[error("Quote not found. Please check the Quote ID and try again.")]
    NotFound(String),
}

/// Applicant form validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Age must be a whole number")]
    AgeNotANumber(String),

    #[error("Age must be between {min} and {max}, got {age}")]
    AgeOutOfRange { age: u32, min: u8, max: u8 },

    #[error("Unknown vehicle type: {0}")]
    UnknownVehicleType(String),

    #[error("Unknown coverage type: {0}")]
    UnknownCoverage(String),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

impl From<serde_json::Error> for AutoquoteError {
    fn from(err: serde_json::Error) -> Self {
        AutoquoteError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for AutoquoteError {
    fn from(err: std::io::Error) -> Self {
        AutoquoteError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_id_messages() {
        assert_eq!(
            QuoteIdError::TooShortOrLong.to_string(),
            "Quote ID must be exactly 7 characters"
        );
        assert_eq!(
            QuoteIdError::InvalidCharacters.to_string(),
            "Quote ID must contain only letters and numbers"
        );
    }

    #[test]
    fn test_lookup_error_display() {
        let err = LookupError::NotFound("Q999999".to_string());
        assert!(err.to_string().starts_with("Quote not found"));

        // Invalid ids surface the format message unchanged
        let err = LookupError::from(QuoteIdError::InvalidCharacters);
        assert_eq!(err.to_string(), QuoteIdError::InvalidCharacters.to_string());
    }

    #[test]
    fn test_form_error_wraps() {
        let err = AutoquoteError::from(FormError::AgeOutOfRange {
            age: 17,
            min: 18,
            max: 100,
        });
        assert!(err.to_string().contains("between 18 and 100"));
    }
}
