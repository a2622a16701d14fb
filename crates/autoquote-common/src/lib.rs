//! # Autoquote Common
//!
//! Shared types and errors for the Autoquote insurance quote calculator.
//!
//! ## Core Types
//!
//! - [`ApplicantInput`]: validated applicant attributes fed to the premium calculator
//! - [`VehicleType`]/[`CoverageType`]: rating attributes with fixed option sets
//! - [`Quote`]: an immutable priced quote, either freshly computed or looked up
//! - [`QuoteId`]: 7-character `[A-Z0-9]` quote identifier
//!
//! ## Quote IDs
//!
//! - [`validate_quote_id`]: length and character-class check
//! - [`normalize_quote_id_input`]: input shaping applied as the user types

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{AutoquoteError, FormError, LookupError, QuoteIdError, Result};
pub use types::{
    applicant::{ApplicantInput, CoverageType, VehicleType},
    quote::Quote,
    quote_id::{normalize_quote_id_input, validate_quote_id, QuoteId, QuoteIdValidation},
};

/// Autoquote version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exact length of every quote identifier
pub const QUOTE_ID_LEN: usize = 7;

/// Youngest applicant the quote form accepts
pub const MIN_APPLICANT_AGE: u8 = 18;

/// Oldest applicant the quote form accepts
pub const MAX_APPLICANT_AGE: u8 = 100;
