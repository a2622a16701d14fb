//! Quote lookup
//!
//! Format problems and unknown ids are both returned as [`LookupError`]
//! values; neither is fatal. The caller owns the user-facing message.

use autoquote_common::{LookupError, Quote, QuoteId};
use tracing::{debug, instrument};

use crate::directory::QuoteDirectory;

/// Validate `id`, then fetch it from the directory
///
/// An id that fails validation never reaches the directory.
#[instrument(skip(directory))]
pub fn find_quote(directory: &QuoteDirectory, id: &str) -> Result<Quote, LookupError> {
    let id = QuoteId::parse(id).map_err(|e| {
        debug!(error = %e, "Rejected malformed quote id");
        LookupError::InvalidId(e)
    })?;

    match directory.get(id.as_str()) {
        Some(quote) => {
            debug!(customer = %quote.customer_name, "Quote found");
            Ok(quote.clone())
        }
        None => {
            debug!("Quote not found");
            Err(LookupError::NotFound(id.into()))
        }
    }
}

impl QuoteDirectory {
    /// See [`find_quote`]
    pub fn find(&self, id: &str) -> Result<Quote, LookupError> {
        find_quote(self, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoquote_common::{CoverageType, QuoteIdError, VehicleType};

    #[test]
    fn test_find_existing_quote() {
        let directory = QuoteDirectory::mock();
        let quote = find_quote(&directory, "Q123456").unwrap();

        assert_eq!(quote.customer_name, "John Smith");
        assert_eq!(quote.amount, 750);
        assert_eq!(quote.vehicle_type, VehicleType::Sedan);
        assert_eq!(quote.coverage, CoverageType::Comprehensive);
        assert_eq!(quote.email, "john.smith@email.com");
    }

    #[test]
    fn test_unknown_quote() {
        let directory = QuoteDirectory::mock();
        assert_eq!(
            find_quote(&directory, "Q999999"),
            Err(LookupError::NotFound("Q999999".to_string()))
        );
    }

    #[test]
    fn test_invalid_ids_skip_directory() {
        let directory = QuoteDirectory::mock();
        assert_eq!(
            find_quote(&directory, "Q123"),
            Err(LookupError::InvalidId(QuoteIdError::TooShortOrLong))
        );
        assert_eq!(
            find_quote(&directory, "Q123@45"),
            Err(LookupError::InvalidId(QuoteIdError::InvalidCharacters))
        );
        // Lowercase is not a format a stored key can have
        assert_eq!(
            find_quote(&directory, "q123456"),
            Err(LookupError::InvalidId(QuoteIdError::InvalidCharacters))
        );
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let directory = QuoteDirectory::mock();
        assert_eq!(directory.find("Q345678"), directory.find("Q345678"));
        assert_eq!(directory.find("Q000000"), directory.find("Q000000"));
    }
}
