//! # Autoquote Pricing
//!
//! Premium calculator and quote-number generation.
//!
//! ## Pricing Formula
//!
//! ```text
//! Premium = round(Base × Age × Vehicle × Coverage)
//! ```
//!
//! Where:
//! - Base: 500
//! - Age: 1.5 under 25, 1.2 over 65, otherwise 1.0
//! - Vehicle: 1.8 luxury, 1.3 SUV, otherwise 1.0
//! - Coverage: 1.4 comprehensive, 1.2 collision, otherwise 1.0

pub mod pricing;

use autoquote_common::{ApplicantInput, Quote};
use tracing::{debug, instrument};

pub use pricing::{
    compute_premium, premium_breakdown, AgeBand, PremiumBreakdown, QuoteIdGenerator,
    RandomQuoteIdGenerator, RatingFactor, SequentialQuoteIdGenerator, BASE_PRICE,
};

/// Price an applicant and assign a fresh quote number
///
/// The applicant is trusted as given; age bounds are the caller's concern.
#[instrument(skip_all, fields(age = applicant.age, vehicle = %applicant.vehicle_type, coverage = %applicant.coverage))]
pub fn quote_applicant(applicant: &ApplicantInput, ids: &dyn QuoteIdGenerator) -> Quote {
    let amount = compute_premium(applicant.age, applicant.vehicle_type, applicant.coverage);
    let id = ids.next_id();
    debug!(quote_id = %id, amount, "Priced new quote");
    Quote::for_applicant(id, amount, applicant)
}
