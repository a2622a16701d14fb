//! Pricing module
//!
//! Provides the fixed multiplier table and quote-number generation:
//! - Age, vehicle, and coverage rating factors
//! - Exact decimal premium arithmetic
//! - Injectable quote-id generators

pub mod calculator;
pub mod id_gen;

pub use calculator::{
    compute_premium, premium_breakdown, AgeBand, PremiumBreakdown, RatingFactor, BASE_PRICE,
};
pub use id_gen::{QuoteIdGenerator, RandomQuoteIdGenerator, SequentialQuoteIdGenerator};
