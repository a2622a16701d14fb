//! Quote-number generation
//!
//! New quotes are numbered `Q` + six digits in 100000..=999999. Numbers are
//! drawn at random, so uniqueness is probabilistic: with 900,000 possible
//! ids a collision is unlikely within a session but not ruled out, and
//! nothing here checks for one.

use std::sync::atomic::{AtomicU32, Ordering};

use autoquote_common::QuoteId;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Smallest generated quote number
pub const MIN_QUOTE_NUMBER: u32 = 100_000;

/// Largest generated quote number
pub const MAX_QUOTE_NUMBER: u32 = 999_999;

/// Source of fresh quote identifiers
///
/// Any `Fn() -> QuoteId` closure is a generator, which is the easiest way
/// to pin ids in tests.
pub trait QuoteIdGenerator: Send + Sync {
    fn next_id(&self) -> QuoteId;
}

impl<F> QuoteIdGenerator for F
where
    F: Fn() -> QuoteId + Send + Sync,
{
    fn next_id(&self) -> QuoteId {
        self()
    }
}

/// Uniform random `Q######` generator
pub struct RandomQuoteIdGenerator {
    rng: Mutex<StdRng>,
}

impl RandomQuoteIdGenerator {
    /// Generator seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible generator; the same seed yields the same id sequence
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomQuoteIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteIdGenerator for RandomQuoteIdGenerator {
    fn next_id(&self) -> QuoteId {
        let number = self
            .rng
            .lock()
            .gen_range(MIN_QUOTE_NUMBER..=MAX_QUOTE_NUMBER);
        QuoteId::numbered(number)
    }
}

/// Deterministic generator counting up from a starting number
///
/// Wraps back to [`MIN_QUOTE_NUMBER`] after [`MAX_QUOTE_NUMBER`].
pub struct SequentialQuoteIdGenerator {
    next: AtomicU32,
}

impl SequentialQuoteIdGenerator {
    pub fn new(start: u32) -> Self {
        Self {
            next: AtomicU32::new(start),
        }
    }
}

impl Default for SequentialQuoteIdGenerator {
    fn default() -> Self {
        Self::new(MIN_QUOTE_NUMBER)
    }
}

impl QuoteIdGenerator for SequentialQuoteIdGenerator {
    fn next_id(&self) -> QuoteId {
        let span = MAX_QUOTE_NUMBER - MIN_QUOTE_NUMBER + 1;
        let raw = self.next.fetch_add(1, Ordering::Relaxed);
        let number = MIN_QUOTE_NUMBER + raw.wrapping_sub(MIN_QUOTE_NUMBER) % span;
        QuoteId::numbered(number)
    }
}
