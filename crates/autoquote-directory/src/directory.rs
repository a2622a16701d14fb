//! Static quote directory

use std::collections::BTreeMap;

use autoquote_common::{CoverageType, Quote, QuoteId, VehicleType};

/// Read-only mapping from quote id to quote
#[derive(Debug, Clone, Default)]
pub struct QuoteDirectory {
    quotes: BTreeMap<QuoteId, Quote>,
}

impl QuoteDirectory {
    /// Hints shown next to the lookup form
    pub const SAMPLE_HINTS: [&'static str; 3] = [
        "Q123456 - John Smith's comprehensive coverage",
        "Q789012 - Sarah Johnson's collision coverage",
        "Q345678 - Mike Davis's luxury car coverage",
    ];

    /// Build a directory from existing quotes; later duplicates win
    pub fn from_quotes(quotes: impl IntoIterator<Item = Quote>) -> Self {
        Self {
            quotes: quotes.into_iter().map(|q| (q.id.clone(), q)).collect(),
        }
    }

    /// The three sample quotes available for lookup
    pub fn mock() -> Self {
        Self::from_quotes([
            sample(
                123456,
                750,
                "John Smith",
                VehicleType::Sedan,
                CoverageType::Comprehensive,
                "john.smith@email.com",
            ),
            sample(
                789012,
                520,
                "Sarah Johnson",
                VehicleType::Suv,
                CoverageType::Collision,
                "sarah.j@email.com",
            ),
            sample(
                345678,
                890,
                "Mike Davis",
                VehicleType::Luxury,
                CoverageType::Comprehensive,
                "mike.davis@email.com",
            ),
        ])
    }

    /// Exact, case-sensitive lookup without format validation
    pub fn get(&self, id: &str) -> Option<&Quote> {
        self.quotes.get(id)
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Known ids in ascending order
    pub fn ids(&self) -> impl Iterator<Item = &QuoteId> {
        self.quotes.keys()
    }

    /// Quotes in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &Quote> {
        self.quotes.values()
    }
}

fn sample(
    number: u32,
    amount: u32,
    customer_name: &str,
    vehicle_type: VehicleType,
    coverage: CoverageType,
    email: &str,
) -> Quote {
    Quote {
        id: QuoteId::numbered(number),
        amount,
        customer_name: customer_name.to_string(),
        vehicle_type,
        coverage,
        email: email.to_string(),
    }
}
