//! Quote - priced insurance quote
//!
//! A quote is immutable once produced. New quotes come from the premium
//! calculator; existing ones come from the quote directory.

use serde::{Deserialize, Serialize};

use super::applicant::{ApplicantInput, CoverageType, VehicleType};
use super::quote_id::QuoteId;

/// Priced quote for one customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Quote number used for later lookup
    pub id: QuoteId,

    /// Annual premium in whole currency units
    pub amount: u32,

    /// "<first> <last>"
    pub customer_name: String,

    pub vehicle_type: VehicleType,

    pub coverage: CoverageType,

    pub email: String,
}

impl Quote {
    /// Build a quote for a freshly priced applicant
    pub fn for_applicant(id: QuoteId, amount: u32, applicant: &ApplicantInput) -> Self {
        Self {
            id,
            amount,
            customer_name: applicant.customer_name(),
            vehicle_type: applicant.vehicle_type,
            coverage: applicant.coverage,
            email: applicant.email.clone(),
        }
    }
}
