//! Applicant attributes used for rating
//!
//! Vehicle and coverage options are closed sets; anything the form cannot
//! map onto one of them is rejected before pricing.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::FormError;

/// Vehicle classes offered on the quote form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Sedan,
    Suv,
    /// Luxury car (highest vehicle surcharge)
    Luxury,
    Truck,
}

impl VehicleType {
    pub const ALL: [VehicleType; 4] = [
        VehicleType::Sedan,
        VehicleType::Suv,
        VehicleType::Luxury,
        VehicleType::Truck,
    ];

    /// Wire name, as submitted by the form
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Sedan => "sedan",
            VehicleType::Suv => "suv",
            VehicleType::Luxury => "luxury",
            VehicleType::Truck => "truck",
        }
    }

    /// Human-readable option label
    pub fn label(&self) -> &'static str {
        match self {
            VehicleType::Sedan => "Sedan",
            VehicleType::Suv => "SUV",
            VehicleType::Luxury => "Luxury Car",
            VehicleType::Truck => "Truck",
        }
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FormError::UnknownVehicleType(s.to_string()))
    }
}

/// Coverage levels offered on the quote form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageType {
    /// Liability only (no surcharge)
    Liability,
    Collision,
    Comprehensive,
}

impl CoverageType {
    pub const ALL: [CoverageType; 3] = [
        CoverageType::Liability,
        CoverageType::Collision,
        CoverageType::Comprehensive,
    ];

    /// Wire name, as submitted by the form
    pub fn as_str(&self) -> &'static str {
        match self {
            CoverageType::Liability => "liability",
            CoverageType::Collision => "collision",
            CoverageType::Comprehensive => "comprehensive",
        }
    }

    /// Human-readable option label
    pub fn label(&self) -> &'static str {
        match self {
            CoverageType::Liability => "Liability Only",
            CoverageType::Collision => "Collision",
            CoverageType::Comprehensive => "Comprehensive",
        }
    }
}

impl std::fmt::Display for CoverageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoverageType {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FormError::UnknownCoverage(s.to_string()))
    }
}

/// Validated applicant attributes
///
/// The premium calculator trusts these values as given. Age bounds
/// (18..=100) are enforced by whoever builds the input, normally the
/// quote form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantInput {
    pub first_name: String,
    pub last_name: String,
    pub age: u8,
    pub vehicle_type: VehicleType,
    pub coverage: CoverageType,
    pub email: String,
}

impl ApplicantInput {
    /// Create an applicant with the given rating attributes
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u8,
        vehicle_type: VehicleType,
        coverage: CoverageType,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            vehicle_type,
            coverage,
            email: email.into(),
        }
    }

    /// Name shown on the quote: "<first> <last>"
    pub fn customer_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
