//! Premium calculator - Premium = Base × Age × Vehicle × Coverage
//!
//! Multipliers are exact decimals so products such as 500 × 1.5 × 1.8 × 1.4
//! land on whole numbers without float drift. The single rounding step at
//! the end is midpoint-away-from-zero.

use autoquote_common::{CoverageType, VehicleType};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Base annual premium before any factor is applied
pub const BASE_PRICE: Decimal = dec!(500);

/// Age bracket used for rating
///
/// Boundaries are exclusive: 25 and 65 are both standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBand {
    /// Under 25 (+50%)
    Young,
    /// 25 through 65
    Standard,
    /// Over 65 (+20%)
    Senior,
}

impl AgeBand {
    pub fn for_age(age: u8) -> Self {
        if age < 25 {
            AgeBand::Young
        } else if age > 65 {
            AgeBand::Senior
        } else {
            AgeBand::Standard
        }
    }

    pub fn multiplier(&self) -> Decimal {
        match self {
            AgeBand::Young => dec!(1.5),
            AgeBand::Standard => dec!(1.0),
            AgeBand::Senior => dec!(1.2),
        }
    }
}

/// Vehicle surcharge: luxury 1.8, SUV 1.3, everything else 1.0
pub fn vehicle_multiplier(vehicle: VehicleType) -> Decimal {
    match vehicle {
        VehicleType::Luxury => dec!(1.8),
        VehicleType::Suv => dec!(1.3),
        VehicleType::Sedan | VehicleType::Truck => dec!(1.0),
    }
}

/// Coverage surcharge: comprehensive 1.4, collision 1.2, liability 1.0
pub fn coverage_multiplier(coverage: CoverageType) -> Decimal {
    match coverage {
        CoverageType::Comprehensive => dec!(1.4),
        CoverageType::Collision => dec!(1.2),
        CoverageType::Liability => dec!(1.0),
    }
}

/// Individual rating factor with explanation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingFactor {
    /// Factor name ("age", "vehicle_type", "coverage")
    pub name: String,
    /// Multiplier applied to the running premium
    pub multiplier: Decimal,
    /// Human-readable explanation
    pub description: String,
}

impl RatingFactor {
    pub fn new(name: impl Into<String>, multiplier: Decimal, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            multiplier,
            description: description.into(),
        }
    }
}

/// Detailed premium breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumBreakdown {
    pub base_price: Decimal,

    /// Applied factors, in application order
    pub factors: Vec<RatingFactor>,

    /// Exact product before rounding
    pub unrounded: Decimal,

    /// Final annual premium
    pub premium: u32,
}

/// Price an applicant and explain every factor
pub fn premium_breakdown(age: u8, vehicle: VehicleType, coverage: CoverageType) -> PremiumBreakdown {
    let band = AgeBand::for_age(age);
    let factors = vec![
        RatingFactor::new("age", band.multiplier(), format!("{:?} driver (age {})", band, age)),
        RatingFactor::new(
            "vehicle_type",
            vehicle_multiplier(vehicle),
            format!("{} vehicle", vehicle.label()),
        ),
        RatingFactor::new(
            "coverage",
            coverage_multiplier(coverage),
            format!("{} coverage", coverage.label()),
        ),
    ];

    let unrounded = factors
        .iter()
        .fold(BASE_PRICE, |acc, factor| acc * factor.multiplier);
    let rounded = unrounded.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    // The table bounds the product to 500..=1890.
    let premium = rounded.to_u32().unwrap_or_default();

    PremiumBreakdown {
        base_price: BASE_PRICE,
        factors,
        unrounded,
        premium,
    }
}

/// Annual premium for the given rating attributes
pub fn compute_premium(age: u8, vehicle: VehicleType, coverage: CoverageType) -> u32 {
    premium_breakdown(age, vehicle, coverage).premium
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_age_bands() {
        assert_eq!(AgeBand::for_age(18), AgeBand::Young);
        assert_eq!(AgeBand::for_age(24), AgeBand::Young);
        assert_eq!(AgeBand::for_age(25), AgeBand::Standard);
        assert_eq!(AgeBand::for_age(65), AgeBand::Standard);
        assert_eq!(AgeBand::for_age(66), AgeBand::Senior);
        assert_eq!(AgeBand::for_age(100), AgeBand::Senior);
    }

    #[test]
    fn test_age_boundaries() {
        let sedan = VehicleType::Sedan;
        let liability = CoverageType::Liability;

        assert_eq!(compute_premium(24, sedan, liability), 750);
        assert_eq!(compute_premium(25, sedan, liability), 500);
        assert_eq!(compute_premium(65, sedan, liability), 500);
        assert_eq!(compute_premium(66, sedan, liability), 600);
    }

    #[test]
    fn test_worked_examples() {
        // 500 * 1.0 * 1.3 * 1.4
        assert_eq!(
            compute_premium(28, VehicleType::Suv, CoverageType::Comprehensive),
            910
        );
        // 500 * 1.0 * 1.8 * 1.4
        assert_eq!(
            compute_premium(35, VehicleType::Luxury, CoverageType::Comprehensive),
            1260
        );
        // 500 * 1.5 * 1.8 * 1.4
        assert_eq!(
            compute_premium(22, VehicleType::Luxury, CoverageType::Comprehensive),
            1890
        );
    }

    #[test]
    fn test_truck_and_sedan_price_alike() {
        for coverage in CoverageType::ALL {
            assert_eq!(
                compute_premium(40, VehicleType::Truck, coverage),
                compute_premium(40, VehicleType::Sedan, coverage)
            );
        }
    }

    #[test]
    fn test_collision_and_senior() {
        // 500 * 1.2 * 1.3 * 1.2 = 936
        assert_eq!(
            compute_premium(70, VehicleType::Suv, CoverageType::Collision),
            936
        );
    }

    #[test]
    fn test_breakdown_is_exact() {
        let breakdown = premium_breakdown(22, VehicleType::Luxury, CoverageType::Comprehensive);

        assert_eq!(breakdown.base_price, dec!(500));
        assert_eq!(breakdown.factors.len(), 3);
        assert_eq!(breakdown.factors[0].multiplier, dec!(1.5));
        assert_eq!(breakdown.factors[1].multiplier, dec!(1.8));
        assert_eq!(breakdown.factors[2].multiplier, dec!(1.4));
        assert_eq!(breakdown.unrounded, dec!(1890));
        assert_eq!(breakdown.premium, 1890);
    }

    #[test]
    fn test_fractional_product_rounds() {
        // 500 * 1.2 * 1.3 * 1.4 = 1092 exactly; 500 * 1.5 * 1.3 * 1.2 = 1170
        assert_eq!(
            compute_premium(80, VehicleType::Suv, CoverageType::Comprehensive),
            1092
        );
        assert_eq!(
            compute_premium(19, VehicleType::Suv, CoverageType::Collision),
            1170
        );
    }

    proptest! {
        #[test]
        fn prop_young_sedan_liability_is_750(age in 18u8..25) {
            prop_assert_eq!(compute_premium(age, VehicleType::Sedan, CoverageType::Liability), 750);
        }

        #[test]
        fn prop_standard_sedan_liability_is_base(age in 25u8..=65) {
            prop_assert_eq!(compute_premium(age, VehicleType::Sedan, CoverageType::Liability), 500);
        }

        #[test]
        fn prop_premium_within_table_bounds(age in 18u8..=100, v in 0usize..4, c in 0usize..3) {
            let premium = compute_premium(age, VehicleType::ALL[v], CoverageType::ALL[c]);
            prop_assert!((500..=1890).contains(&premium));
        }
    }
}
