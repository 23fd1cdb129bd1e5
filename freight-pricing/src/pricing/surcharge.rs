//! Surcharge Stacking
//!
//! Fixed order, no intermediate rounding:
//! 1. cargo surcharge = base × cargo coefficient
//! 2. subtotal = base + cargo surcharge
//! 3. priority surcharge = subtotal × priority fraction
//! 4. final = subtotal × (1 + priority fraction)
//!
//! Priority compounds on the cargo-adjusted subtotal.

use rust_decimal::Decimal;
use shared::models::{CargoSurcharges, CargoType, Priority, PrioritySurcharges};

use super::error::PricingError;
use super::money::to_decimal;

/// Unrounded surcharge breakdown of one line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurchargeBreakdown {
    pub base_cost: Decimal,
    pub cargo_coefficient: Decimal,
    pub cargo_surcharge: Decimal,
    pub subtotal: Decimal,
    pub priority_fraction: Decimal,
    /// 1 + priority fraction
    pub priority_multiplier: Decimal,
    pub priority_surcharge: Decimal,
    pub final_price: Decimal,
}

/// Cargo coefficient; no cargo type and GENERAL are always 0
pub fn cargo_coefficient(cargo_type: Option<CargoType>, table: &CargoSurcharges) -> Decimal {
    match cargo_type {
        Some(cargo) if cargo.is_surchargeable() => {
            table.get(cargo).map(to_decimal).unwrap_or(Decimal::ZERO)
        }
        _ => Decimal::ZERO,
    }
}

/// Priority fraction; missing entries are 0
pub fn priority_fraction(priority: Priority, table: &PrioritySurcharges) -> Decimal {
    table.get(priority).map(to_decimal).unwrap_or(Decimal::ZERO)
}

/// Apply cargo then priority surcharges to `base_cost`
///
/// # Errors
/// [`PricingError::AmountOutOfRange`] when a step overflows.
pub fn apply_surcharges(
    base_cost: Decimal,
    cargo_type: Option<CargoType>,
    priority: Priority,
    cargo_surcharges: &CargoSurcharges,
    priority_surcharges: &PrioritySurcharges,
) -> Result<SurchargeBreakdown, PricingError> {
    let overflow = |amount| PricingError::AmountOutOfRange(amount);

    // Step 1: cargo
    let cargo_coefficient = cargo_coefficient(cargo_type, cargo_surcharges);
    let cargo_surcharge = base_cost
        .checked_mul(cargo_coefficient)
        .ok_or(overflow("cargo surcharge"))?;

    // Step 2: subtotal
    let subtotal = base_cost
        .checked_add(cargo_surcharge)
        .ok_or(overflow("subtotal"))?;

    // Step 3: priority on the subtotal
    let priority_fraction = priority_fraction(priority, priority_surcharges);
    let priority_multiplier = Decimal::ONE + priority_fraction;
    let priority_surcharge = subtotal
        .checked_mul(priority_fraction)
        .ok_or(overflow("priority surcharge"))?;

    // Step 4: final
    let final_price = subtotal
        .checked_mul(priority_multiplier)
        .ok_or(overflow("final price"))?;

    Ok(SurchargeBreakdown {
        base_cost,
        cargo_coefficient,
        cargo_surcharge,
        subtotal,
        priority_fraction,
        priority_multiplier,
        priority_surcharge,
        final_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::money::to_f64;
    use shared::models::PricingConfig;

    fn stack(base: f64, cargo: Option<CargoType>, priority: Priority) -> SurchargeBreakdown {
        let config = PricingConfig::default();
        apply_surcharges(
            to_decimal(base),
            cargo,
            priority,
            &config.cargo_type_surcharges,
            &config.priority_surcharges,
        )
        .unwrap()
    }

    #[test]
    fn test_no_surcharges() {
        let result = stack(100.0, None, Priority::Standard);
        assert_eq!(to_f64(result.cargo_surcharge), 0.0);
        assert_eq!(to_f64(result.priority_surcharge), 0.0);
        assert_eq!(result.priority_multiplier, Decimal::ONE);
        assert_eq!(to_f64(result.final_price), 100.0);
    }

    #[test]
    fn test_general_cargo_never_surcharged() {
        let config = PricingConfig::default();
        let table = config.cargo_type_surcharges.clone().with(CargoType::General, 0.5);
        let result = apply_surcharges(
            to_decimal(100.0),
            Some(CargoType::General),
            Priority::Standard,
            &table,
            &config.priority_surcharges,
        )
        .unwrap();
        assert_eq!(result.cargo_coefficient, Decimal::ZERO);
        assert_eq!(to_f64(result.final_price), 100.0);
    }

    #[test]
    fn test_priority_compounds_on_cargo_subtotal() {
        // 100 + 30% = 130; 130 × 1.30 = 169 (not 100 + 30 + 30 = 160)
        let result = stack(100.0, Some(CargoType::Fragile), Priority::Urgent);
        assert_eq!(to_f64(result.cargo_surcharge), 30.0);
        assert_eq!(to_f64(result.subtotal), 130.0);
        assert_eq!(to_f64(result.priority_surcharge), 39.0);
        assert_eq!(to_f64(result.final_price), 169.0);
    }

    #[test]
    fn test_negative_cargo_coefficient() {
        // BULK −10%: 200 → 180; EXPRESS +15% → 207
        let result = stack(200.0, Some(CargoType::Bulk), Priority::Express);
        assert_eq!(to_f64(result.cargo_surcharge), -20.0);
        assert_eq!(to_f64(result.subtotal), 180.0);
        assert_eq!(to_f64(result.final_price), 207.0);
    }

    #[test]
    fn test_fields_rounded_independently() {
        // 581.16 × 0.30 = 174.348; 755.508 × 0.30 = 226.6524; 755.508 × 1.3 = 982.1604
        let result = stack(581.16, Some(CargoType::Fragile), Priority::Urgent);
        assert_eq!(to_f64(result.base_cost), 581.16);
        assert_eq!(to_f64(result.cargo_surcharge), 174.35);
        assert_eq!(to_f64(result.subtotal), 755.51);
        assert_eq!(to_f64(result.priority_surcharge), 226.65);
        assert_eq!(to_f64(result.final_price), 982.16);
    }

    #[test]
    fn test_missing_priority_entry_is_zero() {
        let config = PricingConfig::default();
        let result = apply_surcharges(
            to_decimal(50.0),
            None,
            Priority::Urgent,
            &config.cargo_type_surcharges,
            &PrioritySurcharges::new(),
        )
        .unwrap();
        assert_eq!(result.priority_multiplier, Decimal::ONE);
        assert_eq!(to_f64(result.final_price), 50.0);
    }

    #[test]
    fn test_overflow_is_an_error() {
        let config = PricingConfig::default();
        let result = apply_surcharges(
            Decimal::MAX,
            Some(CargoType::Dangerous),
            Priority::Standard,
            &config.cargo_type_surcharges,
            &config.priority_surcharges,
        );
        assert!(matches!(result, Err(PricingError::AmountOutOfRange("subtotal"))));
    }
}
