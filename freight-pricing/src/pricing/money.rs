//! Decimal helpers
//!
//! All arithmetic runs on `Decimal`; values cross the API boundary as `f64`
//! and are rounded only there.

use rust_decimal::prelude::*;

/// Monetary and weight outputs (2 decimal places, half away from zero)
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Volume outputs in m³
pub const VOLUME_DECIMAL_PLACES: u32 = 3;

/// Convert f64 to Decimal for calculation
///
/// Callers validate ranges first; a value Decimal cannot hold is logged
/// and read as zero.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "f64 outside decimal range in pricing calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64, rounded to `dp` decimal places
#[inline]
pub fn to_f64_dp(value: Decimal, dp: u32) -> f64 {
    value
        .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    to_f64_dp(value, MONEY_DECIMAL_PLACES)
}

/// Convert a coefficient back to f64 without rounding
#[inline]
pub fn coefficient_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_precision() {
        let sum = to_decimal(0.1) + to_decimal(0.2);
        assert_eq!(to_f64(sum), 0.3);
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(to_f64(Decimal::new(10005, 3)), 10.01);
        assert_eq!(to_f64(Decimal::new(-10005, 3)), -10.01);
        assert_eq!(to_f64(Decimal::new(174348, 3)), 174.35);
    }

    #[test]
    fn test_volume_places() {
        assert_eq!(to_f64_dp(Decimal::new(123456, 6), VOLUME_DECIMAL_PLACES), 0.123);
        assert_eq!(to_f64_dp(Decimal::new(48, 2), VOLUME_DECIMAL_PLACES), 0.48);
    }

    #[test]
    fn test_unrepresentable_becomes_zero() {
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
        assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
        assert_eq!(to_decimal(1e30), Decimal::ZERO);
    }
}
