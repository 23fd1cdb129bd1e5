//! Volume Calculator

use super::error::PricingError;
use super::money::to_decimal;
use rust_decimal::Decimal;

/// cm³ per m³
const CM3_PER_M3: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Smallest accepted dimension (1 mm)
pub const MIN_DIMENSION_CM: f64 = 0.1;
/// Largest accepted dimension (100 m)
pub const MAX_DIMENSION_CM: f64 = 10_000.0;

/// Volume in m³ of a `length × width × height` box given in centimetres.
///
/// Every dimension must lie in `MIN_DIMENSION_CM..=MAX_DIMENSION_CM`.
pub fn compute_volume_m3(length_cm: f64, width_cm: f64, height_cm: f64) -> Result<Decimal, PricingError> {
    let valid = |v: f64| (MIN_DIMENSION_CM..=MAX_DIMENSION_CM).contains(&v);
    if !(valid(length_cm) && valid(width_cm) && valid(height_cm)) {
        return Err(PricingError::InvalidDimensions {
            length: length_cm,
            width: width_cm,
            height: height_cm,
        });
    }

    Ok(to_decimal(length_cm) * to_decimal(width_cm) * to_decimal(height_cm) / CM3_PER_M3)
}

/// Volume of a shipment line: all three dimensions at zero means none were
/// given and yields 0; anything else must be a complete valid triple.
pub fn shipment_volume_m3(length_cm: f64, width_cm: f64, height_cm: f64) -> Result<Decimal, PricingError> {
    if length_cm == 0.0 && width_cm == 0.0 && height_cm == 0.0 {
        return Ok(Decimal::ZERO);
    }
    compute_volume_m3(length_cm, width_cm, height_cm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::money::{to_f64_dp, VOLUME_DECIMAL_PLACES};

    #[test]
    fn test_volume() {
        let volume = compute_volume_m3(100.0, 80.0, 60.0).unwrap();
        assert_eq!(volume, Decimal::new(48, 2));
    }

    #[test]
    fn test_small_volume_keeps_precision() {
        // 12 × 11 × 7 = 924 cm³
        let volume = compute_volume_m3(12.0, 11.0, 7.0).unwrap();
        assert_eq!(volume, Decimal::new(924, 6));
        assert_eq!(to_f64_dp(volume, VOLUME_DECIMAL_PLACES), 0.001);
    }

    #[test]
    fn test_non_positive_dimension_fails() {
        assert!(matches!(
            compute_volume_m3(100.0, 0.0, 60.0),
            Err(PricingError::InvalidDimensions { .. })
        ));
        assert!(compute_volume_m3(-1.0, 10.0, 10.0).is_err());
        assert!(compute_volume_m3(f64::NAN, 10.0, 10.0).is_err());
    }

    #[test]
    fn test_out_of_range_dimension_fails() {
        assert!(compute_volume_m3(1e10, 1e10, 1e10).is_err());
        assert!(compute_volume_m3(10_000.5, 10.0, 10.0).is_err());
        assert!(compute_volume_m3(1e-30, 10.0, 10.0).is_err());
        assert!(compute_volume_m3(0.05, 10.0, 10.0).is_err());
    }

    #[test]
    fn test_largest_box_is_priced() {
        // 100 m cube
        let volume = compute_volume_m3(MAX_DIMENSION_CM, MAX_DIMENSION_CM, MAX_DIMENSION_CM).unwrap();
        assert_eq!(volume, Decimal::from(1_000_000));
    }

    #[test]
    fn test_absent_dimensions_are_zero_volume() {
        assert_eq!(shipment_volume_m3(0.0, 0.0, 0.0).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_partial_dimensions_fail() {
        assert!(shipment_volume_m3(100.0, 0.0, 0.0).is_err());
        assert!(shipment_volume_m3(0.0, 50.0, 40.0).is_err());
    }
}
