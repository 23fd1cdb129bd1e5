//! Chargeable-Weight Engine
//!
//! Turns real weight and volume into the quantity actually billed:
//! - SEA: freight tons, `max(tonnes, m³)` (W/M rule)
//! - Volumetric modes: `max(real kg, m³ × ratio)`
//! - Other modes: real kg

use rust_decimal::Decimal;
use shared::models::{ChargeableUnit, PricingConfig, TransportMode};

use super::error::PricingError;
use super::money::to_decimal;

/// kg per metric tonne
const KG_PER_TONNE: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Chargeable quantity of one line, unrounded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargeableWeight {
    pub volume_m3: Decimal,
    /// Volumetric weight in kg, zero unless the volumetric rule applied
    pub volumetric_weight_kg: Decimal,
    /// Quantity billed, in `unit`
    pub quantity: Decimal,
    pub unit: ChargeableUnit,
    /// The volume side of the max won
    pub billed_on_volume: bool,
}

/// Compute the chargeable weight for `mode`.
///
/// `real_weight_kg` must already be validated as positive.
///
/// # Errors
/// [`PricingError::AmountOutOfRange`] when volume × ratio overflows.
pub fn compute_chargeable_weight(
    real_weight_kg: Decimal,
    volume_m3: Decimal,
    mode: TransportMode,
    config: &PricingConfig,
) -> Result<ChargeableWeight, PricingError> {
    if mode == TransportMode::Sea {
        let freight_tons = real_weight_kg / KG_PER_TONNE;
        return Ok(ChargeableWeight {
            volume_m3,
            volumetric_weight_kg: Decimal::ZERO,
            quantity: freight_tons.max(volume_m3),
            unit: ChargeableUnit::FreightTon,
            billed_on_volume: volume_m3 > freight_tons,
        });
    }

    if !config.use_volumetric_weight.get(mode) {
        return Ok(ChargeableWeight {
            volume_m3,
            volumetric_weight_kg: Decimal::ZERO,
            quantity: real_weight_kg,
            unit: ChargeableUnit::Kg,
            billed_on_volume: false,
        });
    }

    let ratio = to_decimal(config.volumetric_weight_ratios.get(mode));
    let volumetric_weight_kg = volume_m3
        .checked_mul(ratio)
        .ok_or(PricingError::AmountOutOfRange("volumetric weight"))?;

    Ok(ChargeableWeight {
        volume_m3,
        volumetric_weight_kg,
        quantity: real_weight_kg.max(volumetric_weight_kg),
        unit: ChargeableUnit::Kg,
        billed_on_volume: volumetric_weight_kg > real_weight_kg,
    })
}
