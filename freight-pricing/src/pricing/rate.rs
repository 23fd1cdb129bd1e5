//! Rate Selection
//!
//! Picks the unit price of a line: the route's contracted rate when an
//! active one exists, otherwise the default tariff times the mode multiplier.

use rust_decimal::Decimal;
use shared::models::{
    CargoSurcharges, ChargeableUnit, PricingConfig, PrioritySurcharges, TransportMode,
    TransportRate,
};

use super::error::PricingError;
use super::money::to_decimal;

/// Selected unit rate and the surcharge tables that go with it
#[derive(Debug, Clone, Copy)]
pub struct RateSelection<'a> {
    /// Price per chargeable unit (kg or freight ton)
    pub unit_rate: Decimal,
    pub route_rate_used: bool,
    pub cargo_surcharges: &'a CargoSurcharges,
    pub priority_surcharges: &'a PrioritySurcharges,
}

/// Choose the unit rate for a line.
///
/// The per-m³ rate applies exactly when the chargeable unit is the freight
/// ton. Volumetric weight is already expressed in kg, so air, road and rail
/// keep the per-kg rate even when billed on volume.
///
/// # Errors
/// [`PricingError::AmountOutOfRange`] when the default rate times the mode
/// multiplier overflows.
pub fn select_rate<'a>(
    route_rate: Option<&'a TransportRate>,
    config: &'a PricingConfig,
    mode: TransportMode,
    unit: ChargeableUnit,
) -> Result<RateSelection<'a>, PricingError> {
    let per_m3 = unit == ChargeableUnit::FreightTon;

    let selection = match route_rate.filter(|rate| rate.is_active) {
        Some(rate) => RateSelection {
            unit_rate: to_decimal(if per_m3 {
                rate.rate_per_m3
            } else {
                rate.rate_per_kg
            }),
            route_rate_used: true,
            cargo_surcharges: rate
                .cargo_type_surcharges
                .as_ref()
                .unwrap_or(&config.cargo_type_surcharges),
            priority_surcharges: rate
                .priority_surcharges
                .as_ref()
                .unwrap_or(&config.priority_surcharges),
        },
        None => {
            let default_rate = if per_m3 {
                config.default_rate_per_m3
            } else {
                config.default_rate_per_kg
            };
            let unit_rate = to_decimal(default_rate)
                .checked_mul(to_decimal(config.transport_multiplier(mode)))
                .ok_or(PricingError::AmountOutOfRange("default rate"))?;
            RateSelection {
                unit_rate,
                route_rate_used: false,
                cargo_surcharges: &config.cargo_type_surcharges,
                priority_surcharges: &config.priority_surcharges,
            }
        }
    };
    Ok(selection)
}
