//! Quote results
//!
//! Amounts and weights are rounded to 2 decimals, volumes to 3.
//! Coefficients are reported as configured.

use crate::models::{CargoType, ChargeableUnit, Priority, TransportMode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Origin / destination / mode of a quote
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteDescriptor {
    pub origin_code: String,
    pub destination_code: String,
    pub mode: TransportMode,
}

impl fmt::Display for RouteDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}→{} ({})",
            self.origin_code, self.destination_code, self.mode
        )
    }
}

/// Non-fatal notes attached to a quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PricingAdvisory {
    /// No active contracted rate for the route; default tariff × mode multiplier used
    RouteRateNotConfigured { route: RouteDescriptor },
}

impl PricingAdvisory {
    pub fn message(&self) -> String {
        match self {
            Self::RouteRateNotConfigured { route } => {
                format!("Estimated tariff: route {route} is not configured yet")
            }
        }
    }
}

/// Itemized price of one shipment line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    pub volume_m3: f64,
    /// Volumetric weight, 0 unless the volumetric rule applied
    pub volumetric_weight_kg: f64,
    pub chargeable_weight: f64,
    pub chargeable_weight_unit: ChargeableUnit,
    /// Price per chargeable unit
    pub unit_rate: f64,
    pub base_cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cargo_type: Option<CargoType>,
    pub cargo_surcharge_coefficient: f64,
    pub cargo_surcharge_amount: f64,
    /// base_cost + cargo surcharge
    pub subtotal: f64,
    pub priority: Priority,
    /// 1 + priority fraction
    pub priority_coefficient: f64,
    pub priority_surcharge_amount: f64,
    pub final_price: f64,
    pub currency: String,
    pub route: RouteDescriptor,
    pub billed_on_volume: bool,
    pub route_rate_used: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub advisories: Vec<PricingAdvisory>,
}

/// One priced line of a multi-package quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageLineResult {
    /// Position of the line in the input
    pub index: usize,
    pub quantity: u32,
    pub cargo_type: CargoType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Final price of one piece at STANDARD priority
    pub unit_price: f64,
    pub line_total: f64,
    /// Breakdown of one piece
    pub detail: PricingResult,
}

/// Aggregated multi-package quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPackageResult {
    pub lines: Vec<PackageLineResult>,
    pub total_before_priority: f64,
    pub priority: Priority,
    pub priority_coefficient: f64,
    pub priority_surcharge_amount: f64,
    pub total_price: f64,
    pub total_weight_kg: f64,
    pub total_volume_m3: f64,
    pub total_package_count: u64,
    pub dominant_cargo_type: CargoType,
    pub currency: String,
    pub route: RouteDescriptor,
    pub route_rate_used: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub advisories: Vec<PricingAdvisory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route() -> RouteDescriptor {
        RouteDescriptor {
            origin_code: "FR".into(),
            destination_code: "BF".into(),
            mode: TransportMode::Air,
        }
    }

    #[test]
    fn test_route_display() {
        assert_eq!(route().to_string(), "FR→BF (AIR)");
    }

    #[test]
    fn test_advisory_message_and_serde() {
        let advisory = PricingAdvisory::RouteRateNotConfigured { route: route() };
        assert_eq!(
            advisory.message(),
            "Estimated tariff: route FR→BF (AIR) is not configured yet"
        );

        let json = serde_json::to_value(&advisory).unwrap();
        assert_eq!(json["kind"], "route_rate_not_configured");
        assert_eq!(json["route"]["mode"], "AIR");
    }
}
