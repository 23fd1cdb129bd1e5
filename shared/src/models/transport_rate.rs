//! Transport Rate Model

use super::pricing_config::{
    CargoSurcharges, InvalidPricingConfig, PrioritySurcharges, validate_surcharges,
};
use super::transport::TransportMode;
use serde::{Deserialize, Serialize};

/// Contracted rate for one origin / destination / mode combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportRate {
    /// ISO country code of the origin (upper case)
    pub origin_code: String,
    /// ISO country code of the destination (upper case)
    pub destination_code: String,
    pub mode: TransportMode,
    pub rate_per_kg: f64,
    /// Also the rate per freight ton for sea freight
    pub rate_per_m3: f64,
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Route-level override of the global cargo surcharge table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo_type_surcharges: Option<CargoSurcharges>,
    /// Route-level override of the global priority surcharge table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_surcharges: Option<PrioritySurcharges>,
}

fn default_true() -> bool {
    true
}

impl TransportRate {
    pub fn new(
        origin_code: impl Into<String>,
        destination_code: impl Into<String>,
        mode: TransportMode,
        rate_per_kg: f64,
        rate_per_m3: f64,
    ) -> Self {
        Self {
            origin_code: normalize_country_code(&origin_code.into()),
            destination_code: normalize_country_code(&destination_code.into()),
            mode,
            rate_per_kg,
            rate_per_m3,
            is_active: true,
            cargo_type_surcharges: None,
            priority_surcharges: None,
        }
    }

    /// Check rates and route-level surcharge tables before the rate is stored
    pub fn validate(&self) -> Result<(), InvalidPricingConfig> {
        let route = format!("{}→{} ({})", self.origin_code, self.destination_code, self.mode);
        for (name, rate) in [
            ("rate_per_kg", self.rate_per_kg),
            ("rate_per_m3", self.rate_per_m3),
        ] {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(InvalidPricingConfig(format!(
                    "{name} of route {route} must be positive, got {rate}"
                )));
            }
        }
        if let Some(table) = &self.cargo_type_surcharges {
            validate_surcharges("cargo type", table)?;
        }
        if let Some(table) = &self.priority_surcharges {
            validate_surcharges("priority", table)?;
        }
        Ok(())
    }
}

/// Country codes are case-insensitive; stored and compared in upper case
pub fn normalize_country_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
