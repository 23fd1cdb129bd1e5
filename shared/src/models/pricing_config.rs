//! Pricing Configuration Model
//!
//! Read-only snapshot of the tariff settings the pricing engine works from.
//! Loaded by a configuration provider (file, database, admin screen) and
//! shared behind an `Arc` for the lifetime of one or more quotes.

use super::transport::{CargoType, Priority, TransportMode};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// One value per transport mode
///
/// Lookups go through an exhaustive `match`, so adding a mode forces every
/// table to be filled in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct PerMode<T> {
    pub air: T,
    pub sea: T,
    pub road: T,
    pub rail: T,
}

impl<T: Copy> PerMode<T> {
    pub fn get(&self, mode: TransportMode) -> T {
        match mode {
            TransportMode::Air => self.air,
            TransportMode::Sea => self.sea,
            TransportMode::Road => self.road,
            TransportMode::Rail => self.rail,
        }
    }
}

/// Per-mode table as written in a config file; absent modes keep the default
#[derive(Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", deny_unknown_fields)]
struct PerModeOverrides<T> {
    air: Option<T>,
    sea: Option<T>,
    road: Option<T>,
    rail: Option<T>,
}

impl<T: Copy> PerModeOverrides<T> {
    fn over(self, base: PerMode<T>) -> PerMode<T> {
        PerMode {
            air: self.air.unwrap_or(base.air),
            sea: self.sea.unwrap_or(base.sea),
            road: self.road.unwrap_or(base.road),
            rail: self.rail.unwrap_or(base.rail),
        }
    }
}

const DEFAULT_VOLUMETRIC_RATIOS: PerMode<f64> = PerMode {
    air: 167.0,
    sea: 1000.0,
    road: 333.0,
    rail: 250.0,
};

const DEFAULT_USE_VOLUMETRIC: PerMode<bool> = PerMode {
    air: true,
    sea: false,
    road: true,
    rail: true,
};

fn volumetric_ratios<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PerMode<f64>, D::Error> {
    PerModeOverrides::deserialize(deserializer).map(|o| o.over(DEFAULT_VOLUMETRIC_RATIOS))
}

fn use_volumetric<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PerMode<bool>, D::Error> {
    PerModeOverrides::deserialize(deserializer).map(|o| o.over(DEFAULT_USE_VOLUMETRIC))
}

/// Fractional coefficients keyed by an enumerated type (0.30 = +30%)
///
/// Missing keys are not an error: callers pick the neutral value
/// (0 for surcharges, 1.0 for multipliers).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "K: Serialize",
    deserialize = "K: Deserialize<'de> + Ord"
))]
pub struct CoefficientTable<K>(BTreeMap<K, f64>);

impl<K> Default for CoefficientTable<K> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<K: Ord + Copy> CoefficientTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: K, value: f64) -> Self {
        self.0.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: K, value: f64) {
        self.0.insert(key, value);
    }

    pub fn get(&self, key: K) -> Option<f64> {
        self.0.get(&key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, f64)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Cargo-type surcharge table
pub type CargoSurcharges = CoefficientTable<CargoType>;
/// Priority surcharge table
pub type PrioritySurcharges = CoefficientTable<Priority>;

/// Rejected configuration snapshot
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid pricing config: {0}")]
pub struct InvalidPricingConfig(pub String);

/// Tariff configuration snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Density ratio used to turn m³ into volumetric kg (kg per m³)
    #[serde(deserialize_with = "volumetric_ratios")]
    pub volumetric_weight_ratios: PerMode<f64>,
    /// Whether volumetric weight participates in the chargeable weight
    #[serde(deserialize_with = "use_volumetric")]
    pub use_volumetric_weight: PerMode<bool>,
    /// Multipliers applied to the default rates only
    pub transport_multipliers: CoefficientTable<TransportMode>,
    pub default_rate_per_kg: f64,
    pub default_rate_per_m3: f64,
    pub cargo_type_surcharges: CargoSurcharges,
    pub priority_surcharges: PrioritySurcharges,
    /// ISO 4217 currency of every amount priced with this snapshot
    pub currency: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            volumetric_weight_ratios: DEFAULT_VOLUMETRIC_RATIOS,
            use_volumetric_weight: DEFAULT_USE_VOLUMETRIC,
            transport_multipliers: CoefficientTable::new()
                .with(TransportMode::Air, 2.0)
                .with(TransportMode::Sea, 0.6)
                .with(TransportMode::Road, 1.0)
                .with(TransportMode::Rail, 0.8),
            default_rate_per_kg: 2.5,
            default_rate_per_m3: 150.0,
            cargo_type_surcharges: CoefficientTable::new()
                .with(CargoType::General, 0.0)
                .with(CargoType::Fragile, 0.30)
                .with(CargoType::Dangerous, 0.50)
                .with(CargoType::Perishable, 0.40)
                .with(CargoType::Valuable, 0.25)
                .with(CargoType::Bulk, -0.10),
            priority_surcharges: CoefficientTable::new()
                .with(Priority::Standard, 0.0)
                .with(Priority::Express, 0.15)
                .with(Priority::Urgent, 0.30),
            currency: "EUR".to_string(),
        }
    }
}

impl PricingConfig {
    /// Multiplier applied to default rates for a mode (1.0 when unset)
    pub fn transport_multiplier(&self, mode: TransportMode) -> f64 {
        self.transport_multipliers.get(mode).unwrap_or(1.0)
    }

    /// Check that every coefficient is usable before the snapshot is published
    pub fn validate(&self) -> Result<(), InvalidPricingConfig> {
        for mode in TransportMode::ALL {
            let ratio = self.volumetric_weight_ratios.get(mode);
            if !ratio.is_finite() || ratio <= 0.0 {
                return Err(InvalidPricingConfig(format!(
                    "volumetric ratio for {mode} must be positive, got {ratio}"
                )));
            }
        }
        for (mode, multiplier) in self.transport_multipliers.iter() {
            if !multiplier.is_finite() || multiplier <= 0.0 {
                return Err(InvalidPricingConfig(format!(
                    "transport multiplier for {mode} must be positive, got {multiplier}"
                )));
            }
        }
        for (name, rate) in [
            ("default_rate_per_kg", self.default_rate_per_kg),
            ("default_rate_per_m3", self.default_rate_per_m3),
        ] {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(InvalidPricingConfig(format!(
                    "{name} must be positive, got {rate}"
                )));
            }
        }
        validate_surcharges("cargo type", &self.cargo_type_surcharges)?;
        validate_surcharges("priority", &self.priority_surcharges)?;
        if self.currency.trim().is_empty() {
            return Err(InvalidPricingConfig("currency must not be empty".into()));
        }
        Ok(())
    }
}

/// Surcharges may be negative (discounts) but never below -100%
pub fn validate_surcharges<K>(
    table_name: &str,
    table: &CoefficientTable<K>,
) -> Result<(), InvalidPricingConfig>
where
    K: Ord + Copy + std::fmt::Display,
{
    for (key, value) in table.iter() {
        if !value.is_finite() || value < -1.0 {
            return Err(InvalidPricingConfig(format!(
                "{table_name} surcharge for {key} is out of range: {value}"
            )));
        }
    }
    Ok(())
}
