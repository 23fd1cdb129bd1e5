//! Tariff models
//!
//! Enumerations, configuration snapshot and route rates shared between the
//! pricing engine and the quote workflow.

pub mod pricing_config;
pub mod transport;
pub mod transport_rate;

pub use pricing_config::{
    CargoSurcharges, CoefficientTable, InvalidPricingConfig, PerMode, PricingConfig,
    PrioritySurcharges,
};
pub use transport::{CargoType, ChargeableUnit, Priority, TransportMode, UnknownVariant};
pub use transport_rate::{TransportRate, normalize_country_code};
