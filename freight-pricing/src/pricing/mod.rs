//! Pricing Engine
//!
//! Turns a shipment description into an itemized freight price.
//!
//! # Pipeline (per line)
//!
//! ```text
//! dimensions ──► volume (m³)
//!                   │
//! real weight ──────┴─► chargeable weight (kg | freight ton)
//!                              │
//! route rate / default tariff ─┴─► base cost
//!                                     │
//!                    cargo surcharge ─┴─► subtotal
//!                                            │
//!                        priority surcharge ─┴─► final price
//! ```
//!
//! All arithmetic uses `rust_decimal`; outputs are rounded once, half away
//! from zero.
//!
//! # Module Structure
//!
//! - `volume`: dimensions to cubic metres
//! - `chargeable`: W/M and volumetric rules
//! - `rate`: route rate or default tariff
//! - `surcharge`: cargo then priority stacking
//! - `calculator`: single-line orchestration ([`FreightPricer`])
//! - `package_calculator`: multi-package aggregation

pub mod calculator;
pub mod chargeable;
pub mod error;
pub mod money;
pub mod package_calculator;
pub mod rate;
pub mod surcharge;
pub mod volume;

pub use calculator::FreightPricer;
pub use chargeable::{ChargeableWeight, compute_chargeable_weight};
pub use error::PricingError;
pub use rate::{RateSelection, select_rate};
pub use surcharge::{SurchargeBreakdown, apply_surcharges};
pub use volume::{compute_volume_m3, shipment_volume_m3};
