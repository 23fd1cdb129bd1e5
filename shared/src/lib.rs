//! Shared types for the freight pricing workspace
//!
//! Tariff models, quote input/output structures and the unified error
//! types used by the pricing engine and the quote workflow around it.

pub mod error;
pub mod models;
pub mod quote;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{CargoType, ChargeableUnit, PricingConfig, Priority, TransportMode, TransportRate};
pub use quote::{MultiPackageInput, MultiPackageResult, PackageLine, PricingInput, PricingResult};
