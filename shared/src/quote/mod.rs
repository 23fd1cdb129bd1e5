//! Quote Module
//!
//! Transient request/response types of the pricing engine:
//! - Inputs: one shipment line or a multi-package shipment
//! - Results: itemized breakdowns, per line and aggregated

pub mod input;
pub mod result;

// Re-exports
pub use input::{MultiPackageInput, PackageLine, PricingInput};
pub use result::{
    MultiPackageResult, PackageLineResult, PricingAdvisory, PricingResult, RouteDescriptor,
};
