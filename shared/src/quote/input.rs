//! Quote inputs

use crate::models::{CargoType, Priority, TransportMode};
use serde::{Deserialize, Serialize};

/// One shipment line to price
///
/// Dimensions are per piece, in centimetres. Leaving all three at zero means
/// "no dimensions given" and prices on real weight alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingInput {
    pub real_weight_kg: f64,
    #[serde(default)]
    pub length_cm: f64,
    #[serde(default)]
    pub width_cm: f64,
    #[serde(default)]
    pub height_cm: f64,
    pub mode: TransportMode,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo_type: Option<CargoType>,
    pub origin_code: String,
    pub destination_code: String,
}

impl PricingInput {
    /// Weight-only line with STANDARD priority and no cargo type
    pub fn new(
        real_weight_kg: f64,
        mode: TransportMode,
        origin_code: impl Into<String>,
        destination_code: impl Into<String>,
    ) -> Self {
        Self {
            real_weight_kg,
            length_cm: 0.0,
            width_cm: 0.0,
            height_cm: 0.0,
            mode,
            priority: Priority::Standard,
            cargo_type: None,
            origin_code: origin_code.into(),
            destination_code: destination_code.into(),
        }
    }

    pub fn with_dimensions(mut self, length_cm: f64, width_cm: f64, height_cm: f64) -> Self {
        self.length_cm = length_cm;
        self.width_cm = width_cm;
        self.height_cm = height_cm;
        self
    }

    pub fn with_cargo_type(mut self, cargo_type: CargoType) -> Self {
        self.cargo_type = Some(cargo_type);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

/// One line of a multi-package quote (N identical pieces)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageLine {
    pub quantity: u32,
    #[serde(default)]
    pub cargo_type: CargoType,
    /// Weight of a single piece
    pub unit_weight_kg: f64,
    #[serde(default)]
    pub length_cm: f64,
    #[serde(default)]
    pub width_cm: f64,
    #[serde(default)]
    pub height_cm: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PackageLine {
    pub fn new(quantity: u32, cargo_type: CargoType, unit_weight_kg: f64) -> Self {
        Self {
            quantity,
            cargo_type,
            unit_weight_kg,
            length_cm: 0.0,
            width_cm: 0.0,
            height_cm: 0.0,
            description: None,
        }
    }

    pub fn with_dimensions(mut self, length_cm: f64, width_cm: f64, height_cm: f64) -> Self {
        self.length_cm = length_cm;
        self.width_cm = width_cm;
        self.height_cm = height_cm;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Multi-package quote: lines share mode, priority and route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPackageInput {
    pub packages: Vec<PackageLine>,
    pub mode: TransportMode,
    #[serde(default)]
    pub priority: Priority,
    pub origin_code: String,
    pub destination_code: String,
}

impl MultiPackageInput {
    /// Single-line input for one piece of `line`, at the given priority
    pub fn line_input(&self, line: &PackageLine, priority: Priority) -> PricingInput {
        PricingInput {
            real_weight_kg: line.unit_weight_kg,
            length_cm: line.length_cm,
            width_cm: line.width_cm,
            height_cm: line.height_cm,
            mode: self.mode,
            priority,
            cargo_type: Some(line.cargo_type),
            origin_code: self.origin_code.clone(),
            destination_code: self.destination_code.clone(),
        }
    }
}
