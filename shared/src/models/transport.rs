//! Transport Enumerations
//!
//! Transport mode, cargo type and delivery priority, serialized with the
//! same SCREAMING_SNAKE_CASE names the quote forms and tariff tables use.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a wire name does not match any variant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Transport mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportMode {
    Air,
    Sea,
    Road,
    Rail,
}

impl TransportMode {
    pub const ALL: [TransportMode; 4] = [Self::Air, Self::Sea, Self::Road, Self::Rail];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Air => "AIR",
            Self::Sea => "SEA",
            Self::Road => "ROAD",
            Self::Rail => "RAIL",
        }
    }
}

/// Nature of the goods, drives the cargo surcharge
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CargoType {
    #[default]
    General,
    Fragile,
    Dangerous,
    Perishable,
    Valuable,
    Bulk,
}

impl CargoType {
    pub const ALL: [CargoType; 6] = [
        Self::General,
        Self::Fragile,
        Self::Dangerous,
        Self::Perishable,
        Self::Valuable,
        Self::Bulk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "GENERAL",
            Self::Fragile => "FRAGILE",
            Self::Dangerous => "DANGEROUS",
            Self::Perishable => "PERISHABLE",
            Self::Valuable => "VALUABLE",
            Self::Bulk => "BULK",
        }
    }

    /// General cargo is the tariff baseline and never carries a surcharge
    pub fn is_surchargeable(&self) -> bool {
        !matches!(self, Self::General)
    }
}

/// Requested delivery speed, drives the priority surcharge
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    #[default]
    Standard,
    Express,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Self::Standard, Self::Express, Self::Urgent];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::Express => "EXPRESS",
            Self::Urgent => "URGENT",
        }
    }
}

/// Unit of the chargeable quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeableUnit {
    /// Kilograms (real or volumetric)
    Kg,
    /// Maritime freight ton / unité payante: max(1 t, 1 m³)
    FreightTon,
}

impl ChargeableUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::FreightTon => "freight_ton",
        }
    }
}

macro_rules! impl_wire_name {
    ($ty:ty, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .into_iter()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

impl_wire_name!(TransportMode, "transport mode");
impl_wire_name!(CargoType, "cargo type");
impl_wire_name!(Priority, "priority");

impl fmt::Display for ChargeableUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
