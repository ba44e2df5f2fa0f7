//! Enums describing how a tenant prices delivery.

use serde::{Deserialize, Serialize};

/// The business model a tenant's store runs under.
///
/// Each model has its own delivery settings shape and fee calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessModel {
    /// Direct-to-consumer e-commerce: fixed or weight-based fees.
    D2c,
    /// Grocery / quick-commerce: area or distance-based fees.
    Grocery,
}

impl std::fmt::Display for BusinessModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::D2c => write!(f, "d2c"),
            Self::Grocery => write!(f, "grocery"),
        }
    }
}

impl std::str::FromStr for BusinessModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "d2c" => Ok(Self::D2c),
            "grocery" => Ok(Self::Grocery),
            _ => Err(format!("invalid business model: {s}")),
        }
    }
}

/// How weight-based D2C delivery turns a cart weight into a fee.
///
/// Any unrecognised value falls back to [`WeightCalculationType::Slab`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeightCalculationType {
    /// Total weight multiplied by a per-kg rate.
    PerKg,
    /// Flat fee of the first weight bracket containing the total weight.
    #[default]
    #[serde(other)]
    Slab,
}

/// How distance-based grocery delivery turns a distance into a fee.
///
/// Any unrecognised value falls back to [`DistanceCalculationType::Slab`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DistanceCalculationType {
    /// Distance multiplied by a per-km rate.
    PerKm,
    /// Flat fee of the first distance bracket containing the distance.
    #[default]
    #[serde(other)]
    Slab,
}
