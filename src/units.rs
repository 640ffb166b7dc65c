//! Unit conversion layer
//!
//! All engine math runs in kN / m / kN·m (material stresses in MPa).
//! Alternate unit systems are applied only at the presentation boundary,
//! never inside combination or capacity calculations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CheckError;

/// Output unit system
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// Kilonewtons and meters (internal/primary system)
    #[default]
    #[serde(rename = "kN-m")]
    KnM,
    /// Metric tonnes-force and meters
    #[serde(rename = "tonf-m")]
    TonfM,
    /// Kilograms-force and centimeters
    #[serde(rename = "kgf-cm")]
    KgfCm,
}

/// Kind of quantity being converted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    Force,
    Moment,
    Length,
    Displacement,
}

impl UnitSystem {
    /// Scale factor from the internal system (kN, m, kN·m) to this system
    pub fn factor(self, quantity: Quantity) -> f64 {
        match self {
            UnitSystem::KnM => 1.0,
            UnitSystem::TonfM => match quantity {
                // kN -> tonf, kN·m -> tonf·m
                Quantity::Force | Quantity::Moment => 1.0 / 9.80665,
                Quantity::Length | Quantity::Displacement => 1.0,
            },
            UnitSystem::KgfCm => match quantity {
                // kN -> kgf
                Quantity::Force => 101.972,
                // kN·m -> kgf·cm
                Quantity::Moment => 10_197.2,
                // m -> cm
                Quantity::Length | Quantity::Displacement => 100.0,
            },
        }
    }

    /// Convert a value from internal units into this system
    pub fn from_internal(self, value: f64, quantity: Quantity) -> f64 {
        value * self.factor(quantity)
    }

    /// Convert a value expressed in this system back to internal units
    pub fn to_internal(self, value: f64, quantity: Quantity) -> f64 {
        value / self.factor(quantity)
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UnitSystem::KnM => "kN-m",
            UnitSystem::TonfM => "tonf-m",
            UnitSystem::KgfCm => "kgf-cm",
        };
        write!(f, "{label}")
    }
}

impl FromStr for UnitSystem {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kN-m" => Ok(UnitSystem::KnM),
            "tonf-m" => Ok(UnitSystem::TonfM),
            "kgf-cm" => Ok(UnitSystem::KgfCm),
            other => Err(CheckError::UnknownUnitSystem(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const KINDS: [Quantity; 4] = [
        Quantity::Force,
        Quantity::Moment,
        Quantity::Length,
        Quantity::Displacement,
    ];

    #[test]
    fn primary_system_is_identity() {
        for kind in KINDS {
            assert_eq!(UnitSystem::KnM.from_internal(12.5, kind), 12.5);
        }
    }

    #[test]
    fn round_trip_recovers_value() {
        for system in [UnitSystem::KnM, UnitSystem::TonfM, UnitSystem::KgfCm] {
            for kind in KINDS {
                let out = system.from_internal(347.25, kind);
                assert_relative_eq!(system.to_internal(out, kind), 347.25, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn tonf_force_conversion() {
        assert_relative_eq!(
            UnitSystem::TonfM.from_internal(9.80665, Quantity::Force),
            1.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn kgf_cm_moment_conversion() {
        assert_relative_eq!(
            UnitSystem::KgfCm.from_internal(1.0, Quantity::Moment),
            10_197.2,
            max_relative = 1e-12
        );
    }

    #[test]
    fn parse_rejects_unknown_system() {
        assert!("lbf-in".parse::<UnitSystem>().is_err());
        assert_eq!("kgf-cm".parse::<UnitSystem>().unwrap(), UnitSystem::KgfCm);
    }
}
