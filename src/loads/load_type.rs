//! Service load type tags

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CheckError;

/// Recognized service load types (ASCE 7 tags)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LoadType {
    /// Dead load
    #[serde(rename = "D")]
    Dead,
    /// Live load
    #[serde(rename = "L")]
    Live,
    /// Roof live load
    #[serde(rename = "Lr")]
    RoofLive,
    /// Snow load
    #[serde(rename = "S")]
    Snow,
    /// Wind load
    #[serde(rename = "W")]
    Wind,
    /// Earthquake load
    #[serde(rename = "E")]
    Earthquake,
    /// Rain load
    #[serde(rename = "R")]
    Rain,
    /// Lateral soil pressure
    #[serde(rename = "H")]
    Soil,
    /// Fluid pressure
    #[serde(rename = "F")]
    Fluid,
    /// Self-straining (temperature) effects
    #[serde(rename = "T")]
    Temperature,
}

impl LoadType {
    /// All recognized tags
    pub const ALL: [LoadType; 10] = [
        LoadType::Dead,
        LoadType::Live,
        LoadType::RoofLive,
        LoadType::Snow,
        LoadType::Wind,
        LoadType::Earthquake,
        LoadType::Rain,
        LoadType::Soil,
        LoadType::Fluid,
        LoadType::Temperature,
    ];

    /// Short tag used in combination names
    pub fn tag(self) -> &'static str {
        match self {
            LoadType::Dead => "D",
            LoadType::Live => "L",
            LoadType::RoofLive => "Lr",
            LoadType::Snow => "S",
            LoadType::Wind => "W",
            LoadType::Earthquake => "E",
            LoadType::Rain => "R",
            LoadType::Soil => "H",
            LoadType::Fluid => "F",
            LoadType::Temperature => "T",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            LoadType::Dead => "Dead load",
            LoadType::Live => "Live load",
            LoadType::RoofLive => "Roof live load",
            LoadType::Snow => "Snow load",
            LoadType::Wind => "Wind load",
            LoadType::Earthquake => "Earthquake load",
            LoadType::Rain => "Rain load",
            LoadType::Soil => "Lateral soil pressure",
            LoadType::Fluid => "Fluid pressure",
            LoadType::Temperature => "Self-straining effects",
        }
    }

    /// Parse a short tag
    pub fn from_tag(tag: &str) -> Result<Self, CheckError> {
        LoadType::ALL
            .into_iter()
            .find(|t| t.tag() == tag)
            .ok_or_else(|| CheckError::InvalidInput(format!("load type '{tag}' not recognized")))
    }
}

impl fmt::Display for LoadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
