//! Per-request service load magnitudes

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{CheckError, CheckResult};

use super::LoadType;

/// Unfactored service load magnitudes keyed by load type.
///
/// Built once per request and never mutated by the combination engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoadSet {
    magnitudes: BTreeMap<LoadType, f64>,
}

impl LoadSet {
    /// Create an empty load set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a load magnitude (builder pattern)
    pub fn with(mut self, load_type: LoadType, magnitude: f64) -> Self {
        self.magnitudes.insert(load_type, magnitude);
        self
    }

    /// Magnitude for a load type, 0 when absent
    pub fn get(&self, load_type: LoadType) -> f64 {
        self.magnitudes.get(&load_type).copied().unwrap_or(0.0)
    }

    /// Check whether a load type is present with a nonzero magnitude
    pub fn has(&self, load_type: LoadType) -> bool {
        self.get(load_type) != 0.0
    }

    /// Iterate over the stored (type, magnitude) entries
    pub fn iter(&self) -> impl Iterator<Item = (LoadType, f64)> + '_ {
        self.magnitudes.iter().map(|(&t, &m)| (t, m))
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    /// True when no entries are stored
    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Reject negative magnitudes
    pub fn validate(&self) -> CheckResult<()> {
        for (load_type, magnitude) in self.iter() {
            if magnitude < 0.0 {
                return Err(CheckError::InvalidInput(format!(
                    "load '{load_type}' cannot be negative: {magnitude}"
                )));
            }
        }
        Ok(())
    }
}
