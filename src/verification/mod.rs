//! Member capacity checks and demand/capacity ratios

mod beam;
mod column;
mod frame;

pub use beam::{
    verify_beam, BeamVerification, DeflectionCheck, DeflectionChecks, FlexureCheck, FlexureZone,
    PHI_FLEXURE, PHI_SHEAR,
};
pub use column::{
    critical_stress, effective_length_factor, interaction_check, slenderness_limit, verify_column,
    Axis, BucklingRegime, ColumnVerification, CompressionCheck, InteractionCheck,
    InteractionEquation, Slenderness, PHI_COMPRESSION,
};
pub use frame::{
    element_length, frame_k_factor, summarize_frame, verify_frame_elements, ElementChecks,
    ElementVerification, ForceSummary, FrameSummary,
};

use serde::Serialize;
use std::fmt;

/// Bounded ratio reported when a capacity is non-positive
pub const RATIO_CAP: f64 = 9999.0;

/// Limit state that governs a verification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LimitState {
    Flexure,
    Shear,
    Interaction,
}

impl fmt::Display for LimitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimitState::Flexure => write!(f, "flexure"),
            LimitState::Shear => write!(f, "shear"),
            LimitState::Interaction => write!(f, "interaction"),
        }
    }
}

/// Demand against a factored capacity
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RatioCheck {
    /// Applied load effect
    pub demand: f64,
    /// Factored capacity (φRn)
    pub capacity: f64,
    /// |demand| / capacity, capped at [`RATIO_CAP`]
    pub ratio: f64,
    /// Ratio as a percentage
    pub utilization: f64,
    pub ok: bool,
}

impl RatioCheck {
    /// Evaluate a demand against a factored capacity
    pub fn evaluate(demand: f64, capacity: f64) -> Self {
        let ratio = demand_ratio(demand, capacity);
        Self {
            demand,
            capacity,
            ratio,
            utilization: ratio * 100.0,
            ok: ratio <= 1.0,
        }
    }
}

/// |demand| / capacity, with a bounded sentinel for non-positive
/// capacities so the result is never infinite or NaN
pub(crate) fn demand_ratio(demand: f64, capacity: f64) -> f64 {
    if capacity > 0.0 {
        demand.abs() / capacity
    } else {
        RATIO_CAP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_check_passes_below_unity() {
        let check = RatioCheck::evaluate(80.0, 100.0);
        assert!(check.ok);
        assert!((check.ratio - 0.8).abs() < 1e-12);
        assert!((check.utilization - 80.0).abs() < 1e-9);
    }

    #[test]
    fn negative_demand_uses_magnitude() {
        let check = RatioCheck::evaluate(-80.0, 100.0);
        assert!((check.ratio - 0.8).abs() < 1e-12);
    }

    #[test]
    fn zero_capacity_yields_bounded_failing_sentinel() {
        let check = RatioCheck::evaluate(10.0, 0.0);
        assert_eq!(check.ratio, RATIO_CAP);
        assert!(check.ratio.is_finite());
        assert!(!check.ok);
    }
}
