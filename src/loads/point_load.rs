//! Concentrated loads on a span

use serde::{Deserialize, Serialize};

/// A concentrated load applied at a position along a span.
///
/// The vertical component is downward-positive, matching how gravity
/// loads are entered; the sign is flipped into the global frame when the
/// load is mapped onto the mesh.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PointLoad {
    /// Distance from the left end in m
    pub position: f64,
    /// Horizontal component in kN
    #[serde(default)]
    pub fx: f64,
    /// Vertical component in kN, downward positive
    #[serde(default)]
    pub fy: f64,
    /// Concentrated moment in kN·m
    #[serde(default)]
    pub mz: f64,
}

impl PointLoad {
    /// Create a point load with all three components
    pub fn new(position: f64, fx: f64, fy: f64, mz: f64) -> Self {
        Self { position, fx, fy, mz }
    }

    /// Create a vertical (gravity) point load
    pub fn vertical(magnitude: f64, position: f64) -> Self {
        Self::new(position, 0.0, magnitude, 0.0)
    }
}
