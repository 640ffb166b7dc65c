//! Distributed line loads on a span

use serde::{Deserialize, Serialize};

/// A distributed load over part of a span, with linearly varying
/// intensity. Intensities are downward-positive kN/m.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DistributedLoad {
    /// Start position in m
    pub start: f64,
    /// End position in m; `None` extends to the end of the span
    #[serde(default)]
    pub end: Option<f64>,
    /// Intensity at the start in kN/m
    pub w_start: f64,
    /// Intensity at the end in kN/m; `None` keeps it uniform
    #[serde(default)]
    pub w_end: Option<f64>,
}

impl DistributedLoad {
    /// Create a distributed load over an explicit window
    pub fn new(start: f64, end: f64, w_start: f64, w_end: f64) -> Self {
        Self {
            start,
            end: Some(end),
            w_start,
            w_end: Some(w_end),
        }
    }

    /// Create a uniform load over the full span
    pub fn uniform(w: f64) -> Self {
        Self {
            start: 0.0,
            end: None,
            w_start: w,
            w_end: None,
        }
    }

    /// Create a triangular load (zero at start, `w_max` at end)
    pub fn triangular(w_max: f64, start: f64, end: f64) -> Self {
        Self::new(start, end, 0.0, w_max)
    }

    /// Resolve the optional fields against a span length:
    /// (start, end, w_start, w_end)
    pub fn resolve(&self, span: f64) -> (f64, f64, f64, f64) {
        let end = self.end.unwrap_or(span);
        let w_end = self.w_end.unwrap_or(self.w_start);
        (self.start, end, self.w_start, w_end)
    }

    /// Total applied force once resolved against a span, in kN
    pub fn total_force(&self, span: f64) -> f64 {
        let (start, end, w1, w2) = self.resolve(span);
        (w1 + w2) / 2.0 * (end - start)
    }
}
