//! Line mesh discretization and equivalent nodal load mapping
//!
//! A span is discretized into equal segments; point and distributed
//! loads are reduced to a 3-DOF-per-node nodal load vector. The mapping
//! preserves total applied force to first order, which keeps cross-run
//! comparisons meaningful even though exact correspondence with the
//! continuous load is not guaranteed.

use log::warn;
use nalgebra::DVector;

use crate::error::{CheckError, CheckResult};

/// Planar DOFs per node: (dx, dy, rz)
pub const DOFS_PER_NODE: usize = 3;

/// Span positions below this width are treated as zero-width
const ZERO_SPAN_TOL: f64 = 1e-9;

/// An equally spaced 1D mesh over `[0, length]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMesh {
    length: f64,
    segments: usize,
}

impl LineMesh {
    /// Create a mesh with `segments` equal segments over `[0, length]`
    pub fn new(length: f64, segments: usize) -> CheckResult<Self> {
        if !(length > 0.0) {
            return Err(CheckError::InvalidInput(format!(
                "mesh length must be positive, got {length}"
            )));
        }
        if segments == 0 {
            return Err(CheckError::InvalidInput(
                "mesh needs at least one segment".to_string(),
            ));
        }
        Ok(Self { length, segments })
    }

    /// Total meshed length
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of segments
    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Number of nodes (segments + 1)
    pub fn node_count(&self) -> usize {
        self.segments + 1
    }

    /// Segment length
    pub fn dx(&self) -> f64 {
        self.length / self.segments as f64
    }

    /// Node positions spanning `[0, length]`
    pub fn positions(&self) -> Vec<f64> {
        (0..self.node_count()).map(|i| i as f64 * self.dx()).collect()
    }

    /// Index of the node nearest to a position, clamped into the mesh
    pub fn nearest_node(&self, position: f64) -> usize {
        let index = (position / self.dx()).round() as isize;
        index.clamp(0, self.segments as isize) as usize
    }
}

/// Accumulates equivalent nodal loads over a [`LineMesh`].
///
/// Out-of-range geometry is clamped with a recorded (non-fatal) warning;
/// zero-width distributed spans are skipped entirely.
#[derive(Debug, Clone)]
pub struct LoadMap {
    mesh: LineMesh,
    vector: DVector<f64>,
    warnings: Vec<String>,
}

impl LoadMap {
    /// Create an empty load map over a mesh
    pub fn new(mesh: LineMesh) -> Self {
        let vector = DVector::zeros(mesh.node_count() * DOFS_PER_NODE);
        Self {
            mesh,
            vector,
            warnings: Vec::new(),
        }
    }

    /// The mesh this map accumulates onto
    pub fn mesh(&self) -> &LineMesh {
        &self.mesh
    }

    /// Apply a concentrated load `[fx, fy, mz]` at the nearest node.
    ///
    /// Positions outside `[0, length]` clamp to the nearer end.
    pub fn apply_point_load(&mut self, position: f64, components: [f64; 3]) {
        let length = self.mesh.length();
        if !(0.0..=length).contains(&position) {
            self.record_warning(format!(
                "point load at {position:.3} m is outside the span [0, {length:.3}]; \
                 clamped to the nearer end"
            ));
        }
        let node = self.mesh.nearest_node(position);
        for (dof, component) in components.into_iter().enumerate() {
            self.vector[node * DOFS_PER_NODE + dof] += component;
        }
    }

    /// Apply a linearly varying line load over `[start, end]` as vertical
    /// nodal forces.
    ///
    /// The window is clamped into the span (preserving `start <= end`)
    /// with a recorded warning; zero-width windows are skipped. Each
    /// overlapped mesh segment contributes the trapezoidal integral of
    /// the interpolated intensity, split evenly onto its two end nodes.
    pub fn apply_distributed_load(&mut self, start: f64, end: f64, w_start: f64, w_end: f64) {
        let length = self.mesh.length();

        let (mut start, mut end) = (start, end);
        if start < 0.0 || end > length || start > end {
            self.record_warning(format!(
                "distributed load window [{start:.3}, {end:.3}] is invalid for span \
                 [0, {length:.3}]; clamped"
            ));
            start = start.clamp(0.0, length);
            end = end.clamp(start, length);
        }

        // Degenerate window: nothing to integrate
        if (end - start).abs() < ZERO_SPAN_TOL {
            return;
        }

        let dx = self.mesh.dx();
        for segment in 0..self.mesh.segments() {
            let x1 = segment as f64 * dx;
            let x2 = x1 + dx;
            if x2 <= start || x1 >= end {
                continue;
            }

            let x1_load = x1.max(start);
            let x2_load = x2.min(end);

            let t1 = (x1_load - start) / (end - start);
            let t2 = (x2_load - start) / (end - start);
            let w1 = w_start + (w_end - w_start) * t1;
            let w2 = w_start + (w_end - w_start) * t2;

            let force = (w1 + w2) / 2.0 * (x2_load - x1_load);

            self.vector[segment * DOFS_PER_NODE + 1] += force / 2.0;
            self.vector[(segment + 1) * DOFS_PER_NODE + 1] += force / 2.0;
        }
    }

    /// The accumulated nodal load vector (3 DOFs per node)
    pub fn vector(&self) -> &DVector<f64> {
        &self.vector
    }

    /// Warnings recorded while mapping
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Consume the map, returning the vector and recorded warnings
    pub fn into_parts(self) -> (DVector<f64>, Vec<String>) {
        (self.vector, self.warnings)
    }

    /// Sum of all vertical nodal forces
    pub fn total_vertical_force(&self) -> f64 {
        (0..self.mesh.node_count())
            .map(|node| self.vector[node * DOFS_PER_NODE + 1])
            .sum()
    }

    fn record_warning(&mut self, message: String) {
        warn!("{message}");
        self.warnings.push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mesh_positions_span_the_length() {
        let mesh = LineMesh::new(6.0, 12).unwrap();
        let positions = mesh.positions();
        assert_eq!(positions.len(), 13);
        assert_eq!(positions[0], 0.0);
        assert_relative_eq!(positions[12], 6.0, max_relative = 1e-12);
        assert_relative_eq!(positions[1], 0.5, max_relative = 1e-12);
    }

    #[test]
    fn mesh_rejects_degenerate_input() {
        assert!(LineMesh::new(0.0, 10).is_err());
        assert!(LineMesh::new(-1.0, 10).is_err());
        assert!(LineMesh::new(5.0, 0).is_err());
    }

    #[test]
    fn point_load_goes_to_nearest_node() {
        let mesh = LineMesh::new(10.0, 10).unwrap();
        let mut map = LoadMap::new(mesh);
        map.apply_point_load(3.4, [0.0, -12.0, 0.0]);
        // Node 3 at x = 3.0 is nearest to 3.4
        assert_relative_eq!(map.vector()[3 * DOFS_PER_NODE + 1], -12.0);
        assert!(map.warnings().is_empty());
    }

    #[test]
    fn out_of_range_point_load_clamps_with_warning() {
        let mesh = LineMesh::new(10.0, 10).unwrap();
        let mut map = LoadMap::new(mesh);
        map.apply_point_load(12.0, [0.0, -5.0, 0.0]);
        assert_relative_eq!(map.vector()[10 * DOFS_PER_NODE + 1], -5.0);
        assert_eq!(map.warnings().len(), 1);
    }

    #[test]
    fn uniform_load_preserves_total_force() {
        for segments in [1, 2, 7, 20, 81] {
            let mesh = LineMesh::new(6.0, segments).unwrap();
            let mut map = LoadMap::new(mesh);
            map.apply_distributed_load(0.0, 6.0, -20.0, -20.0);
            assert_relative_eq!(map.total_vertical_force(), -120.0, max_relative = 1e-9);
        }
    }

    #[test]
    fn triangular_load_preserves_total_force() {
        let mesh = LineMesh::new(8.0, 16).unwrap();
        let mut map = LoadMap::new(mesh);
        map.apply_distributed_load(2.0, 6.0, 0.0, -10.0);
        // Average intensity 5 kN/m over 4 m
        assert_relative_eq!(map.total_vertical_force(), -20.0, max_relative = 1e-9);
    }

    #[test]
    fn partial_window_clamps_with_warning() {
        let mesh = LineMesh::new(5.0, 10).unwrap();
        let mut map = LoadMap::new(mesh);
        map.apply_distributed_load(-1.0, 7.0, -10.0, -10.0);
        assert_eq!(map.warnings().len(), 1);
        // Only the in-span part [0, 5] is integrated
        assert_relative_eq!(map.total_vertical_force(), -50.0, max_relative = 1e-9);
    }

    #[test]
    fn zero_width_window_is_skipped() {
        let mesh = LineMesh::new(5.0, 10).unwrap();
        let mut map = LoadMap::new(mesh);
        map.apply_distributed_load(2.0, 2.0, -10.0, -10.0);
        assert_relative_eq!(map.total_vertical_force(), 0.0);
        assert!(map.warnings().is_empty());
    }

    #[test]
    fn inverted_window_clamps_to_zero_width() {
        let mesh = LineMesh::new(5.0, 10).unwrap();
        let mut map = LoadMap::new(mesh);
        map.apply_distributed_load(4.0, 1.0, -10.0, -10.0);
        // start > end records a warning, then clamps to a zero-width
        // window which is skipped
        assert_eq!(map.warnings().len(), 1);
        assert_relative_eq!(map.total_vertical_force(), 0.0);
    }
}
