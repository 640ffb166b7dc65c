//! External static solver interface
//!
//! The equilibrium solver is a collaborator, not part of this crate: it
//! receives a discretized planar model plus a nodal load vector and
//! returns displacements, reactions and element end forces. Solver state
//! is assumed non-reentrant, so every invocation goes through a
//! [`SolverSession`] that resets the solver on acquisition and again on
//! every exit path.

use nalgebra::DVector;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::error::CheckError;

/// A node of the solver model: position and restraint mask (dx, dy, rz)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SolverNode {
    pub x: f64,
    pub y: f64,
    pub restraint: [bool; 3],
}

/// A frame element of the solver model, indices into the node list
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SolverElement {
    pub id: u32,
    pub node_i: usize,
    pub node_j: usize,
    /// Cross-sectional area in m²
    pub area: f64,
    /// Elastic modulus in kN/m²
    pub elastic_modulus: f64,
    /// In-plane moment of inertia in m⁴
    pub inertia: f64,
}

/// Discretized planar model handed to the solver
#[derive(Debug, Clone, Default, Serialize)]
pub struct SolverModel {
    pub nodes: Vec<SolverNode>,
    pub elements: Vec<SolverElement>,
}

impl SolverModel {
    /// Total number of DOFs (3 per node)
    pub fn dof_count(&self) -> usize {
        self.nodes.len() * crate::mesh::DOFS_PER_NODE
    }
}

/// Displacement state at a node: (ux, uy) in m, rz in rad
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct NodeState {
    pub ux: f64,
    pub uy: f64,
    pub rz: f64,
}

/// Reaction at a restrained node, global axes (y up), kN / kN·m
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Reaction {
    pub rx: f64,
    pub ry: f64,
    pub mz: f64,
}

/// Local end forces of one element: axial, end shears and end moments.
///
/// The i-end values are reported as-is; j-end shear and moment are
/// negated when sampling diagrams so that adjacent elements chain into a
/// continuous diagram.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EndForces {
    /// Axial force in kN
    pub n: f64,
    /// Shear at the i end in kN
    pub v_i: f64,
    /// Moment at the i end in kN·m
    pub m_i: f64,
    /// Shear at the j end in kN
    pub v_j: f64,
    /// Moment at the j end in kN·m
    pub m_j: f64,
}

/// Full solver output for one invocation
#[derive(Debug, Clone, Default)]
pub struct SolveOutput {
    /// Displacement state per node, same order as the model node list
    pub displacements: Vec<NodeState>,
    /// Reactions keyed by node index
    pub reactions: BTreeMap<usize, Reaction>,
    /// End forces keyed by element id
    pub end_forces: BTreeMap<u32, EndForces>,
}

/// Errors surfaced by a solver implementation
#[derive(Error, Debug)]
pub enum SolverError {
    /// The solution did not equilibrate; terminal for the request
    #[error("solution did not converge")]
    NonConvergence,

    #[error("solver failed: {0}")]
    Failed(String),
}

impl From<SolverError> for CheckError {
    fn from(err: SolverError) -> Self {
        match err {
            SolverError::NonConvergence => CheckError::NonConvergence,
            SolverError::Failed(msg) => CheckError::SolverFailed(msg),
        }
    }
}

/// A linear static equilibrium solver
pub trait StaticSolver {
    /// Clear any state left over from a previous invocation
    fn reset(&mut self);

    /// Solve the model under the given nodal load vector
    fn solve(&mut self, model: &SolverModel, loads: &DVector<f64>)
        -> Result<SolveOutput, SolverError>;
}

/// Scoped access to a solver for exactly one invocation.
///
/// Acquiring the session resets the solver; dropping it resets again, so
/// stale state cannot leak between requests even when a solve fails.
pub struct SolverSession<'a, S: StaticSolver + ?Sized> {
    solver: &'a mut S,
}

impl<'a, S: StaticSolver + ?Sized> SolverSession<'a, S> {
    /// Acquire the solver, resetting it first
    pub fn acquire(solver: &'a mut S) -> Self {
        solver.reset();
        Self { solver }
    }

    /// Run the single solve of this session
    pub fn run(
        &mut self,
        model: &SolverModel,
        loads: &DVector<f64>,
    ) -> Result<SolveOutput, SolverError> {
        self.solver.solve(model, loads)
    }
}

impl<S: StaticSolver + ?Sized> Drop for SolverSession<'_, S> {
    fn drop(&mut self) {
        self.solver.reset();
    }
}
