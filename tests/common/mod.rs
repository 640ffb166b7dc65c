//! Stub solvers shared by the pipeline tests

#![allow(dead_code)]

use std::collections::BTreeMap;

use nalgebra::DVector;

use steel_check::mesh::DOFS_PER_NODE;
use steel_check::solver::{
    EndForces, NodeState, Reaction, SolveOutput, SolverError, SolverModel, StaticSolver,
};

/// Closed-form statics for a simply supported horizontal span under
/// vertical nodal loads. Internal forces are exact for the discretized
/// model; the deflected shape uses the uniform-load curve for the
/// equivalent total load.
pub struct PinnedSpanSolver {
    pub solves: usize,
    pub resets: usize,
    pub fail_next: bool,
}

impl PinnedSpanSolver {
    pub fn new() -> Self {
        Self {
            solves: 0,
            resets: 0,
            fail_next: false,
        }
    }
}

impl StaticSolver for PinnedSpanSolver {
    fn reset(&mut self) {
        self.resets += 1;
    }

    fn solve(
        &mut self,
        model: &SolverModel,
        loads: &DVector<f64>,
    ) -> Result<SolveOutput, SolverError> {
        self.solves += 1;
        if self.fail_next {
            return Err(SolverError::NonConvergence);
        }

        let n_nodes = model.nodes.len();
        let span = model.nodes[n_nodes - 1].x;

        let fy: Vec<f64> = (0..n_nodes).map(|i| loads[i * DOFS_PER_NODE + 1]).collect();
        let total: f64 = fy.iter().sum();
        let moment_about_left: f64 = model
            .nodes
            .iter()
            .zip(&fy)
            .map(|(node, f)| f * node.x)
            .sum();

        // Upward-positive support reactions from statics
        let r_right = -moment_about_left / span;
        let r_left = -total - r_right;

        let shear_at = |x: f64| -> f64 {
            r_left
                + model
                    .nodes
                    .iter()
                    .zip(&fy)
                    .filter(|(node, _)| node.x < x)
                    .map(|(_, f)| f)
                    .sum::<f64>()
        };
        let moment_at = |x: f64| -> f64 {
            r_left * x
                + model
                    .nodes
                    .iter()
                    .zip(&fy)
                    .filter(|(node, _)| node.x < x)
                    .map(|(node, f)| f * (x - node.x))
                    .sum::<f64>()
        };

        let mut output = SolveOutput::default();
        for element in &model.elements {
            let x1 = model.nodes[element.node_i].x;
            let x2 = model.nodes[element.node_j].x;
            // Shear is constant between nodal loads
            let v = shear_at((x1 + x2) / 2.0);
            output.end_forces.insert(
                element.id,
                EndForces {
                    n: 0.0,
                    v_i: v,
                    m_i: moment_at(x1),
                    v_j: -v,
                    m_j: -moment_at(x2),
                },
            );
        }

        let ei = model.elements[0].elastic_modulus * model.elements[0].inertia;
        let w_eq = -total / span;
        output.displacements = model
            .nodes
            .iter()
            .map(|node| {
                let x = node.x;
                NodeState {
                    ux: 0.0,
                    uy: -w_eq * x * (span.powi(3) - 2.0 * span * x.powi(2) + x.powi(3))
                        / (24.0 * ei),
                    rz: 0.0,
                }
            })
            .collect();

        output.reactions.insert(0, Reaction { rx: 0.0, ry: r_left, mz: 0.0 });
        output
            .reactions
            .insert(n_nodes - 1, Reaction { rx: 0.0, ry: r_right, mz: 0.0 });

        Ok(output)
    }
}

/// Replays canned end forces and reactions; records the load vector it
/// was handed for assertions on the mapping stage.
pub struct CannedSolver {
    pub end_forces: BTreeMap<u32, EndForces>,
    pub reactions: BTreeMap<usize, Reaction>,
    pub last_loads: Option<DVector<f64>>,
    pub resets: usize,
}

impl CannedSolver {
    pub fn new(end_forces: BTreeMap<u32, EndForces>) -> Self {
        Self {
            end_forces,
            reactions: BTreeMap::new(),
            last_loads: None,
            resets: 0,
        }
    }
}

impl StaticSolver for CannedSolver {
    fn reset(&mut self) {
        self.resets += 1;
    }

    fn solve(
        &mut self,
        model: &SolverModel,
        loads: &DVector<f64>,
    ) -> Result<SolveOutput, SolverError> {
        self.last_loads = Some(loads.clone());
        Ok(SolveOutput {
            displacements: vec![NodeState::default(); model.nodes.len()],
            reactions: self.reactions.clone(),
            end_forces: self.end_forces.clone(),
        })
    }
}
