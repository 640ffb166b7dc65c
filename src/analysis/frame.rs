//! Planar frame analysis pipeline

use serde::Deserialize;
use std::collections::BTreeMap;

use nalgebra::DVector;

use crate::elements::{material_by_id, section_by_id, Element, Node};
use crate::error::{CheckError, CheckResult};
use crate::mesh::DOFS_PER_NODE;
use crate::results::{FrameAnalysis, FrameNodeResult, SupportReaction};
use crate::solver::{SolverElement, SolverModel, SolverNode, SolverSession, StaticSolver};
use crate::units::{Quantity, UnitSystem};
use crate::verification::{summarize_frame, verify_frame_elements};

use super::MPA_TO_KN_M2;

/// A load applied to the frame model
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FrameLoad {
    /// Concentrated load at a node; fy is downward-positive
    Nodal { node_id: u32, fx: f64, fy: f64, mz: f64 },
    /// Uniform gravity load along an element in kN/m, downward-positive.
    ///
    /// Reduced to equivalent end-node forces (half of w·L at each end),
    /// statically equivalent to first order.
    Distributed { element_id: u32, w: f64 },
}

/// A planar frame analysis request
#[derive(Debug, Clone, Deserialize)]
pub struct FrameRequest {
    pub nodes: Vec<Node>,
    pub elements: Vec<Element>,
    #[serde(default)]
    pub loads: Vec<FrameLoad>,
    pub material_id: String,
    #[serde(default)]
    pub units: UnitSystem,
}

/// Analyze a planar frame and verify every element.
///
/// Node and element ids must resolve uniquely within the request; all
/// lookups fail before the solver model is built.
pub fn analyze_frame<S: StaticSolver + ?Sized>(
    request: &FrameRequest,
    solver: &mut S,
) -> CheckResult<FrameAnalysis> {
    let material = material_by_id(&request.material_id)
        .ok_or_else(|| CheckError::MaterialNotFound(request.material_id.clone()))?;

    // Resolve node ids to solver indices
    let mut node_index: BTreeMap<u32, usize> = BTreeMap::new();
    for (index, node) in request.nodes.iter().enumerate() {
        if node_index.insert(node.id, index).is_some() {
            return Err(CheckError::InvalidInput(format!(
                "duplicate node id {}",
                node.id
            )));
        }
    }
    let resolve_node = |id: u32| node_index.get(&id).copied().ok_or(CheckError::NodeNotFound(id));

    let mut solver_elements = Vec::with_capacity(request.elements.len());
    let mut element_lengths: BTreeMap<u32, f64> = BTreeMap::new();
    for element in &request.elements {
        if element_lengths.contains_key(&element.id) {
            return Err(CheckError::InvalidInput(format!(
                "duplicate element id {}",
                element.id
            )));
        }
        let section = section_by_id(&element.section_id)
            .ok_or_else(|| CheckError::SectionNotFound(element.section_id.clone()))?;
        let i = resolve_node(element.node_i)?;
        let j = resolve_node(element.node_j)?;

        let length = request.nodes[i].distance_to(&request.nodes[j]);
        if length <= 0.0 {
            return Err(CheckError::InvalidInput(format!(
                "element {} has zero length",
                element.id
            )));
        }
        element_lengths.insert(element.id, length);

        solver_elements.push(SolverElement {
            id: element.id,
            node_i: i,
            node_j: j,
            area: section.a,
            elastic_modulus: material.e * MPA_TO_KN_M2,
            inertia: section.ix,
        });
    }

    let solver_nodes: Vec<SolverNode> = request
        .nodes
        .iter()
        .map(|node| SolverNode {
            x: node.x,
            y: node.y,
            restraint: node.support.unwrap_or_default().dof_mask(),
        })
        .collect();
    let model = SolverModel {
        nodes: solver_nodes,
        elements: solver_elements,
    };

    // Assemble the nodal load vector
    let mut loads = DVector::zeros(model.dof_count());
    for load in &request.loads {
        match *load {
            FrameLoad::Nodal { node_id, fx, fy, mz } => {
                let index = resolve_node(node_id)?;
                loads[index * DOFS_PER_NODE] += fx;
                loads[index * DOFS_PER_NODE + 1] += -fy;
                loads[index * DOFS_PER_NODE + 2] += mz;
            }
            FrameLoad::Distributed { element_id, w } => {
                let element = request
                    .elements
                    .iter()
                    .find(|e| e.id == element_id)
                    .ok_or(CheckError::ElementNotFound(element_id))?;
                let length = element_lengths[&element_id];
                let half = w * length / 2.0;
                for node_id in [element.node_i, element.node_j] {
                    let index = resolve_node(node_id)?;
                    loads[index * DOFS_PER_NODE + 1] += -half;
                }
            }
        }
    }

    let output = {
        let mut session = SolverSession::acquire(solver);
        session.run(&model, &loads)?
    };

    let units = request.units;

    let mut nodes = BTreeMap::new();
    for (node, state) in request.nodes.iter().zip(output.displacements.iter()) {
        nodes.insert(
            node.id,
            FrameNodeResult {
                x: node.x,
                y: node.y,
                ux: units.from_internal(state.ux, Quantity::Displacement),
                uy: units.from_internal(state.uy, Quantity::Displacement),
                rz: state.rz,
            },
        );
    }

    let mut reactions = BTreeMap::new();
    for node in &request.nodes {
        let supported = node.support.map(|s| s.is_restrained()).unwrap_or(false);
        if supported {
            let index = node_index[&node.id];
            let reaction = output.reactions.get(&index).copied().unwrap_or_default();
            reactions.insert(
                node.id,
                SupportReaction {
                    rx: units.from_internal(reaction.rx, Quantity::Force),
                    ry: units.from_internal(reaction.ry, Quantity::Force),
                    mz: units.from_internal(reaction.mz, Quantity::Moment),
                },
            );
        }
    }

    // Verification runs on internal-unit end forces
    let elements = verify_frame_elements(
        &request.elements,
        &output.end_forces,
        &request.nodes,
        material,
    )?;
    let summary = summarize_frame(&elements);

    let element_forces = output
        .end_forces
        .iter()
        .map(|(&id, forces)| {
            let mut converted = *forces;
            converted.n = units.from_internal(forces.n, Quantity::Force);
            converted.v_i = units.from_internal(forces.v_i, Quantity::Force);
            converted.v_j = units.from_internal(forces.v_j, Quantity::Force);
            converted.m_i = units.from_internal(forces.m_i, Quantity::Moment);
            converted.m_j = units.from_internal(forces.m_j, Quantity::Moment);
            (id, converted)
        })
        .collect();

    Ok(FrameAnalysis {
        nodes,
        reactions,
        element_forces,
        elements,
        summary,
        units,
    })
}
