//! Single-span beam analysis pipeline

use serde::Deserialize;

use crate::elements::{material_by_id, section_by_id, SupportKind};
use crate::error::{CheckError, CheckResult};
use crate::loads::{DistributedLoad, PointLoad};
use crate::mesh::{LineMesh, LoadMap};
use crate::results::{
    BeamAnalysis, BeamDiagrams, BeamReactions, DiagramPoint, DisplacementSample, EnvelopeMaxima,
    SupportReaction,
};
use crate::solver::{SolverElement, SolverModel, SolverNode, SolverSession, StaticSolver};
use crate::units::{Quantity, UnitSystem};
use crate::verification::verify_beam;

use super::{MIN_SEGMENTS, MPA_TO_KN_M2};

fn default_segments() -> usize {
    20
}

fn default_moment_gradient() -> f64 {
    1.0
}

/// A single-span beam analysis request.
///
/// Vertical loads are entered downward-positive and negated into the
/// global frame when mapped onto the mesh.
#[derive(Debug, Clone, Deserialize)]
pub struct BeamRequest {
    /// Span length in m
    pub length: f64,
    pub support_left: SupportKind,
    pub support_right: SupportKind,
    pub section_id: String,
    pub material_id: String,
    #[serde(default)]
    pub point_loads: Vec<PointLoad>,
    #[serde(default)]
    pub distributed_loads: Vec<DistributedLoad>,
    /// Unbraced length in m; defaults to the full span
    #[serde(default)]
    pub unbraced_length: Option<f64>,
    /// Moment gradient factor Cb
    #[serde(default = "default_moment_gradient")]
    pub moment_gradient: f64,
    /// Requested mesh resolution; raised to the engine minimum
    #[serde(default = "default_segments")]
    pub segments: usize,
    #[serde(default)]
    pub units: UnitSystem,
}

impl BeamRequest {
    /// Create a request with default meshing and bracing
    pub fn new(
        length: f64,
        support_left: SupportKind,
        support_right: SupportKind,
        section_id: &str,
        material_id: &str,
    ) -> Self {
        Self {
            length,
            support_left,
            support_right,
            section_id: section_id.to_string(),
            material_id: material_id.to_string(),
            point_loads: Vec::new(),
            distributed_loads: Vec::new(),
            unbraced_length: None,
            moment_gradient: default_moment_gradient(),
            segments: default_segments(),
            units: UnitSystem::default(),
        }
    }
}

/// Analyze and verify a single-span beam.
///
/// The solver is invoked exactly once through a scoped session; a
/// non-converged solution aborts with no partial results.
pub fn analyze_beam<S: StaticSolver + ?Sized>(
    request: &BeamRequest,
    solver: &mut S,
) -> CheckResult<BeamAnalysis> {
    let material = material_by_id(&request.material_id)
        .ok_or_else(|| CheckError::MaterialNotFound(request.material_id.clone()))?;
    let section = section_by_id(&request.section_id)
        .ok_or_else(|| CheckError::SectionNotFound(request.section_id.clone()))?;

    let mesh = LineMesh::new(request.length, request.segments.max(MIN_SEGMENTS))?;
    let mut load_map = LoadMap::new(mesh);

    for load in &request.point_loads {
        load_map.apply_point_load(load.position, [load.fx, -load.fy, load.mz]);
    }
    for load in &request.distributed_loads {
        let (start, end, w_start, w_end) = load.resolve(request.length);
        load_map.apply_distributed_load(start, end, -w_start, -w_end);
    }

    let model = span_model(&mesh, request, section, material);

    let output = {
        let mut session = SolverSession::acquire(solver);
        session.run(&model, load_map.vector())?
    };

    let positions = mesh.positions();
    let displacements: Vec<DisplacementSample> = positions
        .iter()
        .zip(output.displacements.iter())
        .map(|(&x, state)| DisplacementSample {
            position: x,
            ux: state.ux,
            uy: state.uy,
            rz: state.rz,
        })
        .collect();

    // Diagrams from element end forces: i-end values as reported, j-end
    // shear and moment negated so adjacent elements chain continuously
    let mut diagrams = BeamDiagrams::default();
    for (index, element) in model.elements.iter().enumerate() {
        let forces = output.end_forces.get(&element.id).copied().unwrap_or_default();
        let x1 = positions[index];
        let x2 = positions[index + 1];

        if index == 0 {
            diagrams.moment.push(DiagramPoint { x: x1, value: forces.m_i });
            diagrams.shear.push(DiagramPoint { x: x1, value: forces.v_i });
            diagrams.axial.push(DiagramPoint { x: x1, value: forces.n });
        }
        diagrams.moment.push(DiagramPoint { x: x2, value: -forces.m_j });
        diagrams.shear.push(DiagramPoint { x: x2, value: -forces.v_j });
        diagrams.axial.push(DiagramPoint { x: x2, value: -forces.n });
    }

    let max_moment = peak(diagrams.moment.iter().map(|p| p.value));
    let max_shear = peak(diagrams.shear.iter().map(|p| p.value));
    let max_deflection = peak(displacements.iter().map(|d| d.uy));

    // Verification stays in internal units regardless of the requested
    // output system
    let verification = verify_beam(
        max_moment,
        max_shear,
        request.length,
        max_deflection,
        section,
        material,
        request.unbraced_length,
        request.moment_gradient,
    );

    let reactions = BeamReactions {
        left: end_reaction(&output, 0, request.support_left, request.units),
        right: end_reaction(&output, mesh.segments(), request.support_right, request.units),
    };

    let units = request.units;
    Ok(BeamAnalysis {
        length: units.from_internal(request.length, Quantity::Length),
        section_id: request.section_id.clone(),
        material_id: request.material_id.clone(),
        reactions,
        displacements: convert_samples(displacements, units),
        diagrams: convert_diagrams(diagrams, units),
        max_values: EnvelopeMaxima {
            moment: units.from_internal(max_moment, Quantity::Moment),
            shear: units.from_internal(max_shear, Quantity::Force),
            deflection: units.from_internal(max_deflection, Quantity::Displacement),
        },
        verification,
        warnings: load_map.warnings().to_vec(),
        units,
    })
}

/// Build the discretized solver model for a horizontal span
fn span_model(
    mesh: &LineMesh,
    request: &BeamRequest,
    section: &crate::elements::Section,
    material: &crate::elements::Material,
) -> SolverModel {
    let end_node = mesh.segments();
    let nodes = mesh
        .positions()
        .iter()
        .enumerate()
        .map(|(index, &x)| SolverNode {
            x,
            y: 0.0,
            restraint: if index == 0 {
                request.support_left.dof_mask()
            } else if index == end_node {
                request.support_right.dof_mask()
            } else {
                [false; 3]
            },
        })
        .collect();

    let elements = (0..mesh.segments())
        .map(|index| SolverElement {
            id: index as u32 + 1,
            node_i: index,
            node_j: index + 1,
            area: section.a,
            elastic_modulus: material.e * MPA_TO_KN_M2,
            inertia: section.ix,
        })
        .collect();

    SolverModel { nodes, elements }
}

fn end_reaction(
    output: &crate::solver::SolveOutput,
    node: usize,
    support: SupportKind,
    units: UnitSystem,
) -> Option<SupportReaction> {
    if !support.is_restrained() {
        return None;
    }
    let reaction = output.reactions.get(&node).copied().unwrap_or_default();
    Some(SupportReaction {
        rx: units.from_internal(reaction.rx, Quantity::Force),
        ry: units.from_internal(reaction.ry, Quantity::Force),
        mz: units.from_internal(reaction.mz, Quantity::Moment),
    })
}

pub(crate) fn peak(values: impl Iterator<Item = f64>) -> f64 {
    values.map(f64::abs).fold(0.0, f64::max)
}

pub(crate) fn convert_samples(
    samples: Vec<DisplacementSample>,
    units: UnitSystem,
) -> Vec<DisplacementSample> {
    samples
        .into_iter()
        .map(|s| DisplacementSample {
            position: units.from_internal(s.position, Quantity::Length),
            ux: units.from_internal(s.ux, Quantity::Displacement),
            uy: units.from_internal(s.uy, Quantity::Displacement),
            rz: s.rz,
        })
        .collect()
}

fn convert_diagrams(diagrams: BeamDiagrams, units: UnitSystem) -> BeamDiagrams {
    let convert = |points: Vec<DiagramPoint>, quantity: Quantity| {
        points
            .into_iter()
            .map(|p| DiagramPoint {
                x: units.from_internal(p.x, Quantity::Length),
                value: units.from_internal(p.value, quantity),
            })
            .collect()
    };
    BeamDiagrams {
        moment: convert(diagrams.moment, Quantity::Moment),
        shear: convert(diagrams.shear, Quantity::Force),
        axial: convert(diagrams.axial, Quantity::Force),
    }
}
