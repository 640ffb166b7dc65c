//! Single-column analysis pipeline

use serde::Deserialize;
use std::f64::consts::PI;

use crate::elements::{material_by_id, section_by_id, SupportKind};
use crate::error::{CheckError, CheckResult};
use crate::mesh::{LineMesh, LoadMap};
use crate::results::{ColumnAnalysis, ColumnSlenderness, EffectiveLength, EulerBuckling};
use crate::solver::{SolverElement, SolverModel, SolverNode, SolverSession, StaticSolver};
use crate::units::{Quantity, UnitSystem};
use crate::verification::{effective_length_factor, verify_column};

use super::{MIN_SEGMENTS, MPA_TO_KN_M2};

fn default_segments() -> usize {
    MIN_SEGMENTS
}

/// A single-column analysis request
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnRequest {
    /// Column height in m
    pub height: f64,
    /// Restraint at the base
    pub base: SupportKind,
    /// Restraint at the top
    pub top: SupportKind,
    pub section_id: String,
    pub material_id: String,
    /// Factored axial load in kN, compression positive
    pub axial_load: f64,
    /// Moment applied at the top in kN·m
    #[serde(default)]
    pub moment_top: f64,
    /// Moment applied at the base in kN·m
    #[serde(default)]
    pub moment_base: f64,
    #[serde(default = "default_segments")]
    pub segments: usize,
    #[serde(default)]
    pub units: UnitSystem,
}

impl ColumnRequest {
    /// Create a request with default meshing and no end moments
    pub fn new(
        height: f64,
        base: SupportKind,
        top: SupportKind,
        section_id: &str,
        material_id: &str,
        axial_load: f64,
    ) -> Self {
        Self {
            height,
            base,
            top,
            section_id: section_id.to_string(),
            material_id: material_id.to_string(),
            axial_load,
            moment_top: 0.0,
            moment_base: 0.0,
            segments: default_segments(),
            units: UnitSystem::default(),
        }
    }
}

/// Analyze and verify a single column under axial load and end moments
pub fn analyze_column<S: StaticSolver + ?Sized>(
    request: &ColumnRequest,
    solver: &mut S,
) -> CheckResult<ColumnAnalysis> {
    let material = material_by_id(&request.material_id)
        .ok_or_else(|| CheckError::MaterialNotFound(request.material_id.clone()))?;
    let section = section_by_id(&request.section_id)
        .ok_or_else(|| CheckError::SectionNotFound(request.section_id.clone()))?;

    let k = effective_length_factor(request.base, request.top);
    let l_eff = k * request.height;

    // Slenderness per axis (lengths in m on both sides)
    let lambda_x = l_eff / section.rx;
    let lambda_y = l_eff / section.ry;
    let governing = lambda_x.max(lambda_y);

    // Elastic buckling stress and Euler load on the weak axis
    let fe = PI.powi(2) * material.e / governing.powi(2); // MPa
    let e_kn_m2 = material.e * MPA_TO_KN_M2;
    let pcr = PI.powi(2) * e_kn_m2 * section.i_min() / (k * request.height).powi(2); // kN

    let mesh = LineMesh::new(request.height, request.segments.max(MIN_SEGMENTS))?;
    let mut load_map = LoadMap::new(mesh);
    // Axial load presses down on the top node; end moments go in as
    // concentrated moments at the ends
    load_map.apply_point_load(request.height, [0.0, -request.axial_load, request.moment_top]);
    if request.moment_base != 0.0 {
        load_map.apply_point_load(0.0, [0.0, 0.0, request.moment_base]);
    }

    let model = column_model(&mesh, request, section, material);

    let output = {
        let mut session = SolverSession::acquire(solver);
        session.run(&model, load_map.vector())?
    };

    let positions = mesh.positions();
    let displacements: Vec<crate::results::DisplacementSample> = positions
        .iter()
        .zip(output.displacements.iter())
        .map(|(&y, state)| crate::results::DisplacementSample {
            position: y,
            ux: state.ux,
            uy: state.uy,
            rz: state.rz,
        })
        .collect();

    let max_lateral = super::beam::peak(displacements.iter().map(|d| d.ux));

    let mu = request.moment_top.abs().max(request.moment_base.abs());
    let verification = verify_column(
        request.axial_load,
        mu,
        request.height,
        k,
        section,
        material,
    );

    let units = request.units;
    Ok(ColumnAnalysis {
        height: units.from_internal(request.height, Quantity::Length),
        section_id: request.section_id.clone(),
        material_id: request.material_id.clone(),
        effective_length: EffectiveLength {
            k,
            l_eff: units.from_internal(l_eff, Quantity::Length),
        },
        slenderness: ColumnSlenderness {
            lambda_x,
            lambda_y,
            governing,
        },
        euler: EulerBuckling {
            fe,
            pcr: units.from_internal(pcr, Quantity::Force),
        },
        displacements: super::beam::convert_samples(displacements, units),
        max_lateral: units.from_internal(max_lateral, Quantity::Displacement),
        verification,
        warnings: load_map.warnings().to_vec(),
        units,
    })
}

/// Build the discretized solver model for a vertical column
fn column_model(
    mesh: &LineMesh,
    request: &ColumnRequest,
    section: &crate::elements::Section,
    material: &crate::elements::Material,
) -> SolverModel {
    let top_node = mesh.segments();
    let nodes = mesh
        .positions()
        .iter()
        .enumerate()
        .map(|(index, &y)| SolverNode {
            x: 0.0,
            y,
            restraint: if index == 0 {
                request.base.dof_mask()
            } else if index == top_node {
                request.top.dof_mask()
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
