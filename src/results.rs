//! Analysis output records
//!
//! Everything here serializes for the report-rendering collaborators.
//! Values are expressed in the unit system recorded on each result.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::solver::EndForces;
use crate::units::UnitSystem;
use crate::verification::{
    BeamVerification, ColumnVerification, ElementVerification, FrameSummary,
};

/// One sample of an internal force diagram
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DiagramPoint {
    /// Position along the member
    pub x: f64,
    pub value: f64,
}

/// Internal force diagrams sampled at the mesh nodes
#[derive(Debug, Clone, Default, Serialize)]
pub struct BeamDiagrams {
    pub moment: Vec<DiagramPoint>,
    pub shear: Vec<DiagramPoint>,
    pub axial: Vec<DiagramPoint>,
}

/// Envelope maxima extracted from the solved model
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct EnvelopeMaxima {
    pub moment: f64,
    pub shear: f64,
    pub deflection: f64,
}

/// Displacement state sampled at a mesh position
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DisplacementSample {
    /// Position along the member axis
    pub position: f64,
    pub ux: f64,
    pub uy: f64,
    /// Rotation in rad (never unit-converted)
    pub rz: f64,
}

/// Reaction at a supported node, global axes (y up)
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SupportReaction {
    pub rx: f64,
    pub ry: f64,
    pub mz: f64,
}

/// Reactions at the two ends of a single-span beam
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct BeamReactions {
    pub left: Option<SupportReaction>,
    pub right: Option<SupportReaction>,
}

/// Full beam analysis result
#[derive(Debug, Clone, Serialize)]
pub struct BeamAnalysis {
    pub length: f64,
    pub section_id: String,
    pub material_id: String,
    pub reactions: BeamReactions,
    pub displacements: Vec<DisplacementSample>,
    pub diagrams: BeamDiagrams,
    pub max_values: EnvelopeMaxima,
    pub verification: BeamVerification,
    /// Non-fatal geometry warnings recorded while mapping loads
    pub warnings: Vec<String>,
    pub units: UnitSystem,
}

/// Effective length of a column
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EffectiveLength {
    pub k: f64,
    pub l_eff: f64,
}

/// Per-axis slenderness of a column
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ColumnSlenderness {
    pub lambda_x: f64,
    pub lambda_y: f64,
    pub governing: f64,
}

/// Elastic buckling figures of a column
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EulerBuckling {
    /// Elastic buckling stress in MPa
    pub fe: f64,
    /// Euler critical load in kN
    pub pcr: f64,
}

/// Full column analysis result
#[derive(Debug, Clone, Serialize)]
pub struct ColumnAnalysis {
    pub height: f64,
    pub section_id: String,
    pub material_id: String,
    pub effective_length: EffectiveLength,
    pub slenderness: ColumnSlenderness,
    pub euler: EulerBuckling,
    pub displacements: Vec<DisplacementSample>,
    /// Peak lateral displacement magnitude
    pub max_lateral: f64,
    pub verification: ColumnVerification,
    pub warnings: Vec<String>,
    pub units: UnitSystem,
}

/// Solved state of one frame node
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FrameNodeResult {
    pub x: f64,
    pub y: f64,
    pub ux: f64,
    pub uy: f64,
    pub rz: f64,
}

/// Full frame analysis result
#[derive(Debug, Clone, Serialize)]
pub struct FrameAnalysis {
    pub nodes: BTreeMap<u32, FrameNodeResult>,
    pub reactions: BTreeMap<u32, SupportReaction>,
    pub element_forces: BTreeMap<u32, EndForces>,
    pub elements: Vec<ElementVerification>,
    pub summary: FrameSummary,
    pub units: UnitSystem,
}
