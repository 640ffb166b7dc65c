//! Frame-level verification: per-element dispatch and rollup

use serde::Serialize;
use std::collections::BTreeMap;

use crate::elements::{section_by_id, Element, ElementCategory, Material, Node, SupportKind};
use crate::error::{CheckError, CheckResult};
use crate::solver::EndForces;

use super::beam::{braced_moment_capacity, shear_capacity};
use super::column::verify_column;
use super::{ColumnVerification, LimitState, RatioCheck};

/// Length of an element from its endpoint node coordinates
pub fn element_length(element: &Element, nodes: &[Node]) -> CheckResult<f64> {
    let node_i = nodes
        .iter()
        .find(|n| n.id == element.node_i)
        .ok_or(CheckError::NodeNotFound(element.node_i))?;
    let node_j = nodes
        .iter()
        .find(|n| n.id == element.node_j)
        .ok_or(CheckError::NodeNotFound(element.node_j))?;
    Ok(node_i.distance_to(node_j))
}

/// Effective length factor for a frame element from its endpoint
/// restraints.
///
/// A coarse decision table, not a sway-frame stability analysis; every
/// unlisted pairing falls back to the conservative K = 1.0.
pub fn frame_k_factor(support_i: Option<SupportKind>, support_j: Option<SupportKind>) -> f64 {
    match (support_i, support_j) {
        (Some(SupportKind::Fixed), Some(SupportKind::Fixed)) => 0.65,
        (Some(SupportKind::Pinned), Some(SupportKind::Pinned)) => 1.0,
        (Some(SupportKind::Fixed), Some(SupportKind::Pinned))
        | (Some(SupportKind::Pinned), Some(SupportKind::Fixed)) => 0.8,
        _ => 1.0,
    }
}

/// Absolute demand envelope of one element
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ForceSummary {
    /// Axial force magnitude in kN
    pub n: f64,
    /// Governing shear magnitude in kN
    pub v: f64,
    /// Governing moment magnitude in kN·m
    pub m: f64,
}

impl ForceSummary {
    fn from_end_forces(forces: &EndForces) -> Self {
        Self {
            n: forces.n.abs(),
            v: forces.v_i.abs().max(forces.v_j.abs()),
            m: forces.m_i.abs().max(forces.m_j.abs()),
        }
    }
}

/// Category-specific checks of one element
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ElementChecks {
    /// Beam path: braced flexure + shear
    Beam {
        flexure: RatioCheck,
        shear: RatioCheck,
    },
    /// Column path (columns and braces): compression + flexure +
    /// interaction
    Column(ColumnVerification),
}

impl ElementChecks {
    /// Overall verdict of this element
    pub fn overall_ok(&self) -> bool {
        match self {
            ElementChecks::Beam { flexure, shear } => flexure.ok && shear.ok,
            ElementChecks::Column(column) => column.overall_ok,
        }
    }

    /// Governing demand/capacity ratio
    pub fn governing_ratio(&self) -> f64 {
        match self {
            ElementChecks::Beam { flexure, shear } => flexure.ratio.max(shear.ratio),
            ElementChecks::Column(column) => column.interaction.value,
        }
    }

    /// Governing limit state
    pub fn governing(&self) -> LimitState {
        match self {
            ElementChecks::Beam { flexure, shear } => {
                if flexure.ratio > shear.ratio {
                    LimitState::Flexure
                } else {
                    LimitState::Shear
                }
            }
            ElementChecks::Column(_) => LimitState::Interaction,
        }
    }
}

/// Verification record of one frame element
#[derive(Debug, Clone, Serialize)]
pub struct ElementVerification {
    pub element_id: u32,
    pub category: ElementCategory,
    pub section_id: String,
    /// Element length in m
    pub length: f64,
    pub forces: ForceSummary,
    pub checks: ElementChecks,
    pub overall_ok: bool,
    pub governing: LimitState,
    pub governing_ratio: f64,
}

/// Frame-level rollup over all element verifications
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FrameSummary {
    /// AND over all elements
    pub all_ok: bool,
    /// MAX over the elements' governing ratios, as a percentage
    pub max_utilization: f64,
    pub passed: usize,
    pub failed: usize,
}

/// Aggregate element verifications into a frame summary
pub fn summarize_frame(results: &[ElementVerification]) -> FrameSummary {
    let passed = results.iter().filter(|r| r.overall_ok).count();
    let max_ratio = results
        .iter()
        .map(|r| r.governing_ratio)
        .fold(0.0, f64::max);
    FrameSummary {
        all_ok: results.iter().all(|r| r.overall_ok),
        max_utilization: max_ratio * 100.0,
        passed,
        failed: results.len() - passed,
    }
}

/// Verify every element of a frame against its end-force demands.
///
/// Elements with no reported end forces are checked against a zero
/// demand envelope.
pub fn verify_frame_elements(
    elements: &[Element],
    end_forces: &BTreeMap<u32, EndForces>,
    nodes: &[Node],
    material: &Material,
) -> CheckResult<Vec<ElementVerification>> {
    let mut results = Vec::with_capacity(elements.len());

    for element in elements {
        let section = section_by_id(&element.section_id)
            .ok_or_else(|| CheckError::SectionNotFound(element.section_id.clone()))?;

        let forces = end_forces.get(&element.id).copied().unwrap_or_default();
        let summary = ForceSummary::from_end_forces(&forces);
        let length = element_length(element, nodes)?;

        let checks = match element.category {
            ElementCategory::Beam => ElementChecks::Beam {
                flexure: RatioCheck::evaluate(summary.m, braced_moment_capacity(section, material)),
                shear: RatioCheck::evaluate(summary.v, shear_capacity(section, material)),
            },
            ElementCategory::Column | ElementCategory::Brace => {
                let node_i = nodes.iter().find(|n| n.id == element.node_i);
                let node_j = nodes.iter().find(|n| n.id == element.node_j);
                let k = frame_k_factor(
                    node_i.and_then(|n| n.support),
                    node_j.and_then(|n| n.support),
                );
                ElementChecks::Column(verify_column(
                    summary.n, summary.m, length, k, section, material,
                ))
            }
        };

        results.push(ElementVerification {
            element_id: element.id,
            category: element.category,
            section_id: element.section_id.clone(),
            length,
            forces: summary,
            overall_ok: checks.overall_ok(),
            governing: checks.governing(),
            governing_ratio: checks.governing_ratio(),
            checks,
        });
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::material_by_id;
    use approx::assert_relative_eq;

    fn portal_nodes() -> Vec<Node> {
        vec![
            Node::new(1, 0.0, 0.0).with_support(SupportKind::Fixed),
            Node::new(2, 6.0, 0.0).with_support(SupportKind::Pinned),
            Node::new(3, 0.0, 3.0),
            Node::new(4, 6.0, 3.0),
        ]
    }

    fn portal_elements() -> Vec<Element> {
        vec![
            Element::new(1, 1, 3, "W10X33", ElementCategory::Column),
            Element::new(2, 2, 4, "W10X33", ElementCategory::Column),
            Element::new(3, 3, 4, "W16X40", ElementCategory::Beam),
        ]
    }

    fn end_forces(entries: &[(u32, EndForces)]) -> BTreeMap<u32, EndForces> {
        entries.iter().copied().collect()
    }

    #[test]
    fn k_factor_decision_table() {
        use SupportKind::*;
        assert_eq!(frame_k_factor(Some(Fixed), Some(Fixed)), 0.65);
        assert_eq!(frame_k_factor(Some(Pinned), Some(Pinned)), 1.0);
        assert_eq!(frame_k_factor(Some(Fixed), Some(Pinned)), 0.8);
        assert_eq!(frame_k_factor(Some(Pinned), Some(Fixed)), 0.8);
        assert_eq!(frame_k_factor(Some(Fixed), None), 1.0);
        assert_eq!(frame_k_factor(None, None), 1.0);
        assert_eq!(frame_k_factor(Some(Roller), Some(Fixed)), 1.0);
    }

    #[test]
    fn element_length_from_node_coordinates() {
        let nodes = portal_nodes();
        let elements = portal_elements();
        assert_relative_eq!(element_length(&elements[0], &nodes).unwrap(), 3.0);
        assert_relative_eq!(element_length(&elements[2], &nodes).unwrap(), 6.0);
    }

    #[test]
    fn element_length_rejects_unknown_nodes() {
        let nodes = portal_nodes();
        let orphan = Element::new(9, 1, 99, "W10X33", ElementCategory::Beam);
        assert!(matches!(
            element_length(&orphan, &nodes),
            Err(CheckError::NodeNotFound(99))
        ));
    }

    #[test]
    fn beams_and_columns_dispatch_to_their_check_paths() {
        let nodes = portal_nodes();
        let elements = portal_elements();
        let material = material_by_id("A992").unwrap();
        let forces = end_forces(&[
            (1, EndForces { n: -300.0, v_i: 10.0, m_i: 25.0, v_j: 12.0, m_j: 30.0 }),
            (2, EndForces { n: -300.0, v_i: 10.0, m_i: 25.0, v_j: 12.0, m_j: 30.0 }),
            (3, EndForces { n: 0.0, v_i: 60.0, m_i: 90.0, v_j: 60.0, m_j: 80.0 }),
        ]);

        let results = verify_frame_elements(&elements, &forces, &nodes, material).unwrap();
        assert_eq!(results.len(), 3);
        assert!(matches!(results[0].checks, ElementChecks::Column(_)));
        assert!(matches!(results[2].checks, ElementChecks::Beam { .. }));
        assert_eq!(results[2].governing, LimitState::Flexure);
        // Demand envelope takes the larger end value
        assert_relative_eq!(results[2].forces.m, 90.0);
        assert_relative_eq!(results[0].forces.v, 12.0);
    }

    #[test]
    fn missing_end_forces_check_against_zero_demand() {
        let nodes = portal_nodes();
        let elements = portal_elements();
        let material = material_by_id("A992").unwrap();

        let results =
            verify_frame_elements(&elements, &BTreeMap::new(), &nodes, material).unwrap();
        assert!(results.iter().all(|r| r.overall_ok));
    }

    #[test]
    fn summary_rolls_up_and_max_and_counts() {
        let nodes = portal_nodes();
        let elements = portal_elements();
        let material = material_by_id("A992").unwrap();
        // Overload the beam so it fails while the columns pass
        let forces = end_forces(&[
            (1, EndForces { n: -100.0, v_i: 5.0, m_i: 10.0, v_j: 5.0, m_j: 10.0 }),
            (2, EndForces { n: -100.0, v_i: 5.0, m_i: 10.0, v_j: 5.0, m_j: 10.0 }),
            (3, EndForces { n: 0.0, v_i: 80.0, m_i: 600.0, v_j: 80.0, m_j: 500.0 }),
        ]);

        let results = verify_frame_elements(&elements, &forces, &nodes, material).unwrap();
        let summary = summarize_frame(&results);

        assert!(!summary.all_ok);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 1);
        let beam_ratio = results[2].governing_ratio;
        assert_relative_eq!(summary.max_utilization, beam_ratio * 100.0, max_relative = 1e-12);
        assert!(summary.max_utilization > 100.0);
    }
}
