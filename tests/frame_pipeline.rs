//! End-to-end frame pipeline: request resolution, load assembly,
//! per-element verification and rollup

mod common;

use std::collections::BTreeMap;

use approx::assert_relative_eq;
use common::CannedSolver;
use steel_check::mesh::DOFS_PER_NODE;
use steel_check::prelude::*;
use steel_check::solver::Reaction;

fn portal_frame() -> FrameRequest {
    FrameRequest {
        nodes: vec![
            Node::new(1, 0.0, 0.0).with_support(SupportKind::Fixed),
            Node::new(2, 6.0, 0.0).with_support(SupportKind::Fixed),
            Node::new(3, 0.0, 3.0),
            Node::new(4, 6.0, 3.0),
        ],
        elements: vec![
            Element::new(1, 1, 3, "W10X33", ElementCategory::Column),
            Element::new(2, 2, 4, "W10X33", ElementCategory::Column),
            Element::new(3, 3, 4, "W16X40", ElementCategory::Beam),
        ],
        loads: vec![
            FrameLoad::Nodal { node_id: 3, fx: 15.0, fy: 0.0, mz: 0.0 },
            FrameLoad::Distributed { element_id: 3, w: 12.0 },
        ],
        material_id: "A992".to_string(),
        units: UnitSystem::default(),
    }
}

fn portal_end_forces() -> BTreeMap<u32, EndForces> {
    [
        (1, EndForces { n: -120.0, v_i: 8.0, m_i: 18.0, v_j: 8.0, m_j: 24.0 }),
        (2, EndForces { n: -140.0, v_i: 7.0, m_i: 16.0, v_j: 7.0, m_j: 21.0 }),
        (3, EndForces { n: 4.0, v_i: 36.0, m_i: 54.0, v_j: 36.0, m_j: 48.0 }),
    ]
    .into_iter()
    .collect()
}

#[test]
fn frame_pipeline_verifies_and_rolls_up() {
    let request = portal_frame();
    let mut solver = CannedSolver::new(portal_end_forces());
    solver
        .reactions
        .insert(0, Reaction { rx: -7.0, ry: 106.0, mz: 12.0 });
    solver
        .reactions
        .insert(1, Reaction { rx: -8.0, ry: 110.0, mz: 13.0 });

    let analysis = analyze_frame(&request, &mut solver).unwrap();

    // Only supported nodes report reactions
    assert_eq!(analysis.reactions.len(), 2);
    assert!(analysis.reactions.contains_key(&1));
    assert!(analysis.reactions.contains_key(&2));

    assert_eq!(analysis.elements.len(), 3);
    let beam = analysis
        .elements
        .iter()
        .find(|e| e.element_id == 3)
        .unwrap();
    assert_eq!(beam.category, ElementCategory::Beam);
    assert_relative_eq!(beam.length, 6.0, max_relative = 1e-12);
    assert_relative_eq!(beam.forces.m, 54.0, max_relative = 1e-12);

    let column = analysis
        .elements
        .iter()
        .find(|e| e.element_id == 1)
        .unwrap();
    assert_eq!(column.governing, LimitState::Interaction);
    assert_relative_eq!(column.forces.n, 120.0, max_relative = 1e-12);

    // Everything passes at these demand levels
    let summary = &analysis.summary;
    assert!(summary.all_ok);
    assert_eq!(summary.passed, 3);
    assert_eq!(summary.failed, 0);
    let max_ratio = analysis
        .elements
        .iter()
        .map(|e| e.governing_ratio)
        .fold(0.0, f64::max);
    assert_relative_eq!(summary.max_utilization, max_ratio * 100.0, max_relative = 1e-12);
}

#[test]
fn load_assembly_maps_nodal_and_distributed_loads() {
    let request = portal_frame();
    let mut solver = CannedSolver::new(portal_end_forces());
    analyze_frame(&request, &mut solver).unwrap();

    let loads = solver.last_loads.expect("solver saw the load vector");
    // Node 3 (index 2): lateral 15 kN plus half of the 12 kN/m beam load
    assert_relative_eq!(loads[2 * DOFS_PER_NODE], 15.0, max_relative = 1e-12);
    assert_relative_eq!(loads[2 * DOFS_PER_NODE + 1], -36.0, max_relative = 1e-12);
    // Node 4 (index 3): the other half
    assert_relative_eq!(loads[3 * DOFS_PER_NODE + 1], -36.0, max_relative = 1e-12);
    // Supported base nodes carry no applied load
    assert_relative_eq!(loads[0], 0.0);
    assert_relative_eq!(loads[1], 0.0);
}

#[test]
fn overloaded_element_fails_the_rollup() {
    let request = portal_frame();
    let mut end_forces = portal_end_forces();
    end_forces.insert(3, EndForces { n: 0.0, v_i: 90.0, m_i: 600.0, v_j: 90.0, m_j: 480.0 });

    let mut solver = CannedSolver::new(end_forces);
    let analysis = analyze_frame(&request, &mut solver).unwrap();

    assert!(!analysis.summary.all_ok);
    assert_eq!(analysis.summary.passed, 2);
    assert_eq!(analysis.summary.failed, 1);
    assert!(analysis.summary.max_utilization > 100.0);
}

#[test]
fn request_resolution_fails_fast() {
    // Duplicate node id
    let mut request = portal_frame();
    request.nodes.push(Node::new(1, 9.0, 9.0));
    let result = analyze_frame(&request, &mut CannedSolver::new(BTreeMap::new()));
    assert!(matches!(result, Err(CheckError::InvalidInput(_))));

    // Element referencing a missing node
    let mut request = portal_frame();
    request.elements.push(Element::new(9, 3, 99, "W16X40", ElementCategory::Beam));
    let result = analyze_frame(&request, &mut CannedSolver::new(BTreeMap::new()));
    assert!(matches!(result, Err(CheckError::NodeNotFound(99))));

    // Distributed load on a missing element
    let mut request = portal_frame();
    request.loads.push(FrameLoad::Distributed { element_id: 77, w: 5.0 });
    let result = analyze_frame(&request, &mut CannedSolver::new(BTreeMap::new()));
    assert!(matches!(result, Err(CheckError::ElementNotFound(77))));

    // Unknown material rejects before the solver runs
    let mut request = portal_frame();
    request.material_id = "S355".to_string();
    let mut solver = CannedSolver::new(BTreeMap::new());
    let result = analyze_frame(&request, &mut solver);
    assert!(matches!(result, Err(CheckError::MaterialNotFound(_))));
    assert!(solver.last_loads.is_none());
}

#[test]
fn output_units_convert_forces_and_reactions() {
    let mut request = portal_frame();
    request.units = UnitSystem::TonfM;

    let mut solver = CannedSolver::new(portal_end_forces());
    solver
        .reactions
        .insert(0, Reaction { rx: 0.0, ry: 98.0665, mz: 9.80665 });

    let analysis = analyze_frame(&request, &mut solver).unwrap();

    let base = analysis.reactions[&1];
    assert_relative_eq!(base.ry, 10.0, max_relative = 1e-9);
    assert_relative_eq!(base.mz, 1.0, max_relative = 1e-9);

    let beam_forces = analysis.element_forces[&3];
    assert_relative_eq!(beam_forces.m_i, 54.0 / 9.80665, max_relative = 1e-9);

    // Verification ratios are unit-system independent
    let internal = analyze_frame(&portal_frame(), &mut CannedSolver::new(portal_end_forces()))
        .unwrap();
    assert_relative_eq!(
        analysis.summary.max_utilization,
        internal.summary.max_utilization,
        max_relative = 1e-12
    );
}
