//! steel-check example - verify a simply supported floor beam end to end

use anyhow::{Context, Result};
use nalgebra::DVector;

use steel_check::mesh::DOFS_PER_NODE;
use steel_check::prelude::*;
use steel_check::solver::{NodeState, Reaction};

/// Closed-form solver for a simply supported span under vertical nodal
/// loads. Reactions and internal forces come from statics; the deflected
/// shape uses the uniform-load curve for the equivalent total load,
/// which is exact for the uniform loading of this example.
struct PinnedSpanSolver;

impl StaticSolver for PinnedSpanSolver {
    fn reset(&mut self) {}

    fn solve(
        &mut self,
        model: &SolverModel,
        loads: &DVector<f64>,
    ) -> std::result::Result<SolveOutput, SolverError> {
        let n_nodes = model.nodes.len();
        let span = model.nodes[n_nodes - 1].x;

        // Vertical nodal loads (negative = downward)
        let fy: Vec<f64> = (0..n_nodes).map(|i| loads[i * DOFS_PER_NODE + 1]).collect();
        let total: f64 = fy.iter().sum();
        let moment_about_left: f64 = model
            .nodes
            .iter()
            .zip(&fy)
            .map(|(node, f)| f * node.x)
            .sum();

        // Upward-positive support reactions
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
            // Shear is constant between nodal loads; sample mid-element
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

        // Deflected shape for the equivalent uniform load
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

fn main() -> Result<()> {
    env_logger::init();

    println!("=== steel-check example: floor beam ===\n");

    // Service loads in kN/m
    let loads = LoadSet::new()
        .with(LoadType::Dead, 15.0)
        .with(LoadType::Live, 10.0)
        .with(LoadType::Snow, 3.0);
    loads.validate().context("invalid load set")?;

    println!("Load combinations (LRFD):");
    for result in all_combinations(&loads, Method::Lrfd).iter().take(5) {
        println!("  {:<40} {:>7.2} kN/m", result.name, result.value);
    }

    let (critical, wu) = critical_combination(&loads, Method::Lrfd, true);
    println!("\nGoverning combination: {} -> {:.2} kN/m", critical.name, wu);

    let (critical_asd, w_asd) = critical_combination(&loads, Method::Asd, true);
    println!(
        "ASD comparison:        {} -> {:.2} kN/m (LRFD/ASD = {:.2})\n",
        critical_asd.name,
        w_asd,
        wu / w_asd
    );

    // Analyze a 6 m simply supported beam under the governing load
    let mut request = BeamRequest::new(
        6.0,
        SupportKind::Pinned,
        SupportKind::Roller,
        "W16X40",
        "A992",
    );
    request.distributed_loads.push(DistributedLoad::uniform(wu));
    // Top flange braced by the deck every 1.5 m
    request.unbraced_length = Some(1.5);

    let mut solver = PinnedSpanSolver;
    let analysis = analyze_beam(&request, &mut solver).context("beam analysis failed")?;

    println!("Beam {} / {}:", analysis.section_id, analysis.material_id);
    if let Some(left) = analysis.reactions.left {
        println!("  Left reaction:  {:.2} kN", left.ry);
    }
    if let Some(right) = analysis.reactions.right {
        println!("  Right reaction: {:.2} kN", right.ry);
    }
    println!(
        "  Max M = {:.2} kN·m, max V = {:.2} kN, max deflection = {:.2} mm",
        analysis.max_values.moment,
        analysis.max_values.shear,
        analysis.max_values.deflection * 1000.0
    );

    let verification = &analysis.verification;
    println!(
        "  Flexure: {:.1}% of phiMn = {:.1} kN·m ({:?} zone)",
        verification.flexure.utilization, verification.flexure.capacity, verification.flexure.zone
    );
    println!(
        "  Shear:   {:.1}% of phiVn = {:.1} kN",
        verification.shear.utilization, verification.shear.capacity
    );
    println!(
        "  Governing mode: {} -> {}\n",
        verification.governing,
        if verification.overall_ok { "PASS" } else { "FAIL" }
    );

    // Column check: slender pinned-pinned W21X44
    let section = section_by_id("W21X44").context("section missing")?;
    let material = material_by_id("A572_GR50").context("material missing")?;
    let column = verify_column(500.0, 40.0, 4.0, 1.0, section, material);
    println!(
        "Column W21X44, KL/r = {:.1} ({:?} buckling): interaction {:.3} [{}]",
        column.slenderness.kl_r,
        column.compression.regime,
        column.interaction.value,
        if column.overall_ok { "PASS" } else { "FAIL" }
    );

    // Connection check: 4 x M20 A325 bolts in single shear
    let bolts = verify_bolt_shear("A325", "M20", 4, 300.0, 1)?;
    println!(
        "Bolt group: phiRn = {:.1} kN, ratio = {:.3} [{}]\n",
        bolts.capacity,
        bolts.ratio,
        if bolts.ok { "PASS" } else { "FAIL" }
    );

    // Section suggestions for the same moment demand
    println!("Suggested sections for Mu = {:.1} kN·m:", analysis.max_values.moment);
    let suggestions = suggest_beam_sections(
        analysis.max_values.moment,
        Some(analysis.max_values.shear),
        6.0,
        "A992",
        &SuggestionOptions::default(),
    )?;
    for suggestion in &suggestions {
        println!(
            "  {:<10} {:>5.1} kg/m  phiMn = {:>6.1} kN·m  utilization = {:>5.1}%",
            suggestion.section_id,
            suggestion.weight,
            suggestion.phi_mn,
            suggestion.utilization_flexure * 100.0
        );
    }

    println!("\n=== Analysis complete ===");
    Ok(())
}
