//! Bolted connection limit states per AISC 360 Chapter J
//!
//! Four independent checks (shear, tension, combined, bearing) over the
//! fixed bolt property tables, plus block shear on the connected plate.
//! Unknown grade or diameter keys are rejected before any computation.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::{CheckError, CheckResult};
use crate::verification::demand_ratio;

/// Resistance factor for all bolt limit states (AISC J3)
pub const PHI_BOLT: f64 = 0.75;

/// Standard hole oversize relative to the bolt diameter, in mm (AISC J3.3)
pub const STANDARD_HOLE_CLEARANCE: f64 = 2.0;

/// Nominal bolt strengths in MPa (AISC J3.2)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BoltGrade {
    pub id: &'static str,
    /// Nominal tensile stress Fnt
    pub fnt: f64,
    /// Nominal shear stress Fnv
    pub fnv: f64,
}

/// Nominal bolt dimensions: diameter in mm, area in mm²
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BoltSize {
    pub id: &'static str,
    pub diameter: f64,
    pub area: f64,
}

static BOLT_GRADES: Lazy<Vec<BoltGrade>> = Lazy::new(|| {
    vec![
        BoltGrade { id: "A325", fnt: 620.0, fnv: 372.0 },
        BoltGrade { id: "A490", fnt: 780.0, fnv: 457.0 },
        BoltGrade { id: "4.6", fnt: 240.0, fnv: 150.0 },
        BoltGrade { id: "8.8", fnt: 640.0, fnv: 372.0 },
        BoltGrade { id: "10.9", fnt: 830.0, fnv: 500.0 },
    ]
});

static BOLT_SIZES: Lazy<Vec<BoltSize>> = Lazy::new(|| {
    vec![
        BoltSize { id: "M12", diameter: 12.0, area: 113.0 },
        BoltSize { id: "M16", diameter: 16.0, area: 201.0 },
        BoltSize { id: "M20", diameter: 20.0, area: 314.0 },
        BoltSize { id: "M22", diameter: 22.0, area: 380.0 },
        BoltSize { id: "M24", diameter: 24.0, area: 452.0 },
        BoltSize { id: "M27", diameter: 27.0, area: 573.0 },
        BoltSize { id: "M30", diameter: 30.0, area: 707.0 },
        BoltSize { id: "3/4\"", diameter: 19.05, area: 285.0 },
        BoltSize { id: "7/8\"", diameter: 22.23, area: 388.0 },
        BoltSize { id: "1\"", diameter: 25.4, area: 507.0 },
        BoltSize { id: "1-1/8\"", diameter: 28.58, area: 641.0 },
        BoltSize { id: "1-1/4\"", diameter: 31.75, area: 792.0 },
    ]
});

/// Available bolt grades
pub fn bolt_grades() -> &'static [BoltGrade] {
    &BOLT_GRADES
}

/// Available bolt sizes
pub fn bolt_sizes() -> &'static [BoltSize] {
    &BOLT_SIZES
}

/// Look up a bolt grade by id
pub fn bolt_grade(id: &str) -> CheckResult<&'static BoltGrade> {
    BOLT_GRADES
        .iter()
        .find(|g| g.id.eq_ignore_ascii_case(id))
        .ok_or_else(|| CheckError::UnknownBoltGrade(id.to_string()))
}

/// Look up a bolt size by id
pub fn bolt_size(id: &str) -> CheckResult<&'static BoltSize> {
    BOLT_SIZES
        .iter()
        .find(|s| s.id.eq_ignore_ascii_case(id))
        .ok_or_else(|| CheckError::UnknownBoltDiameter(id.to_string()))
}

/// Hole type for the bearing check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum HoleType {
    #[default]
    #[serde(rename = "STD")]
    Standard,
    #[serde(rename = "OVS")]
    Oversized,
    #[serde(rename = "SLOTTED")]
    Slotted,
}

impl HoleType {
    /// Capacity reduction for non-standard holes (AISC J3.10)
    fn reduction(self) -> f64 {
        match self {
            HoleType::Standard => 1.0,
            HoleType::Oversized => 0.8,
            HoleType::Slotted => 0.7,
        }
    }
}

/// Bolt group shear check (AISC J3.6)
#[derive(Debug, Clone, Serialize)]
pub struct BoltShearCheck {
    /// Vu in kN
    pub demand: f64,
    /// φRn in kN
    pub capacity: f64,
    /// Nominal Rn over the whole group in kN
    pub rn: f64,
    pub phi: f64,
    pub ratio: f64,
    pub utilization: f64,
    pub ok: bool,
    /// Rn per bolt per shear plane in kN
    pub rn_per_bolt: f64,
    pub fnv: f64,
    pub area_per_bolt: f64,
    pub bolts: usize,
    pub shear_planes: usize,
    pub grade: String,
    pub diameter: String,
}

/// Verify a bolt group in shear: Rn = Fnv·Ab per bolt per plane
pub fn verify_bolt_shear(
    grade_id: &str,
    diameter_id: &str,
    bolts: usize,
    vu: f64,
    shear_planes: usize,
) -> CheckResult<BoltShearCheck> {
    let grade = bolt_grade(grade_id)?;
    let size = bolt_size(diameter_id)?;

    let rn_per_bolt = grade.fnv * size.area / 1e3; // kN
    let rn = rn_per_bolt * bolts as f64 * shear_planes as f64;
    let capacity = PHI_BOLT * rn;
    let ratio = demand_ratio(vu, capacity);

    Ok(BoltShearCheck {
        demand: vu,
        capacity,
        rn,
        phi: PHI_BOLT,
        ratio,
        utilization: ratio * 100.0,
        ok: ratio <= 1.0,
        rn_per_bolt,
        fnv: grade.fnv,
        area_per_bolt: size.area,
        bolts,
        shear_planes,
        grade: grade.id.to_string(),
        diameter: size.id.to_string(),
    })
}

/// Bolt group tension check (AISC J3.6)
#[derive(Debug, Clone, Serialize)]
pub struct BoltTensionCheck {
    /// Tu in kN
    pub demand: f64,
    /// φRn in kN
    pub capacity: f64,
    pub rn: f64,
    pub phi: f64,
    pub ratio: f64,
    pub utilization: f64,
    pub ok: bool,
    pub rn_per_bolt: f64,
    pub fnt: f64,
    pub area_per_bolt: f64,
    pub bolts: usize,
    pub grade: String,
    pub diameter: String,
}

/// Verify a bolt group in tension: Rn = Fnt·Ab per bolt
pub fn verify_bolt_tension(
    grade_id: &str,
    diameter_id: &str,
    bolts: usize,
    tu: f64,
) -> CheckResult<BoltTensionCheck> {
    let grade = bolt_grade(grade_id)?;
    let size = bolt_size(diameter_id)?;

    let rn_per_bolt = grade.fnt * size.area / 1e3; // kN
    let rn = rn_per_bolt * bolts as f64;
    let capacity = PHI_BOLT * rn;
    let ratio = demand_ratio(tu, capacity);

    Ok(BoltTensionCheck {
        demand: tu,
        capacity,
        rn,
        phi: PHI_BOLT,
        ratio,
        utilization: ratio * 100.0,
        ok: ratio <= 1.0,
        rn_per_bolt,
        fnt: grade.fnt,
        area_per_bolt: size.area,
        bolts,
        grade: grade.id.to_string(),
        diameter: size.id.to_string(),
    })
}

/// Combined shear-plus-tension check (AISC J3.7, elliptical form)
#[derive(Debug, Clone, Serialize)]
pub struct BoltCombinedCheck {
    pub shear: BoltShearCheck,
    pub tension: BoltTensionCheck,
    /// Required shear stress per bolt in MPa
    pub frv: f64,
    /// Required tensile stress per bolt in MPa
    pub frt: f64,
    /// φFnv in MPa
    pub phi_fnv: f64,
    /// φFnt in MPa
    pub phi_fnt: f64,
    /// (frv/φFnv)² + (frt/φFnt)²
    pub interaction: f64,
    pub utilization: f64,
    pub ok: bool,
}

/// Verify a bolt group under simultaneous shear and tension:
/// (frv/φFnv)² + (frt/φFnt)² ≤ 1
pub fn verify_bolt_combined(
    grade_id: &str,
    diameter_id: &str,
    bolts: usize,
    vu: f64,
    tu: f64,
    shear_planes: usize,
) -> CheckResult<BoltCombinedCheck> {
    let grade = bolt_grade(grade_id)?;
    let size = bolt_size(diameter_id)?;

    let shear = verify_bolt_shear(grade_id, diameter_id, bolts, vu, shear_planes)?;
    let tension = verify_bolt_tension(grade_id, diameter_id, bolts, tu)?;

    // Demand forces per bolt, converted to stresses on the nominal area
    let frv_force = vu.abs() / (bolts as f64 * shear_planes as f64); // kN
    let frt_force = tu.abs() / bolts as f64; // kN
    let frv = frv_force * 1e3 / size.area; // MPa
    let frt = frt_force * 1e3 / size.area; // MPa

    let phi_fnv = PHI_BOLT * grade.fnv;
    let phi_fnt = PHI_BOLT * grade.fnt;

    let interaction = (frv / phi_fnv).powi(2) + (frt / phi_fnt).powi(2);

    Ok(BoltCombinedCheck {
        shear,
        tension,
        frv,
        frt,
        phi_fnv,
        phi_fnt,
        interaction,
        utilization: interaction * 100.0,
        ok: interaction <= 1.0,
    })
}

/// Plate bearing check at the bolt holes (AISC J3.10)
#[derive(Debug, Clone, Serialize)]
pub struct BoltBearingCheck {
    /// Vu in kN
    pub demand: f64,
    /// φRn in kN
    pub capacity: f64,
    pub rn: f64,
    pub phi: f64,
    pub ratio: f64,
    pub utilization: f64,
    pub ok: bool,
    /// Governing clear distance in mm
    pub clear_distance: f64,
    /// Hole diameter in mm
    pub hole_diameter: f64,
    /// Rn per bolt in kN
    pub rn_per_bolt: f64,
    pub bolts: usize,
    pub hole_type: HoleType,
}

/// Verify plate bearing at the bolt holes.
///
/// * `plate_thickness` - plate thickness in mm
/// * `fu_plate` - plate ultimate stress in MPa
/// * `edge_distance` - bolt center to plate edge in mm
/// * `spacing` - bolt center-to-center spacing in mm
#[allow(clippy::too_many_arguments)]
pub fn verify_bolt_bearing(
    diameter_id: &str,
    bolts: usize,
    vu: f64,
    plate_thickness: f64,
    fu_plate: f64,
    edge_distance: f64,
    spacing: f64,
    hole_type: HoleType,
) -> CheckResult<BoltBearingCheck> {
    let size = bolt_size(diameter_id)?;

    let d_bolt = size.diameter;
    let d_hole = d_bolt + STANDARD_HOLE_CLEARANCE;

    // Clear distances to the edge and between holes
    let lc_edge = edge_distance - d_hole / 2.0;
    let lc_spacing = spacing - d_hole;
    let lc = if bolts > 1 {
        lc_edge.min(lc_spacing / 2.0)
    } else {
        lc_edge
    };

    // Tear-out vs hole ovalization (J3-6a / J3-6b), per bolt
    let rn_per_bolt = (1.2 * lc * plate_thickness * fu_plate / 1e3)
        .min(2.4 * d_bolt * plate_thickness * fu_plate / 1e3)
        * hole_type.reduction();

    let rn = rn_per_bolt * bolts as f64;
    let capacity = PHI_BOLT * rn;
    let ratio = demand_ratio(vu, capacity);

    Ok(BoltBearingCheck {
        demand: vu,
        capacity,
        rn,
        phi: PHI_BOLT,
        ratio,
        utilization: ratio * 100.0,
        ok: ratio <= 1.0,
        clear_distance: lc,
        hole_diameter: d_hole,
        rn_per_bolt,
        bolts,
        hole_type,
    })
}

/// Failure path governing a block shear check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BlockShearPath {
    /// Shear fracture + tension fracture
    #[serde(rename = "fracture_tension")]
    Fracture,
    /// Shear yielding + tension fracture
    #[serde(rename = "yield_shear")]
    Yield,
}

/// Block shear capacity of the connected plate (AISC J4.3)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BlockShearCheck {
    /// φRn in kN
    pub capacity: f64,
    pub rn: f64,
    pub phi: f64,
    pub governing: BlockShearPath,
    /// Fracture-path capacity in kN
    pub fracture_path: f64,
    /// Yield-path capacity in kN
    pub yield_path: f64,
}

/// Block shear: Rn = min(0.6·Fu·Anv + Ubs·Fu·Ant, 0.6·Fy·Agv + Ubs·Fu·Ant).
///
/// Areas in mm², stresses in MPa.
pub fn verify_block_shear(
    agv: f64,
    anv: f64,
    ant: f64,
    fy: f64,
    fu: f64,
    ubs: f64,
) -> BlockShearCheck {
    let fracture = (0.6 * fu * anv + ubs * fu * ant) / 1e3; // kN
    let yield_path = (0.6 * fy * agv + ubs * fu * ant) / 1e3; // kN

    let (rn, governing) = if fracture < yield_path {
        (fracture, BlockShearPath::Fracture)
    } else {
        (yield_path, BlockShearPath::Yield)
    };

    BlockShearCheck {
        capacity: PHI_BOLT * rn,
        rn,
        phi: PHI_BOLT,
        governing,
        fracture_path: fracture,
        yield_path,
    }
}
