//! Beam checks per AISC 360 Chapters F and G
//!
//! Flexural capacity walks the lateral-torsional buckling zones (plastic,
//! inelastic, elastic LTB) from the unbraced length; shear uses the web
//! area for open-flanged shapes and a gross-area fraction otherwise.
//! Serviceability deflection is reported against three independent span
//! ratios.

use serde::Serialize;
use std::f64::consts::PI;

use crate::elements::{Material, Section, SectionCategory};

use super::{demand_ratio, LimitState, RatioCheck};

/// Resistance factor for flexure (AISC F1)
pub const PHI_FLEXURE: f64 = 0.90;
/// Resistance factor for shear (AISC G1)
pub const PHI_SHEAR: f64 = 0.90;

/// Lateral-torsional buckling zone selected for the flexure check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlexureZone {
    /// Lb ≤ Lp: full plastic moment
    Plastic,
    /// Lp < Lb ≤ Lr: linear interpolation between Mp and Mr
    Inelastic,
    /// Lb > Lr: elastic lateral-torsional buckling
    ElasticLtb,
}

/// Flexure check with the selected LTB zone and limiting lengths
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FlexureCheck {
    /// Mu in kN·m
    pub demand: f64,
    /// φMn in kN·m
    pub capacity: f64,
    /// Plastic moment Mp in kN·m
    pub mp: f64,
    pub ratio: f64,
    pub utilization: f64,
    pub ok: bool,
    pub zone: FlexureZone,
    /// Unbraced length in m
    pub lb: f64,
    /// Plastic limiting length Lp in m
    pub lp: f64,
    /// Inelastic limiting length Lr in m
    pub lr: f64,
}

/// One serviceability deflection limit, in mm
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DeflectionCheck {
    pub limit: f64,
    pub actual: f64,
    pub ok: bool,
}

impl DeflectionCheck {
    fn against(limit: f64, actual: f64) -> Self {
        Self {
            limit,
            actual,
            ok: actual <= limit,
        }
    }
}

/// The three independent deflection limits.
///
/// Reported side by side without a single governing mode; strength
/// checks alone decide the overall verdict.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DeflectionChecks {
    #[serde(rename = "L/180")]
    pub span_180: DeflectionCheck,
    #[serde(rename = "L/240")]
    pub span_240: DeflectionCheck,
    #[serde(rename = "L/360")]
    pub span_360: DeflectionCheck,
}

/// Full beam verification record
#[derive(Debug, Clone, Serialize)]
pub struct BeamVerification {
    pub flexure: FlexureCheck,
    pub shear: RatioCheck,
    pub deflection: DeflectionChecks,
    pub overall_ok: bool,
    pub governing: LimitState,
}

/// Verify a beam under factored moment and shear plus a service
/// deflection.
///
/// * `mu` - factored moment in kN·m
/// * `vu` - factored shear in kN
/// * `span` - member length in m
/// * `delta_max` - peak lateral displacement in m
/// * `lb` - unbraced length in m, defaults to the full span
/// * `cb` - moment gradient factor
pub fn verify_beam(
    mu: f64,
    vu: f64,
    span: f64,
    delta_max: f64,
    section: &Section,
    material: &Material,
    lb: Option<f64>,
    cb: f64,
) -> BeamVerification {
    let fy = material.fy; // MPa
    let e = material.e; // MPa

    // Section properties in mm units
    let zx = section.zx * 1e9;
    let sx = section.sx * 1e9;
    let ry = section.ry * 1e3;

    let mp = fy * zx / 1e6; // kN·m

    let lb_m = lb.unwrap_or(span);
    let lb_mm = lb_m * 1e3;

    // Limiting lengths; the Lr coefficient depends on the shape family
    let lp = 1.76 * ry * (e / fy).sqrt();
    let lr_coeff = match section.category {
        SectionCategory::WideFlange => 3.5,
        _ => 2.5,
    };
    let lr = lr_coeff * ry * (e / fy).sqrt();

    let (mn, zone) = if lb_mm <= lp {
        (mp, FlexureZone::Plastic)
    } else if lb_mm <= lr {
        let mr = 0.7 * fy * sx / 1e6; // kN·m
        let mn = cb * (mp - (mp - mr) * (lb_mm - lp) / (lr - lp));
        (mn.min(mp), FlexureZone::Inelastic)
    } else {
        let fe = cb * PI.powi(2) * e / (lb_mm / ry).powi(2); // MPa
        let mn = fe * sx / 1e6;
        (mn.min(mp), FlexureZone::ElasticLtb)
    };

    let phi_mn = PHI_FLEXURE * mn;
    let ratio_moment = demand_ratio(mu, phi_mn);
    let flexure = FlexureCheck {
        demand: mu,
        capacity: phi_mn,
        mp,
        ratio: ratio_moment,
        utilization: ratio_moment * 100.0,
        ok: ratio_moment <= 1.0,
        zone,
        lb: lb_m,
        lp: lp / 1e3,
        lr: lr / 1e3,
    };

    let aw = shear_area(section); // mm²
    let cv1 = 1.0;
    let vn = 0.6 * fy * aw * cv1 / 1e3; // kN
    let shear = RatioCheck::evaluate(vu, PHI_SHEAR * vn);

    let span_mm = span * 1e3;
    let delta_mm = delta_max.abs() * 1e3;
    let deflection = DeflectionChecks {
        span_180: DeflectionCheck::against(span_mm / 180.0, delta_mm),
        span_240: DeflectionCheck::against(span_mm / 240.0, delta_mm),
        span_360: DeflectionCheck::against(span_mm / 360.0, delta_mm),
    };

    let governing = if flexure.ratio > shear.ratio {
        LimitState::Flexure
    } else {
        LimitState::Shear
    };

    BeamVerification {
        overall_ok: flexure.ok && shear.ok,
        flexure,
        shear,
        deflection,
        governing,
    }
}

/// Shear area in mm²: web area for open-flanged shapes, a gross-area
/// fraction otherwise (AISC G2 approximation)
pub(crate) fn shear_area(section: &Section) -> f64 {
    match section.category {
        SectionCategory::WideFlange => (section.d * 1e3) * (section.tw * 1e3),
        _ => 0.6 * section.a * 1e6,
    }
}

/// Factored shear capacity φVn in kN
pub(crate) fn shear_capacity(section: &Section, material: &Material) -> f64 {
    PHI_SHEAR * 0.6 * material.fy * shear_area(section) / 1e3
}

/// Factored braced moment capacity φMp in kN·m (no LTB reduction)
pub(crate) fn braced_moment_capacity(section: &Section, material: &Material) -> f64 {
    PHI_FLEXURE * material.fy * (section.zx * 1e9) / 1e6
}
