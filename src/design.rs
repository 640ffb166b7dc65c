//! Section suggestion and comparison
//!
//! Screens the section catalog for candidates that carry a required
//! moment (and optionally shear), scored by how close they land to a
//! target utilization band and by unit weight.

use serde::Serialize;

use crate::elements::{material_by_id, sections, Section, SectionCategory};
use crate::error::{CheckError, CheckResult};
use crate::verification::{verify_beam, BeamVerification, LimitState, PHI_FLEXURE, PHI_SHEAR};

/// Screening options for [`suggest_beam_sections`]
#[derive(Debug, Clone)]
pub struct SuggestionOptions {
    /// Number of suggestions to return
    pub count: usize,
    /// Restrict to one shape family
    pub category: Option<SectionCategory>,
    /// Target utilization band (min, max)
    pub target_utilization: (f64, f64),
    /// Unbraced length in m; defaults to the span
    pub unbraced_length: Option<f64>,
}

impl Default for SuggestionOptions {
    fn default() -> Self {
        Self {
            count: 5,
            category: Some(SectionCategory::WideFlange),
            target_utilization: (0.7, 0.95),
            unbraced_length: None,
        }
    }
}

/// One screened candidate section
#[derive(Debug, Clone, Serialize)]
pub struct SectionSuggestion {
    pub section_id: String,
    pub category: SectionCategory,
    /// Unit weight in kg/m
    pub weight: f64,
    /// Screening estimate of φMn in kN·m
    pub phi_mn: f64,
    /// Plastic moment in kN·m
    pub mp: f64,
    pub utilization_flexure: f64,
    pub utilization_shear: f64,
    /// Composite score: utilization proximity and weight
    pub efficiency_score: f64,
    /// Whether flexure utilization lands inside the target band
    pub meets_criteria: bool,
}

/// Suggest catalog sections for a required moment (and optional shear).
///
/// Candidates that cannot carry the demand are dropped; survivors are
/// sorted by efficiency score, best first.
pub fn suggest_beam_sections(
    mu_required: f64,
    vu_required: Option<f64>,
    span: f64,
    material_id: &str,
    options: &SuggestionOptions,
) -> CheckResult<Vec<SectionSuggestion>> {
    let material = material_by_id(material_id)
        .ok_or_else(|| CheckError::MaterialNotFound(material_id.to_string()))?;
    let fy = material.fy;
    let e = material.e;

    let lb = options.unbraced_length.unwrap_or(span);
    let lb_mm = lb * 1e3;
    let vu = vu_required.unwrap_or(0.0);

    let mut candidates = Vec::new();

    for section in sections() {
        if let Some(category) = options.category {
            if section.category != category {
                continue;
            }
        }

        let zx = section.zx * 1e9; // mm³
        let mp = fy * zx / 1e6; // kN·m
        let ry = section.ry * 1e3; // mm
        let lp = 1.76 * ry * (e / fy).sqrt(); // mm

        // Quick screening capacity: plastic when braced tightly enough,
        // otherwise a conservative reduction in lieu of the full LTB walk
        let phi_mn = if lb_mm <= lp {
            PHI_FLEXURE * mp
        } else {
            let reduction = (1.0 - 0.3 * (lb_mm - lp) / lp).max(0.6);
            PHI_FLEXURE * mp * reduction
        };

        if phi_mn < mu_required {
            continue;
        }
        let utilization_flexure = if phi_mn > 0.0 { mu_required / phi_mn } else { continue };

        let utilization_shear = if vu > 0.0 {
            let aw = match section.category {
                SectionCategory::WideFlange => (section.d * 1e3) * (section.tw * 1e3),
                _ => 0.6 * section.a * 1e6,
            };
            let phi_vn = PHI_SHEAR * 0.6 * fy * aw / 1e3;
            if phi_vn < vu {
                continue;
            }
            vu / phi_vn
        } else {
            0.0
        };

        // Prefer utilizations near the middle of the target band, then
        // lighter shapes
        let target_mid = (options.target_utilization.0 + options.target_utilization.1) / 2.0;
        let utilization_score = 1.0 - (utilization_flexure - target_mid).abs();
        let weight_score = 1.0 - (section.weight / 150.0).min(1.0);
        let efficiency_score = 0.7 * utilization_score + 0.3 * weight_score;

        candidates.push(SectionSuggestion {
            section_id: section.id.clone(),
            category: section.category,
            weight: section.weight,
            phi_mn,
            mp,
            utilization_flexure,
            utilization_shear,
            efficiency_score,
            meets_criteria: (options.target_utilization.0..=options.target_utilization.1)
                .contains(&utilization_flexure),
        });
    }

    candidates.sort_by(|a, b| b.efficiency_score.total_cmp(&a.efficiency_score));
    candidates.truncate(options.count);
    Ok(candidates)
}

/// One entry of a side-by-side section comparison
#[derive(Debug, Clone, Serialize)]
pub struct SectionComparison {
    pub section_id: String,
    pub category: SectionCategory,
    pub weight: f64,
    /// Overall depth in m
    pub d: f64,
    pub verification: BeamVerification,
    pub overall_ok: bool,
    pub governing: LimitState,
}

/// Run the full beam verification for several sections under the same
/// demands, sorted by how close flexure lands to an economical 0.85.
///
/// Deflection is not assessed here; that needs the solved model.
pub fn compare_sections(
    section_ids: &[&str],
    mu: f64,
    vu: f64,
    span: f64,
    material_id: &str,
) -> CheckResult<Vec<SectionComparison>> {
    let material = material_by_id(material_id)
        .ok_or_else(|| CheckError::MaterialNotFound(material_id.to_string()))?;

    let mut comparisons = Vec::with_capacity(section_ids.len());
    for &section_id in section_ids {
        let section: &Section = crate::elements::section_by_id(section_id)
            .ok_or_else(|| CheckError::SectionNotFound(section_id.to_string()))?;

        let verification = verify_beam(mu, vu, span, 0.0, section, material, None, 1.0);
        comparisons.push(SectionComparison {
            section_id: section.id.clone(),
            category: section.category,
            weight: section.weight,
            d: section.d,
            overall_ok: verification.overall_ok,
            governing: verification.governing,
            verification,
        });
    }

    comparisons.sort_by(|a, b| {
        let da = (a.verification.flexure.ratio - 0.85).abs();
        let db = (b.verification.flexure.ratio - 0.85).abs();
        da.total_cmp(&db)
    });
    Ok(comparisons)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestions_all_carry_the_demand() {
        let options = SuggestionOptions::default();
        let suggestions =
            suggest_beam_sections(250.0, Some(120.0), 6.0, "A992", &options).unwrap();
        assert!(!suggestions.is_empty());
        for suggestion in &suggestions {
            assert!(suggestion.phi_mn >= 250.0);
            assert!(suggestion.utilization_flexure <= 1.0);
            assert_eq!(suggestion.category, SectionCategory::WideFlange);
        }
    }

    #[test]
    fn suggestions_are_sorted_by_efficiency() {
        let options = SuggestionOptions::default();
        let suggestions = suggest_beam_sections(150.0, None, 5.0, "A992", &options).unwrap();
        for pair in suggestions.windows(2) {
            assert!(pair[0].efficiency_score >= pair[1].efficiency_score);
        }
    }

    #[test]
    fn oversized_demand_yields_no_suggestions() {
        let options = SuggestionOptions::default();
        let suggestions = suggest_beam_sections(1e6, None, 6.0, "A992", &options).unwrap();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn unknown_material_fails_fast() {
        let options = SuggestionOptions::default();
        assert!(matches!(
            suggest_beam_sections(100.0, None, 6.0, "S355", &options),
            Err(CheckError::MaterialNotFound(_))
        ));
    }

    #[test]
    fn comparison_sorts_toward_economical_flexure() {
        let comparisons =
            compare_sections(&["W12X26", "W16X40", "W21X44"], 180.0, 60.0, 6.0, "A992").unwrap();
        assert_eq!(comparisons.len(), 3);
        for pair in comparisons.windows(2) {
            let da = (pair[0].verification.flexure.ratio - 0.85).abs();
            let db = (pair[1].verification.flexure.ratio - 0.85).abs();
            assert!(da <= db);
        }
    }

    #[test]
    fn comparison_rejects_unknown_sections() {
        assert!(matches!(
            compare_sections(&["W99X1"], 100.0, 10.0, 6.0, "A992"),
            Err(CheckError::SectionNotFound(_))
        ));
    }
}
