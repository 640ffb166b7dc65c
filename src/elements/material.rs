//! Structural steel grades
//!
//! Read-only catalog of ASTM (and NCh equivalent) steels, looked up by
//! case-normalized id. Stresses are in MPa, density in kg/m³.

use once_cell::sync::Lazy;
use serde::Serialize;

/// Material properties for steel design checks
#[derive(Debug, Clone, Serialize)]
pub struct Material {
    /// Catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Yield stress in MPa
    pub fy: f64,
    /// Ultimate stress in MPa
    pub fu: f64,
    /// Elastic modulus in MPa
    pub e: f64,
    /// Shear modulus in MPa
    pub g: f64,
    /// Poisson ratio
    pub nu: f64,
    /// Density in kg/m³
    pub rho: f64,
    /// Thermal expansion coefficient in 1/°C
    pub alpha: f64,
}

impl Material {
    /// Structural steel grade with the standard carbon-steel constants
    fn grade(id: &str, name: &str, description: &str, fy: f64, fu: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            fy,
            fu,
            e: 200_000.0,
            g: 77_000.0,
            nu: 0.3,
            rho: 7850.0,
            alpha: 1.2e-5,
        }
    }
}

static STEEL_GRADES: Lazy<Vec<Material>> = Lazy::new(|| {
    vec![
        Material::grade("A36", "ASTM A36", "Carbon structural steel", 250.0, 400.0),
        Material::grade(
            "A572_GR50",
            "ASTM A572 Grade 50",
            "High-strength low-alloy steel",
            345.0,
            450.0,
        ),
        Material::grade("A992", "ASTM A992", "Steel for W shapes", 345.0, 450.0),
        Material::grade(
            "A500_GR_B",
            "ASTM A500 Grade B",
            "Steel for structural tubing",
            290.0,
            400.0,
        ),
        Material::grade(
            "A500_GR_C",
            "ASTM A500 Grade C",
            "High-strength steel for structural tubing",
            317.0,
            427.0,
        ),
        Material::grade(
            "A42_27ES",
            "A42-27ES (NCh 203)",
            "Chilean structural steel (A36 equivalent)",
            270.0,
            420.0,
        ),
        Material::grade(
            "A52_34ES",
            "A52-34ES (NCh 203)",
            "Chilean high-strength structural steel",
            340.0,
            520.0,
        ),
    ]
});

/// All materials in the catalog
pub fn materials() -> &'static [Material] {
    &STEEL_GRADES
}

/// Look up a material by case-normalized id
pub fn material_by_id(id: &str) -> Option<&'static Material> {
    STEEL_GRADES.iter().find(|m| m.id.eq_ignore_ascii_case(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_normalized() {
        let mat = material_by_id("a572_gr50").expect("grade should exist");
        assert_eq!(mat.fy, 345.0);
        assert_eq!(mat.fu, 450.0);
    }

    #[test]
    fn unknown_id_returns_none() {
        assert!(material_by_id("S355").is_none());
    }

    #[test]
    fn all_grades_share_elastic_constants() {
        for mat in materials() {
            assert_eq!(mat.e, 200_000.0);
            assert!(mat.fu > mat.fy);
        }
    }
}
