//! Load combinations per ASCE 7-16
//!
//! Fixed LRFD and ASD catalogs applied to unfactored load sets. The
//! catalogs are frozen process-wide constants; every operation here is
//! pure and leaves the input load set untouched.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::CheckError;

use super::{LoadSet, LoadType};

/// Design method selecting a combination catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// Load and Resistance Factor Design (strength level)
    Lrfd,
    /// Allowable Stress Design (service level)
    Asd,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Lrfd => write!(f, "LRFD"),
            Method::Asd => write!(f, "ASD"),
        }
    }
}

impl FromStr for Method {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("LRFD") {
            Ok(Method::Lrfd)
        } else if s.eq_ignore_ascii_case("ASD") {
            Ok(Method::Asd)
        } else {
            Err(CheckError::UnknownMethod(s.to_string()))
        }
    }
}

/// One entry of a combination catalog
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Combination {
    /// Display name, e.g. "1.2D + 1.6L + 0.5(Lr or S)"
    pub name: &'static str,
    /// Short description
    pub description: &'static str,
    /// Load factors; tags absent from this table contribute nothing
    pub factors: &'static [(LoadType, f64)],
}

impl Combination {
    /// Factor for a load type, 0 when the type is not in the combination
    pub fn factor(&self, load_type: LoadType) -> f64 {
        self.factors
            .iter()
            .find(|(t, _)| *t == load_type)
            .map(|(_, f)| *f)
            .unwrap_or(0.0)
    }
}

use LoadType::{Dead, Earthquake, Live, RoofLive, Snow, Wind};

/// LRFD (strength) combinations, ASCE 7-16 §2.3
pub static LRFD_COMBINATIONS: [Combination; 7] = [
    Combination {
        name: "1.4D",
        description: "Dead load only",
        factors: &[(Dead, 1.4)],
    },
    Combination {
        name: "1.2D + 1.6L + 0.5(Lr or S)",
        description: "Dead + live + roof/snow",
        factors: &[(Dead, 1.2), (Live, 1.6), (RoofLive, 0.5), (Snow, 0.5)],
    },
    Combination {
        name: "1.2D + 1.6(Lr or S) + (L or 0.5W)",
        description: "Dead + roof/snow + live/wind",
        factors: &[(Dead, 1.2), (RoofLive, 1.6), (Snow, 1.6), (Live, 1.0), (Wind, 0.5)],
    },
    Combination {
        name: "1.2D + 1.0W + L + 0.5(Lr or S)",
        description: "Dead + wind + live + roof/snow",
        factors: &[(Dead, 1.2), (Wind, 1.0), (Live, 1.0), (RoofLive, 0.5), (Snow, 0.5)],
    },
    Combination {
        name: "1.2D + 1.0E + L + 0.2S",
        description: "Dead + earthquake + live + snow",
        factors: &[(Dead, 1.2), (Earthquake, 1.0), (Live, 1.0), (Snow, 0.2)],
    },
    Combination {
        name: "0.9D + 1.0W",
        description: "Minimum dead + wind (uplift)",
        factors: &[(Dead, 0.9), (Wind, 1.0)],
    },
    Combination {
        name: "0.9D + 1.0E",
        description: "Minimum dead + earthquake (uplift)",
        factors: &[(Dead, 0.9), (Earthquake, 1.0)],
    },
];

/// ASD (service) combinations, ASCE 7-16 §2.4
pub static ASD_COMBINATIONS: [Combination; 9] = [
    Combination {
        name: "D",
        description: "Dead load only",
        factors: &[(Dead, 1.0)],
    },
    Combination {
        name: "D + L",
        description: "Dead + live",
        factors: &[(Dead, 1.0), (Live, 1.0)],
    },
    Combination {
        name: "D + (Lr or S)",
        description: "Dead + roof/snow",
        factors: &[(Dead, 1.0), (RoofLive, 1.0), (Snow, 1.0)],
    },
    Combination {
        name: "D + 0.75L + 0.75(Lr or S)",
        description: "Dead + live + roof/snow",
        factors: &[(Dead, 1.0), (Live, 0.75), (RoofLive, 0.75), (Snow, 0.75)],
    },
    Combination {
        name: "D + (0.6W or 0.7E)",
        description: "Dead + wind or earthquake",
        factors: &[(Dead, 1.0), (Wind, 0.6), (Earthquake, 0.7)],
    },
    Combination {
        name: "D + 0.75L + 0.75(0.6W) + 0.75(Lr or S)",
        description: "Dead + live + wind + roof/snow",
        factors: &[(Dead, 1.0), (Live, 0.75), (Wind, 0.45), (RoofLive, 0.75), (Snow, 0.75)],
    },
    Combination {
        name: "D + 0.75L + 0.75(0.7E) + 0.75S",
        description: "Dead + live + earthquake + snow",
        factors: &[(Dead, 1.0), (Live, 0.75), (Earthquake, 0.525), (Snow, 0.75)],
    },
    Combination {
        name: "0.6D + 0.6W",
        description: "Minimum dead + wind (uplift)",
        factors: &[(Dead, 0.6), (Wind, 0.6)],
    },
    Combination {
        name: "0.6D + 0.7E",
        description: "Minimum dead + earthquake (uplift)",
        factors: &[(Dead, 0.6), (Earthquake, 0.7)],
    },
];

/// Fixed, ordered catalog for a design method
pub fn combinations(method: Method) -> &'static [Combination] {
    match method {
        Method::Lrfd => &LRFD_COMBINATIONS,
        Method::Asd => &ASD_COMBINATIONS,
    }
}

/// Total factored load for one combination: Σ factor · magnitude.
///
/// Load types absent from either side contribute zero.
pub fn apply_combination(loads: &LoadSet, combination: &Combination) -> f64 {
    combination
        .factors
        .iter()
        .map(|&(load_type, factor)| factor * loads.get(load_type))
        .sum()
}

/// Scan the full catalog for the combination producing the largest
/// (or, with `maximize = false`, the smallest) factored load.
///
/// Ties break to catalog order.
pub fn critical_combination(
    loads: &LoadSet,
    method: Method,
    maximize: bool,
) -> (&'static Combination, f64) {
    let catalog = combinations(method);

    let mut critical = &catalog[0];
    let mut critical_value = if maximize {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };

    for combo in catalog {
        let value = apply_combination(loads, combo);
        if (maximize && value > critical_value) || (!maximize && value < critical_value) {
            critical_value = value;
            critical = combo;
        }
    }

    (critical, critical_value)
}

/// Evaluation of one combination against a load set
#[derive(Debug, Clone, Serialize)]
pub struct ComboEvaluation {
    pub name: String,
    pub description: String,
    /// Total factored load
    pub value: f64,
    /// Factors that actually contributed (nonzero-load entries only)
    pub factors_used: BTreeMap<LoadType, f64>,
}

/// Evaluate every combination of the catalog, sorted by value descending
pub fn all_combinations(loads: &LoadSet, method: Method) -> Vec<ComboEvaluation> {
    let mut results: Vec<ComboEvaluation> = combinations(method)
        .iter()
        .map(|combo| ComboEvaluation {
            name: combo.name.to_string(),
            description: combo.description.to_string(),
            value: apply_combination(loads, combo),
            factors_used: combo
                .factors
                .iter()
                .filter(|(load_type, _)| loads.has(*load_type))
                .map(|&(load_type, factor)| (load_type, factor))
                .collect(),
        })
        .collect();

    results.sort_by(|a, b| b.value.total_cmp(&a.value));
    results
}

/// Per-type factored magnitudes for one combination
pub fn factored_loads(loads: &LoadSet, combination: &Combination) -> BTreeMap<LoadType, f64> {
    loads
        .iter()
        .map(|(load_type, magnitude)| (load_type, magnitude * combination.factor(load_type)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn example_loads() -> LoadSet {
        LoadSet::new()
            .with(LoadType::Dead, 15.0)
            .with(LoadType::Live, 10.0)
            .with(LoadType::Snow, 3.0)
    }

    #[test]
    fn catalogs_have_fixed_sizes() {
        assert_eq!(combinations(Method::Lrfd).len(), 7);
        assert_eq!(combinations(Method::Asd).len(), 9);
    }

    #[test]
    fn method_parse_is_case_insensitive() {
        assert_eq!("lrfd".parse::<Method>().unwrap(), Method::Lrfd);
        assert_eq!("ASD".parse::<Method>().unwrap(), Method::Asd);
        assert!(matches!(
            "LSD".parse::<Method>(),
            Err(CheckError::UnknownMethod(_))
        ));
    }

    #[test]
    fn apply_combination_sums_factored_magnitudes() {
        let loads = LoadSet::new()
            .with(LoadType::Dead, 10.0)
            .with(LoadType::Live, 5.0)
            .with(LoadType::Snow, 2.0);
        // 1.2*10 + 1.6*5 + 0.5*2
        assert_relative_eq!(
            apply_combination(&loads, &LRFD_COMBINATIONS[1]),
            21.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn lrfd_critical_for_gravity_loads() {
        let (combo, value) = critical_combination(&example_loads(), Method::Lrfd, true);
        assert_eq!(combo.name, "1.2D + 1.6L + 0.5(Lr or S)");
        assert_relative_eq!(value, 35.5, max_relative = 1e-12);
    }

    #[test]
    fn critical_bounds_every_catalog_entry() {
        let loads = example_loads();
        for method in [Method::Lrfd, Method::Asd] {
            let (_, max_value) = critical_combination(&loads, method, true);
            let (_, min_value) = critical_combination(&loads, method, false);
            for combo in combinations(method) {
                let value = apply_combination(&loads, combo);
                assert!(max_value >= value);
                assert!(min_value <= value);
            }
        }
    }

    #[test]
    fn apply_is_linear_in_the_load_set() {
        let a = example_loads();
        let scaled = LoadSet::new()
            .with(LoadType::Dead, 15.0 * 2.5)
            .with(LoadType::Live, 10.0 * 2.5)
            .with(LoadType::Snow, 3.0 * 2.5);
        for combo in combinations(Method::Lrfd) {
            assert_relative_eq!(
                apply_combination(&scaled, combo),
                2.5 * apply_combination(&a, combo),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn all_combinations_sorted_descending() {
        let results = all_combinations(&example_loads(), Method::Lrfd);
        assert_eq!(results.len(), 7);
        for pair in results.windows(2) {
            assert!(pair[0].value >= pair[1].value);
        }
        // Snow is present, roof live is not: factors_used keeps only
        // entries with a nonzero load
        let top = &results[0];
        assert!(top.factors_used.contains_key(&LoadType::Snow));
        assert!(!top.factors_used.contains_key(&LoadType::RoofLive));
    }

    #[test]
    fn factored_loads_per_type() {
        let loads = LoadSet::new()
            .with(LoadType::Dead, 10.0)
            .with(LoadType::Live, 5.0);
        let factored = factored_loads(&loads, &LRFD_COMBINATIONS[1]);
        assert_relative_eq!(factored[&LoadType::Dead], 12.0, max_relative = 1e-12);
        assert_relative_eq!(factored[&LoadType::Live], 8.0, max_relative = 1e-12);
    }
}
