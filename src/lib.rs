//! steel-check - demand-vs-capacity verification for 2D steel structures
//!
//! This library reduces raw service loads into a governing factored
//! design case, maps span loading onto a discretized line mesh, and
//! evaluates member compliance against AISC-360-style rules:
//! - Load combination catalogs (LRFD / ASD) with critical-case search
//! - Beam flexure (LTB zones), shear and serviceability deflection
//! - Column buckling (E3 curve) and H1 interaction
//! - Bolted connection limit states (shear, tension, combined, bearing,
//!   block shear)
//! - Frame-level rollup over per-element verifications
//!
//! The equilibrium solver is an external collaborator behind the
//! [`solver::StaticSolver`] trait; every request invokes it at most once
//! through a scoped [`solver::SolverSession`].
//!
//! ## Example
//! ```rust
//! use steel_check::prelude::*;
//!
//! let loads = LoadSet::new()
//!     .with(LoadType::Dead, 15.0)
//!     .with(LoadType::Live, 10.0)
//!     .with(LoadType::Snow, 3.0);
//!
//! let (combo, wu) = critical_combination(&loads, Method::Lrfd, true);
//! assert_eq!(combo.name, "1.2D + 1.6L + 0.5(Lr or S)");
//! assert!((wu - 35.5).abs() < 1e-9);
//!
//! let section = section_by_id("W16X40").unwrap();
//! let material = material_by_id("A992").unwrap();
//! // Top flange braced every 1.5 m
//! let check = verify_beam(180.0, 90.0, 6.0, 0.012, section, material, Some(1.5), 1.0);
//! assert!(check.overall_ok);
//! ```

pub mod analysis;
pub mod connections;
pub mod design;
pub mod elements;
pub mod error;
pub mod loads;
pub mod mesh;
pub mod results;
pub mod solver;
pub mod units;
pub mod verification;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{
        analyze_beam, analyze_column, analyze_frame, BeamRequest, ColumnRequest, FrameLoad,
        FrameRequest,
    };
    pub use crate::connections::{
        verify_block_shear, verify_bolt_bearing, verify_bolt_combined, verify_bolt_shear,
        verify_bolt_tension, HoleType,
    };
    pub use crate::design::{compare_sections, suggest_beam_sections, SuggestionOptions};
    pub use crate::elements::{
        material_by_id, section_by_id, Element, ElementCategory, Material, Node, Section,
        SectionCategory, SupportKind,
    };
    pub use crate::error::{CheckError, CheckResult};
    pub use crate::loads::{
        all_combinations, apply_combination, critical_combination, factored_loads, Combination,
        DistributedLoad, LoadSet, LoadType, Method, PointLoad,
    };
    pub use crate::mesh::{LineMesh, LoadMap};
    pub use crate::results::{BeamAnalysis, ColumnAnalysis, FrameAnalysis};
    pub use crate::solver::{
        EndForces, SolveOutput, SolverError, SolverModel, SolverSession, StaticSolver,
    };
    pub use crate::units::{Quantity, UnitSystem};
    pub use crate::verification::{
        verify_beam, verify_column, verify_frame_elements, BeamVerification, ColumnVerification,
        FlexureZone, LimitState, RatioCheck,
    };
}
