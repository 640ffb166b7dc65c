//! Request orchestration
//!
//! Each analysis runs the same linear pipeline over request-scoped
//! inputs: fail-fast catalog lookups, mesh and load mapping, one scoped
//! solver invocation, then verification. Solver non-convergence aborts
//! the request with no partial results.

mod beam;
mod column;
mod frame;

pub use beam::{analyze_beam, BeamRequest};
pub use column::{analyze_column, ColumnRequest};
pub use frame::{analyze_frame, FrameLoad, FrameRequest};

/// Minimum number of mesh segments for single-member analyses
pub(crate) const MIN_SEGMENTS: usize = 10;

/// MPa to kN/m² for the solver exchange types
pub(crate) const MPA_TO_KN_M2: f64 = 1e3;
