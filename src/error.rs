//! Error types for the verification engine

use thiserror::Error;

/// Main error type for verification and analysis operations
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Design method '{0}' not recognized. Use 'LRFD' or 'ASD'")]
    UnknownMethod(String),

    #[error("Material '{0}' not found in catalog")]
    MaterialNotFound(String),

    #[error("Section '{0}' not found in catalog")]
    SectionNotFound(String),

    #[error("Bolt grade '{0}' not recognized")]
    UnknownBoltGrade(String),

    #[error("Bolt diameter '{0}' not recognized")]
    UnknownBoltDiameter(String),

    #[error("Node {0} not found in request")]
    NodeNotFound(u32),

    #[error("Element {0} not found in request")]
    ElementNotFound(u32),

    #[error("Unit system '{0}' not supported")]
    UnknownUnitSystem(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Static analysis did not converge")]
    NonConvergence,

    #[error("Solver failed: {0}")]
    SolverFailed(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for verification and analysis operations
pub type CheckResult<T> = Result<T, CheckError>;
