//! Error types for the cardinality-qubo library.

use thiserror::Error;

/// Errors that can occur while compiling a constraint into a QUBO.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// A constraint or network parameter is out of its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A constructor produced a raw switch list the simplification driver
    /// could not schedule (a right set not covered by the current frontier,
    /// or a left set colliding with it). Always a constructor bug.
    #[error("ill-formed network: {0}")]
    IllFormedNetwork(String),

    /// The simplification driver proved the boundary attributes cannot be
    /// satisfied by any 0/1 assignment.
    #[error("infeasible constraint: {0}")]
    Infeasible(String),

    /// The requested combination of constraint kind and network topology
    /// has no implementation.
    #[error("not implemented: {0}")]
    NotImplemented(String),
}

/// Result type alias for cardinality-qubo operations.
pub type Result<T> = std::result::Result<T, CompileError>;
