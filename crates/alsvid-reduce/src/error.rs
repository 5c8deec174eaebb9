//! Error types for the reduction crate.

use alsvid_ir::IrError;
use thiserror::Error;

/// Errors that can occur during reduction.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReduceError {
    /// An IR-level error surfaced while mutating the graph.
    #[error("IR error: {0}")]
    Ir(#[from] IrError),

    /// An internal engine invariant was violated.
    ///
    /// This indicates a bug in the engine, not bad input: valid inputs are
    /// rejected at import time and reduction is total on valid graphs.
    #[error("Engine invariant violated: {0}")]
    InvariantViolation(String),
}

/// Result type for reduction operations.
pub type ReduceResult<T> = Result<T, ReduceError>;
