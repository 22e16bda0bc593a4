//! Error types for the Pliant engine.
//!
//! All crates return `PliantResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the Pliant engine.
#[derive(Debug, Error)]
pub enum PliantError {
    /// Shape template is malformed (too few vertices, non-finite
    /// coordinates, degenerate area).
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// Body construction or mutation violated a precondition
    /// (mass list length mismatch, bad component index).
    #[error("Invalid body: {0}")]
    InvalidBody(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A simulation invariant was violated (e.g., a residual force
    /// after integration).
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Convenience alias for `Result<T, PliantError>`.
pub type PliantResult<T> = Result<T, PliantError>;
