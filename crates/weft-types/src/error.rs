//! Error types for the weft engine.
//!
//! All crates return `WeftResult<T>` from fallible operations.
//! Stepping itself never fails; errors surface at construction time.

use thiserror::Error;

/// Unified error type for the weft engine.
#[derive(Debug, Error)]
pub enum WeftError {
    /// Configuration value is invalid (grid size, parameter range, scenario).
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, WeftError>`.
pub type WeftResult<T> = Result<T, WeftError>;
