//! Setup-time error types.
//!
//! Only misconfiguration surfaces as an error. Everything that can go wrong
//! while rendering or animating is recovered locally and reported through a
//! [`DiagnosticSink`](crate::diagnostics::DiagnosticSink).

use std::io;
use thiserror::Error;

/// The grid or its catalog cannot be built as configured.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridConfigError {
    #[error("grid size must be at least 1")]
    ZeroGridSize,

    #[error("grid size {size} exceeds the maximum of {max}")]
    GridTooLarge { size: usize, max: usize },

    #[error("achievement `{id}` placed at ({row}, {col}) outside a {size}x{size} grid")]
    PositionOutOfBounds {
        id: String,
        row: usize,
        col: usize,
        size: usize,
    },

    #[error("achievements `{first}` and `{second}` both placed at ({row}, {col})")]
    DuplicatePosition {
        row: usize,
        col: usize,
        first: String,
        second: String,
    },

    #[error("achievement `{id}` placed more than once")]
    DuplicateId { id: String },

    #[error("`{field}` must be a finite value >= {min}, got {value}")]
    InvalidDimension {
        field: &'static str,
        value: f64,
        min: f64,
    },
}

/// Failure loading a config file from disk.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] io::Error),

    #[error("could not parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(#[from] GridConfigError),
}
