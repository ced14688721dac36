//! Configuration validation errors.

use super::error_code::{self, ErrorCode};

/// Errors detected while validating a `ModelConfig` against a dataset.
/// All of these abort the run before any simulation work begins.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("num_simulations must be at least 1, got {value}")]
    InvalidSimulationCount { value: u32 },

    #[error("num_simulations {value} exceeds the ceiling of {ceiling}")]
    SimulationCountExceedsCeiling { value: u32, ceiling: u32 },

    #[error("{role} column not found in dataset: {column}")]
    UnknownColumn { column: String, role: &'static str },

    #[error("uncertain variable {variable} has no configured distribution")]
    MissingDistribution { variable: String },

    #[error("invalid distribution for {variable}: {message}")]
    InvalidDistribution { variable: String, message: String },
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
