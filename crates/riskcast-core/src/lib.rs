//! Core types, errors, and shared infrastructure for the Riskcast
//! quantitative analytics engine.
//!
//! The engine itself (statistics, correlation, coefficient estimation,
//! sampling, simulation, risk metrics) lives in `riskcast-engine`; this
//! crate holds everything both the engine and its external collaborators
//! agree on: the data model, the configuration surface, the error
//! taxonomy, cancellation, and tracing setup.

pub mod cancel;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use cancel::CancellationToken;
pub use errors::{ComputeError, ConfigError, EngineError, ErrorCode};
pub use types::{
    ColumnStatistics, ConfidenceInterval, CorrelationMatrix, Dataset, DistributionSpec,
    ModelConfig, ModelType, OutcomeStatistics, Percentiles, SimulationResult, Value,
};
