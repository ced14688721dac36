//! Shared data model for the analytics engine.

mod config;
mod correlation;
mod dataset;
mod distribution;
mod result;
mod statistics;

pub use config::{ModelConfig, ModelType};
pub use correlation::CorrelationMatrix;
pub use dataset::{Dataset, Value};
pub use distribution::DistributionSpec;
pub use result::{ConfidenceInterval, OutcomeStatistics, Percentiles, SimulationResult};
pub use statistics::ColumnStatistics;
