//! Simulation output types.

use serde::{Deserialize, Serialize};

use crate::types::ModelConfig;

/// Fixed percentile summary of an outcome distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Percentiles {
    pub p5: f64,
    pub p10: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p90: f64,
    pub p95: f64,
}

impl Percentiles {
    /// Validate the monotonicity invariant.
    pub fn is_valid(&self) -> bool {
        self.p5 <= self.p25 && self.p25 <= self.p50 && self.p50 <= self.p75 && self.p75 <= self.p95
    }
}

/// Lower/upper bounds of a central interval of the outcome distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

/// Descriptive and percentile summary of the simulated outcomes.
///
/// Variance is population variance (`Σ(x − mean)² / n`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutcomeStatistics {
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub percentiles: Percentiles,
    /// Central 90% interval (p5..p95).
    pub ci90: ConfidenceInterval,
    /// Interquartile interval (p25..p75).
    pub ci50: ConfidenceInterval,
}

/// Result of one simulation run, owned by the requesting collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Outcomes in trial order (not sorted); length equals
    /// `config.num_simulations` exactly.
    pub outcomes: Vec<f64>,
    pub statistics: OutcomeStatistics,
    /// Echo of the configuration the run used.
    pub config: ModelConfig,
}
