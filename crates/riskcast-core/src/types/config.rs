//! Simulation model configuration.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_SIMULATIONS;
use crate::errors::ConfigError;
use crate::types::{Dataset, DistributionSpec};

/// Outcome model shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelType {
    /// `Σ coefficient[v] · input[v]`
    Linear,
    /// `Π input[v] ^ coefficient[v]`
    Multiplicative,
}

impl ModelType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Multiplicative => "multiplicative",
        }
    }
}

impl std::fmt::Display for ModelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Validated configuration consumed read-only by the simulation runner.
///
/// Produced by the external configuration phase after running the
/// pre-simulation analysis helpers; `uncertain_variables` is expected to
/// be a subset of `input_variables`, which excludes the target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub target_variable: String,
    /// Ordered set of input column names.
    pub input_variables: Vec<String>,
    /// Inputs sampled from a distribution each trial instead of held at
    /// their historical baseline.
    #[serde(default)]
    pub uncertain_variables: Vec<String>,
    #[serde(default)]
    pub distributions: FxHashMap<String, DistributionSpec>,
    /// Per-input weights; missing entries default to 1 at evaluation time.
    #[serde(default)]
    pub coefficients: FxHashMap<String, f64>,
    pub model_type: ModelType,
    pub num_simulations: u32,
}

impl ModelConfig {
    /// Check the configuration against a dataset. All checks run before
    /// any simulation work; a failure aborts the entire run.
    pub fn validate(&self, dataset: &Dataset) -> Result<(), ConfigError> {
        if self.num_simulations < 1 {
            return Err(ConfigError::InvalidSimulationCount {
                value: self.num_simulations,
            });
        }
        if self.num_simulations > MAX_SIMULATIONS {
            return Err(ConfigError::SimulationCountExceedsCeiling {
                value: self.num_simulations,
                ceiling: MAX_SIMULATIONS,
            });
        }

        if !dataset.has_column(&self.target_variable) {
            return Err(ConfigError::UnknownColumn {
                column: self.target_variable.clone(),
                role: "target",
            });
        }
        for input in &self.input_variables {
            if !dataset.has_column(input) {
                return Err(ConfigError::UnknownColumn {
                    column: input.clone(),
                    role: "input",
                });
            }
        }

        for uncertain in &self.uncertain_variables {
            let spec = self.distributions.get(uncertain).ok_or_else(|| {
                ConfigError::MissingDistribution {
                    variable: uncertain.clone(),
                }
            })?;
            spec.validate(uncertain)?;
        }

        Ok(())
    }

    /// Effective coefficient for a variable (missing entries are 1).
    pub fn coefficient(&self, variable: &str) -> f64 {
        self.coefficients.get(variable).copied().unwrap_or(1.0)
    }

    pub fn is_uncertain(&self, variable: &str) -> bool {
        self.uncertain_variables.iter().any(|v| v == variable)
    }
}
