//! Probability distribution specifications for uncertain variables.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Tagged distribution variant with per-variant required parameters.
///
/// The per-variant shape moves "missing parameter" failures from sampling
/// time to construction/validation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DistributionSpec {
    Normal { mean: f64, std: f64 },
    Uniform { min: f64, max: f64 },
    Triangular { min: f64, mode: f64, max: f64 },
}

impl DistributionSpec {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal { .. } => "normal",
            Self::Uniform { .. } => "uniform",
            Self::Triangular { .. } => "triangular",
        }
    }

    /// Validate the per-variant parameter invariants.
    pub fn validate(&self, variable: &str) -> Result<(), ConfigError> {
        let fail = |message: String| ConfigError::InvalidDistribution {
            variable: variable.to_string(),
            message,
        };

        match *self {
            Self::Normal { mean, std } => {
                if !mean.is_finite() || !std.is_finite() {
                    return Err(fail(format!("non-finite parameters mean={mean} std={std}")));
                }
                if std < 0.0 {
                    return Err(fail(format!("std must be non-negative, got {std}")));
                }
            }
            Self::Uniform { min, max } => {
                if !min.is_finite() || !max.is_finite() {
                    return Err(fail(format!("non-finite parameters min={min} max={max}")));
                }
                if min > max {
                    return Err(fail(format!("min {min} exceeds max {max}")));
                }
            }
            Self::Triangular { min, mode, max } => {
                if !min.is_finite() || !mode.is_finite() || !max.is_finite() {
                    return Err(fail(format!(
                        "non-finite parameters min={min} mode={mode} max={max}"
                    )));
                }
                if min > max {
                    return Err(fail(format!("min {min} exceeds max {max}")));
                }
                if mode < min || mode > max {
                    return Err(fail(format!("mode {mode} outside [{min}, {max}]")));
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for DistributionSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Normal { mean, std } => write!(f, "normal(mean={mean}, std={std})"),
            Self::Uniform { min, max } => write!(f, "uniform(min={min}, max={max})"),
            Self::Triangular { min, mode, max } => {
                write!(f, "triangular(min={min}, mode={mode}, max={max})")
            }
        }
    }
}
