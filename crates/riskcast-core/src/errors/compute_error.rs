//! Computation errors scoped to a single metric or run.

use super::error_code::{self, ErrorCode};

/// Errors raised while computing a metric over an outcome sequence.
/// A failing metric does not invalidate sibling metrics.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComputeError {
    #[error("metric requires a non-empty outcome sequence")]
    EmptyOutcomes,

    #[error("CVaR tail is empty at confidence level {confidence}")]
    EmptyTail { confidence: f64 },

    #[error("simulation cancelled")]
    Cancelled,
}

impl ErrorCode for ComputeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Cancelled => error_code::CANCELLED,
            _ => error_code::COMPUTE_ERROR,
        }
    }
}
