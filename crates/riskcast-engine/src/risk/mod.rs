//! Risk metrics over a simulated outcome distribution.
//!
//! Metrics are computed independently: a failing one (CVaR with an empty
//! tail) is reported per-metric and does not invalidate the rest.

use serde::{Deserialize, Serialize};
use tracing::warn;

use riskcast_core::constants::DEFAULT_CONFIDENCE_LEVEL;
use riskcast_core::errors::ComputeError;
use riskcast_core::types::{ConfidenceInterval, OutcomeStatistics, Percentiles};

use crate::stats::percentile::{nearest_rank, sort_ascending};

/// Descriptive and percentile summary of an outcome sequence.
///
/// Variance is population variance (`Σ(x − mean)² / n`); percentiles use
/// the shared nearest-rank method.
pub fn summarize(outcomes: &[f64]) -> Result<OutcomeStatistics, ComputeError> {
    if outcomes.is_empty() {
        return Err(ComputeError::EmptyOutcomes);
    }

    let n = outcomes.len() as f64;
    let mean = outcomes.iter().sum::<f64>() / n;
    let variance = outcomes.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    let mut sorted = outcomes.to_vec();
    sort_ascending(&mut sorted);

    let percentiles = Percentiles {
        p5: nearest_rank(&sorted, 0.05),
        p10: nearest_rank(&sorted, 0.10),
        p25: nearest_rank(&sorted, 0.25),
        p50: nearest_rank(&sorted, 0.50),
        p75: nearest_rank(&sorted, 0.75),
        p90: nearest_rank(&sorted, 0.90),
        p95: nearest_rank(&sorted, 0.95),
    };

    Ok(OutcomeStatistics {
        mean,
        median: percentiles.p50,
        std: variance.sqrt(),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        percentiles,
        ci90: ConfidenceInterval { lower: percentiles.p5, upper: percentiles.p95 },
        ci50: ConfidenceInterval { lower: percentiles.p25, upper: percentiles.p75 },
    })
}

/// Value-at-Risk at confidence `confidence`: the ascending-sorted outcome
/// at rank `floor(n · (1 − confidence))` — the loss threshold exceeded
/// with probability `confidence`.
pub fn value_at_risk(outcomes: &[f64], confidence: f64) -> Result<f64, ComputeError> {
    if outcomes.is_empty() {
        return Err(ComputeError::EmptyOutcomes);
    }
    let mut sorted = outcomes.to_vec();
    sort_ascending(&mut sorted);

    let idx = (sorted.len() as f64 * (1.0 - confidence)).floor() as usize;
    Ok(sorted[idx.min(sorted.len() - 1)])
}

/// Conditional Value-at-Risk: the mean of sorted outcomes strictly below
/// the VaR cutoff index. Errors when the cutoff index is 0 (empty tail).
pub fn conditional_value_at_risk(outcomes: &[f64], confidence: f64) -> Result<f64, ComputeError> {
    if outcomes.is_empty() {
        return Err(ComputeError::EmptyOutcomes);
    }
    let mut sorted = outcomes.to_vec();
    sort_ascending(&mut sorted);

    let cutoff = (sorted.len() as f64 * (1.0 - confidence)).floor() as usize;
    if cutoff == 0 {
        return Err(ComputeError::EmptyTail { confidence });
    }

    let tail = &sorted[..cutoff];
    Ok(tail.iter().sum::<f64>() / tail.len() as f64)
}

/// Percentage of outcomes at or above `threshold`.
pub fn exceedance_probability(outcomes: &[f64], threshold: f64) -> Result<f64, ComputeError> {
    if outcomes.is_empty() {
        return Err(ComputeError::EmptyOutcomes);
    }
    let exceeding = outcomes.iter().filter(|&&o| o >= threshold).count();
    Ok(exceeding as f64 / outcomes.len() as f64 * 100.0)
}

/// Aggregated downside-risk summary at one confidence level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskSummary {
    pub confidence_level: f64,
    pub statistics: OutcomeStatistics,
    pub value_at_risk: f64,
    /// `None` when the tail below the VaR cutoff is empty at this
    /// confidence level and sample size.
    pub conditional_value_at_risk: Option<f64>,
}

impl RiskSummary {
    /// Summarize at the default 0.95 confidence level.
    pub fn from_outcomes(outcomes: &[f64]) -> Result<Self, ComputeError> {
        Self::with_confidence(outcomes, DEFAULT_CONFIDENCE_LEVEL)
    }

    /// Summarize at an explicit confidence level. The CVaR slot absorbs
    /// its own empty-tail failure; every other metric is unaffected.
    pub fn with_confidence(outcomes: &[f64], confidence: f64) -> Result<Self, ComputeError> {
        let statistics = summarize(outcomes)?;
        let value_at_risk = value_at_risk(outcomes, confidence)?;
        let conditional_value_at_risk = match conditional_value_at_risk(outcomes, confidence) {
            Ok(cvar) => Some(cvar),
            Err(e) => {
                warn!(confidence, error = %e, "CVaR unavailable for this outcome set");
                None
            }
        };

        Ok(Self {
            confidence_level: confidence,
            statistics,
            value_at_risk,
            conditional_value_at_risk,
        })
    }
}
