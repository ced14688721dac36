//! Shared constants for the Riskcast analytics engine.

/// Riskcast version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of values used when computing per-column statistics.
///
/// Columns with more usable values than this are summarized from their
/// first `STATS_SAMPLE_CAP` values only. This is a documented performance
/// trade-off inherited from the reference behavior, not a random sample.
pub const STATS_SAMPLE_CAP: usize = 10_000;

/// Default number of Monte Carlo trials.
pub const DEFAULT_SIMULATIONS: u32 = 10_000;

/// Ceiling on `num_simulations`; configurations above this are rejected.
pub const MAX_SIMULATIONS: u32 = 1_000_000;

/// Number of trials per work batch. Also the cancellation-check granularity.
pub const SIMULATION_BATCH_SIZE: usize = 1_024;

/// Default confidence level for VaR / CVaR.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Percentile levels reported in outcome summaries.
pub const RISK_PERCENTILES: [f64; 7] = [0.05, 0.10, 0.25, 0.50, 0.75, 0.90, 0.95];
