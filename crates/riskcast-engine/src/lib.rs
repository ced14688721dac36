//! Riskcast analytics engine.
//!
//! Fits simple predictive relationships to historical tabular data and
//! quantifies outcome uncertainty by Monte Carlo simulation. The flow is
//! a single logical pass: descriptive statistics, correlation, and
//! coefficient estimation run over the dataset first; their results feed
//! a user-adjustable `ModelConfig`; the simulation runner then evaluates
//! the configured outcome model across independent trials; risk metrics
//! post-process the outcome distribution.
//!
//! All operations are pure in-memory computation over an immutable
//! dataset; the trial loop is data-parallel.

pub mod model;
pub mod risk;
pub mod simulation;
pub mod stats;

pub use model::coefficients::{
    estimate_coefficients, estimate_coefficients_with, AlignmentStrategy,
};
pub use model::fitting::suggest_distributions;
pub use risk::RiskSummary;
pub use simulation::runner::{run_simulation, SimulationRunner};
pub use stats::correlation::compute_correlation;
pub use stats::compute_statistics;
