//! Error taxonomy for the analytics engine.
//!
//! Configuration problems abort a run before any simulation work starts;
//! compute problems are scoped to the metric that raised them. Degenerate
//! data (zero variance, no overlapping observations) is never an error —
//! it resolves to documented fallback values at the call site.

mod compute_error;
mod config_error;
pub mod error_code;

pub use compute_error::ComputeError;
pub use config_error::ConfigError;
pub use error_code::ErrorCode;

/// Top-level error returned by `run_simulation`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Compute(#[from] ComputeError),
}

impl ErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Compute(e) => e.error_code(),
        }
    }
}
