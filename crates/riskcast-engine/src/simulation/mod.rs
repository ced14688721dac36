//! Monte Carlo simulation: per-distribution sampling and the batched,
//! data-parallel trial loop.

pub mod runner;
pub mod sampler;
