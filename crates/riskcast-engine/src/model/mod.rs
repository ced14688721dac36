//! Model preparation: per-variable coefficient estimation and the
//! distribution-suggestion heuristic.

pub mod coefficients;
pub mod fitting;
