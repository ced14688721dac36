//! Nearest-rank percentile over sorted samples.

/// Sort values ascending with a total-order fallback for NaN.
pub fn sort_ascending(values: &mut [f64]) {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
}

/// Nearest-rank percentile: `sorted[floor(n · p)]`, clamped to the last
/// index. `p` is a fraction in [0, 1].
///
/// This is deliberately not a continuous interpolation; the index form
/// must match across every consumer (column statistics, outcome
/// summaries, VaR) so their percentiles agree on identical samples.
pub fn nearest_rank(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let idx = (sorted.len() as f64 * p).floor() as usize;
    sorted[idx.min(sorted.len() - 1)]
}
