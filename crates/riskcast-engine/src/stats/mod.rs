//! Descriptive statistics over dataset columns.

pub mod correlation;
pub mod percentile;

use rustc_hash::FxHashMap;
use tracing::debug;

use riskcast_core::constants::STATS_SAMPLE_CAP;
use riskcast_core::types::{ColumnStatistics, Dataset};

use self::percentile::{nearest_rank, sort_ascending};

/// Compute descriptive statistics for every column with at least one
/// usable (non-null numeric) value. Columns with none are omitted from
/// the result map entirely.
pub fn compute_statistics(dataset: &Dataset) -> FxHashMap<String, ColumnStatistics> {
    let mut stats = FxHashMap::default();

    for column in dataset.columns() {
        let values = dataset.numeric_values(column);
        if let Some(summary) = column_statistics(&values) {
            stats.insert(column.clone(), summary);
        }
    }

    debug!(
        columns = dataset.columns().len(),
        summarized = stats.len(),
        rows = dataset.len(),
        "computed column statistics"
    );
    stats
}

/// Summarize one column's usable values, or `None` when there are none.
///
/// `count` reports the full usable-value count, but the moments and
/// quartiles come from at most the first `STATS_SAMPLE_CAP` values — the
/// cap is a head slice, not a random sample, kept for parity with the
/// reference behavior.
pub fn column_statistics(values: &[f64]) -> Option<ColumnStatistics> {
    if values.is_empty() {
        return None;
    }

    let sample = &values[..values.len().min(STATS_SAMPLE_CAP)];
    let n = sample.len() as f64;

    let mean = sample.iter().sum::<f64>() / n;
    let variance = sample.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    let mut min = sample[0];
    let mut max = sample[0];
    for &v in &sample[1..] {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }

    let mut sorted = sample.to_vec();
    sort_ascending(&mut sorted);

    Some(ColumnStatistics {
        count: values.len(),
        mean,
        std: variance.sqrt(),
        min,
        q25: nearest_rank(&sorted, 0.25),
        median: nearest_rank(&sorted, 0.50),
        q75: nearest_rank(&sorted, 0.75),
        max,
    })
}
