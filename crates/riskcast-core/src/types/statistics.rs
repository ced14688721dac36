//! Per-column descriptive statistics.

use serde::{Deserialize, Serialize};

/// Descriptive summary of one numeric column.
///
/// `count` is the total number of usable (non-null numeric) values in the
/// column; the moments and quartiles are computed from at most the first
/// `STATS_SAMPLE_CAP` of them. Columns with no usable values get no
/// `ColumnStatistics` at all rather than a zeroed one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnStatistics {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnStatistics {
    /// Validate the quartile ordering invariant.
    pub fn is_valid(&self) -> bool {
        self.min <= self.q25
            && self.q25 <= self.median
            && self.median <= self.q75
            && self.q75 <= self.max
    }
}
