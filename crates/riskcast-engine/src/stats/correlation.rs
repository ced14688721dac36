//! Pairwise Pearson correlation over numeric columns.

use tracing::debug;

use riskcast_core::types::{CorrelationMatrix, Dataset};

/// Compute the full correlation matrix over the dataset's numeric
/// columns. Recomputed from scratch on every call; there is no
/// incremental update when the column set changes.
pub fn compute_correlation(dataset: &Dataset) -> CorrelationMatrix {
    let columns = dataset.numeric_columns();
    let n = columns.len();
    let mut values = vec![vec![0.0; n]; n];

    for i in 0..n {
        // Diagonal is exactly 1 regardless of the column's own variance.
        values[i][i] = 1.0;
        for j in (i + 1)..n {
            let r = pearson(dataset, &columns[i], &columns[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    debug!(columns = n, "computed correlation matrix");
    CorrelationMatrix::new(columns, values)
}

/// Pearson correlation over pairwise-complete observations: only rows
/// where both cells are non-null numeric contribute, and a row missing
/// in one pair can still contribute to other pairs.
///
/// Returns 0 when either column has zero variance over the common rows,
/// or when no common rows exist — degenerate, not an error.
fn pearson(dataset: &Dataset, a: &str, b: &str) -> f64 {
    let mut n = 0.0;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_x2 = 0.0;
    let mut sum_y2 = 0.0;
    let mut sum_xy = 0.0;

    for row in 0..dataset.len() {
        let (Some(x), Some(y)) = (
            dataset.cell(row, a).as_number(),
            dataset.cell(row, b).as_number(),
        ) else {
            continue;
        };
        n += 1.0;
        sum_x += x;
        sum_y += y;
        sum_x2 += x * x;
        sum_y2 += y * y;
        sum_xy += x * y;
    }

    if n == 0.0 {
        return 0.0;
    }

    let numerator = sum_xy - sum_x * sum_y / n;
    let denominator = ((sum_x2 - sum_x * sum_x / n) * (sum_y2 - sum_y * sum_y / n)).sqrt();

    if denominator == 0.0 || !denominator.is_finite() {
        debug!(column_a = a, column_b = b, "degenerate pair, correlation 0");
        return 0.0;
    }
    numerator / denominator
}
