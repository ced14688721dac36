//! Naive per-variable coefficient estimation.
//!
//! Each input gets an independent univariate least-squares slope against
//! the target (`covariance(input, target) / variance(input)`). This is a
//! heuristic starting point, not a joint multivariate fit; consumers may
//! override any coefficient manually.

use rustc_hash::FxHashMap;
use tracing::debug;

use riskcast_core::types::Dataset;

/// How input/target observations are matched before the slope is
/// accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignmentStrategy {
    /// Reference behavior: deviations are taken against means of the
    /// independently filtered series, and the accumulation loop walks raw
    /// rows but stops at `min(row_count, filtered_target_len)`. Rows
    /// where only one side is null can desynchronize that bound from the
    /// rows actually accumulated; kept as-is for parity.
    #[default]
    Positional,
    /// Pairwise-complete observations, matching the correlation engine:
    /// means and sums come from exactly the rows where both sides are
    /// numeric.
    PairwiseComplete,
}

/// Estimate one coefficient per input variable using the default
/// (reference-parity) alignment.
pub fn estimate_coefficients(
    dataset: &Dataset,
    target: &str,
    inputs: &[String],
) -> FxHashMap<String, f64> {
    estimate_coefficients_with(dataset, target, inputs, AlignmentStrategy::default())
}

/// Estimate one coefficient per input variable with an explicit
/// alignment strategy.
///
/// Zero input variance or an empty observation set defaults the
/// coefficient to 1 — degenerate data, not an error.
pub fn estimate_coefficients_with(
    dataset: &Dataset,
    target: &str,
    inputs: &[String],
    strategy: AlignmentStrategy,
) -> FxHashMap<String, f64> {
    let mut coefficients = FxHashMap::default();

    for input in inputs {
        let slope = match strategy {
            AlignmentStrategy::Positional => positional_slope(dataset, target, input),
            AlignmentStrategy::PairwiseComplete => pairwise_slope(dataset, target, input),
        };
        coefficients.insert(input.clone(), slope);
    }

    debug!(
        target_variable = target,
        inputs = inputs.len(),
        ?strategy,
        "estimated model coefficients"
    );
    coefficients
}

fn positional_slope(dataset: &Dataset, target: &str, input: &str) -> f64 {
    let target_values = dataset.numeric_values(target);
    let input_values = dataset.numeric_values(input);
    if input_values.is_empty() {
        return 1.0;
    }

    let target_mean = mean(&target_values);
    let input_mean = mean(&input_values);

    // Loop bound is the filtered target length, not the row count the
    // accumulated cells actually come from.
    let bound = dataset.len().min(target_values.len());
    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for row in 0..bound {
        let (Some(x), Some(t)) = (
            dataset.cell(row, input).as_number(),
            dataset.cell(row, target).as_number(),
        ) else {
            continue;
        };
        numerator += (x - input_mean) * (t - target_mean);
        denominator += (x - input_mean).powi(2);
    }

    if denominator != 0.0 {
        numerator / denominator
    } else {
        1.0
    }
}

fn pairwise_slope(dataset: &Dataset, target: &str, input: &str) -> f64 {
    let mut pairs = Vec::new();
    for row in 0..dataset.len() {
        if let (Some(x), Some(t)) = (
            dataset.cell(row, input).as_number(),
            dataset.cell(row, target).as_number(),
        ) {
            pairs.push((x, t));
        }
    }
    if pairs.is_empty() {
        return 1.0;
    }

    let n = pairs.len() as f64;
    let input_mean = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let target_mean = pairs.iter().map(|(_, t)| t).sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (x, t) in pairs {
        numerator += (x - input_mean) * (t - target_mean);
        denominator += (x - input_mean).powi(2);
    }

    if denominator != 0.0 {
        numerator / denominator
    } else {
        1.0
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use riskcast_core::types::Value;
    use rustc_hash::FxHashMap as Map;

    fn dataset(columns: &[&str], rows: Vec<Vec<Value>>) -> Dataset {
        let cols: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
        let rows = rows
            .into_iter()
            .map(|cells| cols.iter().cloned().zip(cells).collect::<Map<String, Value>>())
            .collect();
        Dataset::new(cols, rows)
    }

    #[test]
    fn test_exact_slope_on_clean_data() {
        // y = 3x + 2, no nulls: both strategies agree on the slope.
        let ds = dataset(
            &["x", "y"],
            (1..=6)
                .map(|i| {
                    vec![
                        Value::Number(i as f64),
                        Value::Number(3.0 * i as f64 + 2.0),
                    ]
                })
                .collect(),
        );
        let inputs = vec!["x".to_string()];

        for strategy in [AlignmentStrategy::Positional, AlignmentStrategy::PairwiseComplete] {
            let coef = estimate_coefficients_with(&ds, "y", &inputs, strategy);
            assert!(
                (coef["x"] - 3.0).abs() < 1e-12,
                "strategy {strategy:?} slope {}",
                coef["x"]
            );
        }
    }

    #[test]
    fn test_zero_variance_defaults_to_one() {
        let ds = dataset(
            &["x", "y"],
            (1..=4)
                .map(|i| vec![Value::Number(5.0), Value::Number(i as f64)])
                .collect(),
        );
        let coef = estimate_coefficients(&ds, "y", &["x".to_string()]);
        assert_eq!(coef["x"], 1.0);
    }

    #[test]
    fn test_all_null_input_defaults_to_one() {
        let ds = dataset(
            &["x", "y"],
            (1..=4)
                .map(|i| vec![Value::Null, Value::Number(i as f64)])
                .collect(),
        );
        let coef = estimate_coefficients(&ds, "y", &["x".to_string()]);
        assert_eq!(coef["x"], 1.0);
    }

    #[test]
    fn test_scattered_nulls_expose_alignment_discrepancy() {
        // y = 2x on the rows where both are present, but nulls are
        // scattered so the positional loop bound (filtered target length
        // = 4) cuts off the final row while the pairwise strategy keeps
        // every complete pair. The input mean also differs: positional
        // uses the full filtered input series, pairwise only the common
        // rows.
        let ds = dataset(
            &["x", "y"],
            vec![
                vec![Value::Number(1.0), Value::Number(2.0)],
                vec![Value::Number(10.0), Value::Null],
                vec![Value::Number(2.0), Value::Number(4.0)],
                vec![Value::Null, Value::Number(9.0)],
                vec![Value::Number(3.0), Value::Number(6.0)],
                vec![Value::Number(40.0), Value::Number(80.0)],
            ],
        );
        let inputs = vec!["x".to_string()];

        let positional = estimate_coefficients_with(
            &ds,
            "y",
            &inputs,
            AlignmentStrategy::Positional,
        )["x"];
        let pairwise = estimate_coefficients_with(
            &ds,
            "y",
            &inputs,
            AlignmentStrategy::PairwiseComplete,
        )["x"];

        assert!((pairwise - 2.0).abs() < 1e-12, "pairwise slope {pairwise}");
        assert!(
            (positional - pairwise).abs() > 1e-6,
            "expected discrepancy, both were {positional}"
        );
    }
}
