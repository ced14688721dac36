//! Distribution-suggestion heuristic for uncertain variables.
//!
//! A deliberately simple screen, not a statistical fit: it gives the
//! configuration phase a starting `DistributionSpec` per variable, which
//! the user can override.

use rustc_hash::FxHashMap;
use tracing::debug;

use riskcast_core::types::{Dataset, DistributionSpec};

/// Suggest a distribution for each listed variable from its historical
/// values. Variables with no usable values are omitted.
///
/// Rules: coefficient of variation below 0.1 suggests `normal`; a
/// non-negative sample whose range spans fewer than 4 standard
/// deviations suggests `uniform`; anything else falls back to `normal`.
pub fn suggest_distributions(
    dataset: &Dataset,
    variables: &[String],
) -> FxHashMap<String, DistributionSpec> {
    let mut suggestions = FxHashMap::default();

    for variable in variables {
        let values = dataset.numeric_values(variable);
        if values.is_empty() {
            continue;
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std = variance.sqrt();

        let mut min = values[0];
        let mut max = values[0];
        for &v in &values[1..] {
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
        }

        // Division by zero follows IEEE semantics on purpose: a zero or
        // near-zero denominator pushes both tests false and lands on the
        // normal fallback.
        let cv = std / mean.abs();
        let spec = if cv < 0.1 {
            DistributionSpec::Normal { mean, std }
        } else if min >= 0.0 && (max - min) / std < 4.0 {
            DistributionSpec::Uniform { min, max }
        } else {
            DistributionSpec::Normal { mean, std }
        };

        debug!(variable = variable.as_str(), suggestion = %spec, "suggested distribution");
        suggestions.insert(variable.clone(), spec);
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use riskcast_core::types::Value;
    use rustc_hash::FxHashMap as Map;

    fn single_column(name: &str, values: Vec<f64>) -> Dataset {
        let rows = values
            .into_iter()
            .map(|v| {
                let mut row: Map<String, Value> = Map::default();
                row.insert(name.to_string(), Value::Number(v));
                row
            })
            .collect();
        Dataset::new(vec![name.to_string()], rows)
    }

    #[test]
    fn test_low_variation_suggests_normal() {
        let ds = single_column("x", vec![100.0, 101.0, 99.0, 100.5, 99.5]);
        let s = suggest_distributions(&ds, &["x".to_string()]);
        assert!(matches!(s["x"], DistributionSpec::Normal { .. }));
    }

    #[test]
    fn test_flat_nonnegative_spread_suggests_uniform() {
        // High cv, non-negative, range under 4 standard deviations.
        let ds = single_column("x", vec![0.0, 5.0, 10.0, 15.0, 20.0]);
        let s = suggest_distributions(&ds, &["x".to_string()]);
        assert_eq!(
            s["x"],
            DistributionSpec::Uniform { min: 0.0, max: 20.0 }
        );
    }

    #[test]
    fn test_negative_values_fall_back_to_normal() {
        let ds = single_column("x", vec![-10.0, 0.0, 10.0, 20.0]);
        let s = suggest_distributions(&ds, &["x".to_string()]);
        assert!(matches!(s["x"], DistributionSpec::Normal { .. }));
    }

    #[test]
    fn test_empty_variable_omitted() {
        let ds = single_column("x", vec![1.0]);
        let s = suggest_distributions(&ds, &["x".to_string(), "missing".to_string()]);
        assert!(s.contains_key("x"));
        assert!(!s.contains_key("missing"));
    }
}
