//! Parsed tabular dataset handed to the engine by the ingestion layer.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One cell of a record: numeric, text, or absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
    Null,
}

impl Value {
    /// The numeric payload, if this cell holds a finite number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) if !n.is_nan() => Some(*n),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

/// An ordered sequence of records sharing a fixed ordered column set.
///
/// Records may individually omit or null a column value. The dataset is
/// immutable once handed to the engine; every analysis is a read-only
/// reduction over it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<FxHashMap<String, Value>>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, rows: Vec<FxHashMap<String, Value>>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[FxHashMap<String, Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// The cell for `column` in `row`, treating a missing key as null.
    pub fn cell(&self, row: usize, column: &str) -> &Value {
        self.rows[row].get(column).unwrap_or(&Value::Null)
    }

    /// Non-null numeric values of one column, in row order.
    ///
    /// Text cells alongside numeric ones are excluded rather than erroring.
    pub fn numeric_values(&self, column: &str) -> Vec<f64> {
        self.rows
            .iter()
            .filter_map(|row| row.get(column).and_then(Value::as_number))
            .collect()
    }

    /// Whether a column is numeric under the type-inference rule used for
    /// analysis: its first non-null value is a number.
    pub fn is_numeric_column(&self, column: &str) -> bool {
        self.rows
            .iter()
            .find_map(|row| match row.get(column) {
                Some(Value::Null) | None => None,
                Some(v) => Some(matches!(v, Value::Number(_))),
            })
            .unwrap_or(false)
    }

    /// Columns classified as numeric, in dataset column order.
    pub fn numeric_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| self.is_numeric_column(c))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, Value)]) -> FxHashMap<String, Value> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn test_numeric_values_skip_nulls_and_text() {
        let ds = Dataset::new(
            vec!["a".into()],
            vec![
                row(&[("a", Value::Number(1.0))]),
                row(&[("a", Value::Null)]),
                row(&[("a", Value::Text("x".into()))]),
                row(&[("a", Value::Number(3.0))]),
                row(&[]),
            ],
        );
        assert_eq!(ds.numeric_values("a"), vec![1.0, 3.0]);
    }

    #[test]
    fn test_numeric_column_detection_uses_first_non_null() {
        let ds = Dataset::new(
            vec!["a".into(), "b".into(), "c".into()],
            vec![
                row(&[("a", Value::Null), ("b", Value::Text("x".into()))]),
                row(&[("a", Value::Number(2.0)), ("b", Value::Number(1.0))]),
            ],
        );
        assert!(ds.is_numeric_column("a"));
        // First non-null value of b is text, so b is categorical even
        // though later rows hold numbers.
        assert!(!ds.is_numeric_column("b"));
        // Entirely absent column.
        assert!(!ds.is_numeric_column("c"));
        assert_eq!(ds.numeric_columns(), vec!["a".to_string()]);
    }

    #[test]
    fn test_value_json_shapes() {
        let v: Vec<Value> = serde_json::from_str(r#"[1.5, "x", null]"#).unwrap();
        assert_eq!(
            v,
            vec![Value::Number(1.5), Value::Text("x".into()), Value::Null]
        );
    }
}
