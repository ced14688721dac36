//! Pairwise Pearson correlation matrix.

use serde::{Deserialize, Serialize};

/// Square correlation matrix over the dataset's numeric columns.
///
/// Symmetric, diagonal exactly 1. Off-diagonal entries lie in [-1, 1],
/// or are exactly 0 when either column is degenerate (zero variance or
/// no overlapping observations).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    columns: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn new(columns: Vec<String>, values: Vec<Vec<f64>>) -> Self {
        debug_assert_eq!(columns.len(), values.len());
        Self { columns, values }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }

    /// Correlation between two columns by name, if both are present.
    pub fn get_by_name(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        Some(self.values[i][j])
    }
}
