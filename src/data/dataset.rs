use serde::{Deserialize, Serialize};

use crate::error::{RegressionError, Result};

/// Index-aligned inputs and targets for a single-variable regression.
///
/// A `Dataset` is validated on construction (and on deserialization), so every
/// value that exists holds at least one point, `x.len() == y.len()`, and only
/// finite numbers. Loss and gradient code can therefore divide by `len()`
/// without further checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDataset")]
pub struct Dataset {
    x: Vec<f64>,
    y: Vec<f64>,
}

/// Unchecked wire shape; only used as the deserialization source.
#[derive(Deserialize)]
struct RawDataset {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl TryFrom<RawDataset> for Dataset {
    type Error = RegressionError;

    fn try_from(raw: RawDataset) -> Result<Self> {
        Dataset::new(raw.x, raw.y)
    }
}

impl Dataset {
    /// Builds a dataset from separate input and target sequences.
    ///
    /// # Errors
    /// `InvalidInput` if the sequences are empty, differ in length, or contain
    /// NaN / infinite values.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Dataset> {
        validate(&x, &y)?;
        Ok(Dataset { x, y })
    }

    /// Builds a dataset from `(x, y)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Dataset> {
        let (x, y) = pairs.iter().copied().unzip();
        Dataset::new(x, y)
    }

    /// Hours of study against test scores: five points on the line y = 2x.
    pub fn study_hours() -> Dataset {
        Dataset {
            x: vec![1.0, 2.0, 3.0, 4.0, 5.0],
            y: vec![2.0, 4.0, 6.0, 8.0, 10.0],
        }
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Number of points; always at least 1.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always `false`; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterates over `(x[i], y[i])` pairs in order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// Shared by `Dataset::new` and the slice-level entry points in `loss` and `train`.
pub(crate) fn validate(x: &[f64], y: &[f64]) -> Result<()> {
    if x.is_empty() {
        return Err(RegressionError::invalid("dataset must contain at least one point"));
    }
    if x.len() != y.len() {
        return Err(RegressionError::invalid(format!(
            "x and y must have equal length (got {} and {})",
            x.len(),
            y.len()
        )));
    }
    if let Some(i) = x.iter().zip(y.iter()).position(|(a, b)| !a.is_finite() || !b.is_finite()) {
        return Err(RegressionError::invalid(format!(
            "point {i} is not finite ({}, {})",
            x[i], y[i]
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_study_hours_shape() {
        let data = Dataset::study_hours();
        assert_eq!(data.len(), 5);
        assert!(!data.is_empty());
        assert!(data.points().all(|(x, y)| y == 2.0 * x));
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let err = Dataset::new(vec![], vec![]).unwrap_err();
        assert!(matches!(err, RegressionError::InvalidInput(_)));
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        let err = Dataset::new(vec![1.0, 2.0], vec![1.0]).unwrap_err();
        assert!(err.to_string().contains("equal length"));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(Dataset::new(vec![1.0, f64::NAN], vec![1.0, 2.0]).is_err());
        assert!(Dataset::new(vec![1.0], vec![f64::INFINITY]).is_err());
    }

    #[test]
    fn test_from_pairs_keeps_order() {
        let data = Dataset::from_pairs(&[(3.0, 1.0), (1.0, 2.0)]).unwrap();
        assert_eq!(data.x(), &[3.0, 1.0]);
        assert_eq!(data.y(), &[1.0, 2.0]);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Dataset = serde_json::from_str(r#"{"x": [1.0], "y": [2.0]}"#).unwrap();
        assert_eq!(ok.len(), 1);

        let bad = serde_json::from_str::<Dataset>(r#"{"x": [1.0, 2.0], "y": [2.0]}"#);
        assert!(bad.is_err());
    }
}
