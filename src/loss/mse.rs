use crate::data::dataset::{self, Dataset};
use crate::error::Result;
use crate::model::linear::LinearModel;

pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((slope·x + intercept - y)²)
    pub fn loss(data: &Dataset, model: &LinearModel) -> f64 {
        squared_error_sum(data.x(), data.y(), model) / data.len() as f64
    }

    /// Gradient of the MSE w.r.t. (slope, intercept), both taken at `model`:
    ///
    ///   ∂/∂m = mean(-2·x·(y - ŷ))
    ///   ∂/∂b = mean(-2·(y - ŷ))
    pub fn gradient(data: &Dataset, model: &LinearModel) -> (f64, f64) {
        let n = data.len() as f64;
        let (gm, gb) = data.points().fold((0.0, 0.0), |(gm, gb), (x, y)| {
            let residual = y - model.predict(x);
            (gm - 2.0 * x * residual, gb - 2.0 * residual)
        });
        (gm / n, gb / n)
    }
}

/// Slice-level MSE for callers that hold raw sequences instead of a `Dataset`.
///
/// # Errors
/// `InvalidInput` on empty, mismatched or non-finite input.
pub fn mean_squared_error(x: &[f64], y: &[f64], slope: f64, intercept: f64) -> Result<f64> {
    dataset::validate(x, y)?;
    let model = LinearModel::new(slope, intercept);
    Ok(squared_error_sum(x, y, &model) / x.len() as f64)
}

fn squared_error_sum(x: &[f64], y: &[f64], model: &LinearModel) -> f64 {
    x.iter().zip(y.iter())
        .map(|(&x, &y)| (model.predict(x) - y).powi(2))
        .sum()
}
