use crate::error::{RegressionError, Result};
use crate::model::linear::LinearModel;

/// Full-batch gradient descent with a fixed learning rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientDescent {
    learning_rate: f64,
}

impl GradientDescent {
    /// # Errors
    /// `InvalidInput` if `learning_rate` is not a positive finite number.
    pub fn new(learning_rate: f64) -> Result<GradientDescent> {
        if !learning_rate.is_finite() || learning_rate <= 0.0 {
            return Err(RegressionError::invalid(format!(
                "learning rate must be positive and finite (got {learning_rate})"
            )));
        }
        Ok(GradientDescent { learning_rate })
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Applies one update given gradients computed at the current parameters.
    /// Both parameters move together, so neither gradient sees the other's update.
    pub fn step(&self, model: &mut LinearModel, (slope_grad, intercept_grad): (f64, f64)) {
        model.slope -= self.learning_rate * slope_grad;
        model.intercept -= self.learning_rate * intercept_grad;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_learning_rates() {
        for lr in [0.0, -0.01, f64::NAN, f64::INFINITY] {
            assert!(GradientDescent::new(lr).is_err(), "accepted {lr}");
        }
    }

    #[test]
    fn test_step_moves_against_gradient() {
        let optimizer = GradientDescent::new(0.5).unwrap();
        let mut model = LinearModel::new(1.0, 1.0);
        optimizer.step(&mut model, (2.0, -4.0));
        assert_eq!(model, LinearModel::new(0.0, 3.0));
    }
}
