use crate::data::dataset::Dataset;
use crate::error::Result;
use crate::model::linear::LinearModel;
use crate::train::loop_fn::train_loop;
use crate::train::reporter::Reporter;
use crate::train::train_config::TrainConfig;

/// Trains a fresh model (slope = intercept = 0) and returns it by value.
///
/// # Errors
/// `InvalidInput` if the config carries a non-positive or non-finite learning rate.
pub fn fit(data: &Dataset, config: &TrainConfig, reporter: &mut dyn Reporter) -> Result<LinearModel> {
    let mut model = LinearModel::default();
    train_loop(data, &mut model, config, reporter)?;
    Ok(model)
}

/// Slice-level gradient descent over raw `x` / `y` sequences, updating
/// `slope` and `intercept` in place and reporting every 100th iteration.
///
/// Inputs are checked before anything moves: on error both parameters keep
/// their original values.
pub fn gradient_descent(
    x: &[f64],
    y: &[f64],
    slope: &mut f64,
    intercept: &mut f64,
    learning_rate: f64,
    iterations: usize,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    let data = Dataset::new(x.to_vec(), y.to_vec())?;
    let config = TrainConfig::new(learning_rate, iterations);

    let mut model = LinearModel::new(*slope, *intercept);
    train_loop(&data, &mut model, &config, reporter)?;

    *slope = model.slope;
    *intercept = model.intercept;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegressionError;
    use crate::train::iteration_stats::IterationStats;
    use crate::train::reporter::NoopReporter;

    #[test]
    fn test_fit_matches_in_place_form() {
        let data = Dataset::study_hours();
        let model = fit(&data, &TrainConfig::default(), &mut NoopReporter).unwrap();

        let (mut m, mut b) = (0.0, 0.0);
        gradient_descent(data.x(), data.y(), &mut m, &mut b, 0.01, 1000, &mut NoopReporter).unwrap();

        assert_eq!(model, LinearModel::new(m, b));
    }

    #[test]
    fn test_fit_rejects_bad_config() {
        let err = fit(&Dataset::study_hours(), &TrainConfig::new(0.0, 10), &mut NoopReporter).unwrap_err();
        assert!(matches!(err, RegressionError::InvalidInput(_)));
    }

    #[test]
    fn test_gradient_descent_zero_iterations() {
        let (mut m, mut b) = (1.25, -4.0);
        gradient_descent(&[1.0, 2.0], &[3.0, 4.0], &mut m, &mut b, 0.01, 0, &mut NoopReporter).unwrap();
        assert_eq!((m, b), (1.25, -4.0));
    }

    #[test]
    fn test_gradient_descent_invalid_input_leaves_params() {
        let (mut m, mut b) = (0.5, 0.5);
        let mut reports: Vec<IterationStats> = Vec::new();

        assert!(gradient_descent(&[], &[], &mut m, &mut b, 0.01, 10, &mut reports).is_err());
        assert!(gradient_descent(&[1.0], &[1.0, 2.0], &mut m, &mut b, 0.01, 10, &mut reports).is_err());
        assert!(gradient_descent(&[1.0], &[1.0], &mut m, &mut b, f64::NAN, 10, &mut reports).is_err());

        assert_eq!((m, b), (0.5, 0.5));
        assert!(reports.is_empty());
    }
}
