use log::{debug, info};

use crate::data::dataset::Dataset;
use crate::error::Result;
use crate::loss::mse::MseLoss;
use crate::model::linear::LinearModel;
use crate::train::iteration_stats::IterationStats;
use crate::train::reporter::Reporter;
use crate::train::train_config::TrainConfig;

/// Runs `config.iterations` full-batch updates on `model` and returns the MSE
/// at the final parameters.
///
/// # Arguments
/// - `data`     — validated training set
/// - `model`    — parameters to train; modified in place
/// - `config`   — learning rate, iteration count and reporting interval
/// - `reporter` — receives an `IterationStats` on every reporting iteration
///
/// Every iteration computes both gradients from the current parameters before
/// the optimizer touches either of them. There is no early stopping.
///
/// # Errors
/// `InvalidInput` if `config.learning_rate` is not a positive finite number;
/// `model` is left untouched and nothing is reported.
pub fn train_loop(
    data: &Dataset,
    model: &mut LinearModel,
    config: &TrainConfig,
    reporter: &mut dyn Reporter,
) -> Result<f64> {
    let optimizer = config.optimizer()?;
    info!(
        "training on {} points: iterations={} learning_rate={}",
        data.len(),
        config.iterations,
        optimizer.learning_rate()
    );

    for iteration in 0..config.iterations {
        let grads = MseLoss::gradient(data, model);
        optimizer.step(model, grads);

        if config.reports_at(iteration) {
            let stats = IterationStats {
                iteration,
                total_iterations: config.iterations,
                error: MseLoss::loss(data, model),
            };
            debug!("iteration {iteration}: error={} model=({model})", stats.error);
            reporter.report(&stats);
        }
    }

    let final_error = MseLoss::loss(data, model);
    info!("training finished: {model} error={final_error}");
    Ok(final_error)
}
