use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::optim::gd::GradientDescent;

/// Hyperparameters for a `train_loop` run.
///
/// # Fields
/// - `learning_rate` — step size applied to each gradient
/// - `iterations`    — number of full-batch updates; `0` leaves the model untouched
/// - `report_every`  — emit an `IterationStats` when `iteration % report_every == 0`;
///                     `0` disables reporting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub iterations: usize,
    pub report_every: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            learning_rate: 0.01,
            iterations: 1000,
            report_every: 100,
        }
    }
}

impl TrainConfig {
    /// Creates a config with the default reporting interval of 100 iterations.
    pub fn new(learning_rate: f64, iterations: usize) -> Self {
        TrainConfig {
            learning_rate,
            iterations,
            ..TrainConfig::default()
        }
    }

    pub fn with_report_every(mut self, report_every: usize) -> Self {
        self.report_every = report_every;
        self
    }

    /// Checks the hyperparameters and builds the optimizer they describe.
    pub fn optimizer(&self) -> Result<GradientDescent> {
        GradientDescent::new(self.learning_rate)
    }

    pub fn validate(&self) -> Result<()> {
        self.optimizer().map(|_| ())
    }

    pub(crate) fn reports_at(&self, iteration: usize) -> bool {
        self.report_every != 0 && iteration % self.report_every == 0
    }
}
