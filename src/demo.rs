use std::fs::File;
use std::io::{BufReader, BufWriter};

use log::info;
use serde::{Deserialize, Serialize};

use crate::data::dataset::Dataset;
use crate::error::Result;
use crate::loss::mse::MseLoss;
use crate::model::linear::LinearModel;
use crate::train::loop_fn::train_loop;
use crate::train::reporter::Reporter;
use crate::train::train_config::TrainConfig;

/// Everything one end-to-end run needs: data, hyperparameters and the input
/// to predict for once training is done.
///
/// Every field is optional in JSON; missing ones fall back to the
/// study-hours demo (five points on y = 2x, α = 0.01, 1000 iterations, x = 6).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunSpec {
    pub dataset: Dataset,
    pub config: TrainConfig,
    pub test_input: f64,
}

impl Default for RunSpec {
    fn default() -> Self {
        RunSpec {
            dataset: Dataset::study_hours(),
            config: TrainConfig::default(),
            test_input: 6.0,
        }
    }
}

impl RunSpec {
    /// Serializes the run spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Deserializes a `RunSpec` from a JSON file; the dataset is validated on the way in.
    pub fn load_json(path: &str) -> Result<RunSpec> {
        let file = File::open(path)?;
        let spec: RunSpec = serde_json::from_reader(BufReader::new(file))?;
        info!("loaded run spec from {path}: {} points", spec.dataset.len());
        Ok(spec)
    }
}

/// Result of `run_demo`.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoOutcome {
    pub model: LinearModel,
    /// MSE of the all-zero model the run started from.
    pub initial_error: f64,
    pub final_error: f64,
    pub test_input: f64,
    pub prediction: f64,
}

/// Trains from slope = intercept = 0 and predicts `spec.test_input`.
///
/// # Errors
/// `InvalidInput` if `spec.config` has a bad learning rate.
pub fn run_demo(spec: &RunSpec, reporter: &mut dyn Reporter) -> Result<DemoOutcome> {
    let mut model = LinearModel::default();
    let initial_error = MseLoss::loss(&spec.dataset, &model);

    let final_error = train_loop(&spec.dataset, &mut model, &spec.config, reporter)?;

    Ok(DemoOutcome {
        model,
        initial_error,
        final_error,
        test_input: spec.test_input,
        prediction: model.predict(spec.test_input),
    })
}
