pub mod error;
pub mod data;
pub mod model;
pub mod loss;
pub mod optim;
pub mod train;
pub mod demo;

// Convenience re-exports
pub use error::{RegressionError, Result};
pub use data::dataset::Dataset;
pub use model::linear::LinearModel;
pub use loss::mse::{mean_squared_error, MseLoss};
pub use optim::gd::GradientDescent;
pub use train::{fit, gradient_descent, train_loop, IterationStats, Reporter, TrainConfig};
pub use train::reporter::{NoopReporter, StdoutReporter};
pub use demo::{run_demo, DemoOutcome, RunSpec};
