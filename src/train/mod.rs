pub mod trainer;
pub mod iteration_stats;
pub mod train_config;
pub mod reporter;
pub mod loop_fn;

pub use trainer::{fit, gradient_descent};
pub use iteration_stats::IterationStats;
pub use train_config::TrainConfig;
pub use reporter::{NoopReporter, Reporter, StdoutReporter};
pub use loop_fn::train_loop;
