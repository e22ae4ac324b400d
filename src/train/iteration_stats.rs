use serde::{Deserialize, Serialize};

/// Progress snapshot emitted by `train_loop` on every reporting iteration.
///
/// `error` is the MSE at the parameters produced by this iteration's update,
/// not the ones it started from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationStats {
    /// 0-based iteration index.
    pub iteration: usize,
    /// Total iterations requested for this run.
    pub total_iterations: usize,
    /// MSE at the parameters after this iteration's update.
    pub error: f64,
}
