use std::sync::mpsc;

use log::debug;

use crate::train::iteration_stats::IterationStats;

/// Receives progress from the training loop.
///
/// Implemented for the stdout reporter used by the binary, for a no-op sink,
/// for `Vec<IterationStats>` (captures everything), for channel senders and
/// for any `FnMut(&IterationStats)` closure.
pub trait Reporter {
    fn report(&mut self, stats: &IterationStats);
}

/// Prints `Iteration <t> - Error: <mse>` lines to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn report(&mut self, stats: &IterationStats) {
        println!("Iteration {} - Error: {}", stats.iteration, stats.error);
    }
}

/// Discards every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn report(&mut self, _stats: &IterationStats) {}
}

impl Reporter for Vec<IterationStats> {
    fn report(&mut self, stats: &IterationStats) {
        self.push(stats.clone());
    }
}

impl Reporter for mpsc::Sender<IterationStats> {
    fn report(&mut self, stats: &IterationStats) {
        // Training never stops early, so a gone receiver only loses reports.
        if self.send(stats.clone()).is_err() {
            debug!("progress receiver dropped at iteration {}", stats.iteration);
        }
    }
}

impl<F> Reporter for F
where
    F: FnMut(&IterationStats),
{
    fn report(&mut self, stats: &IterationStats) {
        self(stats)
    }
}
