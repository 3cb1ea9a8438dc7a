use std::{
    num::NonZeroUsize,
    ops::Range,
    time::{Duration, Instant},
};

use log::{Level, log};

use super::{ControllerState, IterationStats, SolveReport, SolveStatus};
use crate::{
    mdp::DiscreteMdp,
    partition::partition,
    storage::QMatrix,
    sweep::{BellmanKernel, Result, Sweeper},
};

/// What a finished controller hands back: the final buffers and the run summary.
#[derive(Debug)]
pub struct Outcome {
    pub values: Vec<f64>,
    pub q: QMatrix,
    pub report: SolveReport,
}

/// Drives value iteration until convergence or the iteration cap.
///
/// Each iteration walks the chunk groups in their configured order; every group is
/// dispatched to the workers as one sweep and joined before the next one starts.
pub struct IterationController<'a, M: DiscreteMdp, S: Sweeper> {
    kernel: BellmanKernel<'a, M>,
    sweeper: S,
    q: QMatrix,
    groups: Vec<Vec<Range<usize>>>,
    tolerance: f64,
    max_iterations: NonZeroUsize,
    verbose: bool,
    state: ControllerState,
    trace: Vec<IterationStats>,
}

impl<'a, M: DiscreteMdp, S: Sweeper> IterationController<'a, M, S> {
    /// Creates a new idle `IterationController`.
    ///
    /// # Arguments
    /// * `kernel` - The per-state backup.
    /// * `sweeper` - The update discipline, owning the value buffer(s).
    /// * `q` - A zeroed Q-matrix sized for the model.
    /// * `groups` - The chunk groups, in processing order.
    /// * `workers` - The amount of sub-ranges each group is split into.
    /// * `tolerance` - The convergence threshold on the squared residual.
    /// * `max_iterations` - The iteration cap.
    /// * `verbose` - Whether per iteration diagnostics are logged at `info` level.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        kernel: BellmanKernel<'a, M>,
        sweeper: S,
        q: QMatrix,
        groups: Vec<Range<usize>>,
        workers: NonZeroUsize,
        tolerance: f64,
        max_iterations: NonZeroUsize,
        verbose: bool,
    ) -> Self {
        // Every group is split once, up front.
        let groups = groups
            .into_iter()
            .map(|group| partition(group, workers))
            .collect();

        Self {
            kernel,
            sweeper,
            q,
            groups,
            tolerance,
            max_iterations,
            verbose,
            state: ControllerState::Idle,
            trace: Vec::new(),
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Runs iterations until a terminal state is reached.
    ///
    /// Must be called from inside the solve's thread pool so that every dispatch uses
    /// exactly its workers.
    ///
    /// # Returns
    /// The final values, Q-matrix and report, or the first `WorkerErr` raised by any
    /// worker, in which case nothing computed so far is returned.
    pub fn run(mut self) -> Result<Outcome> {
        let start = Instant::now();

        let status = loop {
            self.state = match self.state {
                ControllerState::Idle => ControllerState::Running { completed: 0 },
                ControllerState::Running { completed } => {
                    let iteration = completed + 1;
                    let residual = self.iterate(iteration, start)?;

                    ControllerState::after_iteration(
                        iteration,
                        residual,
                        self.tolerance,
                        self.max_iterations.get(),
                    )
                }
                ControllerState::Converged { .. } => ControllerState::Done(SolveStatus::Converged),
                ControllerState::IterationLimitReached { .. } => {
                    ControllerState::Done(SolveStatus::IterationLimitReached)
                }
                ControllerState::Done(status) => break status,
            };
        };

        Ok(self.finish(status, start.elapsed()))
    }

    /// Sweeps every chunk group once, in order.
    ///
    /// # Returns
    /// The maximum squared value change over the whole iteration.
    fn iterate(&mut self, iteration: usize, start: Instant) -> Result<f64> {
        let iteration_start = Instant::now();
        let mut residual = 0.0_f64;

        for parts in &self.groups {
            let group_residual = self.sweeper.sweep(&self.kernel, parts, &mut self.q)?;
            self.sweeper.finish_group(parts);
            residual = residual.max(group_residual);
        }

        let stats = IterationStats {
            iteration,
            residual,
            elapsed: iteration_start.elapsed(),
            total: start.elapsed(),
        };
        self.log(&stats);
        self.trace.push(stats);

        Ok(residual)
    }

    fn log(&self, stats: &IterationStats) {
        let level = if self.verbose {
            Level::Info
        } else {
            Level::Debug
        };

        log!(
            level,
            iteration = stats.iteration,
            residual = stats.residual,
            elapsed_ms = millis(stats.elapsed),
            total_ms = millis(stats.total);
            "iteration complete"
        );
    }

    fn finish(self, status: SolveStatus, elapsed: Duration) -> Outcome {
        let iterations = self.trace.len();
        let residual = self.trace.last().map_or(0.0, |stats| stats.residual);

        Outcome {
            values: self.sweeper.values(),
            q: self.q,
            report: SolveReport {
                status,
                iterations,
                residual,
                elapsed,
                trace: self.trace,
            },
        }
    }
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1e3
}
