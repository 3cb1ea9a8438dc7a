use std::{num::NonZeroUsize, ops::Range};

use super::{
    ConfigErr, HostParallelism, OutputFlags, Parallelism, Result, SolverConfig, UpdateDiscipline,
};

pub const DEFAULT_TOLERANCE: f64 = 1e-3;
pub const DEFAULT_MAX_ITERATIONS: NonZeroUsize = NonZeroUsize::new(1000).unwrap();
pub const DEFAULT_DISCOUNT: f64 = 0.95;

/// Builds `SolverConfig`s from a worker count and optional overrides.
pub struct SolverConfigBuilder {
    workers: usize,
    chunk_groups: Option<Vec<Range<usize>>>,
    max_iterations: NonZeroUsize,
    tolerance: f64,
    discipline: UpdateDiscipline,
    discount: f64,
    outputs: OutputFlags,
    parallelism: Box<dyn Parallelism>,
}

impl SolverConfigBuilder {
    /// Creates a new `SolverConfigBuilder` with every setting at its default.
    ///
    /// # Arguments
    /// * `workers` - The amount of concurrent workers per dispatch.
    ///
    /// # Returns
    /// A new `SolverConfigBuilder` instance.
    pub fn new(workers: usize) -> Self {
        Self {
            workers,
            chunk_groups: None,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
            discipline: UpdateDiscipline::default(),
            discount: DEFAULT_DISCOUNT,
            outputs: OutputFlags::default(),
            parallelism: Box::new(HostParallelism),
        }
    }

    /// Sets the chunk groups, processed in the given order every iteration.
    pub fn chunk_groups(mut self, groups: Vec<Range<usize>>) -> Self {
        self.chunk_groups = Some(groups);
        self
    }

    pub fn max_iterations(mut self, max_iterations: NonZeroUsize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the convergence threshold, compared against the squared residual.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn discipline(mut self, discipline: UpdateDiscipline) -> Self {
        self.discipline = discipline;
        self
    }

    pub fn discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self
    }

    pub fn outputs(mut self, outputs: OutputFlags) -> Self {
        self.outputs = outputs;
        self
    }

    /// Replaces the host parallelism query used to cap the worker count.
    pub fn parallelism<P>(mut self, parallelism: P) -> Self
    where
        P: Parallelism + 'static,
    {
        self.parallelism = Box::new(parallelism);
        self
    }

    /// Validates the settings and builds the config.
    ///
    /// # Returns
    /// A new `SolverConfig` or a `ConfigErr` if the worker count is below 2 or above the
    /// host cap, the tolerance is negative or the discount isn't in `[0, 1]`.
    pub fn build(self) -> Result<SolverConfig> {
        let cap = self.parallelism.worker_cap();

        let workers = match NonZeroUsize::new(self.workers) {
            Some(workers) if workers.get() >= 2 => workers,
            _ => return Err(ConfigErr::TooFewWorkers(self.workers)),
        };

        if workers.get() > cap {
            return Err(ConfigErr::TooManyWorkers {
                workers: workers.get(),
                cap,
            });
        }

        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ConfigErr::InvalidTolerance(self.tolerance));
        }

        if !(0.0..=1.0).contains(&self.discount) {
            return Err(ConfigErr::InvalidDiscount(self.discount));
        }

        Ok(SolverConfig {
            workers,
            chunk_groups: self.chunk_groups,
            max_iterations: self.max_iterations,
            tolerance: self.tolerance,
            discipline: self.discipline,
            discount: self.discount,
            outputs: self.outputs,
        })
    }
}
