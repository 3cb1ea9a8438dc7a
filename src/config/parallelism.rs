use std::{num::NonZeroUsize, thread};

/// Provides the amount of hardware threads the solver may assume.
///
/// Injected into the `SolverConfigBuilder` so that the worker cap doesn't depend on
/// the machine running the tests.
pub trait Parallelism {
    /// Should return the amount of threads the host can run in parallel.
    fn available(&self) -> NonZeroUsize;

    /// The maximum amount of workers a solve may use.
    ///
    /// # Returns
    /// `max(1, available / 2)`.
    fn worker_cap(&self) -> usize {
        (self.available().get() / 2).max(1)
    }
}

/// Queries the operating system, falling back to a single thread when it can't tell.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostParallelism;

impl Parallelism for HostParallelism {
    fn available(&self) -> NonZeroUsize {
        thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
    }
}

/// A fixed amount of threads.
#[derive(Debug, Clone, Copy)]
pub struct FixedParallelism(pub NonZeroUsize);

impl Parallelism for FixedParallelism {
    fn available(&self) -> NonZeroUsize {
        self.0
    }
}
