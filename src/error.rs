use std::{
    error::Error,
    fmt::{self, Display},
};

use rayon::ThreadPoolBuildError;

use crate::{config::ConfigErr, sweep::WorkerErr};

/// The specific result type for `solve`.
pub type Result<T> = std::result::Result<T, SolveErr>;

/// All errors that can abort a solve.
#[derive(Debug)]
pub enum SolveErr {
    /// The configuration doesn't fit the model, raised before any allocation.
    Config(ConfigErr),
    /// A Bellman worker failed, no partial results are kept.
    Worker(WorkerErr),
    /// The worker thread pool couldn't be created.
    ThreadPool(ThreadPoolBuildError),
}

impl Display for SolveErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "{e}"),
            Self::Worker(e) => write!(f, "{e}"),
            Self::ThreadPool(e) => write!(f, "thread pool error: {e}"),
        }
    }
}

impl Error for SolveErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Worker(e) => Some(e),
            Self::ThreadPool(e) => Some(e),
        }
    }
}

impl From<ConfigErr> for SolveErr {
    fn from(e: ConfigErr) -> Self {
        Self::Config(e)
    }
}

impl From<WorkerErr> for SolveErr {
    fn from(e: WorkerErr) -> Self {
        Self::Worker(e)
    }
}

impl From<ThreadPoolBuildError> for SolveErr {
    fn from(e: ThreadPoolBuildError) -> Self {
        Self::ThreadPool(e)
    }
}
