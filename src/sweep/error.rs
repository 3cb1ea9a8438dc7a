use std::{
    error::Error,
    fmt::{self, Display},
};

use crate::mdp::TransitionErr;

/// The specific result type for Bellman workers.
pub type Result<T> = std::result::Result<T, WorkerErr>;

/// Error raised by a Bellman worker when the model hands it data it can't back up.
///
/// It aborts the whole solve, no partial iteration is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerErr {
    pub state: usize,
    pub action: usize,
    pub kind: TransitionErr,
}

impl Display for WorkerErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "worker error at state {}, action {}: {}",
            self.state, self.action, self.kind
        )
    }
}

impl Error for WorkerErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.kind)
    }
}
