use serde::Serialize;

/// The phases of a solve.
///
/// `Idle → Running → {Converged, IterationLimitReached} → Done`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Running { completed: usize },
    Converged { iterations: usize },
    IterationLimitReached { iterations: usize },
    Done(SolveStatus),
}

/// How a solve ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveStatus {
    /// The residual of the last iteration fell below the tolerance.
    Converged,
    /// The iteration cap was hit first, the results are the best obtained so far.
    IterationLimitReached,
}

impl ControllerState {
    /// Decides what follows a completed iteration.
    ///
    /// # Arguments
    /// * `iteration` - The 1-based index of the iteration that just completed.
    /// * `residual` - Its maximum squared value change.
    /// * `tolerance` - The convergence threshold.
    /// * `max_iterations` - The iteration cap.
    pub fn after_iteration(
        iteration: usize,
        residual: f64,
        tolerance: f64,
        max_iterations: usize,
    ) -> Self {
        if residual < tolerance {
            Self::Converged {
                iterations: iteration,
            }
        } else if iteration >= max_iterations {
            Self::IterationLimitReached {
                iterations: iteration,
            }
        } else {
            Self::Running {
                completed: iteration,
            }
        }
    }
}
