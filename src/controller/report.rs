use std::time::Duration;

use serde::Serialize;

use super::SolveStatus;

/// Diagnostics of a single iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IterationStats {
    pub iteration: usize,
    pub residual: f64,
    pub elapsed: Duration,
    /// Wall time since the first iteration started.
    pub total: Duration,
}

/// Summary of a solve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveReport {
    pub status: SolveStatus,
    pub iterations: usize,
    /// The residual of the last iteration.
    pub residual: f64,
    pub elapsed: Duration,
    pub trace: Vec<IterationStats>,
}
