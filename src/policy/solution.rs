use serde::Serialize;

use crate::controller::{SolveReport, SolveStatus};

/// The results of a solve, each output present only if it was selected in the config.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    /// `V[s]`, the value of every state.
    pub values: Option<Vec<f64>>,
    /// `Q[a][s]`, the value of taking each action in each state.
    pub q_values: Option<Vec<Vec<f64>>>,
    /// `P[s]`, the greedy action of every state.
    pub policy: Option<Vec<usize>>,
    pub report: SolveReport,
}

impl Solution {
    pub fn status(&self) -> SolveStatus {
        self.report.status
    }

    pub fn converged(&self) -> bool {
        self.report.status == SolveStatus::Converged
    }
}
