use rayon::prelude::*;

use crate::storage::QMatrix;

/// Picks the greedy action of every state.
///
/// Uses the same strict comparison as the Bellman backup, so ties go to the lowest
/// action index and the policy agrees with the values it was derived from. States
/// are independent, they are processed in parallel on the current rayon pool.
///
/// # Arguments
/// * `q` - The final Q-matrix.
///
/// # Returns
/// One action per state.
pub fn extract_policy(q: &QMatrix) -> Vec<usize> {
    let nactions = q.num_actions();
    if nactions == 0 {
        return vec![0; q.num_states()];
    }

    q.as_slice()
        .par_chunks(nactions)
        .map(greedy_action)
        .collect()
}

fn greedy_action(row: &[f64]) -> usize {
    let mut best = 0;

    for (action, &value) in row.iter().enumerate().skip(1) {
        if value > row[best] {
            best = action;
        }
    }

    best
}
