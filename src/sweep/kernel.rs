use super::{Result, WorkerErr};
use crate::mdp::{DiscreteMdp, check_reward, check_transition};

/// The per-state Bellman backup shared by every update discipline.
pub struct BellmanKernel<'a, M: DiscreteMdp> {
    mdp: &'a M,
    discount: f64,
    nstates: usize,
    nactions: usize,
}

impl<'a, M: DiscreteMdp> BellmanKernel<'a, M> {
    /// Creates a new `BellmanKernel`.
    ///
    /// # Arguments
    /// * `mdp` - The model being solved.
    /// * `discount` - The discount factor applied to successor values.
    pub fn new(mdp: &'a M, discount: f64) -> Self {
        Self {
            mdp,
            discount,
            nstates: mdp.num_states(),
            nactions: mdp.num_actions(),
        }
    }

    pub fn num_actions(&self) -> usize {
        self.nactions
    }

    /// Backs up a single state.
    ///
    /// Writes `Q(s, a) = R(s, a) + γ · Σ P(s' | s, a) · V(s')` for every action into
    /// `q_row`, the expectation being accumulated in successor order. Ties between
    /// actions go to the lowest index.
    ///
    /// # Arguments
    /// * `state` - The state to back up.
    /// * `value` - Reads the currently visible value of a state.
    /// * `q_row` - The row of the Q-matrix owned by `state`.
    ///
    /// # Returns
    /// The new value of `state`, or a `WorkerErr` if the model returned a malformed
    /// transition or reward.
    pub fn backup<F>(&self, state: usize, value: F, q_row: &mut [f64]) -> Result<f64>
    where
        F: Fn(usize) -> f64,
    {
        let mut best = f64::NEG_INFINITY;

        for (action, q) in q_row.iter_mut().enumerate() {
            let (successors, probabilities) = self.mdp.next_states(state, action);
            let reward = self.mdp.reward(state, action);

            check_transition(successors, probabilities, self.nstates)
                .and_then(|_| check_reward(reward))
                .map_err(|kind| WorkerErr {
                    state,
                    action,
                    kind,
                })?;

            let expected = successors
                .iter()
                .zip(probabilities)
                .fold(0.0, |acc, (&next, &p)| acc + p * value(next));

            *q = reward + self.discount * expected;

            if action == 0 || *q > best {
                best = *q;
            }
        }

        Ok(best)
    }
}

/// The squared change of a state's value, the per-state residual.
pub fn squared_change(old: f64, new: f64) -> f64 {
    let diff = new - old;
    diff * diff
}
