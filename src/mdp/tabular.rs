use serde::{Deserialize, Serialize};

use super::{
    DiscreteMdp, MdpErr, Result,
    transition::{check_reward, check_transition},
};

/// The plain table description of a `TabularMdp`, as read from a problem file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabularSpec {
    pub num_actions: usize,
    /// `transitions[s][a]` lists the `(successor, probability)` pairs of taking `a` in `s`.
    pub transitions: Vec<Vec<Vec<(usize, f64)>>>,
    /// `rewards[s][a]` is the immediate reward of taking `a` in `s`.
    pub rewards: Vec<Vec<f64>>,
}

/// An in-memory MDP with every transition stored explicitly.
///
/// Transitions are laid out in compressed sparse rows, the row of `(s, a)` being
/// `s * num_actions + a`.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "TabularSpec")]
pub struct TabularMdp {
    nstates: usize,
    nactions: usize,
    offsets: Box<[usize]>,
    successors: Box<[usize]>,
    probabilities: Box<[f64]>,
    rewards: Box<[f64]>,
}

impl TabularMdp {
    /// Creates a new `TabularMdp`, validating every table.
    ///
    /// # Arguments
    /// * `num_actions` - The amount of actions available in each state.
    /// * `transitions` - For each state and action, the `(successor, probability)` pairs.
    /// * `rewards` - For each state and action, the immediate reward.
    ///
    /// # Returns
    /// A new `TabularMdp` or an `MdpErr` if the tables are inconsistent.
    pub fn new(
        num_actions: usize,
        transitions: Vec<Vec<Vec<(usize, f64)>>>,
        rewards: Vec<Vec<f64>>,
    ) -> Result<Self> {
        if num_actions == 0 {
            return Err(MdpErr::NoActions);
        }

        let nstates = transitions.len();
        if rewards.len() != nstates {
            return Err(MdpErr::ShapeMismatch {
                table: "rewards",
                expected: nstates,
                found: rewards.len(),
            });
        }

        let rows = nstates * num_actions;
        let mut offsets = Vec::with_capacity(rows + 1);
        let mut successors = Vec::new();
        let mut probabilities = Vec::new();
        let mut flat_rewards = Vec::with_capacity(rows);
        offsets.push(0);

        let rows_per_state = transitions.into_iter().zip(rewards).enumerate();
        for (state, (actions, action_rewards)) in rows_per_state {
            if actions.len() != num_actions {
                return Err(MdpErr::ShapeMismatch {
                    table: "transitions",
                    expected: num_actions,
                    found: actions.len(),
                });
            }

            if action_rewards.len() != num_actions {
                return Err(MdpErr::ShapeMismatch {
                    table: "rewards",
                    expected: num_actions,
                    found: action_rewards.len(),
                });
            }

            for (action, (pairs, reward)) in actions.into_iter().zip(action_rewards).enumerate() {
                let (succ, probs): (Vec<usize>, Vec<f64>) = pairs.into_iter().unzip();

                check_transition(&succ, &probs, nstates)
                    .and_then(|_| check_reward(reward))
                    .map_err(|kind| MdpErr::Transition {
                        state,
                        action,
                        kind,
                    })?;

                successors.extend(succ);
                probabilities.extend(probs);
                offsets.push(successors.len());
                flat_rewards.push(reward);
            }
        }

        Ok(Self {
            nstates,
            nactions: num_actions,
            offsets: offsets.into_boxed_slice(),
            successors: successors.into_boxed_slice(),
            probabilities: probabilities.into_boxed_slice(),
            rewards: flat_rewards.into_boxed_slice(),
        })
    }

    /// Builds a model where every action leads to exactly one successor.
    ///
    /// # Arguments
    /// * `next` - `next[s][a]` is the only successor of taking `a` in `s`.
    /// * `rewards` - For each state and action, the immediate reward.
    pub fn deterministic(next: Vec<Vec<usize>>, rewards: Vec<Vec<f64>>) -> Result<Self> {
        let num_actions = next.first().map_or(0, Vec::len);
        let transitions = next
            .into_iter()
            .map(|row| row.into_iter().map(|s| vec![(s, 1.0)]).collect())
            .collect();

        Self::new(num_actions, transitions, rewards)
    }

    fn row(&self, state: usize, action: usize) -> usize {
        state * self.nactions + action
    }
}

impl TryFrom<TabularSpec> for TabularMdp {
    type Error = MdpErr;

    fn try_from(spec: TabularSpec) -> Result<Self> {
        Self::new(spec.num_actions, spec.transitions, spec.rewards)
    }
}

impl DiscreteMdp for TabularMdp {
    fn num_states(&self) -> usize {
        self.nstates
    }

    fn num_actions(&self) -> usize {
        self.nactions
    }

    fn next_states(&self, state: usize, action: usize) -> (&[usize], &[f64]) {
        let row = self.row(state, action);
        let (start, end) = (self.offsets[row], self.offsets[row + 1]);
        (&self.successors[start..end], &self.probabilities[start..end])
    }

    fn reward(&self, state: usize, action: usize) -> f64 {
        self.rewards[self.row(state, action)]
    }
}
