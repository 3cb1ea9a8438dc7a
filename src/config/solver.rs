use std::{num::NonZeroUsize, ops::Range};

use super::{ConfigErr, OutputFlags, Result, UpdateDiscipline};

/// A validated configuration for a parallel value iteration run.
///
/// Only obtainable through `SolverConfigBuilder::build`, so the worker count, the
/// tolerance and the discount are always within bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    pub(super) workers: NonZeroUsize,
    pub(super) chunk_groups: Option<Vec<Range<usize>>>,
    pub(super) max_iterations: NonZeroUsize,
    pub(super) tolerance: f64,
    pub(super) discipline: UpdateDiscipline,
    pub(super) discount: f64,
    pub(super) outputs: OutputFlags,
}

impl SolverConfig {
    /// Returns the amount of concurrent workers per dispatch.
    pub fn workers(&self) -> NonZeroUsize {
        self.workers
    }

    /// Returns the maximum amount of iterations before giving up on convergence.
    pub fn max_iterations(&self) -> NonZeroUsize {
        self.max_iterations
    }

    /// Returns the convergence threshold on the squared residual.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn discipline(&self) -> UpdateDiscipline {
        self.discipline
    }

    pub fn discount(&self) -> f64 {
        self.discount
    }

    pub fn outputs(&self) -> OutputFlags {
        self.outputs
    }

    /// Resolves the chunk groups for a state space, the default being a single group
    /// spanning every state.
    ///
    /// # Arguments
    /// * `states` - The size of the state space.
    ///
    /// # Returns
    /// The groups in the order they must be processed each iteration.
    pub fn chunk_groups(&self, states: usize) -> Vec<Range<usize>> {
        match &self.chunk_groups {
            Some(groups) => groups.clone(),
            None => vec![0..states],
        }
    }

    /// Checks this configuration against the shape of a model.
    ///
    /// # Arguments
    /// * `states` - The size of the state space.
    /// * `actions` - The amount of actions per state.
    ///
    /// # Returns
    /// A `ConfigErr` if the model has no actions or a chunk group doesn't fit in it.
    pub fn check_shape(&self, states: usize, actions: usize) -> Result<()> {
        if actions == 0 {
            return Err(ConfigErr::NoActions);
        }

        let out_of_bounds = self
            .chunk_groups
            .iter()
            .flatten()
            .find(|g| g.start > g.end || g.end > states);

        match out_of_bounds {
            Some(group) => Err(ConfigErr::ChunkGroupOutOfBounds {
                group: group.clone(),
                states,
            }),
            None => Ok(()),
        }
    }
}
