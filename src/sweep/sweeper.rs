use std::ops::Range;

use super::{BellmanKernel, Result};
use crate::{mdp::DiscreteMdp, storage::QMatrix};

/// Runs one dispatch of Bellman workers over a chunk group.
///
/// A `Sweeper` owns the value buffer(s) of a solve and decides how workers read and
/// write them, each implementation being one update discipline.
pub trait Sweeper: Send {
    /// Should back up every state of `parts` concurrently, one worker per part.
    ///
    /// Workers run on the current rayon pool, the call returns once every one of them
    /// is done.
    ///
    /// # Arguments
    /// * `kernel` - The per-state backup.
    /// * `parts` - The ordered, disjoint partition of the chunk group.
    /// * `q` - The Q-matrix, each worker writes the rows of its own part.
    ///
    /// # Returns
    /// The maximum squared value change over the group, or the first `WorkerErr`.
    fn sweep<M: DiscreteMdp>(
        &mut self,
        kernel: &BellmanKernel<'_, M>,
        parts: &[Range<usize>],
        q: &mut QMatrix,
    ) -> Result<f64>;

    /// Called once a chunk group's dispatch is done, before the next group starts.
    ///
    /// # Arguments
    /// * `parts` - The partition that was just swept.
    fn finish_group(&mut self, parts: &[Range<usize>]);

    /// Copies the current value of every state.
    fn values(&self) -> Vec<f64>;
}
