use std::ops::Range;

use rayon::prelude::*;

use super::{BellmanKernel, Result, Sweeper, kernel::squared_change};
use crate::{
    mdp::DiscreteMdp,
    storage::{QMatrix, SharedValues},
};

/// In place sweeps over a single shared buffer.
///
/// A backup sees every value written so far, including the ones written during the
/// same dispatch by other workers. Any interleaving of those reads and writes is a
/// valid outcome, so results may differ between runs and worker counts.
#[derive(Debug)]
pub struct GaussSeidelSweeper {
    values: SharedValues,
}

impl GaussSeidelSweeper {
    /// Creates a new `GaussSeidelSweeper` with zeroed values.
    ///
    /// # Arguments
    /// * `nstates` - The amount of states.
    pub fn new(nstates: usize) -> Self {
        Self {
            values: SharedValues::new(nstates),
        }
    }
}

impl Sweeper for GaussSeidelSweeper {
    fn sweep<M: DiscreteMdp>(
        &mut self,
        kernel: &BellmanKernel<'_, M>,
        parts: &[Range<usize>],
        q: &mut QMatrix,
    ) -> Result<f64> {
        let nactions = kernel.num_actions();
        let values = &self.values;
        let rows = q.rows_mut(parts);

        parts
            .par_iter()
            .zip(rows)
            .map(|(range, rows)| -> Result<f64> {
                let mut residual = 0.0_f64;

                for (state, row) in range.clone().zip(rows.chunks_mut(nactions)) {
                    let old = values.load(state);
                    let new = kernel.backup(state, |next| values.load(next), row)?;

                    values.store(state, new);
                    residual = residual.max(squared_change(old, new));
                }

                Ok(residual)
            })
            .try_reduce(|| 0.0, |a, b| Ok(a.max(b)))
    }

    /// A no-op, values are already updated in place during `Self::sweep`.
    fn finish_group(&mut self, _parts: &[Range<usize>]) {}

    fn values(&self) -> Vec<f64> {
        self.values.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;
    use crate::{mdp::TabularMdp, partition::partition};

    #[test]
    fn test_sequential_part_sees_own_writes() {
        // 1 -> 0 -> 0, reward 1 for staying in 0.
        let mdp =
            TabularMdp::deterministic(vec![vec![0], vec![0]], vec![vec![1.0], vec![0.0]]).unwrap();
        let kernel = BellmanKernel::new(&mdp, 1.0);
        let mut sweeper = GaussSeidelSweeper::new(2);
        let mut q = QMatrix::new(2, 1);

        // A single non-empty part: state 1 is backed up after state 0 by the same worker.
        let parts = vec![0..2, 2..2];
        let residual = sweeper.sweep(&kernel, &parts, &mut q).unwrap();
        sweeper.finish_group(&parts);

        assert_eq!(sweeper.values(), vec![1.0, 1.0]);
        assert_eq!(residual, 1.0);
        assert_eq!(q.as_slice(), &[1.0, 1.0]);
    }

    #[test]
    fn test_worker_error_aborts_dispatch() {
        struct Leaky;

        impl DiscreteMdp for Leaky {
            fn num_states(&self) -> usize {
                4
            }

            fn num_actions(&self) -> usize {
                1
            }

            fn next_states(&self, state: usize, _action: usize) -> (&[usize], &[f64]) {
                let probabilities: &[f64] = if state == 3 { &[0.5] } else { &[1.0] };
                (&[0], probabilities)
            }

            fn reward(&self, _state: usize, _action: usize) -> f64 {
                0.0
            }
        }

        let kernel = BellmanKernel::new(&Leaky, 0.9);
        let mut sweeper = GaussSeidelSweeper::new(4);
        let mut q = QMatrix::new(4, 1);
        let parts = partition(0..4, NonZeroUsize::new(2).unwrap());

        let err = sweeper.sweep(&kernel, &parts, &mut q).unwrap_err();
        assert_eq!(err.state, 3);
        assert_eq!(err.action, 0);
    }
}
