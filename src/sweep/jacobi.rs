use std::ops::Range;

use rayon::prelude::*;

use super::{BellmanKernel, Result, Sweeper, kernel::squared_change};
use crate::{
    mdp::DiscreteMdp,
    storage::{DoubleBuffer, QMatrix, split_disjoint_mut},
};

/// Double buffered sweeps.
///
/// Workers only read values frozen before the group started, so the outcome doesn't
/// depend on the amount of workers nor on how they're scheduled.
#[derive(Debug)]
pub struct JacobiSweeper {
    buffer: DoubleBuffer,
}

impl JacobiSweeper {
    /// Creates a new `JacobiSweeper` with zeroed values.
    ///
    /// # Arguments
    /// * `nstates` - The amount of states.
    pub fn new(nstates: usize) -> Self {
        Self {
            buffer: DoubleBuffer::new(nstates),
        }
    }
}

impl Sweeper for JacobiSweeper {
    fn sweep<M: DiscreteMdp>(
        &mut self,
        kernel: &BellmanKernel<'_, M>,
        parts: &[Range<usize>],
        q: &mut QMatrix,
    ) -> Result<f64> {
        let nactions = kernel.num_actions();
        let (source, dest) = self.buffer.split();
        let dests = split_disjoint_mut(dest, parts, 1);
        let rows = q.rows_mut(parts);

        parts
            .par_iter()
            .zip(dests)
            .zip(rows)
            .map(|((range, dest), rows)| -> Result<f64> {
                let mut residual = 0.0_f64;

                let states = range.clone().zip(dest).zip(rows.chunks_mut(nactions));

                for ((state, out), row) in states {
                    *out = kernel.backup(state, |next| source[next], row)?;
                    residual = residual.max(squared_change(source[state], *out));
                }

                Ok(residual)
            })
            .try_reduce(|| 0.0, |a, b| Ok(a.max(b)))
    }

    /// Copies the freshly written values into the source, in parallel over `parts`.
    fn finish_group(&mut self, parts: &[Range<usize>]) {
        self.buffer.commit(parts);
    }

    fn values(&self) -> Vec<f64> {
        self.buffer.values().to_vec()
    }
}
