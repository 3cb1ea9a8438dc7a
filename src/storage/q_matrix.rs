use std::ops::Range;

use super::split_disjoint_mut;

/// The action values of every state, stored state-major.
///
/// Row `s` holds `Q(s, a)` for every action `a`, so the rows of a contiguous range of
/// states form one contiguous slice that can be handed to a single worker.
#[derive(Debug, Clone, PartialEq)]
pub struct QMatrix {
    nstates: usize,
    nactions: usize,
    q: Box<[f64]>,
}

impl QMatrix {
    /// Creates a new zeroed `QMatrix`.
    ///
    /// # Arguments
    /// * `nstates` - The amount of states.
    /// * `nactions` - The amount of actions per state.
    pub fn new(nstates: usize, nactions: usize) -> Self {
        Self {
            nstates,
            nactions,
            q: vec![0.; nstates * nactions].into_boxed_slice(),
        }
    }

    pub fn num_states(&self) -> usize {
        self.nstates
    }

    pub fn num_actions(&self) -> usize {
        self.nactions
    }

    /// Returns the action values of `state`.
    pub fn row(&self, state: usize) -> &[f64] {
        let start = state * self.nactions;
        &self.q[start..start + self.nactions]
    }

    /// Returns the flat state-major storage.
    pub fn as_slice(&self) -> &[f64] {
        &self.q
    }

    /// Hands out the rows of each range of states as an exclusive slice.
    ///
    /// # Arguments
    /// * `ranges` - The ordered, disjoint state ranges.
    ///
    /// # Panics
    /// If the ranges overlap or exceed the amount of states.
    pub fn rows_mut(&mut self, ranges: &[Range<usize>]) -> Vec<&mut [f64]> {
        split_disjoint_mut(&mut self.q[..], ranges, self.nactions)
    }

    /// Copies the matrix out in action-major order.
    ///
    /// # Returns
    /// `A` rows of `S` values, `out[a][s] = Q(s, a)`.
    pub fn to_action_major(&self) -> Vec<Vec<f64>> {
        (0..self.nactions)
            .map(|a| (0..self.nstates).map(|s| self.q[s * self.nactions + a]).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_and_transpose() {
        let mut q = QMatrix::new(3, 2);

        {
            let mut rows = q.rows_mut(&[0..1, 1..3]);
            rows[0].copy_from_slice(&[1., 2.]);
            rows[1].copy_from_slice(&[3., 4., 5., 6.]);
        }

        assert_eq!(q.row(1), &[3., 4.]);
        assert_eq!(q.as_slice(), &[1., 2., 3., 4., 5., 6.]);
        assert_eq!(q.to_action_major(), vec![vec![1., 3., 5.], vec![2., 4., 6.]]);
        assert_eq!(q.num_states(), 3);
        assert_eq!(q.num_actions(), 2);
    }
}
