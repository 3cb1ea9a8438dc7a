use std::{ops::Range, sync::atomic::Ordering};

use atomic_float::AtomicF64;
use rayon::prelude::*;

use super::split_disjoint_mut;

/// The pair of value buffers used by Jacobi sweeps.
///
/// Workers read the frozen `source` and write their own slices of `dest`; once a chunk
/// group is done `commit` copies the group back into `source`.
#[derive(Debug)]
pub struct DoubleBuffer {
    source: Box<[f64]>,
    dest: Box<[f64]>,
}

impl DoubleBuffer {
    /// Creates a new zeroed `DoubleBuffer`.
    ///
    /// # Arguments
    /// * `len` - The amount of states.
    pub fn new(len: usize) -> Self {
        Self {
            source: vec![0.; len].into_boxed_slice(),
            dest: vec![0.; len].into_boxed_slice(),
        }
    }

    /// Borrows the frozen source for reading and the destination for writing.
    pub fn split(&mut self) -> (&[f64], &mut [f64]) {
        (&self.source[..], &mut self.dest[..])
    }

    /// Copies `parts` of the destination into the source in parallel, one task per part.
    ///
    /// # Arguments
    /// * `parts` - The ordered, disjoint ranges that were just written.
    pub fn commit(&mut self, parts: &[Range<usize>]) {
        let dest = &self.dest;

        split_disjoint_mut(&mut self.source[..], parts, 1)
            .into_par_iter()
            .zip(parts.par_iter())
            .for_each(|(src, range)| src.copy_from_slice(&dest[range.clone()]));
    }

    /// Returns the committed values.
    pub fn values(&self) -> &[f64] {
        &self.source
    }
}

/// A single value buffer shared by every Gauss-Seidel worker.
///
/// Each cell is an atomic so that a worker reading an index owned by another worker
/// observes either the old or the new value, never a torn one. Accesses are relaxed,
/// the join at the end of every dispatch publishes all the writes.
#[derive(Debug)]
pub struct SharedValues {
    cells: Box<[AtomicF64]>,
}

impl SharedValues {
    /// Creates a new zeroed `SharedValues`.
    ///
    /// # Arguments
    /// * `len` - The amount of states.
    pub fn new(len: usize) -> Self {
        Self {
            cells: (0..len).map(|_| AtomicF64::new(0.)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn load(&self, idx: usize) -> f64 {
        self.cells[idx].load(Ordering::Relaxed)
    }

    pub fn store(&self, idx: usize, value: f64) {
        self.cells[idx].store(value, Ordering::Relaxed);
    }

    /// Copies the current values into a new vector.
    pub fn to_vec(&self) -> Vec<f64> {
        self.cells.iter().map(|c| c.load(Ordering::Relaxed)).collect()
    }
}
