use std::{num::NonZeroUsize, ops::Range};

/// Splits `range` into exactly `workers` contiguous sub-ranges.
///
/// The sub-ranges are returned in order, they are pairwise disjoint, their union is
/// `range` and their lengths differ by at most one: the first `len % workers` get the
/// extra index. When `range` is shorter than `workers` the trailing sub-ranges are empty.
///
/// # Arguments
/// * `range` - The index range to split.
/// * `workers` - The amount of sub-ranges to produce.
///
/// # Returns
/// The `workers` sub-ranges.
pub fn partition(range: Range<usize>, workers: NonZeroUsize) -> Vec<Range<usize>> {
    let n = workers.get();
    let len = range.len();
    let base = len / n;
    let extra = len % n;

    let mut start = range.start;
    (0..n)
        .map(|i| {
            let size = base + usize::from(i < extra);
            let sub = start..start + size;
            start += size;
            sub
        })
        .collect()
}
