use std::{mem, ops::Range};

/// Hands out one exclusive sub-slice of `slice` per range.
///
/// Each range `r` maps to the elements `r.start * stride..r.end * stride`. This is the
/// only way the solver gives workers write access to a shared buffer, so the ranges
/// must be ordered and pairwise disjoint, gaps between them are allowed.
///
/// # Arguments
/// * `slice` - The buffer to split.
/// * `ranges` - The ordered, disjoint index ranges to hand out.
/// * `stride` - The amount of elements per index.
///
/// # Returns
/// The sub-slices, in the same order as `ranges`.
///
/// # Panics
/// If the ranges overlap, are out of order or go past the end of `slice`.
pub fn split_disjoint_mut<'a, T>(
    mut slice: &'a mut [T],
    ranges: &[Range<usize>],
    stride: usize,
) -> Vec<&'a mut [T]> {
    let total = slice.len();
    let mut consumed = 0;
    let mut parts = Vec::with_capacity(ranges.len());

    for range in ranges {
        assert!(
            consumed <= range.start && range.start <= range.end,
            "range {range:?} overlaps or precedes index {consumed}"
        );
        assert!(
            range.end * stride <= total,
            "range {range:?} exceeds a buffer of {total} elements"
        );

        let rest = mem::take(&mut slice);
        let (_, rest) = rest.split_at_mut((range.start - consumed) * stride);
        let (part, rest) = rest.split_at_mut(range.len() * stride);

        parts.push(part);
        slice = rest;
        consumed = range.end;
    }

    parts
}
