use crate::prune::error::PruneError;
use std::iter;

/// The numbers of a stride series: `start, start + stride, ...` strictly below
/// `end`, followed by `end` itself.
///
/// `end` is always the last member, whether or not it lies on the stride.
/// Because the progression stops short of `end`, an on-stride `end` still
/// appears only once.
pub fn build_series(start: i64, end: i64, stride: i64) -> Result<Vec<i64>, PruneError> {
    let step = usize::try_from(stride)
        .ok()
        .filter(|s| *s >= 1)
        .ok_or(PruneError::InvalidStride(stride))?;
    Ok((start..end).step_by(step).chain(iter::once(end)).collect())
}

/// Every integer of `[start, end]`, with the same forced `end` as [`build_series`].
pub(crate) fn full_range(start: i64, end: i64) -> impl Iterator<Item = i64> {
    (start..end).chain(iter::once(end))
}
