//! Sort-and-sweep interval merging.
//!
//! The merge never touches the caller's slice: it sorts a private copy and
//! sweeps it once, extending the last output interval while the next input
//! starts at or before its end.

use tracing::debug;

use crate::error::{IntervalError, IntervalResult};
use crate::interval::Interval;

/// Merge overlapping and touching intervals.
///
/// The result is sorted by start, and consecutive entries `a`, `b` satisfy
/// `b.start() > a.end()`. Its union equals the union of `intervals`.
pub fn merge(intervals: &[Interval]) -> Vec<Interval> {
    if intervals.is_empty() {
        return Vec::new();
    }

    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(Interval::start);

    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for current in sorted {
        match merged.last_mut() {
            Some(last) if current.start() <= last.end() => last.extend_to(current.end()),
            _ => merged.push(current),
        }
    }

    debug!(input = intervals.len(), output = merged.len(), "merged intervals");
    merged
}

/// Validate raw `(start, end)` pairs and merge them.
///
/// Every pair is checked before merging begins; the first inverted pair
/// aborts the call with [`IntervalError::InvalidEntry`] and no output.
pub fn merge_pairs<I>(pairs: I) -> IntervalResult<Vec<Interval>>
where
    I: IntoIterator<Item = (i64, i64)>,
{
    let intervals = validate_pairs(pairs)?;
    Ok(merge(&intervals))
}

/// Convert raw `(start, end)` pairs into intervals, preserving their order.
pub fn validate_pairs<I>(pairs: I) -> IntervalResult<Vec<Interval>>
where
    I: IntoIterator<Item = (i64, i64)>,
{
    pairs
        .into_iter()
        .enumerate()
        .map(|(index, (start, end))| {
            Interval::new(start, end).map_err(|_| {
                debug!(index, start, end, "rejecting inverted interval");
                IntervalError::InvalidEntry { index, start, end }
            })
        })
        .collect()
}

/// Returns `true` if `intervals` is already in merged form.
pub fn is_merged(intervals: &[Interval]) -> bool {
    intervals.windows(2).all(|w| w[1].start() > w[0].end())
}
