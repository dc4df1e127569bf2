use std::slice;

use serde::{Deserialize, Serialize};

use crate::interval::Interval;
use crate::merge::merge;

/// A collection of intervals held in merged form.
///
/// Entries are sorted by start and separated by a gap: for consecutive `a`,
/// `b`, `b.start() > a.end()`. Both starts and ends are therefore strictly
/// increasing, which lets lookups and inserts binary-search either bound.
///
/// Deserialization re-merges its input, so a set read from untrusted JSON
/// still upholds the invariant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Interval>", into = "Vec<Interval>")]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

impl IntervalSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set by merging a copy of `intervals`.
    pub fn from_intervals(intervals: &[Interval]) -> Self {
        Self {
            intervals: merge(intervals),
        }
    }

    /// Add an interval, coalescing it with every entry it overlaps or touches.
    pub fn insert(&mut self, interval: Interval) {
        let lo = self
            .intervals
            .partition_point(|existing| existing.end() < interval.start());
        let hi = self
            .intervals
            .partition_point(|existing| existing.start() <= interval.end());

        if lo == hi {
            self.intervals.insert(lo, interval);
            return;
        }

        let first = self.intervals[lo];
        let mut combined = if first.start() < interval.start() { first } else { interval };
        combined.extend_to(interval.end().max(self.intervals[hi - 1].end()));
        self.intervals.splice(lo..hi, [combined]);
    }

    /// The union of two sets.
    pub fn union(&self, other: &Self) -> Self {
        let mut all = Vec::with_capacity(self.len() + other.len());
        all.extend_from_slice(&self.intervals);
        all.extend_from_slice(&other.intervals);
        Self {
            intervals: merge(&all),
        }
    }

    /// Returns `true` if any entry covers `point`.
    pub fn contains(&self, point: i64) -> bool {
        let idx = self.intervals.partition_point(|i| i.end() < point);
        self.intervals.get(idx).is_some_and(|i| i.contains(point))
    }

    /// Sum of entry lengths, saturating at `u64::MAX`.
    pub fn total_length(&self) -> u64 {
        self.intervals
            .iter()
            .fold(0u64, |acc, i| acc.saturating_add(i.length()))
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn into_vec(self) -> Vec<Interval> {
        self.intervals
    }
}

impl From<Vec<Interval>> for IntervalSet {
    fn from(intervals: Vec<Interval>) -> Self {
        Self::from_intervals(&intervals)
    }
}

impl From<IntervalSet> for Vec<Interval> {
    fn from(set: IntervalSet) -> Self {
        set.intervals
    }
}

impl FromIterator<Interval> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        let intervals: Vec<Interval> = iter.into_iter().collect();
        Self::from_intervals(&intervals)
    }
}

impl Extend<Interval> for IntervalSet {
    fn extend<I: IntoIterator<Item = Interval>>(&mut self, iter: I) {
        for interval in iter {
            self.insert(interval);
        }
    }
}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = &'a Interval;
    type IntoIter = slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for IntervalSet {
    type Item = Interval;
    type IntoIter = std::vec::IntoIter<Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}
