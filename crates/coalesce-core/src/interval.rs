use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{IntervalError, IntervalResult};

/// A closed integer range `[start, end]`.
///
/// The invariant `start <= end` is checked by every constructor, so any
/// `Interval` value in hand is well-formed. A single point is the interval
/// `[x, x]`.
///
/// Ordering: `start` → `end`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "[i64; 2]", into = "[i64; 2]")]
pub struct Interval {
    start: i64,
    end: i64,
}

impl Interval {
    /// Create an interval, rejecting `start > end`.
    pub fn new(start: i64, end: i64) -> IntervalResult<Self> {
        if start > end {
            return Err(IntervalError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// The single-point interval `[x, x]`.
    pub const fn point(x: i64) -> Self {
        Self { start: x, end: x }
    }

    pub const fn start(&self) -> i64 {
        self.start
    }

    pub const fn end(&self) -> i64 {
        self.end
    }

    /// Distance from `start` to `end`. Zero for a single point.
    pub fn length(&self) -> u64 {
        self.end.abs_diff(self.start)
    }

    /// Returns `true` if `point` lies within the closed range.
    pub fn contains(&self, point: i64) -> bool {
        self.start <= point && point <= self.end
    }

    /// Returns `true` if the two intervals share at least one point.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Returns `true` if one interval ends exactly where the other starts.
    pub fn touches(&self, other: &Self) -> bool {
        self.end == other.start || other.end == self.start
    }

    /// Grow this interval so its end reaches at least `end`.
    pub(crate) fn extend_to(&mut self, end: i64) {
        self.end = self.end.max(end);
    }
}

impl fmt::Debug for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Interval[{}, {}]", self.start, self.end)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl TryFrom<[i64; 2]> for Interval {
    type Error = IntervalError;

    fn try_from([start, end]: [i64; 2]) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

impl TryFrom<(i64, i64)> for Interval {
    type Error = IntervalError;

    fn try_from((start, end): (i64, i64)) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

impl From<Interval> for [i64; 2] {
    fn from(interval: Interval) -> Self {
        [interval.start, interval.end]
    }
}

impl From<Interval> for (i64, i64) {
    fn from(interval: Interval) -> Self {
        (interval.start, interval.end)
    }
}

/// Parses `start,end`, `[start, end]` or `start..=end`.
impl FromStr for Interval {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let body = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(trimmed);

        let (lhs, rhs) = body
            .split_once("..=")
            .or_else(|| body.split_once(','))
            .ok_or_else(|| IntervalError::Parse(s.to_string()))?;

        let start = lhs
            .trim()
            .parse::<i64>()
            .map_err(|e| IntervalError::Parse(format!("{s}: {e}")))?;
        let end = rhs
            .trim()
            .parse::<i64>()
            .map_err(|e| IntervalError::Parse(format!("{s}: {e}")))?;

        Self::new(start, end)
    }
}
