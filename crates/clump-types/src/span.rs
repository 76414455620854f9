use std::fmt;

use serde::{Deserialize, Serialize};

/// Half-open interval `[start, end)` on the integer line.
///
/// `end` is exclusive, so two spans that merely touch (`a.end == b.start`)
/// share no point and do not overlap. A span with `start == end` is empty
/// but still a valid position on the line.
///
/// Spans order by `start`, then by `end`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Inclusive lower bound.
    pub start: i64,
    /// Exclusive upper bound.
    pub end: i64,
}

impl Span {
    /// Create a span from raw bounds.
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Width of the span (`end - start`).
    pub const fn width(&self) -> i64 {
        self.end - self.start
    }

    /// Returns `true` if the span covers no points.
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Returns `true` if the bounds are reversed (`start > end`).
    ///
    /// Inverted spans have no half-open reading; the store rejects them
    /// at insertion.
    pub const fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Strict overlap test: the spans share at least one point, or one is
    /// an empty span lying strictly inside the other.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Overlap test with merge slack: spans separated by a gap strictly
    /// smaller than `slack` also count as overlapping. Non-positive slack
    /// behaves exactly like [`overlaps`].
    ///
    /// [`overlaps`]: Span::overlaps
    pub fn overlaps_within(&self, other: &Self, slack: i64) -> bool {
        let slack = slack.max(0);
        self.start < other.end.saturating_add(slack)
            && other.start < self.end.saturating_add(slack)
    }

    /// Smallest span covering both `self` and `other`.
    pub fn hull(&self, other: &Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl PartialOrd for Span {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Span {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.start
            .cmp(&other.start)
            .then(self.end.cmp(&other.end))
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Span[{}, {})", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
