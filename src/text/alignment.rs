//! Provenance entries linking normalized characters back to the original text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// A half-open range `[start, end)` of character positions in the original text.
///
/// Every character of a normalized text carries one alignment recording
/// which original characters produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Alignment {
    /// First original character position (inclusive).
    pub start: usize,
    /// Last original character position (exclusive).
    pub end: usize,
}

impl Alignment {
    /// Creates a new alignment.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The identity alignment for the character at `index`.
    #[inline]
    pub const fn single(index: usize) -> Self {
        Self::new(index, index + 1)
    }

    /// Number of original characters covered.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false for alignments produced by this crate.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Smallest alignment covering both `self` and `other`.
    #[inline]
    pub fn union(self, other: Alignment) -> Alignment {
        Alignment::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// Returns the alignment as a `Range`.
    #[inline]
    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<(usize, usize)> for Alignment {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}

impl From<Alignment> for Range<usize> {
    fn from(alignment: Alignment) -> Self {
        alignment.as_range()
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}
