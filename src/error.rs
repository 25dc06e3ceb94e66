use core::ops::RangeInclusive;

use thiserror::Error;

/// Error returned by [`RangeSet::try_insert`](crate::RangeSet::try_insert)
/// when asked to store a range whose start is after its end.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("range start {start:?} is after range end {end:?}")]
pub struct InvalidRangeError<T> {
    pub start: T,
    pub end: T,
}

impl<T> InvalidRangeError<T> {
    pub(crate) fn new(range: RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        InvalidRangeError { start, end }
    }

    /// Recovers the rejected range.
    pub fn into_range(self) -> RangeInclusive<T> {
        self.start..=self.end
    }
}
