use core::fmt::{self, Debug};
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ops::RangeInclusive;

use crate::std_ext::StepFns;

/// A read-only view of the ranges stored in a [`RangeSet`](crate::RangeSet).
///
/// This `struct` is created by the [`range_view`] method on `RangeSet`.
/// Every call to [`iter`](RangeView::iter) (or `into_iter`) starts a fresh
/// traversal from the first range, regardless of any earlier traversal.
///
/// [`range_view`]: crate::RangeSet::range_view
pub struct RangeView<'a, T> {
    ranges: &'a [RangeInclusive<T>],
}

impl<'a, T> RangeView<'a, T> {
    pub(crate) fn new(ranges: &'a [RangeInclusive<T>]) -> Self {
        RangeView { ranges }
    }

    /// Gets an ordered iterator over the stored ranges.
    pub fn iter(&self) -> Ranges<'a, T> {
        Ranges(self.ranges.iter())
    }

    /// Number of stored ranges.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl<T> Clone for RangeView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for RangeView<'_, T> {}

impl<T: Debug> Debug for RangeView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.ranges.iter()).finish()
    }
}

impl<'a, T> IntoIterator for RangeView<'a, T> {
    type Item = &'a RangeInclusive<T>;
    type IntoIter = Ranges<'a, T>;
    fn into_iter(self) -> Ranges<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &RangeView<'a, T> {
    type Item = &'a RangeInclusive<T>;
    type IntoIter = Ranges<'a, T>;
    fn into_iter(self) -> Ranges<'a, T> {
        self.iter()
    }
}

/// An iterator over the ranges of a [`RangeView`].
pub struct Ranges<'a, T>(core::slice::Iter<'a, RangeInclusive<T>>);
impl<T: Debug> Debug for Ranges<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
impl<'a, T: 'a> Iterator for Ranges<'a, T> {
    type Item = &'a RangeInclusive<T>;
    fn next(&mut self) -> Option<&'a RangeInclusive<T>> {
        self.0.next()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
    fn last(mut self) -> Option<&'a RangeInclusive<T>> {
        self.next_back()
    }
}
impl<T> FusedIterator for Ranges<'_, T> {}

impl<'a, T: 'a> DoubleEndedIterator for Ranges<'a, T> {
    fn next_back(&mut self) -> Option<&'a RangeInclusive<T>> {
        self.0.next_back()
    }
}
impl<T> ExactSizeIterator for Ranges<'_, T> {
    fn len(&self) -> usize {
        self.0.len()
    }
}
impl<T> Clone for Ranges<'_, T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

/// A lazy iterator over every value of a single closed range.
///
/// Unlike `RangeInclusive<T>` itself, this only needs
/// [`StepFns`](crate::StepFns) to advance, and never steps
/// past the end of the range (so it is safe at `T::MAX`).
pub struct RangeElements<T, StepFnsT = T> {
    // `None` once the end of the range has been yielded.
    next: Option<T>,
    end: T,
    _phantom: PhantomData<StepFnsT>,
}

impl<T, StepFnsT> RangeElements<T, StepFnsT>
where
    T: Ord + Clone,
    StepFnsT: StepFns<T>,
{
    pub fn new(range: &RangeInclusive<T>) -> Self {
        RangeElements {
            next: (range.start() <= range.end()).then(|| range.start().clone()),
            end: range.end().clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T, StepFnsT> Iterator for RangeElements<T, StepFnsT>
where
    T: Ord + Clone,
    StepFnsT: StepFns<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.next.take()?;
        if current < self.end {
            self.next = Some(StepFnsT::add_one(&current));
        }
        Some(current)
    }
}

impl<T, StepFnsT> FusedIterator for RangeElements<T, StepFnsT>
where
    T: Ord + Clone,
    StepFnsT: StepFns<T>,
{
}

impl<T: Clone, StepFnsT> Clone for RangeElements<T, StepFnsT> {
    fn clone(&self) -> Self {
        RangeElements {
            next: self.next.clone(),
            end: self.end.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T: Debug, StepFnsT> Debug for RangeElements<T, StepFnsT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeElements")
            .field("next", &self.next)
            .field("end", &self.end)
            .finish()
    }
}

/// An iterator over every value covered by a [`RangeSet`](crate::RangeSet).
///
/// This `struct` is created by the [`iter`] method on `RangeSet`. See its
/// documentation for more.
///
/// It holds a cursor over the stored ranges, and a cursor over the
/// values of the range currently being walked; no per-range sequence
/// is ever collected.
///
/// [`iter`]: crate::RangeSet::iter
pub struct Iter<'a, T, StepFnsT = T> {
    ranges: Ranges<'a, T>,
    elements: Option<RangeElements<T, StepFnsT>>,
}

impl<'a, T, StepFnsT> Iter<'a, T, StepFnsT> {
    pub(crate) fn new(ranges: Ranges<'a, T>) -> Self {
        Iter {
            ranges,
            elements: None,
        }
    }
}

impl<'a, T, StepFnsT> Iterator for Iter<'a, T, StepFnsT>
where
    T: Ord + Clone,
    StepFnsT: StepFns<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if let Some(element) = self.elements.as_mut().and_then(Iterator::next) {
            return Some(element);
        }
        // Current range is used up (or we haven't started yet);
        // move on to the next one. Stored ranges are never empty,
        // so its first value is always there.
        let range = self.ranges.next()?;
        self.elements
            .insert(RangeElements::new(range))
            .next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Each remaining range holds at least one value.
        (self.ranges.len(), None)
    }
}

// `Iter` is always fused: once the range cursor runs dry it stays dry.
impl<T, StepFnsT> FusedIterator for Iter<'_, T, StepFnsT>
where
    T: Ord + Clone,
    StepFnsT: StepFns<T>,
{
}

impl<T: Clone, StepFnsT> Clone for Iter<'_, T, StepFnsT> {
    fn clone(&self) -> Self {
        Iter {
            ranges: self.ranges.clone(),
            elements: self.elements.clone(),
        }
    }
}

impl<T: Debug, StepFnsT> Debug for Iter<'_, T, StepFnsT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("ranges", &self.ranges)
            .field("elements", &self.elements)
            .finish()
    }
}

/// An owning iterator over the ranges of a [`RangeSet`](crate::RangeSet).
///
/// This `struct` is created by the `into_iter` method on `RangeSet`
/// (provided by the `IntoIterator` trait).
pub struct IntoIter<T> {
    inner: alloc::vec::IntoIter<RangeInclusive<T>>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(inner: alloc::vec::IntoIter<RangeInclusive<T>>) -> Self {
        IntoIter { inner }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = RangeInclusive<T>;
    fn next(&mut self) -> Option<RangeInclusive<T>> {
        self.inner.next()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<RangeInclusive<T>> {
        self.inner.next_back()
    }
}
impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}
impl<T> FusedIterator for IntoIter<T> {}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}
