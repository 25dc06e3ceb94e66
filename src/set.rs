use crate::error::InvalidRangeError;
use crate::std_ext::*;
use alloc::vec::Vec;
use core::fmt::{self, Debug};
use core::iter::FromIterator;
use core::marker::PhantomData;
use core::ops::RangeInclusive;
use core::prelude::v1::*;

use log::{debug, trace};

#[cfg(feature = "serde1")]
use serde::{
    de::{SeqAccess, Visitor},
    ser::SerializeSeq,
    Deserialize, Deserializer, Serialize, Serializer,
};

mod iterators;

pub use iterators::{IntoIter, Iter, RangeElements, RangeView, Ranges};

/// A set of discrete values, stored as ranges bounded
/// inclusively below and above `(start..=end)`.
///
/// Overlapping and immediately adjacent ranges are coalesced
/// into a single range on insertion, so the stored ranges are
/// always sorted, disjoint, and maximal: no two of them
/// could be merged into one.
///
/// A successor function must be provided for the element type `T`,
/// so that we can detect adjacent but non-overlapping (closed) ranges,
/// and so that we can walk every element of a range.
/// You can provide it either by implementing the
/// [StepLite](crate::StepLite) trait for `T`, or, if this is impossible
/// because of Rust's "orphan rules", you can provide an equivalent free
/// function using the `StepFnsT` type parameter.
/// [StepLite](crate::StepLite) is implemented for all standard integer types.
pub struct RangeSet<T, StepFnsT = T> {
    // Sorted by start; no two neighbours overlap or are adjacent.
    ranges: Vec<RangeInclusive<T>>,
    _phantom: PhantomData<StepFnsT>,
}

impl<T> Default for RangeSet<T, T>
where
    T: Ord + Clone + StepLite,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RangeSet<T, T>
where
    T: Ord + Clone + StepLite,
{
    /// Makes a new empty `RangeSet`.
    pub fn new() -> Self {
        Self::new_with_step_fns()
    }
}

impl<T, StepFnsT> RangeSet<T, StepFnsT>
where
    T: Ord + Clone,
    StepFnsT: StepFns<T>,
{
    /// Makes a new empty `RangeSet`, specifying a successor
    /// function defined separately from `T` itself.
    ///
    /// **NOTE:** This will likely be deprecated and then eventually
    /// removed once the standard library's [Step](core::iter::Step)
    /// trait is stabilised.
    pub fn new_with_step_fns() -> Self {
        Self {
            ranges: Vec::new(),
            _phantom: PhantomData,
        }
    }

    /// Returns `true` if the set covers no values at all.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Returns the number of (maximal) ranges stored in the set.
    ///
    /// This is _not_ the number of values covered by the set;
    /// for that, count the elements yielded by [`iter`](RangeSet::iter).
    pub fn range_count(&self) -> usize {
        self.ranges.len()
    }

    /// Returns a reference to the stored range covering the given value, if any.
    pub fn get(&self, value: &T) -> Option<&RangeInclusive<T>> {
        self.ranges.iter().find(|range| range.contains(value))
    }

    /// Returns `true` if any range in the set covers the specified value.
    pub fn contains(&self, value: &T) -> bool {
        self.ranges.iter().any(|range| range.contains(value))
    }

    /// Insert a range into the set.
    ///
    /// If the inserted range either overlaps or is immediately adjacent
    /// any existing range, then the ranges will be coalesced into
    /// a single contiguous range.
    ///
    /// # Panics
    ///
    /// Panics if range `start > end`.
    /// Use [`try_insert`](RangeSet::try_insert) to handle that case without panicking.
    pub fn insert(&mut self, range: RangeInclusive<T>) {
        // Backwards ranges don't make sense.
        // `RangeInclusive` doesn't enforce this,
        // and we don't want weird explosions further down
        // if someone gives us such a range.
        assert!(
            range.start() <= range.end(),
            "Range start can not be after range end"
        );
        self.insert_unchecked(range);
    }

    /// Insert a range into the set, or hand it back inside an error
    /// if its start is after its end.
    ///
    /// On error the set is left exactly as it was.
    pub fn try_insert(&mut self, range: RangeInclusive<T>) -> Result<(), InvalidRangeError<T>> {
        if range.start() > range.end() {
            debug!("rejected backwards range");
            return Err(InvalidRangeError::new(range));
        }
        self.insert_unchecked(range);
        Ok(())
    }

    fn insert_unchecked(&mut self, range: RangeInclusive<T>) {
        self.ranges.push(range);
        // `sort_by` is stable, but ties don't matter anyway:
        // two ranges with the same start always overlap,
        // and will be merged below.
        self.ranges.sort_by(|a, b| a.start().cmp(b.start()));
        self.coalesce();
        trace!("inserted range; set now holds {} ranges", self.ranges.len());
    }

    // Single left-to-right pass over ranges sorted by start,
    // folding each one into its predecessor where they touch.
    fn coalesce(&mut self) {
        let sorted = core::mem::take(&mut self.ranges);
        let mut coalesced: Vec<RangeInclusive<T>> = Vec::with_capacity(sorted.len());
        for range in sorted {
            match coalesced.last_mut() {
                Some(last) if last.touches::<StepFnsT>(&range) => {
                    *last = last.merge(&range);
                }
                _ => coalesced.push(range),
            }
        }
        self.ranges = coalesced;
    }

    /// Gets a restartable view over all stored ranges, in ascending order.
    pub fn range_view(&self) -> RangeView<'_, T> {
        RangeView::new(&self.ranges)
    }

    /// Gets an ordered iterator over every value covered by the set.
    ///
    /// The iterator walks one stored range at a time, without
    /// allocating anything along the way.
    pub fn iter(&self) -> Iter<'_, T, StepFnsT> {
        Iter::new(self.range_view().iter())
    }

    /// Gets an ordered iterator over every value covered by the set,
    /// built by flattening [`range_view`](RangeSet::range_view).
    ///
    /// Yields exactly the same values as [`iter`](RangeSet::iter).
    pub fn elements(&self) -> impl Iterator<Item = T> + '_ {
        self.range_view()
            .into_iter()
            .flat_map(RangeElements::<T, StepFnsT>::new)
    }
}

impl<T, StepFnsT> Clone for RangeSet<T, StepFnsT>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            ranges: self.ranges.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T, StepFnsT> PartialEq for RangeSet<T, StepFnsT>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.ranges == other.ranges
    }
}

impl<T, StepFnsT> Eq for RangeSet<T, StepFnsT> where T: Eq {}

// We can't just derive this automatically, because that would
// expose irrelevant (and private) implementation details.
// Instead render it as the set of stored ranges.
impl<T: Debug, StepFnsT> Debug for RangeSet<T, StepFnsT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.ranges.iter()).finish()
    }
}

impl<T, StepFnsT> FromIterator<RangeInclusive<T>> for RangeSet<T, StepFnsT>
where
    T: Ord + Clone,
    StepFnsT: StepFns<T>,
{
    fn from_iter<I: IntoIterator<Item = RangeInclusive<T>>>(iter: I) -> Self {
        let mut range_set = RangeSet::new_with_step_fns();
        range_set.extend(iter);
        range_set
    }
}

impl<T, StepFnsT> Extend<RangeInclusive<T>> for RangeSet<T, StepFnsT>
where
    T: Ord + Clone,
    StepFnsT: StepFns<T>,
{
    fn extend<I: IntoIterator<Item = RangeInclusive<T>>>(&mut self, iter: I) {
        iter.into_iter().for_each(move |range| {
            self.insert(range);
        })
    }
}

impl<T, StepFnsT> IntoIterator for RangeSet<T, StepFnsT> {
    type Item = RangeInclusive<T>;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.ranges.into_iter())
    }
}

impl<'a, T, StepFnsT> IntoIterator for &'a RangeSet<T, StepFnsT>
where
    T: Ord + Clone,
    StepFnsT: StepFns<T>,
{
    type Item = T;
    type IntoIter = Iter<'a, T, StepFnsT>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde1")]
impl<T, StepFnsT> Serialize for RangeSet<T, StepFnsT>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.ranges.len()))?;
        for range in self.ranges.iter() {
            seq.serialize_element(&(range.start(), range.end()))?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde1")]
impl<'de, T, StepFnsT> Deserialize<'de> for RangeSet<T, StepFnsT>
where
    T: Ord + Clone + Debug + Deserialize<'de>,
    StepFnsT: StepFns<T>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(RangeSetVisitor::new())
    }
}

#[cfg(feature = "serde1")]
struct RangeSetVisitor<T, StepFnsT> {
    marker: PhantomData<fn() -> RangeSet<T, StepFnsT>>,
}

#[cfg(feature = "serde1")]
impl<T, StepFnsT> RangeSetVisitor<T, StepFnsT> {
    fn new() -> Self {
        RangeSetVisitor {
            marker: PhantomData,
        }
    }
}

#[cfg(feature = "serde1")]
impl<'de, T, StepFnsT> Visitor<'de> for RangeSetVisitor<T, StepFnsT>
where
    T: Ord + Clone + Debug + Deserialize<'de>,
    StepFnsT: StepFns<T>,
{
    type Value = RangeSet<T, StepFnsT>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("RangeSet")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        use serde::de::Error;

        let mut range_set = RangeSet::new_with_step_fns();
        while let Some((start, end)) = access.next_element::<(T, T)>()? {
            range_set.try_insert(start..=end).map_err(A::Error::custom)?;
        }
        Ok(range_set)
    }
}

#[cfg(feature = "quickcheck")]
impl<T> quickcheck::Arbitrary for RangeSet<T>
where
    T: quickcheck::Arbitrary + Ord + StepLite,
{
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        // Swap bounds rather than discarding backwards pairs,
        // so small generators still produce interesting sets.
        <Vec<(T, T)> as quickcheck::Arbitrary>::arbitrary(g)
            .into_iter()
            .map(|(a, b)| if a <= b { a..=b } else { b..=a })
            .collect()
    }
}
