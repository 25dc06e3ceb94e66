use alloc::{collections::BTreeSet, vec::Vec};
use core::ops::RangeInclusive;

use super::RangeSet;

// A simple but infeasibly slow and memory-hungry
// version of `RangeSet` for testing.
//
// Only understands `u32` values, so that we don't
// have to be generic over `step`. This is just for
// testing, so it's fine.
#[derive(Eq, PartialEq, Debug)]
pub struct DenseU32RangeSet {
    // Inner B-Tree set. Stores every value directly
    // rather than as ranges.
    bts: BTreeSet<u32>,
}

impl DenseU32RangeSet {
    pub fn new() -> DenseU32RangeSet {
        DenseU32RangeSet {
            bts: BTreeSet::new(),
        }
    }

    pub fn insert(&mut self, range: RangeInclusive<u32>) {
        for v in range {
            self.bts.insert(v);
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.bts.iter(),
            current: None,
        }
    }

    // Vecs are easier to use for assertions than iterators,
    // because you don't have to consume them to compare them.
    pub fn to_vec(&self) -> Vec<RangeInclusive<u32>> {
        self.iter().collect()
    }

    pub fn values(&self) -> Vec<u32> {
        self.bts.iter().copied().collect()
    }
}

impl From<RangeSet<u32>> for DenseU32RangeSet {
    fn from(range_set: RangeSet<u32>) -> Self {
        let mut dense = Self::new();
        for range in range_set {
            dense.insert(range);
        }
        dense
    }
}

pub struct Iter<'a> {
    inner: alloc::collections::btree_set::Iter<'a, u32>,
    // Current range being built for output.
    // We modify it as we iterate through the underlying
    // dense set.
    current: Option<RangeInclusive<u32>>,
}

// Coalesce values from the underlying dense set as we go.
impl<'a> Iterator for Iter<'a> {
    type Item = RangeInclusive<u32>;

    fn next(&mut self) -> Option<RangeInclusive<u32>> {
        if let Some(&next_dense) = self.inner.next() {
            if let Some(current) = &mut self.current {
                // We're already building a range. Can we extend it?
                if current.end() + 1 == next_dense {
                    // This immediately follows the last value; we can extend it.
                    *current = *current.start()..=next_dense;
                    // Recurse until we find a way to flush it.
                    self.next()
                } else {
                    // There's a gap; flush the one we were working on and start a new one.
                    let item_to_yield = current.clone();
                    *current = next_dense..=next_dense;
                    Some(item_to_yield)
                }
            } else {
                // We're not building a range yet; start a new one.
                self.current = Some(next_dense..=next_dense);
                // Recurse until we find a way to flush it.
                self.next()
            }
        } else {
            // We reached the end of the underlying dense set.
            // Flush the range we were building, if any.
            self.current.take()
        }
    }
}
