/*!
[`RangeSet`] is a set data structure whose members are stored as
closed ranges. Contiguous and overlapping ranges are coalesced into
a single range as they are inserted, so the set always holds the
smallest possible number of sorted, disjoint ranges.

A `RangeSet` can be traversed in two ways:

- as the compacted ranges themselves, through [`RangeSet::range_view`];
- as every individual value covered by the set, in ascending order,
  through [`RangeSet::iter`] (an explicit two-level cursor) or
  [`RangeSet::elements`] (the same values, built by flattening the
  range view).


# Example

```rust
use rangeset::RangeSet;

let mut set = RangeSet::new();
set.insert(4..=5);
set.insert(0..=2);

let ranges: Vec<_> = set.range_view().into_iter().cloned().collect();
assert_eq!(ranges, vec![0..=2, 4..=5]);

let values: Vec<i32> = set.iter().collect();
assert_eq!(values, vec![0, 1, 2, 4, 5]);

assert!(set.contains(&1));
assert!(!set.contains(&3));

// Touching ranges are merged.
set.insert(3..=3);
assert_eq!(format!("{:?}", set), "{0..=5}");
```


# Adjacency and the element type

Two closed ranges are coalesced if they overlap, _or_ if the end
of one is immediately followed by the start of the other
(e.g. `0..=2` and `3..=5`). Detecting the second case needs a notion of
"successor", so the element type must implement [`StepLite`] (done for
all standard integer types), or you must supply equivalent functions
through [`StepFns`] and [`RangeSet::new_with_step_fns`].


# Backwards ranges

[`RangeSet::insert`] panics if given a range whose start is after its end;
[`RangeSet::try_insert`] returns an [`InvalidRangeError`] instead,
and leaves the set untouched.


## Crate features

If you enable the **serde1** feature it will introduce a dependency on
the _serde_ crate and provide `Serialize` and `Deserialize`
implementations for [`RangeSet`].

You can enable the **serde1** feature in your _Cargo.toml_ file like so:

```toml
[dependencies]
rangeset = { version = "0.1", features = ["serde1"] }
```

You can similarly enable support for _quickcheck_ by enabling
the **quickcheck** feature.

The crate reports what it does through the [`log`](https://docs.rs/log)
facade at `trace` and `debug` level; it never installs a logger itself.


## Building without the Rust standard library

This crate can work without the full standard library available
(e.g. when running on bare metal without an operating system)
but relies on the presence of a global allocator &mdash;
i.e. it links the `core` and `alloc` crates, but not `std`.

*/

#![no_std]
extern crate alloc;
#[cfg(test)]
extern crate std;

pub mod error;
pub mod set;

#[cfg(test)]
mod dense;
mod std_ext;

pub use error::InvalidRangeError;
pub use set::RangeSet;
pub use std_ext::{StepFns, StepLite};
