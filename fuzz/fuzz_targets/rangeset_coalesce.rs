#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use rangeset::RangeSet;
use std::ops::RangeInclusive;

#[derive(Clone, Debug, Arbitrary)]
enum Op {
    Insert(RangeInclusive<u8>),
    TryInsert(RangeInclusive<u8>),
}

impl Op {
    fn apply(self, set: &mut RangeSet<u8>) {
        match self {
            Op::Insert(r) if r.start() <= r.end() => set.insert(r),
            Op::Insert(_) => (),
            Op::TryInsert(r) => {
                let backwards = r.start() > r.end();
                assert_eq!(set.try_insert(r).is_err(), backwards);
            }
        }
    }
}

fuzz_target!(|ops: Vec<Op>| {
    let mut set = RangeSet::new();

    for op in ops {
        op.apply(&mut set);
    }

    // Stored ranges must be sorted, and must neither overlap nor touch.
    let mut peek = set.range_view().into_iter().peekable();
    while let Some(range) = peek.next() {
        assert!(range.start() <= range.end());
        if let Some(next_range) = peek.peek() {
            assert!(range.end() < next_range.start());
            if *range.end() == next_range.start() - 1 {
                panic!()
            }
        }
    }
});
