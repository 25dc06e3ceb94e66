#![no_main]
use libfuzzer_sys::fuzz_target;

use rangeset::RangeSet;
use std::ops::RangeInclusive;

fuzz_target!(|ranges: Vec<RangeInclusive<u8>>| {
    let set: RangeSet<u8> = ranges
        .into_iter()
        .filter(|r| r.start() <= r.end())
        .collect();

    // Both element traversals must agree with each other...
    let cursor: Vec<u8> = set.iter().collect();
    let composed: Vec<u8> = set.elements().collect();
    assert_eq!(cursor, composed);

    // ...be strictly ascending...
    for pair in cursor.windows(2) {
        assert!(pair[0] < pair[1]);
    }

    // ...and agree with `contains` over the whole key space.
    for value in u8::MIN..=u8::MAX {
        assert_eq!(set.contains(&value), cursor.binary_search(&value).is_ok());
    }
});
