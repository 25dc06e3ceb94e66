use rangeset::RangeSet;

fn main() {
    env_logger::init();

    let mut set = RangeSet::new();
    set.insert(4..=5);
    set.insert(0..=2);

    for range in set.range_view() {
        println!("{:?}", range);
    }

    for value in &set {
        println!("{}", value);
    }

    // Inserting the missing value joins both ranges into one.
    set.insert(3..=3);
    println!("{:?}", set);

    // A backwards range is refused rather than stored.
    #[allow(clippy::reversed_empty_ranges)]
    let backwards = 9..=7;
    if let Err(err) = set.try_insert(backwards) {
        println!("{}", err);
    }
}
