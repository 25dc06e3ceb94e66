use core::ops::RangeInclusive;

pub trait RangeInclusiveExt<T> {
    fn touches<StepFnsT>(&self, other: &Self) -> bool
    where
        StepFnsT: StepFns<T>;
    fn merge(&self, other: &Self) -> Self;
}

impl<T> RangeInclusiveExt<T> for RangeInclusive<T>
where
    T: Ord + Clone,
{
    fn touches<StepFnsT>(&self, other: &Self) -> bool
    where
        StepFnsT: StepFns<T>,
    {
        // Touching for end-inclusive ranges is equivalent to overlapping
        // of each range widened by one at both ends.
        //
        // We never widen anything, though; that would overflow at the
        // extremes of the key space. Instead, whenever one range lies
        // strictly past the other, the nearer end is known not to be
        // the extreme value, so stepping it by one is safe.
        let reaches_right = if other.start() <= self.end() {
            true
        } else {
            // `self.end() < other.start()`, so `self.end()` is not the maximum.
            StepFnsT::add_one(self.end()) == *other.start()
        };
        let reaches_left = if other.end() >= self.start() {
            true
        } else {
            // `other.end() < self.start()`, so `other.end()` is not the maximum.
            StepFnsT::add_one(other.end()) == *self.start()
        };
        reaches_right && reaches_left
    }

    fn merge(&self, other: &Self) -> Self {
        use core::cmp::{max, min};
        min(self.start(), other.start()).clone()..=max(self.end(), other.end()).clone()
    }
}

/// Minimal version of unstable [Step](core::iter::Step) trait
/// from the Rust standard library.
///
/// This is needed for [RangeSet](crate::RangeSet)
/// because ranges stored in it interact with each other
/// when the start of one is _adjacent_ the end of another.
/// I.e. we need a concept of successor values rather than just
/// equality, and that is what [Step](core::iter::Step) will
/// eventually provide once it is stabilized.
///
/// It is also what lets us walk every element of a stored range
/// without relying on `RangeInclusive<T>: Iterator`.
//
// TODO: Deprecate and then eventually remove once
// https://github.com/rust-lang/rust/issues/42168 is stabilized.
pub trait StepLite {
    /// Returns the successor of the current value.
    ///
    /// Only called on values that are known not to be the maximum.
    fn add_one(&self) -> Self;
}

macro_rules! impl_step_lite {
    ($($t:ty)*) => ($(
        impl StepLite for $t {
            #[inline]
            fn add_one(&self) -> Self {
                self + 1
            }
        }
    )*)
}

impl_step_lite!(usize u8 u16 u32 u64 u128 isize i8 i16 i32 i64 i128);

/// Successor function defined independently of
/// the type it operates on.
///
/// This is useful as a workaround for Rust's "orphan rules",
/// which prevent you from implementing [StepLite] for `T` if `T`
/// is a foreign type. Pass the type implementing `StepFns<T>`
/// as the `StepFnsT` parameter of [RangeSet](crate::RangeSet).
pub trait StepFns<T> {
    fn add_one(start: &T) -> T;
}

impl<T> StepFns<T> for T
where
    T: StepLite,
{
    fn add_one(start: &T) -> T {
        start.add_one()
    }
}
