//! Integer keys for the distribution sorts.
//!
//! Counting, radix and bucket sort index arrays by key value, so they need an
//! exact integer view of each key. Every primitive integer up to 64 bits widens
//! losslessly into `i128`, which leaves headroom for `max - min + 1` and for the
//! magnitude of `i64::MIN`.

/// An integer type usable as a distribution-sort key.
pub trait IntegerKey: Copy + Ord {
    fn to_i128(self) -> i128;
}

macro_rules! impl_integer_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntegerKey for $ty {
                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_integer_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Smallest and largest key in `items`, or `None` when empty.
pub(crate) fn key_bounds<T, K, F>(items: &[T], key: &F) -> Option<(i128, i128)>
where
    K: IntegerKey,
    F: Fn(&T) -> K,
{
    let mut iter = items.iter().map(|item| key(item).to_i128());
    let first = iter.next()?;
    Some(iter.fold((first, first), |(lo, hi), k| (lo.min(k), hi.max(k))))
}
