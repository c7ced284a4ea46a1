//! Sorting algorithms
//!
//! Every sort takes a borrowed slice and returns a new sorted `Vec`; the input
//! is never mutated. Comparison sorts work over any `T: Ord + Clone`, the
//! distribution sorts (counting, radix, bucket) over primitive integer keys.

mod algorithm;
mod distribution;
mod divide;
mod key;
mod quadratic;
mod stats;

pub use algorithm::SortAlgorithm;
pub use distribution::{BucketSizing, DEFAULT_BUCKET_COUNT, MAX_BUCKET_COUNT};
pub use key::IntegerKey;
pub use stats::SortStats;

/// Sorting algorithms
pub struct SortingAlgorithms;

impl SortingAlgorithms {
    /// Whether `arr` is in non-decreasing order.
    pub fn is_sorted<T: Ord>(arr: &[T]) -> bool {
        arr.windows(2).all(|w| w[0] <= w[1])
    }
}
