//! Distribution sorts over integer keys: counting, radix, bucket.

use serde::{Deserialize, Serialize};

use super::key::{key_bounds, IntegerKey};
use super::SortingAlgorithms;
use crate::core::error::{AlgoError, AlgoResult};

const RADIX: usize = 10;

/// Bucket count used by [`SortingAlgorithms::bucket_sort`].
pub const DEFAULT_BUCKET_COUNT: usize = 5;

/// Upper bound on the number of buckets a single bucket sort may allocate.
pub const MAX_BUCKET_COUNT: usize = 1 << 16;

/// How bucket sort partitions the key range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketSizing {
    /// A fixed number of equal-width buckets, each `(max - min + 1) / count` wide.
    Count(usize),
    /// Buckets of a fixed key width; the count follows from the range.
    Width(u64),
}

impl Default for BucketSizing {
    fn default() -> Self {
        BucketSizing::Count(DEFAULT_BUCKET_COUNT)
    }
}

impl BucketSizing {
    pub fn validate(&self) -> AlgoResult<()> {
        match *self {
            BucketSizing::Count(0) => Err(AlgoError::invalid_argument(
                "bucket count must be greater than 0",
            )),
            BucketSizing::Count(count) if count > MAX_BUCKET_COUNT => {
                Err(AlgoError::invalid_argument(format!(
                    "bucket count {} exceeds the limit of {}",
                    count, MAX_BUCKET_COUNT
                )))
            }
            BucketSizing::Width(0) => Err(AlgoError::invalid_argument(
                "bucket width must be greater than 0",
            )),
            _ => Ok(()),
        }
    }
}

/// Resolved bucket geometry for one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BucketLayout {
    min: i128,
    count: usize,
    rule: BucketRule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BucketRule {
    /// `floor((k - min) * count / span)`, span = max - min + 1
    Proportional { span: u128 },
    /// `floor((k - min) / width)`
    Fixed { width: u128 },
}

impl BucketLayout {
    fn by_count(count: usize, min: i128, max: i128) -> Self {
        Self {
            min,
            count,
            rule: BucketRule::Proportional {
                span: (max - min + 1) as u128,
            },
        }
    }

    fn resolve(sizing: BucketSizing, min: i128, max: i128) -> AlgoResult<Self> {
        sizing.validate()?;
        match sizing {
            BucketSizing::Count(count) => Ok(Self::by_count(count, min, max)),
            BucketSizing::Width(width) => {
                let width = width as u128;
                let count = (max - min) as u128 / width + 1;
                if count > MAX_BUCKET_COUNT as u128 {
                    return Err(AlgoError::invalid_argument(format!(
                        "bucket width {} yields {} buckets, above the limit of {}",
                        width, count, MAX_BUCKET_COUNT
                    )));
                }
                Ok(Self {
                    min,
                    count: count as usize,
                    rule: BucketRule::Fixed { width },
                })
            }
        }
    }

    fn index(&self, key: i128) -> usize {
        let offset = (key - self.min) as u128;
        let idx = match self.rule {
            BucketRule::Proportional { span } => offset * self.count as u128 / span,
            BucketRule::Fixed { width } => offset / width,
        };
        // the maximum key lands in the last bucket
        (idx as usize).min(self.count - 1)
    }
}

impl SortingAlgorithms {
    /// Counting sort. Stable.
    ///
    /// Allocates one counter per value in `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if the key range cannot be allocated, e.g. `[i64::MIN, i64::MAX]`
    /// overflows the counter capacity. Use
    /// [`SortingAlgorithms::try_counting_sort_by_key`] to bound it up front,
    /// or [`SortAlgorithm::sort`](super::SortAlgorithm::sort) which falls back
    /// to radix sort.
    pub fn counting_sort<T: IntegerKey>(arr: &[T]) -> Vec<T> {
        Self::counting_sort_by_key(arr, |v| *v)
    }

    /// Counting sort of arbitrary items by an integer key. Stable.
    ///
    /// # Panics
    ///
    /// Same allocation caveat as [`SortingAlgorithms::counting_sort`].
    pub fn counting_sort_by_key<T, K, F>(items: &[T], key: F) -> Vec<T>
    where
        T: Clone,
        K: IntegerKey,
        F: Fn(&T) -> K,
    {
        let Some((min, max)) = key_bounds(items, &key) else {
            return Vec::new();
        };
        let range = usize::try_from(max - min + 1).unwrap_or(usize::MAX);
        Self::counting_pass(items, &key, min, range)
    }

    /// Like [`SortingAlgorithms::counting_sort_by_key`] but rejects inputs
    /// whose key range `max - min + 1` exceeds `max_range`.
    pub fn try_counting_sort_by_key<T, K, F>(
        items: &[T],
        key: F,
        max_range: u64,
    ) -> AlgoResult<Vec<T>>
    where
        T: Clone,
        K: IntegerKey,
        F: Fn(&T) -> K,
    {
        let Some((min, max)) = key_bounds(items, &key) else {
            return Ok(Vec::new());
        };
        let range = max - min + 1;
        if range > max_range as i128 {
            log::debug!(
                "counting sort rejected: key range {} exceeds limit {}",
                range,
                max_range
            );
            return Err(AlgoError::invalid_argument(format!(
                "counting sort key range {} exceeds the limit of {}",
                range, max_range
            )));
        }
        let range = usize::try_from(range).map_err(|_| {
            AlgoError::invalid_argument(format!("counting sort key range {} is not addressable", range))
        })?;
        Ok(Self::counting_pass(items, &key, min, range))
    }

    fn counting_pass<T, K, F>(items: &[T], key: &F, min: i128, range: usize) -> Vec<T>
    where
        T: Clone,
        K: IntegerKey,
        F: Fn(&T) -> K,
    {
        let slot = |item: &T| (key(item).to_i128() - min) as usize;

        let mut count = vec![0usize; range];
        for item in items {
            count[slot(item)] += 1;
        }

        // count[i] becomes one past the last output position of slot i
        for i in 1..range {
            count[i] += count[i - 1];
        }

        // filling from the back keeps equal keys in input order
        let mut output: Vec<Option<T>> = vec![None; items.len()];
        for item in items.iter().rev() {
            let s = slot(item);
            count[s] -= 1;
            output[count[s]] = Some(item.clone());
        }

        output.into_iter().flatten().collect()
    }

    /// LSD radix sort, base 10, with counting sort as the per-digit pass.
    ///
    /// Negative and non-negative keys are sorted separately by magnitude and
    /// recombined as `reverse(negatives) ++ non_negatives`.
    pub fn radix_sort<T: IntegerKey>(arr: &[T]) -> Vec<T> {
        Self::radix_sort_by_key(arr, |v| *v)
    }

    /// Radix sort of arbitrary items by an integer key. Stable, including
    /// among equal negative keys.
    pub fn radix_sort_by_key<T, K, F>(items: &[T], key: F) -> Vec<T>
    where
        T: Clone,
        K: IntegerKey,
        F: Fn(&T) -> K,
    {
        if items.is_empty() {
            return Vec::new();
        }

        // Negatives go in reversed, so the reversal after sorting by magnitude
        // puts equal keys back in input order.
        let negatives: Vec<(u128, T)> = items
            .iter()
            .rev()
            .filter_map(|item| {
                let k = key(item).to_i128();
                (k < 0).then(|| (k.unsigned_abs(), item.clone()))
            })
            .collect();
        let non_negatives: Vec<(u128, T)> = items
            .iter()
            .filter_map(|item| {
                let k = key(item).to_i128();
                (k >= 0).then(|| (k as u128, item.clone()))
            })
            .collect();

        let mut result: Vec<T> = Self::radix_lsd(negatives)
            .into_iter()
            .rev()
            .map(|(_, item)| item)
            .collect();
        result.extend(Self::radix_lsd(non_negatives).into_iter().map(|(_, item)| item));
        result
    }

    fn radix_lsd<T>(mut keyed: Vec<(u128, T)>) -> Vec<(u128, T)> {
        let Some(max) = keyed.iter().map(|(magnitude, _)| *magnitude).max() else {
            return keyed;
        };

        let mut exp: u128 = 1;
        while max / exp > 0 {
            keyed = Self::counting_sort_by_digit(keyed, exp);
            match exp.checked_mul(RADIX as u128) {
                Some(next) => exp = next,
                None => break,
            }
        }

        keyed
    }

    fn counting_sort_by_digit<T>(keyed: Vec<(u128, T)>, exp: u128) -> Vec<(u128, T)> {
        let digit = |magnitude: u128| ((magnitude / exp) % RADIX as u128) as usize;

        let mut count = [0usize; RADIX];
        for (magnitude, _) in &keyed {
            count[digit(*magnitude)] += 1;
        }
        for i in 1..RADIX {
            count[i] += count[i - 1];
        }

        let mut output: Vec<Option<(u128, T)>> = (0..keyed.len()).map(|_| None).collect();
        for entry in keyed.into_iter().rev() {
            let d = digit(entry.0);
            count[d] -= 1;
            output[count[d]] = Some(entry);
        }

        output.into_iter().flatten().collect()
    }

    /// Bucket sort with [`DEFAULT_BUCKET_COUNT`] equal-width buckets,
    /// each finished with insertion sort.
    pub fn bucket_sort<T: IntegerKey>(arr: &[T]) -> Vec<T> {
        let Some((min, max)) = key_bounds(arr, &|v: &T| *v) else {
            return Vec::new();
        };
        let layout = BucketLayout::by_count(DEFAULT_BUCKET_COUNT, min, max);
        Self::distribute(arr, &layout)
    }

    /// Bucket sort with caller-chosen bucket sizing.
    pub fn bucket_sort_with<T: IntegerKey>(arr: &[T], sizing: BucketSizing) -> AlgoResult<Vec<T>> {
        sizing.validate()?;
        let Some((min, max)) = key_bounds(arr, &|v: &T| *v) else {
            return Ok(Vec::new());
        };
        let layout = BucketLayout::resolve(sizing, min, max)?;
        Ok(Self::distribute(arr, &layout))
    }

    fn distribute<T: IntegerKey>(arr: &[T], layout: &BucketLayout) -> Vec<T> {
        let mut buckets: Vec<Vec<T>> = vec![Vec::new(); layout.count];
        for &value in arr {
            buckets[layout.index(value.to_i128())].push(value);
        }

        let mut result = Vec::with_capacity(arr.len());
        for bucket in buckets.iter().filter(|b| !b.is_empty()) {
            result.extend(Self::insertion_sort(bucket));
        }
        result
    }
}
