use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::key::IntegerKey;
use super::SortingAlgorithms;
use crate::config::{SortConfig, DEFAULT_MAX_COUNTING_RANGE};
use crate::core::error::{AlgoError, AlgoResult};

/// Names the ten sorting algorithms so callers can pick one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Counting,
    Radix,
    Bucket,
    Shell,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 10] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
        SortAlgorithm::Counting,
        SortAlgorithm::Radix,
        SortAlgorithm::Bucket,
        SortAlgorithm::Shell,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Quick => "quick",
            SortAlgorithm::Heap => "heap",
            SortAlgorithm::Counting => "counting",
            SortAlgorithm::Radix => "radix",
            SortAlgorithm::Bucket => "bucket",
            SortAlgorithm::Shell => "shell",
        }
    }

    /// Whether equal keys keep their input order.
    ///
    /// Insertion and bubble sort are stable too, but only merge, counting and
    /// radix sort promise it.
    pub fn is_stable(&self) -> bool {
        matches!(
            self,
            SortAlgorithm::Merge | SortAlgorithm::Counting | SortAlgorithm::Radix
        )
    }

    /// Whether the algorithm only needs `Ord` rather than integer keys.
    pub fn is_comparison(&self) -> bool {
        !matches!(
            self,
            SortAlgorithm::Counting | SortAlgorithm::Radix | SortAlgorithm::Bucket
        )
    }

    /// Sorts with default parameters. Never panics.
    ///
    /// Counting sort falls back to radix sort when the key range exceeds
    /// [`DEFAULT_MAX_COUNTING_RANGE`]; the output is the same.
    pub fn sort<T: IntegerKey>(&self, arr: &[T]) -> Vec<T> {
        match self {
            SortAlgorithm::Bubble => SortingAlgorithms::bubble_sort(arr),
            SortAlgorithm::Selection => SortingAlgorithms::selection_sort(arr),
            SortAlgorithm::Insertion => SortingAlgorithms::insertion_sort(arr),
            SortAlgorithm::Merge => SortingAlgorithms::merge_sort(arr),
            SortAlgorithm::Quick => SortingAlgorithms::quick_sort(arr),
            SortAlgorithm::Heap => SortingAlgorithms::heap_sort(arr),
            SortAlgorithm::Counting => {
                SortingAlgorithms::try_counting_sort_by_key(arr, |v| *v, DEFAULT_MAX_COUNTING_RANGE)
                    .unwrap_or_else(|_| {
                        log::debug!("counting sort range too wide, using radix sort");
                        SortingAlgorithms::radix_sort(arr)
                    })
            }
            SortAlgorithm::Radix => SortingAlgorithms::radix_sort(arr),
            SortAlgorithm::Bucket => SortingAlgorithms::bucket_sort(arr),
            SortAlgorithm::Shell => SortingAlgorithms::shell_sort(arr),
        }
    }

    /// Sorts honoring the bucket sizing and counting range limit in `config`.
    pub fn sort_with<T: IntegerKey>(&self, arr: &[T], config: &SortConfig) -> AlgoResult<Vec<T>> {
        match self {
            SortAlgorithm::Counting => {
                SortingAlgorithms::try_counting_sort_by_key(arr, |v| *v, config.max_counting_range)
            }
            SortAlgorithm::Bucket => SortingAlgorithms::bucket_sort_with(arr, config.bucket_sizing),
            other => Ok(other.sort(arr)),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let normalized = normalized
            .strip_suffix("_sort")
            .or_else(|| normalized.strip_suffix(" sort"))
            .unwrap_or(normalized.as_str());

        SortAlgorithm::ALL
            .iter()
            .copied()
            .find(|algo| algo.name() == normalized)
            .ok_or_else(|| AlgoError::invalid_argument(format!("unknown sort algorithm: {}", s)))
    }
}
