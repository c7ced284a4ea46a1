//! Divide-and-conquer and heap based sorts: merge, quick, heap.

use super::{SortStats, SortingAlgorithms};

impl SortingAlgorithms {
    /// Merge sort. Splits at `n / 2` and prefers the left element on ties,
    /// which keeps the sort stable at every level.
    ///
    /// Recursion depth is `log2(n)`.
    pub fn merge_sort<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
        Self::merge_sort_with_stats(arr).0
    }

    pub fn merge_sort_with_stats<T: Ord + Clone>(arr: &[T]) -> (Vec<T>, SortStats) {
        let mut stats = SortStats::new();
        let result = Self::merge_sort_recursive(arr, &mut stats);
        (result, stats)
    }

    fn merge_sort_recursive<T: Ord + Clone>(arr: &[T], stats: &mut SortStats) -> Vec<T> {
        if arr.len() <= 1 {
            return arr.to_vec();
        }

        let mid = arr.len() / 2;
        let left = Self::merge_sort_recursive(&arr[..mid], stats);
        let right = Self::merge_sort_recursive(&arr[mid..], stats);

        Self::merge(&left, &right, stats)
    }

    fn merge<T: Ord + Clone>(left: &[T], right: &[T], stats: &mut SortStats) -> Vec<T> {
        let mut result = Vec::with_capacity(left.len() + right.len());
        let (mut i, mut j) = (0, 0);

        while i < left.len() && j < right.len() {
            if stats.le(&left[i], &right[j]) {
                result.push(left[i].clone());
                i += 1;
            } else {
                result.push(right[j].clone());
                j += 1;
            }
        }

        result.extend_from_slice(&left[i..]);
        result.extend_from_slice(&right[j..]);
        stats.writes += result.len() as u64;

        result
    }

    /// Quick sort with a last-element pivot and Lomuto partitioning.
    /// The low partition is sorted before the high one. Not stable.
    ///
    /// Pending partitions live on a heap-allocated work stack, so sorted or
    /// reverse-sorted input costs quadratic time but never deep recursion.
    pub fn quick_sort<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
        Self::quick_sort_with_stats(arr).0
    }

    pub fn quick_sort_with_stats<T: Ord + Clone>(arr: &[T]) -> (Vec<T>, SortStats) {
        let mut result = arr.to_vec();
        let mut stats = SortStats::new();
        Self::quick_sort_slice(&mut result, &mut stats);
        (result, stats)
    }

    fn quick_sort_slice<T: Ord>(arr: &mut [T], stats: &mut SortStats) {
        // 待处理区间 [lo, hi)；先压高区间，保证低区间先出栈
        let mut ranges: Vec<(usize, usize)> = vec![(0, arr.len())];

        while let Some((lo, hi)) = ranges.pop() {
            if hi - lo <= 1 {
                continue;
            }

            let pivot_idx = lo + Self::partition(&mut arr[lo..hi], stats);
            ranges.push((pivot_idx + 1, hi));
            ranges.push((lo, pivot_idx));
        }
    }

    fn partition<T: Ord>(arr: &mut [T], stats: &mut SortStats) -> usize {
        let pivot_idx = arr.len() - 1;
        // everything left of `i` is <= pivot
        let mut i = 0;

        for j in 0..pivot_idx {
            if stats.le(&arr[j], &arr[pivot_idx]) {
                stats.swap(arr, i, j);
                i += 1;
            }
        }

        stats.swap(arr, i, pivot_idx);
        i
    }

    /// Heap sort over a 0-indexed binary max-heap. Not stable.
    pub fn heap_sort<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
        Self::heap_sort_with_stats(arr).0
    }

    pub fn heap_sort_with_stats<T: Ord + Clone>(arr: &[T]) -> (Vec<T>, SortStats) {
        let mut result = arr.to_vec();
        let mut stats = SortStats::new();
        let n = result.len();

        for i in (0..n / 2).rev() {
            Self::sift_down(&mut result, n, i, &mut stats);
        }

        for end in (1..n).rev() {
            stats.passes += 1;
            stats.swap(&mut result, 0, end);
            Self::sift_down(&mut result, end, 0, &mut stats);
        }

        (result, stats)
    }

    /// Restores the max-heap property for the subtree rooted at `i`,
    /// considering only the first `n` elements.
    fn sift_down<T: Ord>(arr: &mut [T], n: usize, mut i: usize, stats: &mut SortStats) {
        loop {
            let mut largest = i;
            let left = 2 * i + 1;
            let right = 2 * i + 2;

            if left < n && stats.gt(&arr[left], &arr[largest]) {
                largest = left;
            }
            if right < n && stats.gt(&arr[right], &arr[largest]) {
                largest = right;
            }
            if largest == i {
                break;
            }

            stats.swap(arr, i, largest);
            i = largest;
        }
    }
}
