//! Exchange and insertion based sorts: bubble, selection, insertion, shell.

use super::{SortStats, SortingAlgorithms};

impl SortingAlgorithms {
    /// Bubble sort. Stops after the first pass that performs no swap.
    pub fn bubble_sort<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
        Self::bubble_sort_with_stats(arr).0
    }

    pub fn bubble_sort_with_stats<T: Ord + Clone>(arr: &[T]) -> (Vec<T>, SortStats) {
        let mut result = arr.to_vec();
        let mut stats = SortStats::new();
        let n = result.len();

        for i in 0..n {
            stats.passes += 1;
            let mut swapped = false;

            for j in 0..(n - i - 1) {
                if stats.gt(&result[j], &result[j + 1]) {
                    stats.swap(&mut result, j, j + 1);
                    swapped = true;
                }
            }

            if !swapped {
                break;
            }
        }

        (result, stats)
    }

    /// Selection sort.
    pub fn selection_sort<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
        Self::selection_sort_with_stats(arr).0
    }

    pub fn selection_sort_with_stats<T: Ord + Clone>(arr: &[T]) -> (Vec<T>, SortStats) {
        let mut result = arr.to_vec();
        let mut stats = SortStats::new();
        let n = result.len();

        for i in 0..n {
            stats.passes += 1;
            let mut min_idx = i;

            for j in (i + 1)..n {
                if stats.gt(&result[min_idx], &result[j]) {
                    min_idx = j;
                }
            }

            if min_idx != i {
                stats.swap(&mut result, i, min_idx);
            }
        }

        (result, stats)
    }

    /// Insertion sort. Stable.
    pub fn insertion_sort<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
        Self::insertion_sort_with_stats(arr).0
    }

    pub fn insertion_sort_with_stats<T: Ord + Clone>(arr: &[T]) -> (Vec<T>, SortStats) {
        let mut result = arr.to_vec();
        let mut stats = SortStats::new();

        for i in 1..result.len() {
            stats.passes += 1;
            let key = result[i].clone();
            let mut j = i;

            // shift larger elements one slot to the right
            while j > 0 && stats.gt(&result[j - 1], &key) {
                let shifted = result[j - 1].clone();
                stats.write(&mut result, j, shifted);
                j -= 1;
            }
            stats.write(&mut result, j, key);
        }

        (result, stats)
    }

    /// Shell sort with the halving gap sequence `n/2, n/4, ..., 1`.
    pub fn shell_sort<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
        Self::shell_sort_with_stats(arr).0
    }

    pub fn shell_sort_with_stats<T: Ord + Clone>(arr: &[T]) -> (Vec<T>, SortStats) {
        let mut result = arr.to_vec();
        let mut stats = SortStats::new();
        let n = result.len();
        let mut gap = n / 2;

        while gap > 0 {
            stats.passes += 1;

            for i in gap..n {
                let temp = result[i].clone();
                let mut j = i;

                while j >= gap && stats.gt(&result[j - gap], &temp) {
                    let shifted = result[j - gap].clone();
                    stats.write(&mut result, j, shifted);
                    j -= gap;
                }
                stats.write(&mut result, j, temp);
            }

            gap /= 2;
        }

        (result, stats)
    }
}
