/// Operation counts gathered while a comparison sort runs.
///
/// `writes` counts element stores into the working buffer (a swap is two
/// writes), `passes` counts outer-loop rounds for the iterative sorts and
/// stays zero for the recursive ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    pub comparisons: u64,
    pub writes: u64,
    pub passes: u64,
}

impl SortStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// `a > b`, counted.
    #[inline]
    pub(crate) fn gt<T: Ord>(&mut self, a: &T, b: &T) -> bool {
        self.comparisons += 1;
        a > b
    }

    /// `a <= b`, counted.
    #[inline]
    pub(crate) fn le<T: Ord>(&mut self, a: &T, b: &T) -> bool {
        self.comparisons += 1;
        a <= b
    }

    #[inline]
    pub(crate) fn swap<T>(&mut self, arr: &mut [T], i: usize, j: usize) {
        self.writes += 2;
        arr.swap(i, j);
    }

    #[inline]
    pub(crate) fn write<T>(&mut self, arr: &mut [T], i: usize, value: T) {
        self.writes += 1;
        arr[i] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counted_comparisons() {
        let mut stats = SortStats::new();
        assert!(stats.gt(&3, &2));
        assert!(stats.le(&2, &2));
        assert_eq!(stats.comparisons, 2);
        assert_eq!(stats.writes, 0);
    }

    #[test]
    fn test_swap_counts_two_writes() {
        let mut stats = SortStats::new();
        let mut arr = [1, 2];
        stats.swap(&mut arr, 0, 1);
        assert_eq!(arr, [2, 1]);
        assert_eq!(stats.writes, 2);
    }
}
