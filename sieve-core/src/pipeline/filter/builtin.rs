use super::NumberFilter;

#[derive(Debug, Default, Clone, Copy)]
pub struct EvenFilter;

impl NumberFilter for EvenFilter {
    fn keep(&self, number: i32) -> bool {
        number % 2 == 0
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OddFilter;

impl NumberFilter for OddFilter {
    fn keep(&self, number: i32) -> bool {
        number % 2 != 0
    }
}

/// Keeps values strictly greater than the threshold.
#[derive(Debug, Clone, Copy)]
pub struct GreaterThanFilter {
    threshold: i32,
}

impl GreaterThanFilter {
    pub fn new(threshold: i32) -> Self {
        Self { threshold }
    }
}

impl NumberFilter for GreaterThanFilter {
    fn keep(&self, number: i32) -> bool {
        number > self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_and_odd_partition_integers() {
        let samples = [i32::MIN, -7, -2, -1, 0, 1, 2, 9, i32::MAX];

        for n in samples {
            assert_ne!(EvenFilter.keep(n), OddFilter.keep(n), "value {n}");
        }
    }

    #[test]
    fn negative_odd_numbers_are_odd() {
        assert!(OddFilter.keep(-3));
        assert!(!EvenFilter.keep(-3));
    }

    #[test]
    fn greater_than_excludes_threshold() {
        let filter = GreaterThanFilter::new(5);

        assert!(!filter.keep(4));
        assert!(!filter.keep(5));
        assert!(filter.keep(6));
    }

    #[test]
    fn greater_than_negative_threshold() {
        let filter = GreaterThanFilter::new(-3);

        assert!(filter.keep(-2));
        assert!(!filter.keep(-3));
    }
}
