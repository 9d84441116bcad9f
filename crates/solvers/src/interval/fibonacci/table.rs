/// Fibonacci numbers `fib[0..=n]` with `fib[0] = 0` and `fib[1] = 1`.
///
/// Entries are exact up to `fib[186]`, the largest that fits in a `u128`.
pub(super) struct FibonacciTable {
    fib: Vec<u128>,
}

impl FibonacciTable {
    /// Builds the table through `fib[n]`.
    ///
    /// `n` must be at least 1 and at most 186.
    pub(super) fn new(n: usize) -> Self {
        let mut fib = Vec::with_capacity(n + 1);
        fib.extend([0, 1]);
        for i in 2..=n {
            fib.push(fib[i - 1] + fib[i - 2]);
        }
        fib.truncate(n + 1);
        Self { fib }
    }

    /// Returns `fib[num] / fib[den]`.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn ratio(&self, num: usize, den: usize) -> f64 {
        self.fib[num] as f64 / self.fib[den] as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::interval::fibonacci::config::MAX_N;

    #[test]
    fn starts_with_zero_and_one() {
        let table = FibonacciTable::new(10);
        assert_eq!(table.fib, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
    }

    #[test]
    fn ratios_approach_inverse_golden_ratio() {
        let table = FibonacciTable::new(60);
        let inv_phi = (5.0_f64.sqrt() - 1.0) / 2.0;
        assert_relative_eq!(table.ratio(59, 60), inv_phi, epsilon = 1e-15);
        assert_relative_eq!(table.ratio(58, 60), 1.0 - inv_phi, epsilon = 1e-15);
    }

    #[test]
    fn largest_table_does_not_overflow() {
        let table = FibonacciTable::new(MAX_N);
        assert_eq!(table.fib.len(), MAX_N + 1);
        assert!(table.ratio(MAX_N - 1, MAX_N) < 1.0);
    }
}
