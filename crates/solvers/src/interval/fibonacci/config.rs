use thiserror::Error;

/// Smallest table size that allows at least one step.
pub(super) const MIN_N: usize = 3;

/// Largest table size whose entries fit in a `u128`.
pub(super) const MAX_N: usize = 186;

/// Configuration for Fibonacci search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    n: usize,
}

/// Errors that can occur when validating a Fibonacci search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("table size must be between 3 and 186, got {0}")]
    TableSize(usize),
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-4, 100).unwrap()
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// `n` sizes the Fibonacci table and caps the search at `n - 2` steps.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive, or if `n`
    /// is outside `3..=186`.
    pub fn new(tolerance: f64, n: usize) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if !(MIN_N..=MAX_N).contains(&n) {
            return Err(ConfigError::TableSize(n));
        }

        Ok(Self { tolerance, n })
    }

    /// Returns the bracket width at which the search stops.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the Fibonacci table size.
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the maximum number of shrink steps, `n - 2`.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.n - 2
    }
}
