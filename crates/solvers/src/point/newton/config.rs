use thiserror::Error;

/// Configuration for Newton's method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a Newton config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-6, 100).unwrap()
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// The run converges once a step moves x by less than `tolerance`.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            tolerance,
            max_iters,
        })
    }

    /// Returns the step size below which the run has converged.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of Newton steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
