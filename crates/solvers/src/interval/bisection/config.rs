use thiserror::Error;

/// Configuration for delta-probe bisection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    delta: f64,
    tolerance: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a bisection config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("delta must be finite and positive")]
    Delta,

    #[error("tolerance must be finite and positive")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.1, 1e-6, 200).unwrap()
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// `delta` is the offset of each probe from the bracket midpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if `delta` or `tolerance` is not finite and positive.
    pub fn new(delta: f64, tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !delta.is_finite() || delta <= 0.0 {
            return Err(ConfigError::Delta);
        }
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            delta,
            tolerance,
            max_iters,
        })
    }

    /// Returns the probe offset from the midpoint.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Returns the bracket width at which the search stops.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of halving steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
