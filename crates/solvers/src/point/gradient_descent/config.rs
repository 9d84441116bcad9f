use thiserror::Error;

/// Configuration for gradient descent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tolerance: f64,
    alpha: f64,
    beta: f64,
    max_value: f64,
    max_backtracks: usize,
}

/// Errors that can occur when validating a gradient descent config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("alpha must be strictly between 0 and 1")]
    Alpha,

    #[error("beta must be strictly between 0 and 1")]
    Beta,

    #[error("max_value must be finite and positive")]
    MaxValue,

    #[error("max_backtracks must be at least 1")]
    MaxBacktracks,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1000, 1e-6, 0.01, 0.5).unwrap()
    }
}

impl Config {
    /// Default magnitude beyond which an iterate counts as diverged.
    pub const DEFAULT_MAX_VALUE: f64 = 1e10;

    /// Default number of step halvings tried per line search.
    pub const DEFAULT_MAX_BACKTRACKS: usize = 100;

    /// Creates a new config.
    ///
    /// The run converges once `|f'(x)| < tolerance`. Each line search starts
    /// from a unit step and multiplies it by `beta` until the decrease is at
    /// least `alpha * step * f'(x)²`.
    ///
    /// The divergence limit and backtracking cap start at
    /// [`Self::DEFAULT_MAX_VALUE`] and [`Self::DEFAULT_MAX_BACKTRACKS`].
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive, or if
    /// `alpha` or `beta` is outside `(0, 1)`.
    pub fn new(
        max_iters: usize,
        tolerance: f64,
        alpha: f64,
        beta: f64,
    ) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(ConfigError::Alpha);
        }
        if !(beta > 0.0 && beta < 1.0) {
            return Err(ConfigError::Beta);
        }

        Ok(Self {
            max_iters,
            tolerance,
            alpha,
            beta,
            max_value: Self::DEFAULT_MAX_VALUE,
            max_backtracks: Self::DEFAULT_MAX_BACKTRACKS,
        })
    }

    /// Sets the magnitude beyond which an iterate counts as diverged.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_value` is not finite and positive.
    pub fn with_max_value(self, max_value: f64) -> Result<Self, ConfigError> {
        if !max_value.is_finite() || max_value <= 0.0 {
            return Err(ConfigError::MaxValue);
        }
        Ok(Self { max_value, ..self })
    }

    /// Sets the number of trial steps each line search may try.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_backtracks` is zero.
    pub fn with_max_backtracks(self, max_backtracks: usize) -> Result<Self, ConfigError> {
        if max_backtracks == 0 {
            return Err(ConfigError::MaxBacktracks);
        }
        Ok(Self {
            max_backtracks,
            ..self
        })
    }

    /// Returns the maximum number of descent steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the gradient magnitude below which the run has converged.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the sufficient-decrease coefficient.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the step shrink factor.
    #[must_use]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Returns the divergence limit on `|x|`.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Returns the number of trial steps per line search.
    #[must_use]
    pub fn max_backtracks(&self) -> usize {
        self.max_backtracks
    }
}
