use thiserror::Error;

/// Configuration for random search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    step_size: f64,
    max_iters: usize,
    shrink_step: bool,
}

/// Errors that can occur when validating a random search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("step size must be finite and positive")]
    StepSize,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-6, 0.1, 1000, false).unwrap()
    }
}

impl Config {
    /// Factor applied to the step size after every trial when shrinking.
    pub const SHRINK_FACTOR: f64 = 0.95;

    /// Creates a new config.
    ///
    /// Trial moves have magnitude uniform in `[0, step_size)`. The search
    /// stops once two consecutive trials differ in objective by less than
    /// `tolerance`. With `shrink_step`, the step size is multiplied by
    /// [`Self::SHRINK_FACTOR`] after every trial.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` or `step_size` is not finite and
    /// positive.
    pub fn new(
        tolerance: f64,
        step_size: f64,
        max_iters: usize,
        shrink_step: bool,
    ) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if !step_size.is_finite() || step_size <= 0.0 {
            return Err(ConfigError::StepSize);
        }

        Ok(Self {
            tolerance,
            step_size,
            max_iters,
            shrink_step,
        })
    }

    /// Returns the trial-to-trial change below which the search stops.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the initial step size.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Returns the maximum number of trials.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns whether the step size shrinks after every trial.
    #[must_use]
    pub fn shrink_step(&self) -> bool {
        self.shrink_step
    }
}
