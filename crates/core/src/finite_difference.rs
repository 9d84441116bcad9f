use thiserror::Error;

use crate::{Differentiate, Objective};

/// Default central-difference step.
///
/// Balances truncation error (O(h²)) against cancellation error (O(ε/h)) for
/// objectives of moderate magnitude, and stays accurate when nested once to
/// produce a second derivative.
const DEFAULT_STEP: f64 = 1e-4;

/// The finite-difference step was not finite and positive.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("finite-difference step must be finite and positive, got {0}")]
pub struct InvalidStep(pub f64);

/// Makes any cloneable objective differentiable using central differences.
///
/// Use this when an objective has no symbolic form, such as a closure:
///
/// ```
/// use scalaropt_core::{Differentiate, FiniteDifference, Objective};
///
/// let f = FiniteDifference::new(|x: f64| x.powi(3));
/// let second = f.derivative().derivative();
///
/// let curvature = second.value(2.0).unwrap();
/// assert!((curvature - 12.0).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FiniteDifference<F> {
    function: F,
    step: f64,
}

impl<F> FiniteDifference<F> {
    /// Wraps `function` using the default step.
    pub fn new(function: F) -> Self {
        Self {
            function,
            step: DEFAULT_STEP,
        }
    }

    /// Wraps `function` using a custom step.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStep`] if `step` is not finite and positive.
    pub fn with_step(function: F, step: f64) -> Result<Self, InvalidStep> {
        if !step.is_finite() || step <= 0.0 {
            return Err(InvalidStep(step));
        }
        Ok(Self { function, step })
    }

    /// Returns the step used for differencing.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the wrapped function.
    pub fn inner(&self) -> &F {
        &self.function
    }
}

impl<F: Objective> Objective for FiniteDifference<F> {
    type Error = F::Error;

    fn value(&self, x: f64) -> Result<f64, Self::Error> {
        self.function.value(x)
    }
}

impl<F> Differentiate for FiniteDifference<F>
where
    F: Objective + Clone,
{
    type Derivative = FiniteDifference<CentralDifference<F>>;

    fn derivative(&self) -> Self::Derivative {
        let slope = CentralDifference {
            function: self.function.clone(),
            step: self.step,
        };
        FiniteDifference {
            function: slope,
            step: self.step,
        }
    }
}

/// The central-difference slope of a function: `(f(x + h) - f(x - h)) / 2h`.
///
/// Produced by [`FiniteDifference::derivative`].
#[derive(Debug, Clone, Copy)]
pub struct CentralDifference<F> {
    function: F,
    step: f64,
}

impl<F: Objective> Objective for CentralDifference<F> {
    type Error = F::Error;

    fn value(&self, x: f64) -> Result<f64, Self::Error> {
        let h = self.step;
        let ahead = self.function.value(x + h)?;
        let behind = self.function.value(x - h)?;
        Ok((ahead - behind) / (2.0 * h))
    }
}
