use std::convert::Infallible;

/// A scalar real-valued function of one variable.
///
/// Solvers borrow an objective read-only and call [`Objective::value`] at the
/// points they need. An evaluation error (for example a logarithm of a
/// non-positive argument) is reported through [`Objective::Error`] and is
/// turned into a failed result by the solver rather than a panic.
///
/// Closures `Fn(f64) -> f64` implement `Objective` with an [`Infallible`]
/// error type.
pub trait Objective {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective is undefined at `x`.
    fn value(&self, x: f64) -> Result<f64, Self::Error>;
}

/// An objective that can produce its own derivative.
///
/// The derivative is obtained once, before a solver starts iterating, and is
/// itself an [`Objective`]. Second derivatives come from calling
/// `derivative()` on the derivative, which requires
/// `Self::Derivative: Differentiate`.
pub trait Differentiate: Objective {
    type Derivative: Objective;

    /// Returns the first derivative of this objective.
    #[must_use]
    fn derivative(&self) -> Self::Derivative;
}

/// Blanket implementation for plain closures.
impl<F> Objective for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn value(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}
