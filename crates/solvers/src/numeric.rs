use scalaropt_core::Objective;

use crate::{Error, FailureReason, Point};

/// Second derivatives smaller than this in magnitude end a Newton run.
pub(crate) const CURVATURE_EPSILON: f64 = 1e-8;

/// Evaluates the objective at `x`, treating errors and NaN as failures.
///
/// Infinite values are kept: `+inf` compares as worse than any finite value,
/// which is what the interval and search methods need.
pub(crate) fn probe<F: Objective>(objective: &F, x: f64) -> Result<Point, FailureReason> {
    match objective.value(x) {
        Ok(value) if !value.is_nan() => Ok(Point::new(x, value)),
        _ => Err(FailureReason::EvaluationFailed { x }),
    }
}

/// Evaluates a derivative at `x`, requiring a finite value.
pub(crate) fn derivative_at<D: Objective>(derivative: &D, x: f64) -> Result<f64, FailureReason> {
    match derivative.value(x) {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(FailureReason::NonFiniteDerivative { x }),
        Err(_) => Err(FailureReason::EvaluationFailed { x }),
    }
}

/// Rejects non-finite start points.
pub(crate) fn check_start(x0: f64) -> Result<f64, Error> {
    if x0.is_finite() {
        Ok(x0)
    } else {
        Err(Error::NonFiniteStart(x0))
    }
}
