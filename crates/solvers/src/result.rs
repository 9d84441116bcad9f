use thiserror::Error;

/// A point with its evaluated objective value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The x value.
    pub x: f64,

    /// The objective value at x.
    pub objective: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, objective: f64) -> Self {
        Self { x, objective }
    }

    /// Returns the point with the lower objective, preferring `self` on ties.
    #[must_use]
    pub fn better(self, other: Point) -> Point {
        if other.objective < self.objective {
            other
        } else {
            self
        }
    }
}

/// Whether a solver call succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    Failure,
}

/// Which original bound an interval search collapsed onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    Lower,
    Upper,
}

/// Why a solver call was classified as a failure.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum FailureReason {
    /// The interval search converged onto one of the original bounds, so the
    /// bracket most likely did not contain an interior minimum.
    #[error("estimate collapsed onto the {0:?} bound")]
    Boundary(Bound),

    /// The second derivative was too close to zero to take a Newton step.
    #[error("second derivative {curvature} at x = {x} is too close to zero")]
    VanishingCurvature { x: f64, curvature: f64 },

    /// A derivative evaluated to NaN or infinity.
    #[error("derivative is not finite at x = {x}")]
    NonFiniteDerivative { x: f64 },

    /// The update step produced a non-finite iterate.
    #[error("step from x = {x} produced a non-finite iterate")]
    NonFiniteStep { x: f64 },

    /// The iterate grew past the configured magnitude limit.
    #[error("iterate diverged to x = {x}")]
    Diverged { x: f64 },

    /// The iteration budget ran out before the stopping rule fired.
    #[error("iteration limit reached without convergence")]
    ExhaustedIterations,

    /// The backtracking line search could not find a sufficient decrease.
    #[error("line search found no sufficient decrease from x = {x}")]
    LineSearchExhausted { x: f64 },

    /// The objective returned an error or NaN.
    #[error("objective could not be evaluated at x = {x}")]
    EvaluationFailed { x: f64 },

    /// An observer returned [`crate::Action::StopEarly`].
    #[error("stopped by observer")]
    StoppedByObserver,
}

/// The classified outcome of a solver call.
///
/// A failure carries the best estimate available when one exists. Hard
/// numerical failures, such as a vanishing second derivative, carry none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptimizationResult {
    Success {
        x: f64,
        objective: f64,
        iters: usize,
    },
    Failure {
        x: Option<f64>,
        objective: Option<f64>,
        iters: usize,
        reason: FailureReason,
    },
}

impl OptimizationResult {
    pub(crate) fn success(point: Point, iters: usize) -> Self {
        Self::Success {
            x: point.x,
            objective: point.objective,
            iters,
        }
    }

    /// A failure that still carries a usable estimate.
    pub(crate) fn failure_at(point: Point, iters: usize, reason: FailureReason) -> Self {
        Self::Failure {
            x: Some(point.x),
            objective: Some(point.objective),
            iters,
            reason,
        }
    }

    /// A failure with no usable estimate.
    pub(crate) fn failure(iters: usize, reason: FailureReason) -> Self {
        Self::Failure {
            x: None,
            objective: None,
            iters,
            reason,
        }
    }

    /// Returns the optimal x, if an estimate exists.
    #[must_use]
    pub fn x_optimal(&self) -> Option<f64> {
        match self {
            Self::Success { x, .. } => Some(*x),
            Self::Failure { x, .. } => *x,
        }
    }

    /// Returns the objective at the optimal x, if an estimate exists.
    #[must_use]
    pub fn f_optimal(&self) -> Option<f64> {
        match self {
            Self::Success { objective, .. } => Some(*objective),
            Self::Failure { objective, .. } => *objective,
        }
    }

    /// Returns the estimate as a point, if one exists.
    #[must_use]
    pub fn point(&self) -> Option<Point> {
        Some(Point::new(self.x_optimal()?, self.f_optimal()?))
    }

    /// Returns the number of iterations performed.
    #[must_use]
    pub fn iterations(&self) -> usize {
        match self {
            Self::Success { iters, .. } | Self::Failure { iters, .. } => *iters,
        }
    }

    #[must_use]
    pub fn status(&self) -> Status {
        match self {
            Self::Success { .. } => Status::Success,
            Self::Failure { .. } => Status::Failure,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the failure reason, or `None` on success.
    #[must_use]
    pub fn reason(&self) -> Option<FailureReason> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { reason, .. } => Some(*reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn success_exposes_estimate() {
        let result = OptimizationResult::success(Point::new(3.0, 0.0), 12);

        assert!(result.is_success());
        assert_eq!(result.status(), Status::Success);
        assert_relative_eq!(result.x_optimal().unwrap(), 3.0);
        assert_relative_eq!(result.f_optimal().unwrap(), 0.0);
        assert_eq!(result.iterations(), 12);
        assert_eq!(result.reason(), None);
    }

    #[test]
    fn failure_with_estimate_keeps_point() {
        let result = OptimizationResult::failure_at(
            Point::new(-2.0, 4.0),
            30,
            FailureReason::Boundary(Bound::Lower),
        );

        assert_eq!(result.status(), Status::Failure);
        assert_eq!(result.point(), Some(Point::new(-2.0, 4.0)));
        assert_eq!(result.reason(), Some(FailureReason::Boundary(Bound::Lower)));
    }

    #[test]
    fn hard_failure_has_no_estimate() {
        let result = OptimizationResult::failure(
            0,
            FailureReason::VanishingCurvature {
                x: 0.0,
                curvature: 0.0,
            },
        );

        assert!(!result.is_success());
        assert_eq!(result.x_optimal(), None);
        assert_eq!(result.f_optimal(), None);
        assert_eq!(result.point(), None);
    }

    #[test]
    fn better_prefers_lower_objective() {
        let a = Point::new(0.0, 1.0);
        let b = Point::new(1.0, 0.5);

        assert_eq!(a.better(b), b);
        assert_eq!(b.better(a), b);
        assert_eq!(a.better(Point::new(2.0, 1.0)), a);
    }

    #[test]
    fn reasons_describe_themselves() {
        assert_eq!(
            FailureReason::Boundary(Bound::Upper).to_string(),
            "estimate collapsed onto the Upper bound"
        );
        assert_eq!(
            FailureReason::Diverged { x: 1e11 }.to_string(),
            "iterate diverged to x = 100000000000"
        );
    }
}
