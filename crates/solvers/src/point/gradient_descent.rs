//! Gradient descent with a backtracking line search.
//!
//! # Algorithm
//!
//! At each iterate `x` the gradient `g = f'(x)` is evaluated. The run has
//! converged once `|g| < tolerance`. Otherwise a line search tries the steps
//! `1, β, β², ...` and accepts the first one satisfying the sufficient
//! decrease (Armijo) condition
//!
//! ```text
//! f(x - step * g) <= f(x) - α * step * g²
//! ```
//!
//! A trial point where the objective cannot be evaluated counts as
//! insufficient, so the search backs away from domain edges on its own.
//!
//! Only the gradient is tested, so any stationary point counts as converged.
//! A start at a maximum, such as `x0 = 0` for `-x^2`, succeeds after zero
//! steps even though the objective is unbounded below.
//!
//! # Failures
//!
//! - The updated iterate exceeds `max_value` in magnitude: the run has
//!   diverged and carries no estimate.
//! - The gradient is not finite: no estimate.
//! - No trial step within `max_backtracks` gives a sufficient decrease: the
//!   current iterate is reported.
//! - `max_iters` steps are taken without convergence: the current iterate is
//!   reported.

mod config;


pub use config::{Config, ConfigError};

use scalaropt_core::{Differentiate, Objective, Observer};

use crate::{
    Action, Error, FailureReason, OptimizationResult, Point,
    numeric::{check_start, derivative_at, probe},
};

/// Event emitted after each accepted descent step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The 1-based iteration number.
    pub iter: usize,

    /// The point the step started from.
    pub from: Point,

    /// The accepted point.
    pub to: Point,

    /// Gradient at `from`.
    pub gradient: f64,

    /// The step length chosen by the line search.
    pub step: f64,
}

/// Minimizes the objective by gradient descent starting from `x0`.
///
/// The derivative is obtained once, before iterating. The observer receives
/// an [`Event`] after every accepted step and may return
/// [`Action::StopEarly`] to end the run at the new iterate.
///
/// # Errors
///
/// Returns [`Error::NonFiniteStart`] if `x0` is not finite.
pub fn minimize<F, Obs>(
    objective: &F,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<OptimizationResult, Error>
where
    F: Differentiate,
    Obs: Observer<Event, Action>,
{
    let x0 = check_start(x0)?;
    let gradient = objective.derivative();
    Ok(descend(objective, &gradient, x0, config, &mut observer))
}

/// Minimizes the objective by gradient descent without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::NonFiniteStart`] if `x0` is not finite.
pub fn minimize_unobserved<F: Differentiate>(
    objective: &F,
    x0: f64,
    config: &Config,
) -> Result<OptimizationResult, Error> {
    minimize(objective, x0, config, ())
}

fn descend<F, G, Obs>(
    objective: &F,
    gradient: &G,
    x0: f64,
    config: &Config,
    observer: &mut Obs,
) -> OptimizationResult
where
    F: Objective,
    G: Objective,
    Obs: Observer<Event, Action>,
{
    let mut current = match probe(objective, x0) {
        Ok(point) => point,
        Err(reason) => return OptimizationResult::failure(0, reason),
    };

    for iters in 0..config.max_iters() {
        let slope = match derivative_at(gradient, current.x) {
            Ok(slope) => slope,
            Err(reason) => return OptimizationResult::failure(iters, reason),
        };

        if slope.abs() < config.tolerance() {
            return OptimizationResult::success(current, iters);
        }

        let Some((step, next)) = line_search(objective, current, slope, config) else {
            let reason = FailureReason::LineSearchExhausted { x: current.x };
            return OptimizationResult::failure_at(current, iters, reason);
        };

        if next.x.abs() > config.max_value() {
            return OptimizationResult::failure(iters + 1, FailureReason::Diverged { x: next.x });
        }

        let event = Event {
            iter: iters + 1,
            from: current,
            to: next,
            gradient: slope,
            step,
        };
        current = next;

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return OptimizationResult::failure_at(
                current,
                iters + 1,
                FailureReason::StoppedByObserver,
            );
        }
    }

    OptimizationResult::failure_at(
        current,
        config.max_iters(),
        FailureReason::ExhaustedIterations,
    )
}

/// Backtracks from a unit step until the Armijo condition holds.
///
/// Returns the accepted step and the point it reaches, or `None` if every
/// trial within the backtracking cap is rejected.
fn line_search<F: Objective>(
    objective: &F,
    current: Point,
    slope: f64,
    config: &Config,
) -> Option<(f64, Point)> {
    let decrease_per_step = config.alpha() * slope * slope;
    let mut step = 1.0;

    for _ in 0..config.max_backtracks() {
        let x = current.x - step * slope;
        if x.is_finite()
            && let Ok(trial) = probe(objective, x)
            && trial.objective <= current.objective - step * decrease_per_step
        {
            return Some((step, trial));
        }
        step *= config.beta();
    }

    None
}
