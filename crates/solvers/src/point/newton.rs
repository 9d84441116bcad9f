//! Newton's method for single-variable minimization.
//!
//! # Algorithm
//!
//! Starting from `x0`, each iteration takes the Newton step
//!
//! ```text
//! x_{k+1} = x_k - f'(x_k) / f''(x_k)
//! ```
//!
//! and stops once `|x_{k+1} - x_k| < tolerance`, reporting `x_{k+1}`.
//!
//! Newton's method finds stationary points, so it converges to a maximum or
//! an inflection just as readily as to a minimum when started nearby.
//!
//! # Failures
//!
//! Any of these ends the run immediately with no estimate:
//!
//! - `f''(x_k)` is not finite or has magnitude below `1e-8`
//! - `f'(x_k)` is not finite
//! - the step produces a non-finite `x_{k+1}`
//!
//! # Iteration limit
//!
//! Exhausting `max_iters` without meeting the step tolerance is reported as
//! a success at the last iterate. Check [`OptimizationResult::iterations`]
//! against the limit when that distinction matters.

mod config;


pub use config::{Config, ConfigError};

use scalaropt_core::{Differentiate, Objective, Observer};

use crate::{
    Action, Error, FailureReason, OptimizationResult,
    numeric::{CURVATURE_EPSILON, check_start, derivative_at, probe},
};

/// Event emitted after each Newton step is computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The 1-based iteration number.
    pub iter: usize,

    /// The current iterate.
    pub x: f64,

    /// First derivative at `x`.
    pub first: f64,

    /// Second derivative at `x`.
    pub second: f64,

    /// The next iterate, `x - first / second`.
    pub next: f64,
}

/// Finds a stationary point of the objective using Newton's method.
///
/// The first and second derivatives are obtained once, before iterating.
/// The observer receives an [`Event`] for each computed step and may return
/// [`Action::StopEarly`] to end the run at the current iterate.
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
    F::Derivative: Differentiate,
    Obs: Observer<Event, Action>,
{
    let x0 = check_start(x0)?;
    let first = objective.derivative();
    let second = first.derivative();
    Ok(iterate(objective, &first, &second, x0, config, &mut observer))
}

/// Finds a stationary point of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::NonFiniteStart`] if `x0` is not finite.
pub fn minimize_unobserved<F>(
    objective: &F,
    x0: f64,
    config: &Config,
) -> Result<OptimizationResult, Error>
where
    F: Differentiate,
    F::Derivative: Differentiate,
{
    minimize(objective, x0, config, ())
}

fn iterate<F, D1, D2, Obs>(
    objective: &F,
    first: &D1,
    second: &D2,
    x0: f64,
    config: &Config,
    observer: &mut Obs,
) -> OptimizationResult
where
    F: Objective,
    D1: Objective,
    D2: Objective,
    Obs: Observer<Event, Action>,
{
    let mut x = x0;

    for iters in 0..config.max_iters() {
        let event = match step(first, second, x, iters + 1) {
            Ok(event) => event,
            Err(reason) => return OptimizationResult::failure(iters, reason),
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return finish(objective, x, iters, Some(FailureReason::StoppedByObserver));
        }

        if (event.next - x).abs() < config.tolerance() {
            return finish(objective, event.next, iters, None);
        }
        x = event.next;
    }

    finish(objective, x, config.max_iters(), None)
}

/// Computes one Newton step from `x`, checking each quantity as it is produced.
fn step<D1, D2>(first: &D1, second: &D2, x: f64, iter: usize) -> Result<Event, FailureReason>
where
    D1: Objective,
    D2: Objective,
{
    let curvature = derivative_at(second, x)?;
    if curvature.abs() < CURVATURE_EPSILON {
        return Err(FailureReason::VanishingCurvature { x, curvature });
    }

    let slope = derivative_at(first, x)?;
    let next = x - slope / curvature;
    if !next.is_finite() {
        return Err(FailureReason::NonFiniteStep { x });
    }

    Ok(Event {
        iter,
        x,
        first: slope,
        second: curvature,
        next,
    })
}

/// Evaluates the objective at the reported point and builds the result.
fn finish<F: Objective>(
    objective: &F,
    x: f64,
    iters: usize,
    failure: Option<FailureReason>,
) -> OptimizationResult {
    match (probe(objective, x), failure) {
        (Ok(point), None) => OptimizationResult::success(point, iters),
        (Ok(point), Some(reason)) => OptimizationResult::failure_at(point, iters, reason),
        (Err(reason), _) => OptimizationResult::Failure {
            x: Some(x),
            objective: None,
            iters,
            reason,
        },
    }
}
