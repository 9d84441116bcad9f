//! Greedy random search for single-variable minimization.
//!
//! # Algorithm
//!
//! Each trial moves from the best point so far in a random direction by a
//! random distance in `[0, step_size)`. A candidate with a strictly lower
//! objective becomes the new best, and later trials start from it. Rejected
//! candidates still count as trials.
//!
//! The search stops with success once the objectives of two consecutive
//! trials differ by less than the tolerance; the start point counts as the
//! trial before the first. Running out of trials is a failure that still
//! reports the best point found.
//!
//! A candidate where the objective cannot be evaluated is rejected and does
//! not take part in the stopping test.
//!
//! # Randomness
//!
//! The generator is passed in by the caller. Seed it, for example with
//! `StdRng::seed_from_u64`, to make a run reproducible.

mod config;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError};

use rand::Rng;
use scalaropt_core::{Objective, Observer};

use crate::{
    Action, Error, FailureReason, OptimizationResult, Point,
    numeric::{check_start, probe},
};

/// Event emitted after each trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The 1-based trial number.
    pub iter: usize,

    /// The candidate x.
    pub x: f64,

    /// The candidate objective, or `None` if it could not be evaluated.
    pub objective: Option<f64>,

    /// Whether the candidate became the new best.
    pub accepted: bool,

    /// The best point after this trial.
    pub best: Point,

    /// The step size used for this trial.
    pub step_size: f64,
}

/// Searches for a minimum of the objective by random perturbation from `x0`.
///
/// The observer receives an [`Event`] after every trial and may return
/// [`Action::StopEarly`] to end the search at the best point so far.
///
/// # Errors
///
/// Returns [`Error::NonFiniteStart`] if `x0` is not finite.
pub fn minimize<F, R, Obs>(
    objective: &F,
    x0: f64,
    config: &Config,
    rng: &mut R,
    mut observer: Obs,
) -> Result<OptimizationResult, Error>
where
    F: Objective,
    R: Rng + ?Sized,
    Obs: Observer<Event, Action>,
{
    let x0 = check_start(x0)?;
    Ok(search(objective, x0, config, rng, &mut observer))
}

/// Searches for a minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::NonFiniteStart`] if `x0` is not finite.
pub fn minimize_unobserved<F, R>(
    objective: &F,
    x0: f64,
    config: &Config,
    rng: &mut R,
) -> Result<OptimizationResult, Error>
where
    F: Objective,
    R: Rng + ?Sized,
{
    minimize(objective, x0, config, rng, ())
}

fn search<F, R, Obs>(
    objective: &F,
    x0: f64,
    config: &Config,
    rng: &mut R,
    observer: &mut Obs,
) -> OptimizationResult
where
    F: Objective,
    R: Rng + ?Sized,
    Obs: Observer<Event, Action>,
{
    let mut best = match probe(objective, x0) {
        Ok(point) => point,
        Err(reason) => return OptimizationResult::failure(0, reason),
    };
    let mut previous = best.objective;
    let mut step_size = config.step_size();

    for iter in 1..=config.max_iters() {
        let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let x = best.x + direction * step_size * rng.random::<f64>();

        let trial = probe(objective, x).ok();
        let accepted = match trial {
            Some(candidate) if candidate.objective < best.objective => {
                best = candidate;
                true
            }
            _ => false,
        };

        let event = Event {
            iter,
            x,
            objective: trial.map(|candidate| candidate.objective),
            accepted,
            best,
            step_size,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return OptimizationResult::failure_at(best, iter, FailureReason::StoppedByObserver);
        }

        if let Some(candidate) = trial {
            if (candidate.objective - previous).abs() < config.tolerance() {
                return OptimizationResult::success(best, iter);
            }
            previous = candidate.objective;
        }

        if config.shrink_step() {
            step_size *= Config::SHRINK_FACTOR;
        }
    }

    OptimizationResult::failure_at(
        best,
        config.max_iters(),
        FailureReason::ExhaustedIterations,
    )
}
