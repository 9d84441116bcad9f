//! Fibonacci search for single-variable minimization.
//!
//! # Algorithm
//!
//! Fibonacci search is golden ratio search with exact ratios. A table
//! `fib[0..=n]` is built once per call. The initial probes sit at fractions
//! `fib[n-2]/fib[n]` and `fib[n-1]/fib[n]` of the bracket, and step `i`
//! places its fresh probe using `fib[n-i-2]/fib[n-i]` or `fib[n-i-1]/fib[n-i]`.
//!
//! The search stops when the bracket is no wider than the tolerance or when
//! `n - 2` steps have used up the table, whichever comes first. The estimate
//! is the midpoint of the two final probes.
//!
//! Running out of table is not a failure on its own. The estimate is
//! classified against the original bounds using the final bracket width in
//! place of the tolerance, so a search that never moved off a bound still
//! reports [`FailureReason::Boundary`].
//!
//! [`FailureReason::Boundary`]: crate::FailureReason::Boundary

mod config;
mod table;


pub use config::{Config, ConfigError};

use scalaropt_core::{Objective, Observer};

use crate::{Action, Error, OptimizationResult, numeric::probe};

use super::{Bracket, Event, conclude, stopped};

use table::FibonacciTable;

/// Finds a minimum of the objective within `bracket` using Fibonacci search.
///
/// The observer receives an [`Event`] after every shrink step and may return
/// [`Action::StopEarly`] to end the search.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] if the bounds are not finite or are equal.
pub fn minimize<F, Obs>(
    objective: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<OptimizationResult, Error>
where
    F: Objective,
    Obs: Observer<Event, Action>,
{
    let bounds = Bracket::new(bracket)?;
    Ok(search(objective, bounds, config, &mut observer))
}

/// Finds a minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] if the bounds are not finite or are equal.
pub fn minimize_unobserved<F: Objective>(
    objective: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<OptimizationResult, Error> {
    minimize(objective, bracket, config, ())
}

fn search<F, Obs>(
    objective: &F,
    bounds: Bracket,
    config: &Config,
    observer: &mut Obs,
) -> OptimizationResult
where
    F: Objective,
    Obs: Observer<Event, Action>,
{
    let n = config.n();
    let fib = FibonacciTable::new(n);
    let mut bracket = bounds;

    let (mut left, mut right) = match (
        probe(objective, bracket.at(fib.ratio(n - 2, n))),
        probe(objective, bracket.at(fib.ratio(n - 1, n))),
    ) {
        (Ok(left), Ok(right)) => (left, right),
        (Err(reason), _) | (_, Err(reason)) => return OptimizationResult::failure(0, reason),
    };

    let mut iters = 0;
    while bracket.width() > config.tolerance() && iters < config.max_iters() {
        iters += 1;
        let remaining = n - iters;

        let shrink_right = left.objective < right.objective;
        let x = if shrink_right {
            bracket.lower_hi(right.x);
            bracket.at(fib.ratio(remaining - 2, remaining))
        } else {
            bracket.raise_lo(left.x);
            bracket.at(fib.ratio(remaining - 1, remaining))
        };
        let fresh = match probe(objective, x) {
            Ok(point) => point,
            Err(reason) => return OptimizationResult::failure(iters, reason),
        };
        (left, right) = if shrink_right {
            (fresh, left)
        } else {
            (right, fresh)
        };

        let event = Event {
            iter: iters,
            bracket: bracket.bounds(),
            left,
            right,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return stopped(&event);
        }
    }

    // Out of table, the bracket width is the resolution actually reached.
    let resolution = config.tolerance().max(bracket.width());
    let estimate = 0.5 * (left.x + right.x);
    conclude(objective, bounds, estimate, resolution, iters)
}
