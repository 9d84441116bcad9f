//! Delta-probe bisection for single-variable minimization.
//!
//! # Algorithm
//!
//! Each step samples the objective at `mid - delta` and `mid + delta`, where
//! `mid` is the bracket midpoint. If the lower probe is smaller the upper
//! half is discarded (`hi = mid`), otherwise the lower half is discarded
//! (`lo = mid`). The bracket halves every step, and the search stops once it
//! is no wider than the tolerance. The estimate is the final midpoint.
//!
//! # Choosing `delta`
//!
//! `delta` must be small relative to the bracket width. Once
//! `delta >= (hi - lo) / 2`, both probes fall outside the bracket and the
//! comparison no longer says anything about which half holds the minimum, so
//! near the optimum the method degenerates into a walk driven by values
//! outside the bracket. Pick `delta` below the tolerance when a tight
//! estimate is needed.

mod config;


pub use config::{Config, ConfigError};

use scalaropt_core::{Objective, Observer};

use crate::{Action, Error, OptimizationResult, numeric::probe};

use super::{Bracket, Event, conclude, exhausted, stopped};

/// Finds a minimum of the objective within `bracket` using delta-probe bisection.
///
/// The observer receives an [`Event`] after every halving step and may return
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
    let mut bracket = bounds;
    let delta = config.delta();

    let mut iters = 0;
    while bracket.width() > config.tolerance() {
        if iters == config.max_iters() {
            return exhausted(objective, bracket.midpoint(), iters);
        }
        iters += 1;

        let mid = bracket.midpoint();
        let (below, above) = match (probe(objective, mid - delta), probe(objective, mid + delta)) {
            (Ok(below), Ok(above)) => (below, above),
            (Err(reason), _) | (_, Err(reason)) => {
                return OptimizationResult::failure(iters, reason);
            }
        };

        if below.objective < above.objective {
            bracket.lower_hi(mid);
        } else {
            bracket.raise_lo(mid);
        }

        let event = Event {
            iter: iters,
            bracket: bracket.bounds(),
            left: below,
            right: above,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return stopped(&event);
        }
    }

    conclude(
        objective,
        bounds,
        bracket.midpoint(),
        config.tolerance(),
        iters,
    )
}
