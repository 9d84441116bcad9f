//! Golden ratio search for single-variable minimization.
//!
//! # Algorithm
//!
//! Two interior probes divide the bracket in the golden ratio. Each step
//! compares their objectives, discards the side of the larger value, and
//! evaluates one new probe. The surviving probe lands exactly where the next
//! step needs it, so only one evaluation is spent per step.
//!
//! The search stops once the bracket width is at most the tolerance, and the
//! estimate is the bracket midpoint.
//!
//! # When to Use
//!
//! - The objective is unimodal on the bracket
//! - Derivatives are unavailable or unreliable
//! - A fixed reduction rate per evaluation is wanted without choosing a
//!   step count in advance (compare [`fibonacci`](super::fibonacci))

mod bracket;
mod config;
mod state;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError};

use scalaropt_core::{Objective, Observer};

use crate::{Action, Error, OptimizationResult, numeric::probe};

use super::{Bracket, Event, conclude, exhausted, stopped};

use state::State;

/// Finds a minimum of the objective within `bracket` using golden ratio search.
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
    let mut state = match State::init(objective, bounds) {
        Ok(state) => state,
        Err(reason) => return OptimizationResult::failure(0, reason),
    };

    let mut iters = 0;
    while state.width() > config.tolerance() {
        if iters == config.max_iters() {
            return exhausted(objective, state.midpoint(), iters);
        }
        iters += 1;

        let direction = state.next_direction();
        let point = match probe(objective, direction.x()) {
            Ok(point) => point,
            Err(reason) => return OptimizationResult::failure(iters, reason),
        };
        state.apply(direction, point);

        let event = state.event(iters);
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return stopped(&event);
        }
    }

    conclude(
        objective,
        bounds,
        state.midpoint(),
        config.tolerance(),
        iters,
    )
}
