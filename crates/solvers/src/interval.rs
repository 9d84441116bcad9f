//! Bracketing methods for single-variable minimization.
//!
//! Each method starts from a bracket `[lo, hi]` assumed to contain a local
//! minimum of a unimodal objective and repeatedly discards the part of the
//! bracket on the side of the larger sampled value.
//!
//! # Solvers
//!
//! - [`golden_ratio`]: two golden-ratio probes, one fresh evaluation per step
//! - [`fibonacci`]: exact Fibonacci ratios from a precomputed table
//! - [`bisection`]: halves the bracket by probing either side of the midpoint
//!
//! # Boundary failures
//!
//! When the final estimate lies within the tolerance of either original
//! bound, the search has collapsed onto that bound and the result is a
//! [`FailureReason::Boundary`] failure that still carries the estimate.
//!
//! # Observer Events
//!
//! All three methods emit one [`Event`] per step, after the bracket has been
//! shrunk. Observers can return [`Action::StopEarly`] to end the search with
//! the better of the two current probes.
//!
//! [`Action::StopEarly`]: crate::Action::StopEarly

mod bracket;
mod event;

pub mod bisection;
pub mod fibonacci;
pub mod golden_ratio;

pub use bracket::{Bracket, BracketError};
pub use event::Event;

use scalaropt_core::Objective;

use crate::{Bound, FailureReason, OptimizationResult, Point, numeric::probe};

/// Evaluates the final estimate at `x` and classifies it.
fn conclude<F: Objective>(
    objective: &F,
    bounds: Bracket,
    x: f64,
    tolerance: f64,
    iters: usize,
) -> OptimizationResult {
    match probe(objective, x) {
        Ok(estimate) => classify(bounds, estimate, tolerance, iters),
        Err(reason) => OptimizationResult::failure(iters, reason),
    }
}

/// Reports an exhausted iteration budget with the estimate at `x`.
fn exhausted<F: Objective>(objective: &F, x: f64, iters: usize) -> OptimizationResult {
    match probe(objective, x) {
        Ok(estimate) => {
            OptimizationResult::failure_at(estimate, iters, FailureReason::ExhaustedIterations)
        }
        Err(reason) => OptimizationResult::failure(iters, reason),
    }
}

/// Ends a search at an observer's request, keeping the better probe.
fn stopped(event: &Event) -> OptimizationResult {
    OptimizationResult::failure_at(event.best(), event.iter, FailureReason::StoppedByObserver)
}

/// Classifies a converged estimate against the original bounds.
fn classify(bounds: Bracket, estimate: Point, tolerance: f64, iters: usize) -> OptimizationResult {
    let bound = if (estimate.x - bounds.lo()).abs() <= tolerance {
        Some(Bound::Lower)
    } else if (bounds.hi() - estimate.x).abs() <= tolerance {
        Some(Bound::Upper)
    } else {
        None
    };

    match bound {
        Some(bound) => {
            OptimizationResult::failure_at(estimate, iters, FailureReason::Boundary(bound))
        }
        None => OptimizationResult::success(estimate, iters),
    }
}
