//! Single-variable minimization solvers.
//!
//! Two families share one result type:
//!
//! - [`interval`]: bracketing searches that shrink `[lo, hi]` around a
//!   minimum of a unimodal objective
//! - [`point`]: iterative methods that walk from a single start point
//!
//! Every solver returns an [`OptimizationResult`] classified as a success or
//! a failure with a [`FailureReason`]. `Err(`[`Error`]`)` is reserved for
//! invalid call inputs, such as a non-finite bracket or start point.
//!
//! Each solver module exposes `minimize`, which reports a per-iteration
//! `Event` to an [`Observer`](scalaropt_core::Observer), and
//! `minimize_unobserved`, which does not.
//!
//! ```
//! use scalaropt_core::Expr;
//! use scalaropt_solvers::interval::golden_ratio;
//!
//! let f: Expr = "x^2 - 8*x + 8".parse().unwrap();
//! let result = golden_ratio::minimize_unobserved(&f, [0.0, 10.0], &Default::default()).unwrap();
//!
//! assert!(result.is_success());
//! assert!((result.x_optimal().unwrap() - 4.0).abs() < 1e-5);
//! ```

mod action;
mod error;
mod numeric;
mod result;

pub mod interval;
pub mod point;

pub use action::Action;
pub use error::Error;
pub use result::{Bound, FailureReason, OptimizationResult, Point, Status};
