//! Iterative methods that walk from a single start point toward a minimum.
//!
//! # Solvers
//!
//! - [`newton`]: Newton steps using first and second derivatives
//! - [`gradient_descent`]: steepest descent with a backtracking line search
//! - [`random_search`]: greedy derivative-free random perturbation
//!
//! The derivative-based methods take any objective implementing
//! [`Differentiate`](scalaropt_core::Differentiate): an
//! [`Expr`](scalaropt_core::Expr) for exact symbolic derivatives, or a
//! closure wrapped in [`FiniteDifference`](scalaropt_core::FiniteDifference).
//! Derivatives are built once per call, before the first iteration.

pub mod gradient_descent;
pub mod newton;
pub mod random_search;
