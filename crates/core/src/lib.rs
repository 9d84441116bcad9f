//! Core traits and types for single-variable optimization.
//!
//! This crate defines the shared abstractions that the solvers build on:
//!
//! - [`Objective`]: a scalar function of one real variable
//! - [`Differentiate`]: an objective that can produce its derivative
//! - [`FiniteDifference`]: a numeric derivative provider for any objective
//! - [`Expr`]: a symbolic expression with exact derivatives and a text parser
//! - [`Observer`]: receives solver events and optionally returns control actions

pub mod expr;

mod finite_difference;
mod objective;
mod observer;

pub use expr::{EvalError, Expr, Func, ParseError};
pub use finite_difference::{CentralDifference, FiniteDifference, InvalidStep};
pub use objective::{Differentiate, Objective};
pub use observer::Observer;
