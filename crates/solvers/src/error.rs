use thiserror::Error;

use crate::interval::BracketError;

/// Errors for invalid solver inputs.
///
/// Algorithmic outcomes, including numerical failures, are reported through
/// [`OptimizationResult`](crate::OptimizationResult) instead.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("start point must be finite, got {0}")]
    NonFiniteStart(f64),
}
