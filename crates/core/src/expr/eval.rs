use thiserror::Error;

use super::{Expr, Func};

/// Errors that can occur when evaluating an [`Expr`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum EvalError {
    /// A function was applied outside its real domain.
    #[error("{func} is undefined at {arg}")]
    Domain { func: Func, arg: f64 },

    /// A negative base was raised to a non-integer power.
    #[error("{base}^{exponent} is not real")]
    ComplexPower { base: f64, exponent: f64 },

    /// A denominator, or a zero base with a negative exponent, was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The result overflowed or was otherwise not finite.
    #[error("expression evaluated to non-finite value {value}")]
    NonFinite { value: f64 },
}

pub(super) fn eval(expr: &Expr, x: f64) -> Result<f64, EvalError> {
    let value = node(expr, x)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite { value })
    }
}

fn node(expr: &Expr, x: f64) -> Result<f64, EvalError> {
    match expr {
        Expr::Const(value) => Ok(*value),
        Expr::Var => Ok(x),
        Expr::Neg(a) => Ok(-node(a, x)?),
        Expr::Add(a, b) => Ok(node(a, x)? + node(b, x)?),
        Expr::Sub(a, b) => Ok(node(a, x)? - node(b, x)?),
        Expr::Mul(a, b) => Ok(node(a, x)? * node(b, x)?),
        Expr::Div(a, b) => {
            let numerator = node(a, x)?;
            let denominator = node(b, x)?;
            if denominator == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(numerator / denominator)
        }
        Expr::Pow(a, b) => power(node(a, x)?, node(b, x)?),
        Expr::Call(func, a) => call(*func, node(a, x)?),
    }
}

fn power(base: f64, exponent: f64) -> Result<f64, EvalError> {
    let is_integer = exponent.fract() == 0.0;
    if base == 0.0 && exponent < 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    if base < 0.0 && !is_integer {
        return Err(EvalError::ComplexPower { base, exponent });
    }
    #[allow(clippy::cast_possible_truncation)]
    if is_integer && exponent.abs() <= f64::from(i32::MAX) {
        return Ok(base.powi(exponent as i32));
    }
    Ok(base.powf(exponent))
}

/// Applies an elementary function, checking its real domain.
pub(super) fn call(func: Func, arg: f64) -> Result<f64, EvalError> {
    match func {
        Func::Exp => Ok(arg.exp()),
        Func::Ln if arg > 0.0 => Ok(arg.ln()),
        Func::Sqrt if arg >= 0.0 => Ok(arg.sqrt()),
        Func::Ln | Func::Sqrt => Err(EvalError::Domain { func, arg }),
        Func::Sin => Ok(arg.sin()),
        Func::Cos => Ok(arg.cos()),
    }
}
