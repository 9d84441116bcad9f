//! Symbolic single-variable expressions.
//!
//! An [`Expr`] is an immutable expression tree in the variable `x`. It can be
//! evaluated at a point, differentiated symbolically, printed, and parsed from
//! text:
//!
//! ```
//! use scalaropt_core::Expr;
//!
//! let f: Expr = "x^4/20 + x/4 + 1".parse().unwrap();
//! let df = f.differentiate();
//!
//! assert!((f.eval(2.0).unwrap() - 2.3).abs() < 1e-12);
//! assert!((df.eval(1.0).unwrap() - 0.45).abs() < 1e-12);
//! assert_eq!(df.to_string(), "4 * x^3 / 20 + 0.25");
//! ```
//!
//! # Supported syntax
//!
//! - Numbers (`3`, `0.5`, `1e-3`), the variable `x`, and the constants `pi`, `e`
//! - Binary operators `+ - * /` and `^` (or `**`), which is right-associative
//! - Unary minus, binding looser than `^` (so `-x^2` is `-(x^2)`)
//! - Functions `exp`, `ln` (alias `log`), `sqrt`, `sin`, `cos`
//!
//! # Simplification
//!
//! Expressions are built through simplifying constructors: constants are
//! folded and identities such as `0 + u`, `1 * u`, and `u ^ 1` collapse.
//! This keeps derivatives readable without attempting full canonicalization.

mod derive;
mod display;
mod eval;
mod parse;


use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

pub use eval::EvalError;
pub use parse::ParseError;

use crate::{Differentiate, Objective};

/// An elementary function applied to a subexpression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Func {
    Exp,
    Ln,
    Sqrt,
    Sin,
    Cos,
}

impl Func {
    /// Returns the name used when printing and parsing.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Func::Exp => "exp",
            Func::Ln => "ln",
            Func::Sqrt => "sqrt",
            Func::Sin => "sin",
            Func::Cos => "cos",
        }
    }

    /// Looks up a function by name.
    ///
    /// `log` is accepted as the natural logarithm.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "exp" => Some(Func::Exp),
            "ln" | "log" => Some(Func::Ln),
            "sqrt" => Some(Func::Sqrt),
            "sin" => Some(Func::Sin),
            "cos" => Some(Func::Cos),
            _ => None,
        }
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A symbolic expression in the single variable `x`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Const(f64),
    Var,
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    Call(Func, Box<Expr>),
}

impl Expr {
    /// The variable `x`.
    #[must_use]
    pub fn x() -> Self {
        Expr::Var
    }

    /// A constant.
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Expr::Const(value)
    }

    /// Parses an expression from text.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] describing the first problem found.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        parse::parse(text)
    }

    /// Returns the constant value, if this expression is a constant.
    #[must_use]
    pub fn as_const(&self) -> Option<f64> {
        match self {
            Expr::Const(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if the expression does not depend on `x`.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        match self {
            Expr::Const(_) => true,
            Expr::Var => false,
            Expr::Neg(a) | Expr::Call(_, a) => a.is_constant(),
            Expr::Add(a, b)
            | Expr::Sub(a, b)
            | Expr::Mul(a, b)
            | Expr::Div(a, b)
            | Expr::Pow(a, b) => a.is_constant() && b.is_constant(),
        }
    }

    /// Raises this expression to a power.
    #[must_use]
    pub fn pow(self, exponent: impl Into<Expr>) -> Self {
        let exponent = exponent.into();
        match (self.as_const(), exponent.as_const()) {
            (_, Some(e)) if e == 0.0 => Expr::Const(1.0),
            (_, Some(e)) if e == 1.0 => self,
            (Some(b), Some(e)) if b.powf(e).is_finite() => Expr::Const(b.powf(e)),
            _ => Expr::Pow(Box::new(self), Box::new(exponent)),
        }
    }

    /// Applies an elementary function.
    #[must_use]
    pub fn apply(self, func: Func) -> Self {
        if let Some(arg) = self.as_const()
            && let Ok(value) = eval::call(func, arg)
        {
            return Expr::Const(value);
        }
        Expr::Call(func, Box::new(self))
    }

    /// `exp(self)`
    #[must_use]
    pub fn exp(self) -> Self {
        self.apply(Func::Exp)
    }

    /// `ln(self)`
    #[must_use]
    pub fn ln(self) -> Self {
        self.apply(Func::Ln)
    }

    /// `sqrt(self)`
    #[must_use]
    pub fn sqrt(self) -> Self {
        self.apply(Func::Sqrt)
    }

    /// `sin(self)`
    #[must_use]
    pub fn sin(self) -> Self {
        self.apply(Func::Sin)
    }

    /// `cos(self)`
    #[must_use]
    pub fn cos(self) -> Self {
        self.apply(Func::Cos)
    }

    /// Returns the symbolic derivative with respect to `x`.
    #[must_use]
    pub fn differentiate(&self) -> Self {
        derive::derivative(self)
    }

    /// Evaluates the expression at `x`.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] if `x` lies outside the real domain of the
    /// expression or the result is not finite.
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        eval::eval(self, x)
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::Const(value)
    }
}

impl FromStr for Expr {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse::parse(text)
    }
}

impl Objective for Expr {
    type Error = EvalError;

    fn value(&self, x: f64) -> Result<f64, Self::Error> {
        self.eval(x)
    }
}

impl Differentiate for Expr {
    type Derivative = Expr;

    fn derivative(&self) -> Self::Derivative {
        self.differentiate()
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        match self {
            Expr::Const(value) => Expr::Const(-value),
            Expr::Neg(inner) => *inner,
            other => Expr::Neg(Box::new(other)),
        }
    }
}

impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        match (self.as_const(), rhs.as_const()) {
            (Some(a), Some(b)) => Expr::Const(a + b),
            (Some(a), _) if a == 0.0 => rhs,
            (_, Some(b)) if b == 0.0 => self,
            _ => Expr::Add(Box::new(self), Box::new(rhs)),
        }
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        match (self.as_const(), rhs.as_const()) {
            (Some(a), Some(b)) => Expr::Const(a - b),
            (Some(a), _) if a == 0.0 => -rhs,
            (_, Some(b)) if b == 0.0 => self,
            _ => Expr::Sub(Box::new(self), Box::new(rhs)),
        }
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        match (self.as_const(), rhs.as_const()) {
            (Some(a), Some(b)) => Expr::Const(a * b),
            (Some(a), _) | (_, Some(a)) if a == 0.0 => Expr::Const(0.0),
            (Some(a), _) if a == 1.0 => rhs,
            (_, Some(b)) if b == 1.0 => self,
            (Some(a), _) if a == -1.0 => -rhs,
            (_, Some(b)) if b == -1.0 => -self,
            _ => Expr::Mul(Box::new(self), Box::new(rhs)),
        }
    }
}

impl Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Expr) -> Expr {
        match (self.as_const(), rhs.as_const()) {
            (Some(a), Some(b)) if b != 0.0 => Expr::Const(a / b),
            (Some(a), _) if a == 0.0 => Expr::Const(0.0),
            (_, Some(b)) if b == 1.0 => self,
            _ => Expr::Div(Box::new(self), Box::new(rhs)),
        }
    }
}

/// Mixed `Expr`/`f64` arithmetic, e.g. `3.0 * Expr::x()` or `Expr::x() - 1.0`.
macro_rules! impl_scalar_ops {
    ($($trait:ident::$method:ident),*) => {
        $(
            impl $trait<f64> for Expr {
                type Output = Expr;

                fn $method(self, rhs: f64) -> Expr {
                    $trait::$method(self, Expr::Const(rhs))
                }
            }

            impl $trait<Expr> for f64 {
                type Output = Expr;

                fn $method(self, rhs: Expr) -> Expr {
                    $trait::$method(Expr::Const(self), rhs)
                }
            }
        )*
    };
}

impl_scalar_ops!(Add::add, Sub::sub, Mul::mul, Div::div);
