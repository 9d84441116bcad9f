use std::fmt;

use super::Expr;

/// Binding strength used to decide where parentheses are needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Prec {
    Sum,
    Product,
    Unary,
    Power,
    Atom,
}

impl Expr {
    fn prec(&self) -> Prec {
        match self {
            Expr::Const(value) if *value < 0.0 => Prec::Unary,
            Expr::Const(_) | Expr::Var | Expr::Call(..) => Prec::Atom,
            Expr::Neg(_) => Prec::Unary,
            Expr::Add(..) | Expr::Sub(..) => Prec::Sum,
            Expr::Mul(..) | Expr::Div(..) => Prec::Product,
            Expr::Pow(..) => Prec::Power,
        }
    }

    /// Writes `self`, parenthesized if it binds looser than `min`.
    fn write_operand(&self, f: &mut fmt::Formatter<'_>, min: Prec) -> fmt::Result {
        if self.prec() < min {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Const(value) => write!(f, "{value}"),
            Expr::Var => f.write_str("x"),
            Expr::Neg(a) => {
                f.write_str("-")?;
                a.write_operand(f, Prec::Unary)
            }
            Expr::Add(a, b) => {
                a.write_operand(f, Prec::Sum)?;
                f.write_str(" + ")?;
                b.write_operand(f, Prec::Sum)
            }
            Expr::Sub(a, b) => {
                a.write_operand(f, Prec::Sum)?;
                f.write_str(" - ")?;
                b.write_operand(f, Prec::Product)
            }
            Expr::Mul(a, b) => {
                a.write_operand(f, Prec::Product)?;
                f.write_str(" * ")?;
                b.write_operand(f, Prec::Unary)
            }
            Expr::Div(a, b) => {
                a.write_operand(f, Prec::Product)?;
                f.write_str(" / ")?;
                b.write_operand(f, Prec::Power)
            }
            Expr::Pow(a, b) => {
                a.write_operand(f, Prec::Atom)?;
                f.write_str("^")?;
                b.write_operand(f, Prec::Power)
            }
            Expr::Call(func, a) => write!(f, "{func}({a})"),
        }
    }
}
