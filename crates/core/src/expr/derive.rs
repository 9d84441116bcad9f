use super::{Expr, Func};

/// Differentiates `expr` with respect to `x`.
///
/// Results are assembled with the simplifying constructors, so constant
/// subtrees collapse and terms multiplied by zero disappear.
pub(super) fn derivative(expr: &Expr) -> Expr {
    match expr {
        Expr::Const(_) => Expr::Const(0.0),
        Expr::Var => Expr::Const(1.0),
        Expr::Neg(a) => -derivative(a),
        Expr::Add(a, b) => derivative(a) + derivative(b),
        Expr::Sub(a, b) => derivative(a) - derivative(b),
        Expr::Mul(a, b) => {
            let (a, b) = (a.as_ref(), b.as_ref());
            derivative(a) * b.clone() + a.clone() * derivative(b)
        }
        Expr::Div(a, b) if b.is_constant() => derivative(a) / b.as_ref().clone(),
        Expr::Div(a, b) => {
            let (a, b) = (a.as_ref(), b.as_ref());
            let numerator = derivative(a) * b.clone() - a.clone() * derivative(b);
            numerator / b.clone().pow(2.0)
        }
        Expr::Pow(base, exponent) => power(base, exponent),
        Expr::Call(func, arg) => chain(*func, arg),
    }
}

/// d/dx u^v, specialized for constant exponents and constant bases.
fn power(base: &Expr, exponent: &Expr) -> Expr {
    let du = derivative(base);
    if exponent.is_constant() {
        // v * u^(v - 1) * u'
        let reduced = exponent.clone() - 1.0;
        return exponent.clone() * base.clone().pow(reduced) * du;
    }

    let dv = derivative(exponent);
    let whole = base.clone().pow(exponent.clone());
    if base.is_constant() {
        // u^v * ln(u) * v'
        return whole * base.clone().ln() * dv;
    }

    // u^v * (v' ln(u) + v u' / u)
    let log_term = dv * base.clone().ln();
    let ratio_term = exponent.clone() * du / base.clone();
    whole * (log_term + ratio_term)
}

/// d/dx f(u) = f'(u) * u'.
fn chain(func: Func, arg: &Expr) -> Expr {
    let du = derivative(arg);
    let u = arg.clone();
    let outer = match func {
        Func::Exp => u.exp(),
        Func::Ln => return du / u,
        Func::Sqrt => return du / (2.0 * u.sqrt()),
        Func::Sin => u.cos(),
        Func::Cos => -u.sin(),
    };
    outer * du
}
