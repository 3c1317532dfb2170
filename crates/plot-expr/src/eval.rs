// File: crates/plot-expr/src/eval.rs
// Summary: Point-wise evaluation of a parsed expression with floating-point (never failing) semantics.

use crate::parse::{BinOp, Expr, UnaryOp};

impl Expr {
    /// Value at `x`. Domain errors surface as NaN or infinities.
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Expr::Number(v) => *v,
            Expr::Var => x,
            Expr::Unary(UnaryOp::Neg, e) => -e.eval(x),
            Expr::Unary(UnaryOp::Pos, e) => e.eval(x),
            Expr::Call(f, arg) => f.apply(arg.eval(x)),
            Expr::Binary(op, a, b) => apply_binary(*op, a.eval(x), b.eval(x)),
        }
    }
}

fn apply_binary(op: BinOp, a: f64, b: f64) -> f64 {
    match op {
        BinOp::Add => a + b,
        BinOp::Sub => a - b,
        BinOp::Mul => a * b,
        BinOp::Div => a / b,
        BinOp::FloorDiv => (a / b).floor(),
        // result takes the sign of the divisor
        BinOp::Mod => a - (a / b).floor() * b,
        BinOp::Pow => a.powf(b),
    }
}

#[cfg(test)]
mod tests {
    use crate::parse::parse;

    fn at(src: &str, x: f64) -> f64 {
        parse(src).unwrap().eval(x)
    }

    #[test]
    fn arithmetic_and_precedence() {
        assert_eq!(at("1 + 2 * 3", 0.0), 7.0);
        assert_eq!(at("(1 + 2) * 3", 0.0), 9.0);
        assert_eq!(at("-x**2", 3.0), -9.0);
        assert_eq!(at("2**3**2", 0.0), 512.0);
        assert_eq!(at("x^2 + 1", 2.0), 5.0);
    }

    #[test]
    fn floor_division_and_modulo_follow_the_divisor() {
        assert_eq!(at("7 // 2", 0.0), 3.0);
        assert_eq!(at("-7 // 2", 0.0), -4.0);
        assert_eq!(at("-7 % 3", 0.0), 2.0);
        assert_eq!(at("7 % -3", 0.0), -2.0);
    }

    #[test]
    fn functions_and_constants() {
        assert!((at("sin(pi/2)", 0.0) - 1.0).abs() < 1e-12);
        assert!((at("log(e**x)", 2.0) - 2.0).abs() < 1e-12);
        assert!((at("sqrt(x)", 16.0) - 4.0).abs() < 1e-12);
        assert!((at("atan(1)*4", 0.0) - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn domain_errors_are_values() {
        assert!(at("sqrt(x)", -1.0).is_nan());
        assert!(at("asin(x)", 2.0).is_nan());
        assert_eq!(at("log(x)", 0.0), f64::NEG_INFINITY);
        assert_eq!(at("1/x", 0.0), f64::INFINITY);
    }
}
