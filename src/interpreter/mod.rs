//! Evaluation and rendering of expression trees
//!
//! Both are plain recursive walks over [`Expr`]. Neither can fail: the
//! operator set is closed, and division follows IEEE-754 semantics, so a zero
//! divisor yields an infinity or NaN instead of an error.

use crate::parser::ast::{BinOp, Expr};
use std::fmt;

impl BinOp {
    /// Combine two operands with this operator
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            BinOp::Add => left + right,
            BinOp::Sub => left - right,
            BinOp::Mul => left * right,
            BinOp::Div => left / right,
        }
    }
}

impl Expr {
    /// Evaluate the tree, left operand before right
    pub fn evaluate(&self) -> f64 {
        match self {
            Expr::Literal { value } => *value,
            Expr::BinaryOp { op, left, right } => {
                let lhs = left.evaluate();
                let rhs = right.evaluate();
                op.apply(lhs, rhs)
            }
        }
    }

    /// Fully parenthesized text form, e.g. `((1 + 2) * 3)`
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal { value } => write!(f, "{}", value),
            Expr::BinaryOp { op, left, right } => write!(f, "({} {} {})", left, op, right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_literal_renders_without_fraction() {
        let expr = Expr::literal(5.0);
        assert_eq!(expr.render(), "5");
        assert_eq!(expr.evaluate(), 5.0);
    }

    #[test]
    fn test_nested_rendering() {
        let expr = parse("{1+2}*{3-4}").unwrap();
        assert_eq!(expr.render(), "((1 + 2) * (3 - 4))");
        assert_eq!(expr.evaluate(), -3.0);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(parse("1/0").unwrap().evaluate(), f64::INFINITY);
        assert_eq!(parse("0-1/0").unwrap().evaluate(), f64::NEG_INFINITY);
        assert!(parse("0/0").unwrap().evaluate().is_nan());
    }

    #[test]
    fn test_fractional_result() {
        let value = parse("1/4").unwrap().evaluate();
        assert_eq!(value, 0.25);
    }
}
