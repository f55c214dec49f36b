//! Expression parsing implementation
//!
//! Three mutually recursive productions:
//!
//! ```text
//! expression := factor ( ('*' | '/') factor )*
//! factor     := term ( ('+' | '-') term )*
//! term       := '{' expression '}' | digit
//! ```
//!
//! # Precedence
//!
//! `+` and `-` are parsed in `factor`, below `*` and `/`, so they bind
//! tighter: `1+2*3` is `(1 + 2) * 3`. Both levels fold left-associatively.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::{BinOp, Expr};
use crate::parser::parse::{describe, Parser, SyntaxError};

impl Parser {
    /// Parse expression (top-level entry point): factors joined by `*` or `/`
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_factor()?;

        while let Some(op) = self.match_op(&[BinOp::Mul, BinOp::Div]) {
            let right = self.parse_factor()?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse factor: terms joined by `+` or `-`
    pub(crate) fn parse_factor(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_term()?;

        while let Some(op) = self.match_op(&[BinOp::Add, BinOp::Sub]) {
            let right = self.parse_term()?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse term: a braced expression or a single digit
    pub(crate) fn parse_term(&mut self) -> Result<Expr, SyntaxError> {
        if self.tokenizer.match_char('{') {
            let inner = self.parse_expression()?;
            if !self.tokenizer.match_char('}') {
                return Err(self.error("expected closing brace '}'"));
            }
            return Ok(inner);
        }

        let position = self.tokenizer.position();
        let ch = self.tokenizer.advance();
        match ch.and_then(|c| c.to_digit(10)) {
            Some(digit) => Ok(Expr::literal(f64::from(digit))),
            None => Err(SyntaxError::new(
                format!("expected digit, found {}", describe(ch)),
                position,
            )),
        }
    }
}
