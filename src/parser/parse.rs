//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, the [`SyntaxError`] type, and the
//! top-level entry points. The grammar productions themselves live in
//! `expressions`, as an `impl Parser` block sharing this module's state.

use crate::parser::ast::{BinOp, Expr};
use crate::parser::lexer::Tokenizer;
use std::fmt;

/// The only error the parser raises. Every syntax error ends the parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    /// Zero-based offset into the whitespace-stripped input
    pub position: usize,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, position: usize) -> Self {
        SyntaxError {
            message: message.into(),
            position,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// One-based column, as shown to users
    pub fn column(&self) -> usize {
        self.position + 1
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Syntax error at column {}: {}", self.column(), self.message)
    }
}

impl std::error::Error for SyntaxError {}

/// Recursive descent parser over a [`Tokenizer`]
pub struct Parser {
    pub(crate) tokenizer: Tokenizer,
}

impl Parser {
    pub fn new(input: &str) -> Self {
        Self {
            tokenizer: Tokenizer::new(input),
        }
    }

    /// Parse a complete expression.
    ///
    /// Parsing stops at the first character the grammar cannot continue
    /// with; anything after it is left unconsumed and is not an error. Use
    /// [`remaining`](Parser::remaining) to inspect it.
    pub fn parse(&mut self) -> Result<Expr, SyntaxError> {
        self.parse_expression()
    }

    /// Input left over after parsing
    pub fn remaining(&self) -> String {
        self.tokenizer.remaining()
    }

    pub fn is_at_end(&self) -> bool {
        self.tokenizer.is_at_end()
    }

    // ===== Helper methods =====

    pub(crate) fn error(&self, message: impl Into<String>) -> SyntaxError {
        SyntaxError::new(message, self.tokenizer.position())
    }

    /// Consume the next character if it is one of `ops`
    pub(crate) fn match_op(&mut self, ops: &[BinOp]) -> Option<BinOp> {
        let op = self.tokenizer.peek().and_then(BinOp::from_char)?;
        if ops.contains(&op) {
            self.tokenizer.advance();
            Some(op)
        } else {
            None
        }
    }
}

/// Parse `input` into an expression tree
pub fn parse(input: &str) -> Result<Expr, SyntaxError> {
    Parser::new(input).parse()
}

/// Describe a character for error messages, `end of input` for the sentinel
pub(crate) fn describe(ch: Option<char>) -> String {
    match ch {
        Some(c) => format!("'{}'", c),
        None => "end of input".to_string(),
    }
}
