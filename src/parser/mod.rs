//! Expression parser
//!
//! This module transforms one line of input into an expression tree:
//! - [`lexer`]: Character cursor over the whitespace-stripped input
//! - [`parse`]: Parser state, [`SyntaxError`], and entry points
//! - [`ast`]: Expression tree definitions
//!
//! # Accepted Input
//!
//! - Operands: single decimal digits `0`-`9`
//! - Operators: `+ - * /`, all binary, all left-associative
//! - Grouping: `{ }` in place of parentheses
//! - Whitespace anywhere, removed before parsing
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent with one production per precedence level.
//! `+`/`-` bind tighter than `*`/`/`; see `expressions` for the grammar.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;

pub use ast::{BinOp, Expr};
pub use parse::{parse, Parser, SyntaxError};
