//! # Introduction
//!
//! exptree parses one line of brace-grouped arithmetic over single digits,
//! then renders, evaluates, and exports the resulting expression tree as a
//! DOT graph. An interactive explorer built with
//! [ratatui](https://docs.rs/ratatui) shows all of it side by side.
//!
//! ## Pipeline
//!
//! ```text
//! Input → Tokenizer → Parser → Expr → { evaluate, render, DOT export }
//! ```
//!
//! 1. [`parser`] — strips whitespace, parses the grammar, builds an [`parser::Expr`].
//! 2. [`interpreter`] — evaluation and fully parenthesized rendering.
//! 3. [`graph`] — depth-first node numbering and DOT output.
//! 4. [`session`] — one full cycle per line as a [`session::Report`], and the
//!    explorer's [`session::History`].
//! 5. [`ui`] — ratatui-based explorer; not part of the stable library API.
//!
//! ## Grammar
//!
//! `+` and `-` bind tighter than `*` and `/`, and `{ }` groups:
//! `1+2*3` is `((1 + 2) * 3)` and evaluates to `9`.
//!
//! ```
//! let report = exptree::session::analyze("1 + 2 * 3").unwrap();
//! assert_eq!(report.rendering, "((1 + 2) * 3)");
//! assert_eq!(report.value, 9.0);
//! ```

pub mod graph;
pub mod interpreter;
pub mod parser;
pub mod session;
pub mod ui;
