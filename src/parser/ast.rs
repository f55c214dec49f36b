// Expression tree definitions

use std::fmt;

/// Binary operators accepted by the grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// Map an operator character to its variant, `None` for anything else.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(BinOp::Add),
            '-' => Some(BinOp::Sub),
            '*' => Some(BinOp::Mul),
            '/' => Some(BinOp::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A node of the expression tree.
///
/// Every subtree has exactly one owner, its parent. The tree is built
/// bottom-up by the parser and is read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal {
        value: f64,
    },
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn literal(value: f64) -> Self {
        Expr::Literal { value }
    }

    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Expr::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Total number of nodes, leaves included
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Literal { .. } => 1,
            Expr::BinaryOp { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }

    /// Height of the tree; a lone literal has depth 1
    pub fn depth(&self) -> usize {
        match self {
            Expr::Literal { .. } => 1,
            Expr::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Label shown for this node in graph and tree views
    pub fn label(&self) -> String {
        match self {
            Expr::Literal { value } => value.to_string(),
            Expr::BinaryOp { op, .. } => op.to_string(),
        }
    }
}
