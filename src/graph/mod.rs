//! DOT export of expression trees
//!
//! Nodes are numbered in depth-first pre-order: the root is `node0`, and a
//! left subtree is fully numbered before its right sibling. Each node line is
//! followed by that node's subgraphs, and each edge is written right after
//! the child subgraph it points to.
//!
//! ```text
//! digraph ExpressionTree {
//!   node0 [label="+"];
//!   node1 [label="1"];
//!   node0 -> node1;
//!   node2 [label="2"];
//!   node0 -> node2;
//! }
//! ```

use crate::parser::ast::Expr;
use std::fs;
use std::io;
use std::path::Path;

/// Name of the emitted digraph
pub const GRAPH_NAME: &str = "ExpressionTree";

/// Where the driver writes the graph when no path is given
pub const DEFAULT_DOT_PATH: &str = "tree.dot";

/// Hands out node identifiers for one export
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: usize,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> usize {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Expr {
    /// Append this node's declaration, and those of its subtree, to `sink`.
    ///
    /// `id` must already be allocated from `ids`; child ids are drawn from
    /// `ids` left to right.
    pub fn export_graph_node(&self, sink: &mut String, id: usize, ids: &mut IdAllocator) {
        sink.push_str(&format!("  node{} [label=\"{}\"];\n", id, self.label()));

        if let Expr::BinaryOp { left, right, .. } = self {
            for child in [left, right] {
                let child_id = ids.next_id();
                child.export_graph_node(sink, child_id, ids);
                sink.push_str(&format!("  node{} -> node{};\n", id, child_id));
            }
        }
    }
}

/// Render `tree` as a DOT digraph
pub fn export(tree: &Expr) -> String {
    let mut out = format!("digraph {} {{\n", GRAPH_NAME);

    let mut ids = IdAllocator::new();
    let root = ids.next_id();
    tree.export_graph_node(&mut out, root, &mut ids);

    out.push_str("}\n");
    out
}

/// Export `tree` and write it to `path`, replacing any existing file
pub fn write_dot_file(tree: &Expr, path: impl AsRef<Path>) -> io::Result<()> {
    fs::write(path, export(tree))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_allocator_is_sequential() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.next_id(), 0);
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
    }

    #[test]
    fn test_single_literal() {
        let dot = export(&parse("5").unwrap());
        assert_eq!(dot, "digraph ExpressionTree {\n  node0 [label=\"5\"];\n}\n");
    }

    #[test]
    fn test_binary_layout() {
        let dot = export(&parse("1+2").unwrap());
        let expected = "digraph ExpressionTree {\n\
                        \x20 node0 [label=\"+\"];\n\
                        \x20 node1 [label=\"1\"];\n\
                        \x20 node0 -> node1;\n\
                        \x20 node2 [label=\"2\"];\n\
                        \x20 node0 -> node2;\n\
                        }\n";
        assert_eq!(dot, expected);
    }

    #[test]
    fn test_left_subtree_numbered_first() {
        // ((1 + 2) * 3)
        let dot = export(&parse("1+2*3").unwrap());
        let lines: Vec<&str> = dot.lines().collect();
        assert_eq!(lines[1], "  node0 [label=\"*\"];");
        assert_eq!(lines[2], "  node1 [label=\"+\"];");
        assert_eq!(lines[3], "  node2 [label=\"1\"];");
        assert_eq!(lines[4], "  node1 -> node2;");
        assert_eq!(lines[5], "  node3 [label=\"2\"];");
        assert_eq!(lines[6], "  node1 -> node3;");
        assert_eq!(lines[7], "  node0 -> node1;");
        assert_eq!(lines[8], "  node4 [label=\"3\"];");
        assert_eq!(lines[9], "  node0 -> node4;");
    }

    #[test]
    fn test_fresh_counter_per_export() {
        let tree = parse("{1-2}/3").unwrap();
        assert_eq!(export(&tree), export(&tree));
    }
}
