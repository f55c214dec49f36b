// Integration tests for graph export and the session layer

use exptree::graph::{self, IdAllocator};
use exptree::parser::parse;
use exptree::session::{analyze, History};

fn node_lines(dot: &str) -> Vec<&str> {
    dot.lines().filter(|l| l.contains("[label=")).collect()
}

fn edge_lines(dot: &str) -> Vec<&str> {
    dot.lines().filter(|l| l.contains("->")).collect()
}

/// Parse `  nodeA -> nodeB;` into (A, B)
fn edge_ids(line: &str) -> (usize, usize) {
    let ids: Vec<usize> = line
        .trim()
        .trim_end_matches(';')
        .split(" -> ")
        .map(|n| n.trim_start_matches("node").parse().unwrap())
        .collect();
    (ids[0], ids[1])
}

#[test]
fn test_export_single_literal() {
    let dot = graph::export(&parse("5").unwrap());
    assert_eq!(node_lines(&dot), vec!["  node0 [label=\"5\"];"]);
    assert!(edge_lines(&dot).is_empty());
}

#[test]
fn test_export_binary() {
    let dot = graph::export(&parse("1+2").unwrap());
    assert_eq!(node_lines(&dot).len(), 3);

    let edges = edge_lines(&dot);
    assert_eq!(edges.len(), 2);
    for edge in edges {
        let (parent, child) = edge_ids(edge);
        assert_eq!(parent, 0);
        assert!(parent < child);
    }
}

#[test]
fn test_export_structure() {
    let dot = graph::export(&parse("{1+2}*{3-4}/5").unwrap());
    assert!(dot.starts_with("digraph ExpressionTree {\n"));
    assert!(dot.ends_with("}\n"));

    let nodes = node_lines(&dot);
    let edges = edge_lines(&dot);
    assert_eq!(nodes.len(), 9);
    assert_eq!(edges.len(), nodes.len() - 1);

    // Pre-order: ids appear in increasing order, each declared once
    for (i, line) in nodes.iter().enumerate() {
        assert!(line.starts_with(&format!("  node{} ", i)));
    }

    // Every edge points from an earlier node to a later one, and each child
    // has exactly one parent
    let mut children: Vec<usize> = edges
        .iter()
        .map(|e| {
            let (parent, child) = edge_ids(e);
            assert!(parent < child);
            child
        })
        .collect();
    children.sort_unstable();
    assert_eq!(children, (1..nodes.len()).collect::<Vec<_>>());
}

#[test]
fn test_manual_export_matches_export() {
    let tree = parse("9-{8/4}").unwrap();

    let mut out = String::new();
    let mut ids = IdAllocator::new();
    let root = ids.next_id();
    tree.export_graph_node(&mut out, root, &mut ids);

    // One id per node, so the next one handed out equals the node count
    assert_eq!(ids.next_id(), tree.node_count());
    let dot = graph::export(&tree);
    assert!(dot.contains(&out));
}

#[test]
fn test_write_dot_file() {
    let path = std::env::temp_dir().join(format!("exptree-it-{}.dot", std::process::id()));
    let tree = parse("3*3").unwrap();

    graph::write_dot_file(&tree, &path).expect("Failed to write DOT file");
    let written = std::fs::read_to_string(&path).expect("Failed to read DOT file");
    assert_eq!(written, graph::export(&tree));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_analyze_full_cycle() {
    let report = analyze("{1+2}*3").expect("Analysis failed");
    assert_eq!(report.input, "{1+2}*3");
    assert_eq!(report.rendering, "((1 + 2) * 3)");
    assert_eq!(report.value, 9.0);
    assert_eq!(report.dot, graph::export(&report.tree));
    assert!(report.trailing.is_none());
}

#[test]
fn test_analyze_error_message() {
    let err = analyze("1+").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Syntax error at column 3: expected digit, found end of input"
    );
}

#[test]
fn test_history_session() {
    let mut history = History::new();
    history.submit("1-2-3");
    history.submit("{1+2");
    history.submit("1 - 2 - 3");

    assert_eq!(history.len(), 3);
    assert_eq!(history.distinct_inputs(), 2);

    let values: Vec<Option<f64>> = history
        .entries()
        .iter()
        .map(|e| e.outcome.as_ref().ok().map(|r| r.value))
        .collect();
    assert_eq!(values, vec![Some(-4.0), None, Some(-4.0)]);
}
