//! Tree pane: rendering, result, and an indented drawing of the tree
//!
//! The drawing puts each node on its own line, children below their parent
//! in left-then-right order:
//!
//! ```text
//! *
//! ├── +
//! │   ├── 1
//! │   └── 2
//! └── 3
//! ```

use super::utils::{clamp_scroll, pane_block, visible_height};
use crate::parser::ast::Expr;
use crate::session::Entry;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw `expr` as box-drawing lines, one node per line
pub fn tree_lines(expr: &Expr) -> Vec<String> {
    let mut lines = vec![expr.label()];
    push_children(expr, "", &mut lines);
    lines
}

fn push_children(expr: &Expr, prefix: &str, lines: &mut Vec<String>) {
    if let Expr::BinaryOp { left, right, .. } = expr {
        for (child, is_last) in [(left, false), (right, true)] {
            let (branch, extension) = if is_last {
                ("└── ", "    ")
            } else {
                ("├── ", "│   ")
            };
            lines.push(format!("{}{}{}", prefix, branch, child.label()));
            push_children(child, &format!("{}{}", prefix, extension), lines);
        }
    }
}

/// Color the node label at the end of a drawn line
fn styled_tree_line(line: String) -> Line<'static> {
    let split = line
        .char_indices()
        .find(|(_, c)| !matches!(c, '│' | '├' | '└' | '─' | ' '))
        .map(|(i, _)| i)
        .unwrap_or(line.len());
    let (guide, label) = line.split_at(split);

    let label_style = if label.chars().all(|c| c.is_ascii_digit() || c == '.') {
        Style::default().fg(DEFAULT_THEME.number)
    } else {
        Style::default()
            .fg(DEFAULT_THEME.operator)
            .add_modifier(Modifier::BOLD)
    };

    Line::from(vec![
        Span::styled(guide.to_string(), Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(label.to_string(), label_style),
    ])
}

/// Render the tree pane for the most recent entry
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    entry: Option<&Entry>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Expression Tree ", is_focused);

    let Some(entry) = entry else {
        let paragraph = Paragraph::new("(type an expression and press Enter)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let mut lines: Vec<Line> = Vec::new();
    match &entry.outcome {
        Ok(report) => {
            lines.push(Line::from(vec![
                Span::styled("Tree:   ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(report.rendering.clone(), Style::default().fg(DEFAULT_THEME.fg)),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Result: ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(
                    report.value.to_string(),
                    Style::default()
                        .fg(DEFAULT_THEME.success)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!(
                    "{} nodes, depth {}",
                    report.tree.node_count(),
                    report.tree.depth()
                ),
                Style::default().fg(DEFAULT_THEME.comment),
            )));
            if let Some(trailing) = &report.trailing {
                lines.push(Line::from(Span::styled(
                    format!("ignored trailing input: {}", trailing),
                    Style::default().fg(DEFAULT_THEME.secondary),
                )));
            }
            lines.push(Line::default());
            lines.extend(tree_lines(&report.tree).into_iter().map(styled_tree_line));
        }
        Err(err) => {
            lines.push(Line::from(Span::styled(
                entry.input.clone(),
                Style::default().fg(DEFAULT_THEME.fg),
            )));
            lines.push(Line::from(Span::styled(
                format!("Error: {}", err),
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD),
            )));
        }
    }

    let visible_height = visible_height(area);
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    let visible_lines: Vec<Line> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_single_literal_drawing() {
        assert_eq!(tree_lines(&parse("5").unwrap()), vec!["5"]);
    }

    #[test]
    fn test_nested_drawing() {
        let lines = tree_lines(&parse("1+2*3").unwrap());
        assert_eq!(
            lines,
            vec!["*", "├── +", "│   ├── 1", "│   └── 2", "└── 3"]
        );
    }

    #[test]
    fn test_right_nested_drawing() {
        let lines = tree_lines(&parse("1*{2-3}").unwrap());
        assert_eq!(
            lines,
            vec!["*", "├── 1", "└── -", "    ├── 2", "    └── 3"]
        );
    }

    #[test]
    fn test_one_line_per_node() {
        let tree = parse("{1+2}*{3/4}-5").unwrap();
        assert_eq!(tree_lines(&tree).len(), tree.node_count());
    }
}
