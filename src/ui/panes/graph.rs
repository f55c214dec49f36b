//! DOT text pane

use super::utils::{clamp_scroll, pane_block, visible_height};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Padding, Paragraph},
    Frame,
};

/// Highlight one line of DOT output: node names, labels, and punctuation
fn highlight_dot_line(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut rest = line;

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix("node") {
            let digits = after.len() - after.trim_start_matches(|c: char| c.is_ascii_digit()).len();
            let (name, tail) = rest.split_at(4 + digits);
            spans.push(Span::styled(name, Style::default().fg(DEFAULT_THEME.number)));
            rest = tail;
        } else if rest.starts_with('"') {
            let end = rest[1..].find('"').map(|i| i + 2).unwrap_or(rest.len());
            let (label, tail) = rest.split_at(end);
            spans.push(Span::styled(label, Style::default().fg(DEFAULT_THEME.string)));
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("->") {
            spans.push(Span::styled("->", Style::default().fg(DEFAULT_THEME.operator)));
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("digraph") {
            spans.push(Span::styled("digraph", Style::default().fg(DEFAULT_THEME.keyword)));
            rest = tail;
        } else {
            let ch_len = rest.chars().next().map(char::len_utf8).unwrap_or(1);
            let (ch, tail) = rest.split_at(ch_len);
            spans.push(Span::styled(ch, Style::default().fg(DEFAULT_THEME.fg)));
            rest = tail;
        }
    }

    Line::from(spans)
}

/// Render the graph description of the latest successful entry
pub fn render_graph_pane(
    frame: &mut Frame,
    area: Rect,
    dot: Option<&str>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Graph (DOT) ", is_focused);

    let Some(dot) = dot else {
        let paragraph = Paragraph::new("(no graph)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let lines: Vec<&str> = dot.lines().collect();

    let visible_height = visible_height(area);
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    let visible_lines: Vec<Line> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(highlight_dot_line)
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
