//! History pane: one line per submitted expression

use super::utils::{clamp_scroll, pane_block, visible_height};
use crate::session::{Entry, History};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

fn history_item(entry: &Entry) -> ListItem<'_> {
    let line = match &entry.outcome {
        Ok(report) => Line::from(vec![
            Span::styled("✓ ", Style::default().fg(DEFAULT_THEME.success)),
            Span::styled(entry.input.as_str(), Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled(" = ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(report.value.to_string(), Style::default().fg(DEFAULT_THEME.number)),
        ]),
        Err(err) => Line::from(vec![
            Span::styled("✗ ", Style::default().fg(DEFAULT_THEME.error)),
            Span::styled(entry.input.as_str(), Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled(
                format!("  {}", err.message()),
                Style::default().fg(DEFAULT_THEME.error),
            ),
        ]),
    };
    ListItem::new(line)
}

/// Pane title with distinct and failed counts once anything was submitted
fn history_title(history: &History) -> String {
    if history.is_empty() {
        return " History ".to_string();
    }
    format!(
        " History ({} distinct, {} failed) ",
        history.distinct_inputs(),
        history.failed()
    )
}

/// Render submitted lines, newest at the bottom
pub fn render_history_pane(
    frame: &mut Frame,
    area: Rect,
    history: &History,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = history_title(history);
    let block = pane_block(&title, is_focused);
    let entries = history.entries();

    if entries.is_empty() {
        let paragraph = Paragraph::new("(empty)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));

    let visible_height = visible_height(area);
    clamp_scroll(scroll_offset, entries.len(), visible_height);

    let visible_items: Vec<ListItem> = entries
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(history_item)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_title() {
        let mut history = History::new();
        assert_eq!(history_title(&history), " History ");

        history.submit("1+2");
        history.submit("1 + 2");
        history.submit("{3");
        assert_eq!(history_title(&history), " History (2 distinct, 1 failed) ");
    }
}
