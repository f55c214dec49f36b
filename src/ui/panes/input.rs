//! Expression input line

use super::utils::pane_block;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Style a single input character by its role in the grammar
fn char_style(c: char) -> Style {
    match c {
        '0'..='9' => Style::default().fg(DEFAULT_THEME.number),
        '+' | '-' | '*' | '/' => Style::default().fg(DEFAULT_THEME.operator),
        '{' | '}' => Style::default().fg(DEFAULT_THEME.primary),
        c if c.is_whitespace() => Style::default(),
        _ => Style::default().fg(DEFAULT_THEME.error),
    }
}

/// Render the input line and place the terminal cursor at `cursor`
/// (a character index into `input`).
pub fn render_input_pane(frame: &mut Frame, area: Rect, input: &str, cursor: usize) {
    let block = pane_block(" Expression ", true);

    // Keep the cursor visible on narrow terminals by scrolling horizontally
    let width = area.width.saturating_sub(2).max(1) as usize;
    let skip = (cursor + 1).saturating_sub(width);

    let spans: Vec<Span> = input
        .chars()
        .skip(skip)
        .take(width)
        .map(|c| Span::styled(c.to_string(), char_style(c)))
        .collect();

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);

    let x = area.x + 1 + (cursor - skip) as u16;
    frame.set_cursor_position(Position::new(x, area.y + 1));
}
