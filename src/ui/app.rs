//! Main TUI application state and logic

use crate::graph;
use crate::session::History;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Which scrollable pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Tree,
    Graph,
    History,
}

impl FocusedPane {
    /// Move focus to the next pane (tree -> graph -> history)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Tree => FocusedPane::Graph,
            FocusedPane::Graph => FocusedPane::History,
            FocusedPane::History => FocusedPane::Tree,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Tree => FocusedPane::History,
            FocusedPane::Graph => FocusedPane::Tree,
            FocusedPane::History => FocusedPane::Graph,
        }
    }
}

/// The main application state
pub struct App {
    /// Every line submitted so far
    pub history: History,

    /// The line being edited
    pub input: String,

    /// Cursor position in `input`, counted in characters
    pub cursor: usize,

    /// Where the DOT file is written after each successful evaluation
    pub output_path: PathBuf,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub tree_scroll: usize,
    pub graph_scroll: usize,
    pub history_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a failure
    pub status_is_error: bool,
}

impl App {
    pub fn new(output_path: PathBuf) -> Self {
        App {
            history: History::new(),
            input: String::new(),
            cursor: 0,
            output_path,
            focused_pane: FocusedPane::Tree,
            tree_scroll: 0,
            graph_scroll: 0,
            history_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Input line on top, panes in the middle, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[1]);

        // Right column: Graph (top) | History (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[1]);

        let latest = self.history.latest();
        let dot = latest
            .and_then(|entry| entry.outcome.as_ref().ok())
            .map(|report| report.dot.as_str());

        super::panes::render_tree_pane(
            frame,
            columns[0],
            latest,
            self.focused_pane == FocusedPane::Tree,
            &mut self.tree_scroll,
        );

        super::panes::render_graph_pane(
            frame,
            right_rows[0],
            dot,
            self.focused_pane == FocusedPane::Graph,
            &mut self.graph_scroll,
        );

        super::panes::render_history_pane(
            frame,
            right_rows[1],
            &self.history,
            self.focused_pane == FocusedPane::History,
            &mut self.history_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            &self.status_message,
            self.history.len(),
            self.status_is_error,
        );

        // Drawn last so the terminal cursor ends up in the input line
        super::panes::render_input_pane(frame, main_chunks[0], &self.input, self.cursor);
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char(c) => {
                let byte = self.byte_offset(self.cursor);
                self.input.insert(byte, c);
                self.cursor += 1;
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let byte = self.byte_offset(self.cursor);
                    self.input.remove(byte);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.input.chars().count() {
                    let byte = self.byte_offset(self.cursor);
                    self.input.remove(byte);
                }
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.input.chars().count());
            }
            KeyCode::Home => {
                self.cursor = 0;
            }
            KeyCode::End => {
                self.cursor = self.input.chars().count();
            }
            KeyCode::Up => {
                if let Some(line) = self.history.recall_previous() {
                    let line = line.to_string();
                    self.set_input(line);
                }
            }
            KeyCode::Down => {
                // Only leaving recall clears the line; a fresh line is kept
                if self.history.is_recalling() {
                    let line = self
                        .history
                        .recall_next()
                        .map(str::to_string)
                        .unwrap_or_default();
                    self.set_input(line);
                }
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::PageUp => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::PageDown => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            KeyCode::Enter => {
                self.submit();
            }
            _ => {}
        }
    }

    /// Analyze the current line and write its graph to `output_path`
    pub fn submit(&mut self) {
        if self.input.trim().is_empty() {
            return;
        }

        let line = std::mem::take(&mut self.input);
        self.cursor = 0;
        self.tree_scroll = 0;
        self.graph_scroll = 0;
        // Keep the newest entry in view
        self.history_scroll = usize::MAX;

        let entry = self.history.submit(&line);
        match &entry.outcome {
            Ok(report) => match graph::write_dot_file(&report.tree, &self.output_path) {
                Ok(()) => {
                    self.status_message =
                        format!("DOT file written to {}", self.output_path.display());
                    self.status_is_error = false;
                }
                Err(e) => {
                    self.status_message = format!(
                        "Failed to write {}: {}",
                        self.output_path.display(),
                        e
                    );
                    self.status_is_error = true;
                }
            },
            Err(err) => {
                self.status_message = format!("Error: {}", err);
                self.status_is_error = true;
            }
        }
    }

    fn set_input(&mut self, line: String) {
        self.cursor = line.chars().count();
        self.input = line;
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Tree => &mut self.tree_scroll,
            FocusedPane::Graph => &mut self.graph_scroll,
            FocusedPane::History => &mut self.history_scroll,
        }
    }

    /// Byte offset of the `chars`-th character of the input
    fn byte_offset(&self, chars: usize) -> usize {
        self.input
            .char_indices()
            .nth(chars)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_line(app: &mut App, line: &str) {
        for c in line.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn temp_output(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("exptree-{}-{}.dot", name, std::process::id()))
    }

    #[test]
    fn test_line_editing() {
        let mut app = App::new(temp_output("editing"));
        type_line(&mut app, "1+3");
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Backspace);
        type_line(&mut app, "*");
        assert_eq!(app.input, "1*3");
        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Delete);
        assert_eq!(app.input, "*3");
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_submit_writes_dot_file() {
        let path = temp_output("submit");
        let mut app = App::new(path.clone());
        type_line(&mut app, "1+2");
        press(&mut app, KeyCode::Enter);

        assert!(app.input.is_empty());
        assert!(!app.status_is_error);
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("node0 -> node2;"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_submit_error_sets_status() {
        let mut app = App::new(temp_output("error"));
        type_line(&mut app, "{1+2");
        press(&mut app, KeyCode::Enter);
        assert!(app.status_is_error);
        assert!(app.status_message.contains("expected closing brace"));
    }

    #[test]
    fn test_history_recall() {
        let mut app = App::new(temp_output("recall"));
        type_line(&mut app, "1+");
        press(&mut app, KeyCode::Enter);
        type_line(&mut app, "7");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Up);
        assert_eq!(app.input, "7");
        press(&mut app, KeyCode::Up);
        assert_eq!(app.input, "1+");
        assert_eq!(app.cursor, 2);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.input, "7");
        press(&mut app, KeyCode::Down);
        assert_eq!(app.input, "");
        let _ = std::fs::remove_file(temp_output("recall"));
    }

    #[test]
    fn test_down_keeps_fresh_line() {
        let mut app = App::new(temp_output("fresh"));
        type_line(&mut app, "5");
        press(&mut app, KeyCode::Enter);

        type_line(&mut app, "1+2");
        press(&mut app, KeyCode::Down);
        assert_eq!(app.input, "1+2");
        assert_eq!(app.cursor, 3);

        let mut empty = App::new(temp_output("fresh-empty"));
        type_line(&mut empty, "3*");
        press(&mut empty, KeyCode::Down);
        assert_eq!(empty.input, "3*");
        let _ = std::fs::remove_file(temp_output("fresh"));
    }

    #[test]
    fn test_focus_cycle_and_quit() {
        let mut app = App::new(temp_output("focus"));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Graph);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused_pane, FocusedPane::Tree);
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
