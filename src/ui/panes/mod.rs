//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`input`]: The expression being edited, with cursor
//! - [`tree`]: Rendering, result, and an indented drawing of the latest tree
//! - [`graph`]: DOT text for the latest tree with light highlighting
//! - [`history`]: Previously submitted lines and their outcomes
//! - [`status`]: Status bar with keybindings
//! - `utils`: Shared block styling and scroll clamping
//!
//! Each pane module exports a primary `render_*_pane()` function; scrollable
//! panes take their scroll offset by `&mut` and clamp it in place.

mod utils;

pub mod graph;
pub mod history;
pub mod input;
pub mod status;
pub mod tree;

pub use graph::render_graph_pane;
pub use history::render_history_pane;
pub use input::render_input_pane;
pub use status::render_status_bar;
pub use tree::{render_tree_pane, tree_lines};
