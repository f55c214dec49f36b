// One parse-evaluate-export cycle per input line, plus the explorer's history

use crate::graph;
use crate::parser::ast::Expr;
use crate::parser::parse::{Parser, SyntaxError};
use rustc_hash::FxHashMap;

/// Everything produced from one successfully parsed line
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub input: String,
    pub tree: Expr,
    pub rendering: String,
    pub value: f64,
    pub dot: String,
    /// Input the grammar stopped short of, if any
    pub trailing: Option<String>,
}

/// Parse `input`, then render, evaluate, and export the resulting tree.
pub fn analyze(input: &str) -> Result<Report, SyntaxError> {
    let mut parser = Parser::new(input);
    let tree = parser.parse()?;

    let trailing = if parser.is_at_end() {
        None
    } else {
        Some(parser.remaining())
    };

    Ok(Report {
        input: input.to_string(),
        rendering: tree.render(),
        value: tree.evaluate(),
        dot: graph::export(&tree),
        tree,
        trailing,
    })
}

/// Cache key: two inputs differing only in whitespace parse identically
fn normalize(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// A submitted line and what came of it
#[derive(Debug, Clone)]
pub struct Entry {
    pub input: String,
    pub outcome: Result<Report, SyntaxError>,
}

impl Entry {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Submitted lines in order, with a recall cursor for Up/Down navigation
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<Entry>,
    /// Normalized input -> index of the entry first analyzed for it
    cache: FxHashMap<String, usize>,
    /// Position while recalling; `None` means editing a fresh line
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyze `input` (or reuse the cached outcome) and append it
    pub fn submit(&mut self, input: &str) -> &Entry {
        let key = normalize(input);
        let outcome = match self.cache.get(&key) {
            Some(&index) => self.entries[index].outcome.clone().map(|report| Report {
                input: input.to_string(),
                ..report
            }),
            None => {
                self.cache.insert(key, self.entries.len());
                analyze(input)
            }
        };

        self.entries.push(Entry {
            input: input.to_string(),
            outcome,
        });
        self.cursor = None;

        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&Entry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct inputs that were actually analyzed
    pub fn distinct_inputs(&self) -> usize {
        self.cache.len()
    }

    /// Whether Up/Down navigation is currently showing an old input
    pub fn is_recalling(&self) -> bool {
        self.cursor.is_some()
    }

    /// Number of submitted lines that failed to parse
    pub fn failed(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_ok()).count()
    }

    /// Step back to the previous input; stays on the oldest one
    pub fn recall_previous(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let index = match self.cursor {
            None => self.entries.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(index);
        Some(self.entries[index].input.as_str())
    }

    /// Step forward; `None` once past the newest input
    pub fn recall_next(&mut self) -> Option<&str> {
        let index = self.cursor? + 1;
        if index >= self.entries.len() {
            self.cursor = None;
            return None;
        }
        self.cursor = Some(index);
        Some(self.entries[index].input.as_str())
    }
}
