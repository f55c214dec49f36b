// exptree: parse, evaluate, and graph a brace-grouped arithmetic expression

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use exptree::graph::{self, DEFAULT_DOT_PATH};
use exptree::session;
use exptree::ui::App;

/// Parse an arithmetic expression over single digits, print its fully
/// parenthesized form and value, and write the tree as a DOT graph.
///
/// `+` and `-` bind tighter than `*` and `/`; use `{ }` to group.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expression to evaluate. Read from standard input when omitted.
    expression: Option<String>,

    /// File the DOT graph is written to.
    #[arg(short, long, default_value = DEFAULT_DOT_PATH)]
    output: PathBuf,

    /// Open the interactive explorer instead of evaluating a single line.
    #[arg(short, long)]
    tui: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.tui {
        return run_explorer(args.output);
    }

    let line = match args.expression {
        Some(expression) => expression,
        None => read_line()?,
    };

    let report = match session::analyze(&line) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    eprintln!(
        "Parsed successfully. Tree has {} node(s), depth {}.",
        report.tree.node_count(),
        report.tree.depth()
    );

    if let Some(trailing) = &report.trailing {
        eprintln!("Warning: ignoring trailing input '{}'", trailing);
    }

    println!("Expression Tree: {}", report.rendering);
    println!("Evaluated Result: {}", report.value);

    if let Err(e) = graph::write_dot_file(&report.tree, &args.output) {
        eprintln!("Error: failed to write {}: {}", args.output.display(), e);
        std::process::exit(1);
    }
    println!("DOT file written to {}", args.output.display());

    Ok(())
}

/// Prompt for and read one line from standard input
fn read_line() -> io::Result<String> {
    print!("Enter expression: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn run_explorer(output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(output);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    eprintln!("Evaluated {} expression(s).", app.history.len());

    Ok(())
}
