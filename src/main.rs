mod app;
mod domain;
mod input;
mod logging;
mod persistence;
mod report;
mod ticker;
mod ui;

use anyhow::Result;
use app::{Answer, AppState, Confirm, Intent};
use clap::{Args, Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{derive_view, Filter, SortBy};
use persistence::{ensure_data_dir, init_local_data_dir, Store};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "coursework")]
#[command(about = "A terminal to-do list for students, with search, filters and deadlines", long_about = None)]
struct Cli {
    /// Data directory. Defaults to the nearest .coursework, then ~/.coursework
    #[arg(long, global = true, value_name = "PATH")]
    dir: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .coursework directory in the current directory
    Init,
    /// Print the task list
    List(ViewArgs),
    /// Write the task list as an HTML page
    Export {
        /// Output file path. Defaults to ./coursework.html
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Delete every task
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args)]
struct ViewArgs {
    /// Completion filter
    #[arg(short, long, value_enum)]
    filter: Option<Filter>,
    /// Case-insensitive text matched against name, course and notes
    #[arg(short, long)]
    search: Option<String>,
    /// Sort key. Defaults to the saved preference
    #[arg(long, value_enum)]
    sort: Option<SortBy>,
}

/// Asks on stdin, anything but y/yes declines
struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{} [y/N] ", prompt);
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Init) = cli.command {
        let current_dir = std::env::current_dir()?;
        let data_dir = init_local_data_dir(&current_dir)?;
        println!("Initialized coursework directory: {}", data_dir.display());
        println!();
        println!("Coursework will now use this local directory for task storage.");
        println!("Run 'coursework' to start tracking tasks.");
        return Ok(());
    }

    let data_dir = ensure_data_dir(cli.dir.as_deref())?;
    if let Err(e) = logging::init_tracing(&data_dir, cli.verbose) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }
    info!(dir = %data_dir.display(), "using data directory");

    let store = Store::open(&data_dir);

    match cli.command {
        Some(Commands::List(args)) => {
            let app = AppState::new(store);
            let (search, filter, sort_by) = resolve_view(&app, args);
            let view = derive_view(&app.tasks, &search, filter, sort_by);
            print!("{}", report::render_text(&view));
            Ok(())
        }
        Some(Commands::Export { output, view }) => {
            let app = AppState::new(store);
            let (search, filter, sort_by) = resolve_view(&app, view);
            let view = derive_view(&app.tasks, &search, filter, sort_by);
            let path = output.unwrap_or_else(|| PathBuf::from("coursework.html"));
            report::export_html(&view, sort_by, &path)?;
            info!(path = %path.display(), "exported tasks");
            println!("Exported {} tasks to {}", view.visible.len(), path.display());
            Ok(())
        }
        Some(Commands::Reset { yes }) => reset(AppState::new(store), yes),
        // Sample tasks are only seeded for the interactive session
        Some(Commands::Init) | None => run_tui(AppState::open(store)?),
    }
}

/// Fill in view arguments from the saved preferences
fn resolve_view(app: &AppState, args: ViewArgs) -> (String, Filter, SortBy) {
    (
        args.search.unwrap_or_default(),
        args.filter.unwrap_or_default(),
        args.sort.unwrap_or(app.sort_by),
    )
}

fn reset(mut app: AppState, yes: bool) -> Result<()> {
    let before = app.tasks.len();
    if yes {
        app.dispatch(Intent::ResetAll, &mut Answer(true))?;
    } else {
        app.dispatch(Intent::ResetAll, &mut StdinConfirm)?;
    }

    if app.tasks.is_empty() && before > 0 {
        println!("Deleted {} tasks.", before);
    } else if before > 0 {
        println!("Reset cancelled.");
    } else {
        println!("Nothing to reset.");
    }
    Ok(())
}

fn run_tui(mut app: AppState) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        error!(error = %err, "terminal loop failed");
        eprintln!("Error: {}", err);
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                    return Ok(());
                }
            }
        }

        app.tick();
    }
}
