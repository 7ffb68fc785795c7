use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_invaders::app::App;
use tui_invaders::event::{Event, EventHandler};
use tui_invaders::{term, ui};

type Term = Terminal<CrosstermBackend<io::Stdout>>;

#[derive(Parser)]
#[command(name = "tui-invaders")]
#[command(about = "Defend the bottom row against a formation of invaders")]
struct Args {
    /// Seed for alien fire, for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(seed = ?args.seed, "starting");

    term::install_panic_hook();
    let result = setup_terminal().and_then(|mut terminal| run(&mut terminal, App::new(rng)));

    // Restore terminal whether or not setup got all the way through.
    let restored = term::restore().context("failed to restore terminal");
    result?;
    restored
}

fn setup_terminal() -> Result<Term> {
    let mut stdout = io::stdout();
    term::enter(&mut stdout).context("failed to enter alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok(terminal)
}

fn run(terminal: &mut Term, mut app: App) -> Result<()> {
    let mut events = EventHandler::new();
    app.start(Instant::now());

    loop {
        terminal.draw(|frame| ui::render(frame, &app))?;

        match events.next(&mut app.timers)? {
            Event::Tick => app.on_tick(Instant::now()),
            Event::Frame => app.on_frame(),
            Event::Key(key) => app.on_key(key),
            Event::Exit => app.on_exit(),
        }

        if app.should_quit {
            break;
        }
    }

    info!(score = app.state.score, outcome = ?app.state.outcome(), "finished");
    Ok(())
}
