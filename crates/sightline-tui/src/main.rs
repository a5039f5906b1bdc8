use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use ratatui::Terminal;
use ratatui::crossterm::event;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::CrosstermBackend;
use tracing_subscriber::EnvFilter;

mod action;
mod app;
mod config_file;
mod input;
mod model;
mod theme;
mod view;

use app::App;
use sightline_core::store::{self, StorePaths};

/// Sightline — review scraped shark/ray sighting records one at a time and
/// persist the validated table as CSV.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the scraped sightings dataset
    #[arg(long)]
    data: Option<PathBuf>,

    /// Path to the validation save file
    #[arg(long)]
    save: Option<PathBuf>,

    /// Color theme: hacker (default) or modern
    #[arg(long)]
    theme: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let file_cfg = config_file::load_config();

    // Resolve paths and theme: CLI flags > config file > defaults
    let paths = StorePaths {
        data: args
            .data
            .or_else(|| {
                file_cfg
                    .paths
                    .as_ref()
                    .and_then(|p| p.data.clone())
                    .map(PathBuf::from)
            })
            .unwrap_or_else(|| PathBuf::from(store::DEFAULT_DATA_PATH)),
        save: args
            .save
            .or_else(|| {
                file_cfg
                    .paths
                    .as_ref()
                    .and_then(|p| p.save.clone())
                    .map(PathBuf::from)
            })
            .unwrap_or_else(|| PathBuf::from(store::DEFAULT_SAVE_PATH)),
    };
    let theme_name = args
        .theme
        .or_else(|| file_cfg.display.as_ref().and_then(|d| d.theme.clone()))
        .unwrap_or_default();
    let theme = match theme_name.as_str() {
        "modern" => theme::Theme::modern(),
        _ => theme::Theme::hacker(),
    };

    let _log_guard = init_logging();

    // Load before touching the terminal so a missing or malformed dataset
    // fails with a plain error on stderr
    let table = store::load(&paths)
        .with_context(|| format!("could not load sighting data from {}", paths.data.display()))?;

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Install panic hook that restores terminal before printing panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Drain any stray input events (e.g. Enter keypress from launching the command)
    while event::poll(Duration::from_millis(50)).unwrap_or(false) {
        let _ = event::read();
    }

    let mut app = App::new(table, paths, theme);

    // Main event loop: synchronous, one full redraw per interaction
    let tick_rate = Duration::from_millis(100);
    loop {
        terminal.draw(|f| app.view(f))?;

        if event::poll(tick_rate)?
            && let Ok(evt) = event::read()
        {
            let action = input::map_event(&evt, &app.input_mode);
            app.update(action);
        }
        app.update(action::Action::Tick);

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;

    Ok(())
}

/// Log to a per-run file under the platform cache dir. The TUI owns the
/// terminal, so nothing may write to stdout/stderr while it runs.
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let dir = dirs::cache_dir()?.join("sightline").join("logs");
    std::fs::create_dir_all(&dir).ok()?;
    let filename = format!(
        "sightline_{}.log",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );
    let appender = tracing_appender::rolling::never(dir, filename);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}
