//! Terminal UI for Omok.

mod app;
mod chat;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use omok::GameSession;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use tokio::time::Duration;
use tracing::{error, info};

use app::{App, Transition};

/// Runs the interactive TUI until the user quits.
///
/// Sets up file-based logging and the terminal, drives the event loop,
/// and restores the terminal on exit.
pub async fn run_tui(size: usize, log_file: PathBuf) -> Result<()> {
    // Log to file to avoid interfering with the TUI.
    let log = std::fs::File::create(&log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log))
        .with_ansi(false)
        .try_init();

    info!(size, "Starting Omok TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(GameSession::new(size));
    let res = run_app(&mut terminal, app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
        eprintln!("Error: {err:?}");
    }

    res
}

/// Event loop: redraw from queried session state, then handle one input
/// event. The session is owned here and mutated only through the app.
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Poll for input with a short timeout to keep the loop responsive.
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key) == Transition::Quit
        {
            info!("User quit");
            return Ok(());
        }
    }
}
