//! Terminal UI for the draft.

mod app;
mod input;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, instrument};

pub use app::{App, Focus, Form};
pub use input::{Action, map_key};

use crate::config::{DraftConfig, log_filter};
use crate::controller::DraftController;

const LOG_FILE: &str = "roster_draft_tui.log";

/// Runs the interactive draft screen until the user quits.
pub fn run_tui(config: DraftConfig) -> Result<()> {
    // Log to a file so tracing output does not corrupt the screen.
    let log_file = std::fs::File::create(LOG_FILE).context("Failed to create TUI log file")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(team_count = %config.team_count(), "Starting roster draft TUI");

    let mut app = App::new(DraftController::new(&config), config.highlight());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "TUI exited with error");
    }
    info!("TUI closed");
    result
}

#[instrument(skip_all)]
fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            let action = map_key(key, app.notice().is_some());
            app.apply(action, Instant::now());
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
