//! `Tasklist` — terminal task list.
//!
//! Launches the TUI on the home screen. Configuration via CLI flags,
//! environment variables, or config file (`~/.config/tasklist/config.toml`).
//!
//! ```bash
//! cargo run --bin tasklist
//!
//! # Dark theme, search descriptions too
//! cargo run --bin tasklist -- --theme dark --search-description
//!
//! # Or via environment variables
//! TASKLIST_THEME=dark TASKLIST_LOG=debug cargo run
//! ```

use std::io;
use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing_appender::non_blocking::WorkerGuard;

use tasklist::app::App;
use tasklist::auth::{AuthCommand, AuthEvent, InMemorySession, StubAuth, spawn_auth};
use tasklist::config::{CliArgs, ClientConfig};
use tasklist::ui;

#[tokio::main]
async fn main() -> io::Result<()> {
    let cli = CliArgs::parse();

    // CLI args > env > config file > defaults.
    let config = match ClientConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: failed to load config file: {e}");
            ClientConfig::default()
        }
    };

    // Logs go to a file, never stdout: ratatui owns the terminal.
    let _log_guard = init_logging(&cli.log_level, cli.log_file.as_deref());

    tracing::info!("tasklist starting");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("tasklist exiting");
    result
}

/// Initialize file-based logging.
///
/// Returns a [`WorkerGuard`] that must be held until shutdown so buffered
/// log entries are flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join("tasklist.log");
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}

/// Main application loop. The auth worker runs on the tokio runtime.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &ClientConfig,
) -> io::Result<()> {
    let session = Arc::new(InMemorySession::new());
    let mut app = App::with_config(config).with_session(Arc::clone(&session));

    let auth = StubAuth::new(config.auth_latency).rejecting(config.auth_reject_all);
    let (cmd_tx, mut evt_rx) = spawn_auth(auth, session, config.auth_channel_capacity);

    loop {
        // Step 1: Draw the UI frame.
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Step 2: Apply finished auth requests (non-blocking).
        drain_auth_events(&mut app, &mut evt_rx);

        // Step 3: Poll for terminal input events.
        if event::poll(config.poll_timeout)?
            && let Event::Key(key) = event::read()?
        {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if let Some(cmd) = app.handle_key_event(key) {
                if let Err(e) = cmd_tx.try_send(cmd) {
                    tracing::warn!(error = %e, "auth worker unavailable");
                    app.auth_unavailable();
                }
            }
        }

        if app.should_quit {
            let _ = cmd_tx.send(AuthCommand::Shutdown).await;
            return Ok(());
        }
    }
}

/// Drain all pending `AuthEvent`s and apply them to the app.
fn drain_auth_events(app: &mut App, rx: &mut mpsc::Receiver<AuthEvent>) {
    while let Ok(event) = rx.try_recv() {
        app.apply_auth_event(event);
    }
}
