//! Contact TUI - terminal contact form
//!
//! A Ratatui-based form for collecting a list of name/email pairs and
//! posting them as JSON to a remote endpoint.

mod app;
mod config;
mod platform;
mod state;
mod submit;
mod ui;

use anyhow::Result;
use app::App;
use config::ContactConfig;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use submit::HttpSubmitter;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ContactConfig::load()?;

    // Initialize logging
    let log_guard = init_logging(&config);

    let submitter = HttpSubmitter::new(config.endpoint()?)?;
    tracing::info!(endpoint = %submitter.endpoint(), "starting contact form");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(Arc::new(submitter));
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!(error = ?err, "contact form exited with error");
        eprintln!("Error: {err:?}");
        drop(log_guard);
        std::process::exit(1);
    }

    Ok(())
}

/// Log file name in the data directory, without its extension
const LOG_FILE_PREFIX: &str = "contact-tui";

/// Log to a file in the data directory; the terminal belongs to the UI.
///
/// The returned guard flushes pending lines on drop and must be held until
/// the app exits.
fn init_logging(config: &ContactConfig) -> WorkerGuard {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        config
            .log_level
            .as_deref()
            .unwrap_or("contact_tui=info")
            .into()
    });

    let (writer, guard) = log_writer(ContactConfig::log_dir());

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();

    guard
}

/// Non-blocking writer to `<dir>/contact-tui.log`, or to stderr when no file
/// can be opened there
fn log_writer(dir: Option<PathBuf>) -> (NonBlocking, WorkerGuard) {
    let appender = dir.and_then(|dir| {
        fs::create_dir_all(&dir).ok()?;
        RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(LOG_FILE_PREFIX)
            .filename_suffix("log")
            .build(dir)
            .ok()
    });
    match appender {
        Some(appender) => tracing_appender::non_blocking(appender),
        None => tracing_appender::non_blocking(io::stderr()),
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        let term_size = terminal.size()?;
        app.terminal_size = Some((term_size.height, term_size.width));

        // Apply a settled submission before drawing
        app.poll_submission();

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling while something animates or a request is in flight
        // (16ms = ~60fps), normal polling (100ms) otherwise
        let poll_duration = if app.is_animating() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        // Let the submission task make progress between frames
        tokio::task::yield_now().await;

        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        app.request_quit();
                    } else {
                        app.handle_key(key);
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(_width, _height) => {
                    // Layout is recomputed from the new size on the next draw
                }
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
