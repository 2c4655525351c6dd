//! credit-tui - terminal form for the credit risk prediction service.
//!
//! Collects eight customer fields, posts the full 20-field record to the
//! prediction service and shows the returned probability and risk label.

mod app;
mod event;
mod services;
mod ui;
mod widgets;

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use credit_predict::{
    ClientConfig, HttpPredictionService, PredictionService, DEFAULT_ENDPOINT, ENDPOINT_ENV_VAR,
};
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use app::App;
use event::{handle_key_event, poll_event};
use services::Submitter;
use ui::draw_ui;

#[derive(Parser, Debug)]
#[command(name = "credit-tui")]
#[command(about = "Credit risk prediction form", long_about = None)]
#[command(version)]
struct Args {
    /// Prediction endpoint URL
    #[arg(long, env = ENDPOINT_ENV_VAR, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Append logs to this file (stdout belongs to the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    // Validate the endpoint before taking over the terminal
    let service = HttpPredictionService::new(ClientConfig::new(args.endpoint.clone()))
        .context("invalid prediction endpoint")?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let mut submitter = Submitter::new(service, runtime.handle().clone());
    info!(endpoint = %submitter.endpoint(), "starting credit-tui");

    // Setup terminal
    enable_raw_mode()?;
    let mut terminal = undo_on_error(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(stdout))
        },
        || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            disable_raw_mode()
        },
    )?;

    let mut app = App::new(submitter.endpoint());

    // Main loop
    let result = run_app(&mut terminal, &mut app, &mut submitter);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    info!("credit-tui stopped");
    Ok(())
}

fn run_app<B, S>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    submitter: &mut Submitter<S>,
) -> anyhow::Result<()>
where
    B: Backend,
    S: PredictionService + Clone + 'static,
{
    let tick_rate = Duration::from_millis(100);

    loop {
        terminal.draw(|frame| draw_ui(frame, app))?;

        app.clear_expired_status();

        while let Some(outcome) = submitter.try_next() {
            app.finish_submit(outcome);
        }

        if let Some(Event::Key(key)) = poll_event(tick_rate)? {
            if let Some(request) = handle_key_event(app, key) {
                submitter.spawn(request);
            }
        }

        if app.should_quit {
            break;
        }

        app.on_tick();
    }

    Ok(())
}

/// Run `setup`, and run `undo` before returning if it fails.
fn undo_on_error<T>(
    setup: impl FnOnce() -> io::Result<T>,
    undo: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    match setup() {
        Ok(value) => Ok(value),
        Err(err) => {
            let _ = undo();
            Err(err)
        }
    }
}

/// Send tracing output to `path`, filtered by `RUST_LOG`.
fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "credit_tui=info,credit_predict=info".into()),
        )
        .try_init()
        .context("failed to install log subscriber")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_endpoint() {
        let args = Args::try_parse_from(["credit-tui"]).unwrap();
        if std::env::var(ENDPOINT_ENV_VAR).is_err() {
            assert_eq!(args.endpoint, DEFAULT_ENDPOINT);
        }
        assert!(args.log_file.is_none());
    }

    #[test]
    fn test_args_overrides() {
        let args = Args::try_parse_from([
            "credit-tui",
            "--endpoint",
            "http://10.0.0.5:8000/predict",
            "--log-file",
            "/tmp/credit.log",
        ])
        .unwrap();
        assert_eq!(args.endpoint, "http://10.0.0.5:8000/predict");
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/credit.log")));
    }

    #[test]
    fn test_failed_setup_is_undone() {
        let mut undone = false;
        let result: io::Result<()> = undo_on_error(
            || Err(io::Error::new(io::ErrorKind::Other, "no tty")),
            || {
                undone = true;
                Ok(())
            },
        );
        assert!(result.is_err());
        assert!(undone);
    }

    #[test]
    fn test_successful_setup_is_kept() {
        let mut undone = false;
        let value = undo_on_error(
            || Ok(7),
            || {
                undone = true;
                Ok(())
            },
        )
        .unwrap();
        assert_eq!(value, 7);
        assert!(!undone);
    }

    #[test]
    fn test_init_logging_writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credit-tui.log");
        init_logging(&path).unwrap();
        info!("hello from the test");
        assert!(path.exists());
    }

    #[test]
    fn test_init_logging_reports_bad_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("credit-tui.log");
        assert!(init_logging(&path).is_err());
    }
}
