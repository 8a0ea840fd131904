//! Radscope: Radiation exposure and risk explorer
//!
//! Main entry point for the terminal application.

use std::io::IsTerminal;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use radscope::tui::App;

const DEFAULT_LOG_FILE: &str = "radscope.log";

/// Where log lines go, chosen by `RADSCOPE_LOG_MODE` (`auto`, `file`, `stdout`).
fn logs_to_file() -> bool {
    match std::env::var("RADSCOPE_LOG_MODE").as_deref() {
        Ok("file") => true,
        Ok("stdout") => false,
        // The TUI owns the terminal, so an interactive session logs to a file.
        _ => std::io::stdout().is_terminal(),
    }
}

/// Install the global subscriber. The returned guard flushes pending lines on drop.
fn init_logging() -> Result<WorkerGuard> {
    let (writer, guard) = if logs_to_file() {
        let log_file =
            std::env::var("RADSCOPE_LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        if let Some(dir) = Path::new(&log_file).parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Cannot create log directory {}", dir.display()))?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .with_context(|| format!("Cannot open log file {log_file}"))?;
        tracing_appender::non_blocking(file)
    } else {
        tracing_appender::non_blocking(std::io::stdout())
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(writer))
        .init();

    Ok(guard)
}

fn main() -> Result<()> {
    let _guard = init_logging()?;

    tracing::info!("Starting Radscope...");

    let mut app = App::new()?;
    app.run()?;

    tracing::info!("Radscope shutdown complete.");
    Ok(())
}
