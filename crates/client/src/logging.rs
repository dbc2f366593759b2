//! File-based tracing setup.
//!
//! The TUI draws to stdout, so log output must never reach the terminal.
//! Everything goes to a log file under the platform cache directory (or an
//! explicit override from configuration).
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Initializes the global tracing subscriber writing to `quiz.log`.
pub fn setup(log_dir: Option<&Path>) -> Result<()> {
    let log_dir = match log_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_log_directory(),
    };
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "quiz.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Keep the guard alive for the duration of the program
    std::mem::forget(guard);

    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer().with_writer(non_blocking).with_ansi(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();

    tracing::info!("Logging to {}", log_dir.join("quiz.log").display());

    Ok(())
}

fn default_log_directory() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join("Library/Caches/quiz/logs");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(cache) = std::env::var_os("XDG_CACHE_HOME") {
            return PathBuf::from(cache).join("quiz/logs");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".cache/quiz/logs");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(local) = std::env::var_os("LOCALAPPDATA") {
            return PathBuf::from(local).join("quiz/logs");
        }
    }

    PathBuf::from("/tmp/quiz/logs")
}
