use std::env::var;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{Layer, filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Appended to, created if missing
    File(PathBuf),
    /// Dropped, for when the terminal belongs to a full-screen UI
    Discard,
}

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("failed to open log file {path}: {source}")]
    OpenFailed { path: PathBuf, source: io::Error },

    #[error("a global subscriber is already installed: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Install the global subscriber.
///
/// `level` is the default directive; `RUST_LOG` still overrides it.
/// `RUST_LOG_FORMAT=json` switches to JSON lines.
pub fn init(level: LevelFilter, target: LogTarget) -> Result<(), LoggerError> {
    let env_filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();
    let json = var("RUST_LOG_FORMAT").is_ok_and(|format| format == "json");
    let ansi = target == LogTarget::Stderr;

    let writer = match target {
        LogTarget::Stderr => BoxMakeWriter::new(io::stderr),
        LogTarget::Discard => BoxMakeWriter::new(io::sink),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|source| LoggerError::OpenFailed { path, source })?;
            BoxMakeWriter::new(Mutex::new(file))
        }
    };

    let log_layer = if json {
        tracing_subscriber::fmt::layer().json().with_writer(writer).with_filter(env_filter).boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .compact()
            .with_ansi(ansi)
            .with_writer(writer)
            .with_filter(env_filter)
            .boxed()
    };

    tracing_subscriber::registry().with(log_layer).try_init()?;
    Ok(())
}
