mod cli;
mod config;
mod format;
mod plain;
mod targets;
mod tui;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use logger::{LevelFilter, LogTarget};
use prober::{PollOrchestrator, Prober};
use tracing::{info, warn};

use crate::cli::{Args, TargetError};
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.show_config {
        println!("{}", load_config(&args));
        return Ok(());
    }

    let (targets, config) = match prepare(&args) {
        Ok(prepared) => prepared,
        Err(e) => {
            eprintln!("{e}");
            // Best effort, we exit right after
            let _ = Args::command().print_help();
            std::process::exit(1);
        }
    };

    // The TUI owns the terminal, logs go to the configured file or nowhere
    let log_target = match (&config.logging.file, args.plain_output()) {
        (Some(file), _) => LogTarget::File(file.clone()),
        (None, true) => LogTarget::Stderr,
        (None, false) => LogTarget::Discard,
    };
    let level = config.logging.level_filter();
    logger::init(level.unwrap_or(LevelFilter::INFO), log_target)
        .context("Failed to initialize logging")?;
    if level.is_none() {
        warn!(level = %config.logging.level, "Unknown log level, using info");
    }

    let prober = Arc::new(
        Prober::new(config.polling.timeout()).context("Failed to build the HTTP client")?,
    );
    let orchestrator = PollOrchestrator::new(prober, targets.clone(), config.polling.interval());
    let reader = orchestrator.reader();
    let snapshots = orchestrator.subscribe();

    info!(targets = targets.len(), "Starting impromon");
    let polling = tokio::spawn(orchestrator.run());

    let outcome = if args.plain_output() {
        plain::run(&targets, snapshots, args.json).await
    } else {
        tui::run_tui(targets, reader, snapshots).await
    };

    polling.abort();
    info!("Shutting down");
    outcome
}

/// Resolve targets, then load the config. A usage error never creates a config file.
fn prepare(args: &Args) -> Result<(Vec<String>, Config), TargetError> {
    let targets = args.resolve_targets()?;
    Ok((targets, load_config(args)))
}

/// Config errors are reported and replaced by defaults
fn load_config(args: &Args) -> Config {
    Config::from_config(args.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("{e}, using default configuration");
        Config::default()
    })
}
