//! bikeshare library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules (loader, reporters, interactive session).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
///
/// `init` never reads the existing configuration, so `init --force` can
/// replace a file that no longer parses.
pub fn dispatch(cli: &Cli) -> AppResult<()> {
    match &cli.command {
        Some(cmd @ Commands::Init { .. }) => cli::commands::init::handle(cmd),
        other => {
            let cfg = load_config(cli)?;
            match other {
                Some(cmd @ Commands::Report { .. }) => cli::commands::report::handle(cmd, &cfg),
                Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, &cfg),
                _ => cli::commands::explore::handle(&cfg),
            }
        }
    }
}

/// Config file values with the `--data-dir` override applied.
fn load_config(cli: &Cli) -> AppResult<Config> {
    let mut cfg = Config::load()?;
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }
    Ok(cfg)
}

/// Diagnostics on stderr, filtered by `BIKESHARE_LOG` (default `warn`).
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("BIKESHARE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
    {
        tracing::debug!("tracing subscriber already set: {e}");
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ hand it to the dispatcher, which loads the config when needed
    dispatch(&cli)
}
