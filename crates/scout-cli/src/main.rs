//! Scout CLI application
//!
//! Finds declarations and usages of an identifier across a source tree.
//!
//! # Installation
//!
//! ```bash
//! cargo install --path crates/scout-cli
//! ```
//!
//! # Commands
//!
//! - `scout search <TERM>`: run a search and print the report (`--json` for
//!   the structured result)
//! - `scout tools` / `scout schema`: inspect the registered tools
//! - `scout config init|show|validate`: manage `scout_config.json`
//!
//! Logs go to stderr. `RUST_LOG` takes precedence over the configured level.

mod args;
mod commands;
mod console;
mod router;

use args::{Cli, Commands};
use clap::Parser;
use console::CliConsole;
use scout_core::config::{Config, LogFormat, LoggingConfig, load_from_file};
use scout_core::error::ScoutResult;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let console = CliConsole::new(true);

    let config = match load_config(&cli) {
        Ok(config) => config,
        // config commands must still work when the file is broken
        Err(_) if matches!(cli.command, Commands::Config { .. }) => Config::default(),
        Err(e) => {
            init_tracing(&LoggingConfig::default());
            console.error(&e.to_string());
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging);

    match router::route(&cli, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            console.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

/// Load the configuration file and apply command-line logging overrides
fn load_config(cli: &Cli) -> ScoutResult<Config> {
    let mut config = load_from_file(Path::new(&cli.config_file))?;

    if cli.log_level.is_some() || cli.log_format.is_some() {
        config.logging.merge(LoggingConfig {
            level: cli.log_level.clone().unwrap_or_default(),
            format: cli
                .log_format
                .map(LogFormat::from)
                .unwrap_or(config.logging.format),
        });
    }

    config.validate()?;
    Ok(config)
}

/// Initialize logging with environment-based filtering
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match logging.format {
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Json => builder.json().init(),
    }
}
