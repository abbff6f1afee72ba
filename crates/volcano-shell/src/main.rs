//! Command shell for the Volcano World rewards engine.
//!
//! Runs one command against the persisted state and prints the outcome as
//! pretty JSON on stdout. Logs go to stderr.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `volcano-config.yaml` (or `VOLCANO_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Parse the command line
//! 4. Open the file store in the configured data directory
//! 5. Load catalog, rewards engine and theme preference
//! 6. Run the command and print its output

mod command;
mod config;
mod error;

use tracing::info;
use tracing_subscriber::EnvFilter;
use volcano_store::FileStore;

use crate::command::{Command, Shell};
use crate::config::{LoggingConfig, ShellConfig};
use crate::error::ShellError;

/// Application entry point for the shell.
///
/// # Errors
///
/// Returns an error if configuration, argument parsing, opening the data
/// directory, or the command itself fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config_path = ShellConfig::path_from_env();
    let config_found = config_path.exists();
    let config = if config_found {
        ShellConfig::from_file(&config_path).map_err(ShellError::from)?
    } else {
        ShellConfig::from_env()
    };

    // 2. Initialize structured logging.
    init_tracing(&config.logging);
    if config_found {
        info!(path = %config_path.display(), "Configuration loaded");
    } else {
        info!(path = %config_path.display(), "Config file not found, using defaults");
    }

    // 3. Parse the command.
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let command = Command::parse(&args)?;

    // 4. Open storage.
    let store = FileStore::open(&config.storage.data_dir).map_err(ShellError::from)?;
    info!(data_dir = %config.storage.data_dir.display(), "File store opened");

    // 5-6. Load state and run.
    let mut shell = Shell::open(store);
    let output = shell.run(&command)?;
    info!(balance = shell.engine().balance(), "Command complete");
    let rendered = serde_json::to_string_pretty(&output).map_err(ShellError::from)?;
    println!("{rendered}");
    Ok(())
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the
/// configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
