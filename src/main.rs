//! Netform CLI - terminal form for netplan interface configuration
//!
//! Entry point for the netform command-line application.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use netform::cli::output::{display_error, OutputConfig};
use netform::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(&cli) {
        display_error(&e);
        std::process::exit(1);
    }

    // Apply output configuration globally
    let output_config = OutputConfig::new(cli.quiet, cli.json);
    output_config.apply_global();

    // Run the command and handle errors
    match cli.run() {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}

/// Initialize the tracing subscriber
///
/// The form owns the terminal, so without `--log-file` its logs are dropped.
fn init_tracing(cli: &Cli) -> Result<()> {
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    let filter = EnvFilter::from_default_env().add_directive(level.into());
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if let Some(path) = &cli.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder.with_ansi(false).with_writer(Mutex::new(file)).init();
    } else if cli.uses_form() {
        builder.with_writer(std::io::sink).init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }

    Ok(())
}
