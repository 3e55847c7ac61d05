//! Command-line interface module
//!
//! This module handles argument parsing, the interactive form and output
//! formatting. Document building and writing live in [`crate::core`].

pub mod commands;
pub mod output;
pub mod tui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::core::settings::Settings;
use crate::core::writer::ConfigWriter;
use crate::infra::dirs::NetformDirs;
use commands::Commands;

/// Netform - edit and apply a netplan interface configuration
///
/// Without a subcommand, opens the interactive form.
#[derive(Parser, Debug)]
#[command(name = "netform")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Netplan file to read and write
    #[arg(long, global = true, env = "NETFORM_FILE")]
    pub file: Option<PathBuf>,

    /// Settings file (defaults to config.toml in the config directory)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Write the file but do not run the apply command
    #[arg(long, global = true)]
    pub no_apply: bool,

    /// Write logs to this file
    #[arg(long, global = true, env = "NETFORM_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Whether this invocation takes over the terminal
    pub fn uses_form(&self) -> bool {
        matches!(self.command, None | Some(Commands::Form))
    }

    /// Load settings and apply command-line overrides
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.settings {
            Some(path) => Settings::load_from_path(path),
            None => Settings::load(&NetformDirs::new()),
        }
        .context("Failed to load settings")?;

        if let Some(file) = &self.file {
            settings.netplan.path = Some(file.clone());
        }
        if self.no_apply {
            settings.apply.enabled = Some(false);
        }
        Ok(settings)
    }

    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let settings = self.settings()?;
        let writer = ConfigWriter::from_settings(&settings)?;
        tracing::debug!("Using netplan file {}", writer.path().display());

        self.command.unwrap_or(Commands::Form).run(writer)
    }
}
