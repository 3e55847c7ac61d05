//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod apply;
pub mod form;
pub mod interfaces;
pub mod show;

use anyhow::Result;
use clap::Subcommand;

use crate::core::writer::ConfigWriter;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive form (default)
    Form,

    /// Print the current netplan file
    Show,

    /// List network interfaces
    Interfaces,

    /// Write and apply a configuration without the form
    Apply(apply::ApplyArgs),
}

impl Commands {
    /// Execute the command
    pub fn run(self, writer: ConfigWriter) -> Result<()> {
        match self {
            Self::Form => form::execute(writer),
            Self::Show => show::execute(&writer),
            Self::Interfaces => interfaces::execute(),
            Self::Apply(args) => apply::execute(&writer, &args),
        }
    }
}
