//! CLI command for `netform form`
//!
//! Launches the interactive form, or prints a summary when the terminal
//! cannot host it.

use anyhow::Result;

use crate::cli::tui::NetworkFormTui;
use crate::core::config::{is_terminal_interactive, summarize};
use crate::core::writer::ConfigWriter;
use crate::infra::interfaces::list_interfaces;

/// Execute form command
pub fn execute(writer: ConfigWriter) -> Result<()> {
    if !is_terminal_interactive() {
        return print_non_interactive_info(&writer);
    }

    let mut tui = NetworkFormTui::new(writer)?;
    tui.run()
}

/// Print information when running in non-interactive mode
fn print_non_interactive_info(writer: &ConfigWriter) -> Result<()> {
    let interfaces = list_interfaces()?;

    println!("Netform network configuration");
    println!();
    println!("⚠️  Interactive terminal required for the form.");
    println!("   Run this command in a terminal, or use 'netform apply' to configure");
    println!("   an interface from a script.");
    println!();

    if interfaces.is_empty() {
        println!("Interfaces: none found");
    } else {
        println!("Interfaces: {}", interfaces.join(", "));
    }

    println!();
    println!("Current configuration ({}):", writer.path().display());
    match writer.load_current() {
        Ok(Some(document)) => {
            let lines = summarize(&document);
            if lines.is_empty() {
                println!("  no interfaces configured");
            }
            for line in lines {
                println!("  {line}");
            }
        }
        Ok(None) => println!("  not written yet"),
        Err(e) => println!("  unreadable: {e}"),
    }

    Ok(())
}
