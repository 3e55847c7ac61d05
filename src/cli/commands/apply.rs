//! CLI command for `netform apply`
//!
//! Same path as the form's OK button, driven by flags.

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::output::{create_spinner, info, is_json, is_quiet, success, warning};
use crate::core::form::FormValues;
use crate::core::writer::ConfigWriter;
use crate::infra::interfaces::list_interfaces;

/// Arguments for `netform apply`
#[derive(Args, Debug, Clone)]
pub struct ApplyArgs {
    /// Interface to configure
    #[arg(short, long)]
    pub interface: String,

    /// Use DHCP for IPv4 (static fields are ignored)
    #[arg(long)]
    pub dhcp: bool,

    /// Use DHCP for IPv6
    #[arg(long)]
    pub dhcp6: bool,

    /// IPv4 address in CIDR format, e.g. 10.0.0.5/24
    #[arg(short, long, default_value = "")]
    pub address: String,

    /// IPv4 gateway
    #[arg(short, long, default_value = "")]
    pub gateway: String,

    /// Comma separated DNS servers
    #[arg(long, default_value = "")]
    pub dns: String,

    /// Print the document instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl ApplyArgs {
    /// Form values equivalent to these flags
    pub fn to_values(&self) -> FormValues {
        FormValues {
            interface: Some(self.interface.clone()),
            dhcp4: self.dhcp,
            dhcp6: self.dhcp6,
            address: self.address.clone(),
            gateway: self.gateway.clone(),
            nameservers: self.dns.clone(),
        }
    }
}

/// Execute apply command
pub fn execute(writer: &ConfigWriter, args: &ApplyArgs) -> Result<()> {
    let values = args.to_values();

    if args.dry_run {
        print!("{}", writer.render(&values)?);
        return Ok(());
    }

    let interfaces = list_interfaces()?;
    if !interfaces.contains(&args.interface) {
        warning(&format!(
            "Interface '{}' is not present on this system",
            args.interface
        ));
    }

    let spinner = match writer.applier() {
        Some(applier) => create_spinner(&format!("Running {}...", applier.command_line())),
        None => create_spinner("Writing configuration..."),
    };
    let result = writer.submit(&values);
    spinner.finish_and_clear();

    let outcome = result.context("Failed to apply network configuration")?;

    if is_json() {
        let value = serde_json::json!({
            "path": outcome.path.display().to_string(),
            "applied": outcome.apply_output.is_some(),
            "output": outcome.apply_output,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    success(&format!(
        "Configuration written to {}",
        outcome.path.display()
    ));
    match outcome.apply_output.as_deref().map(str::trim) {
        Some(output) => {
            success("Network configuration applied successfully.");
            if !output.is_empty() && !is_quiet() {
                println!("{output}");
            }
        }
        None => info("Apply skipped"),
    }

    Ok(())
}
