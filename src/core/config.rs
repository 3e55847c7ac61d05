//! Interactive configuration logic
//!
//! Terminal detection and the plain-text summary shown when the form cannot
//! be displayed.

use crate::core::netplan::NetplanDocument;

/// Check if the terminal is interactive
pub fn is_terminal_interactive() -> bool {
    use std::io::IsTerminal;

    // Check TERM environment variable
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" || term.is_empty() {
            return false;
        }
    }

    // Check if stdin/stdout are TTYs
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

/// One line per configured interface, e.g. `eth0: static 10.0.0.5/24 via 10.0.0.1`
pub fn summarize(document: &NetplanDocument) -> Vec<String> {
    document
        .network
        .ethernets
        .iter()
        .map(|(name, eth)| {
            let mut line = if eth.dhcp4 {
                format!("{name}: dhcp4")
            } else {
                let address = eth.addresses.first().map_or("(no address)", String::as_str);
                match &eth.gateway4 {
                    Some(gateway) => format!("{name}: static {address} via {gateway}"),
                    None => format!("{name}: static {address}"),
                }
            };
            if eth.dhcp6 {
                line.push_str(", dhcp6");
            }
            if let Some(ns) = eth.nameservers.as_ref().filter(|ns| !ns.addresses.is_empty()) {
                line.push_str(&format!(", dns {}", ns.addresses.join(" ")));
            }
            line
        })
        .collect()
}
