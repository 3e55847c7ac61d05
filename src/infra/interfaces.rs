//! Network interface enumeration

use nix::ifaddrs::getifaddrs;

use crate::error::InterfaceError;

/// List the network interfaces visible to the OS right now
///
/// `getifaddrs` yields one entry per address, so names are deduplicated while
/// keeping the order the kernel reports them in.
pub fn list_interfaces() -> Result<Vec<String>, InterfaceError> {
    let addrs = getifaddrs().map_err(|e| InterfaceError::Query {
        error: e.to_string(),
    })?;

    let names = dedup_names(addrs.map(|ifaddr| ifaddr.interface_name));
    tracing::debug!("Found {} network interfaces: {:?}", names.len(), names);
    Ok(names)
}

fn dedup_names(names: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::new();
    for name in names {
        if !unique.contains(&name) {
            unique.push(name);
        }
    }
    unique
}
