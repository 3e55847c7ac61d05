//! Form values and validation
//!
//! The values collected by the form, independent of how they are rendered.

use std::net::{IpAddr, Ipv4Addr};

use ipnetwork::Ipv4Network;

use crate::core::netplan::EthernetSettings;
use crate::error::ValidationError;

/// Values collected from the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    /// Selected interface name
    pub interface: Option<String>,
    /// DHCPv4 enabled
    pub dhcp4: bool,
    /// DHCPv6 enabled
    pub dhcp6: bool,
    /// IPv4 address in CIDR format
    pub address: String,
    /// IPv4 gateway
    pub gateway: String,
    /// Comma separated DNS servers
    pub nameservers: String,
}

impl FormValues {
    /// Create values for an interface with everything else empty
    pub fn for_interface(interface: Option<String>) -> Self {
        Self {
            interface,
            ..Self::default()
        }
    }

    /// Populate the editable fields from existing interface settings
    pub fn fill_from(&mut self, settings: &EthernetSettings) {
        self.dhcp4 = settings.dhcp4;
        self.dhcp6 = settings.dhcp6;
        self.address = settings.addresses.first().cloned().unwrap_or_default();
        self.gateway = settings.gateway4.clone().unwrap_or_default();
        self.nameservers = settings
            .nameservers
            .as_ref()
            .map(|ns| ns.addresses.join(", "))
            .unwrap_or_default();
    }

    /// DNS servers as a trimmed list
    pub fn nameserver_list(&self) -> Vec<String> {
        parse_nameservers(&self.nameservers)
    }

    /// Check the values and return the selected interface name
    ///
    /// Static fields are only checked when DHCPv4 is off.
    pub fn validate(&self) -> Result<&str, ValidationError> {
        let interface = self
            .interface
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or(ValidationError::NoInterface)?;

        if self.dhcp4 {
            return Ok(interface);
        }

        let address = self.address.trim();
        if address.is_empty() {
            return Err(ValidationError::MissingAddress);
        }
        if !is_ipv4_cidr(address) {
            return Err(ValidationError::InvalidAddress {
                value: address.to_string(),
            });
        }

        let gateway = self.gateway.trim();
        if gateway.is_empty() {
            return Err(ValidationError::MissingGateway);
        }
        if gateway.parse::<Ipv4Addr>().is_err() {
            return Err(ValidationError::InvalidGateway {
                value: gateway.to_string(),
            });
        }

        for server in self.nameserver_list() {
            if server.parse::<IpAddr>().is_err() {
                return Err(ValidationError::InvalidNameserver { value: server });
            }
        }

        Ok(interface)
    }
}

/// Split a comma separated DNS list, trimming entries and dropping empty ones
pub fn parse_nameservers(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Check for `a.b.c.d/len` notation
///
/// `Ipv4Network` alone would accept a bare address as /32, which is not what
/// the user meant to type here.
pub fn is_ipv4_cidr(value: &str) -> bool {
    value.contains('/') && value.parse::<Ipv4Network>().is_ok()
}
