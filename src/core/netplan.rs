//! Netplan document model
//!
//! The fixed schema written by the form: one `network` section holding a
//! schema version and a map of ethernet interfaces.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::defaults::NETPLAN_VERSION;
use crate::core::form::FormValues;
use crate::error::{DocumentError, ValidationError};

/// Top-level netplan document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetplanDocument {
    /// The single network section
    pub network: NetworkSection,
}

/// `network:` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSection {
    /// Schema version
    pub version: u8,

    /// Interface name to settings
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub ethernets: BTreeMap<String, EthernetSettings>,
}

/// Settings for one ethernet interface
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthernetSettings {
    /// Obtain IPv4 configuration via DHCP
    #[serde(default)]
    pub dhcp4: bool,

    /// Obtain IPv6 configuration via DHCP
    #[serde(default)]
    pub dhcp6: bool,

    /// Static addresses in CIDR notation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<String>,

    /// Default IPv4 gateway
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway4: Option<String>,

    /// DNS servers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nameservers: Option<Nameservers>,
}

/// `nameservers:` block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nameservers {
    /// Server addresses, in order of preference
    #[serde(default)]
    pub addresses: Vec<String>,
}

impl NetplanDocument {
    /// Build a fresh document from form values
    ///
    /// Validates the values first. With DHCPv4 enabled the static fields are
    /// left out entirely.
    pub fn from_form(values: &FormValues) -> Result<Self, ValidationError> {
        let interface = values.validate()?;

        let settings = if values.dhcp4 {
            EthernetSettings {
                dhcp4: true,
                dhcp6: values.dhcp6,
                ..EthernetSettings::default()
            }
        } else {
            let dns = values.nameserver_list();
            EthernetSettings {
                dhcp4: false,
                dhcp6: values.dhcp6,
                addresses: vec![values.address.trim().to_string()],
                gateway4: Some(values.gateway.trim().to_string()),
                nameservers: (!dns.is_empty()).then_some(Nameservers { addresses: dns }),
            }
        };

        let mut ethernets = BTreeMap::new();
        ethernets.insert(interface.to_string(), settings);

        Ok(Self {
            network: NetworkSection {
                version: NETPLAN_VERSION,
                ethernets,
            },
        })
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, DocumentError> {
        serde_yaml::to_string(self).map_err(|e| DocumentError::Serialize {
            error: e.to_string(),
        })
    }

    /// Parse a document read from `path`
    ///
    /// Unknown keys (renderer, bridges, ...) are ignored.
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self, DocumentError> {
        serde_yaml::from_str(content).map_err(|e| DocumentError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Settings for a single interface, if present
    pub fn interface(&self, name: &str) -> Option<&EthernetSettings> {
        self.network.ethernets.get(name)
    }
}
