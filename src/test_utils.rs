//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate a dotted-quad IPv4 address
    pub fn ipv4_address() -> impl Strategy<Value = String> {
        (any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>())
            .prop_map(|(a, b, c, d)| format!("{a}.{b}.{c}.{d}"))
    }

    /// Generate an IPv4 address with a prefix length
    pub fn ipv4_cidr() -> impl Strategy<Value = String> {
        (ipv4_address(), 0u8..=32).prop_map(|(addr, len)| format!("{addr}/{len}"))
    }

    /// Generate whitespace padding
    pub fn padding() -> impl Strategy<Value = String> {
        "[ \t]{0,3}"
    }

    /// Generate a comma separated DNS list with random padding
    ///
    /// Returns the raw input alongside the trimmed entries it should parse to.
    pub fn padded_nameserver_list() -> impl Strategy<Value = (String, Vec<String>)> {
        prop::collection::vec((padding(), ipv4_address(), padding()), 0..5).prop_map(|entries| {
            let input = entries
                .iter()
                .map(|(pre, addr, post)| format!("{pre}{addr}{post}"))
                .collect::<Vec<_>>()
                .join(",");
            let expected = entries.into_iter().map(|(_, addr, _)| addr).collect();
            (input, expected)
        })
    }

    /// Generate a Linux-style interface name
    pub fn interface_name() -> impl Strategy<Value = String> {
        prop_oneof![
            "eth[0-9]",
            "enp[0-9]s[0-9]",
            "wlan[0-9]",
            Just("lo".to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_ipv4_address_parses(addr in ipv4_address()) {
            prop_assert!(addr.parse::<std::net::Ipv4Addr>().is_ok());
        }

        #[test]
        fn test_interface_name_not_empty(name in interface_name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(name.len() <= 15);
        }
    }
}
