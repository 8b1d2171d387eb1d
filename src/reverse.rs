//! Reverse-zone candidates for an IPv4 address.

use std::net::Ipv4Addr;

use crate::error::{ReconcileError, Result};

const ARPA_SUFFIX: &str = "in-addr.arpa";

/// PTR record name for an address plus the reverse zones that may hold it,
/// most specific first (/24, /16, /8).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseZones {
    pub ptr_name: String,
    pub candidates: [String; 3],
}

impl ReverseZones {
    pub fn for_address(address: &str) -> Result<Self> {
        let ip: Ipv4Addr = address
            .parse()
            .map_err(|_| ReconcileError::InvalidAddress {
                address: address.to_string(),
            })?;
        Ok(Self::for_ipv4(ip))
    }

    pub fn for_ipv4(ip: Ipv4Addr) -> Self {
        let [o0, o1, o2, o3] = ip.octets();

        Self {
            ptr_name: format!("{o3}.{o2}.{o1}.{o0}.{ARPA_SUFFIX}."),
            candidates: [
                format!("{o2}.{o1}.{o0}.{ARPA_SUFFIX}"),
                format!("{o1}.{o0}.{ARPA_SUFFIX}"),
                format!("{o0}.{ARPA_SUFFIX}"),
            ],
        }
    }
}

#[cfg(test)]
#[path = "reverse_tests.rs"]
mod reverse_tests;
