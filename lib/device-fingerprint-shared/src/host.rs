use std::net::{IpAddr, ToSocketAddrs};

use anyhow::anyhow;

use crate::errors::CollectError;

/// Identity of this machine on the network.
pub trait HostIdentity {
    /// The hostname of this machine.
    fn hostname(&self) -> Result<String, CollectError>;
    /// Resolves the hostname to a single address.
    fn resolve(&self, hostname: &str) -> Result<IpAddr, CollectError>;
}

/// Reads the hostname from the OS & uses the
/// platform resolver to look it up.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalHost;

impl HostIdentity for LocalHost {
    fn hostname(&self) -> Result<String, CollectError> {
        hostname::get()
            .map_err(CollectError::Hostname)?
            .into_string()
            .map_err(|name| {
                anyhow!("hostname is not valid UTF-8: {}", name.to_string_lossy()).into()
            })
    }

    fn resolve(&self, hostname: &str) -> Result<IpAddr, CollectError> {
        let resolve_err = |reason: String| CollectError::Resolve {
            host: hostname.to_string(),
            reason,
        };
        let addresses: Vec<IpAddr> = (hostname, 0)
            .to_socket_addrs()
            .map_err(|err| resolve_err(err.to_string()))?
            .map(|addr| addr.ip())
            .collect();
        pick_address(&addresses).ok_or_else(|| resolve_err("no address found".to_string()))
    }
}

/// The first IPv4 address, or else the first address.
pub fn pick_address(addresses: &[IpAddr]) -> Option<IpAddr> {
    addresses
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| addresses.first())
        .copied()
}
